//! Writing statistics about processed zones.

use super::error::Error;
use super::zone::ZoneInfo;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one line of statistics per zone.
pub fn write_stats<W: Write>(
    zones: &[ZoneInfo],
    target: &mut W,
) -> Result<(), io::Error> {
    for zone in zones {
        writeln!(
            target,
            "SOA: {:>20}\tNum.Domains: {}",
            zone.soa.as_deref().unwrap_or(""),
            zone.count
        )?;
    }
    Ok(())
}

/// Writes the statistics file.
pub fn write_stats_file(
    path: &Path,
    zones: &[ZoneInfo],
) -> Result<(), Error> {
    let file = File::create(path).map_err(|err| Error::io(path, err))?;
    let mut target = BufWriter::new(file);
    write_stats(zones, &mut target)
        .and_then(|_| target.flush())
        .and_then(|_| target.get_ref().sync_all())
        .map_err(|err| Error::io(path, err))
}

//============ Tests =========================================================
