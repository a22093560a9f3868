//! A fast path for very regular delegation-only zones.
//!
//! Some top-level zones consist of little more than millions of lines of
//! the form `name NS target` or `name A address` with relative owner names
//! and exactly one space between fields. For these, running the full
//! parser is a waste of time. Instead, each line is split at spaces and
//! the owner is taken if the second field is `NS` or `A`.
//!
//! Lines using TTLs or classes, multi-line records, and most other things
//! that don’t look like this are skipped, but there is no real checking.
//! Only use this for zones known to be in the expected shape.
//!
//! To keep memory use bounded, the names collected are written out and
//! forgotten every so many lines. Each batch is sorted and free of
//! duplicates, but a name appearing in more than one batch is written and
//! counted more than once.

use super::zone::ZoneInfo;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Extracts the delegated names from a zone.
///
/// Names are lower-cased and written to `target` one per line with
/// `.<origin>` appended. Every `flush_lines` lines, the names collected so
/// far are written.
pub fn extract<R: BufRead, W: Write>(
    mut source: R,
    origin: &str,
    flush_lines: usize,
    target: &mut W,
) -> Result<ZoneInfo, io::Error> {
    let mut domains = BTreeSet::new();
    let mut count = 0;
    let mut lines = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if source.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if lines >= flush_lines {
            count += flush(&mut domains, origin, target)?;
            lines = 0;
        }
        if let Some(name) = delegated_name(&String::from_utf8_lossy(&buf)) {
            domains.insert(name);
        }
        lines += 1;
    }
    count += flush(&mut domains, origin, target)?;

    Ok(ZoneInfo {
        soa: Some(format!("{origin}.")),
        count,
    })
}

/// Returns the lower-cased owner if the line is a delegation record.
fn delegated_name(line: &str) -> Option<String> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(' ');
    let name = fields.next()?;
    let rtype = fields.next()?;
    fields.next()?;
    let delegation =
        rtype.eq_ignore_ascii_case("NS") || rtype.eq_ignore_ascii_case("A");
    if !name.is_empty() && delegation {
        Some(name.to_lowercase())
    } else {
        None
    }
}

/// Writes out and clears the collected names.
///
/// Returns the number of names written.
fn flush<W: Write>(
    domains: &mut BTreeSet<String>,
    origin: &str,
    target: &mut W,
) -> Result<usize, io::Error> {
    let count = domains.len();
    for name in domains.iter() {
        writeln!(target, "{name}.{origin}")?;
    }
    domains.clear();
    debug!("flushed {count} names");
    Ok(count)
}

//============ Tests =========================================================
