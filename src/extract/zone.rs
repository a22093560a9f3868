//! Processing a single zone file.

use super::config::Config;
use super::error::Error;
use super::fastpath;
use crate::iana::Rtype;
use crate::zonefile::{self, ErrorKind, RecordReader};
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, trace, warn};

//------------ ZoneInfo ------------------------------------------------------

/// Summary information about a processed zone file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ZoneInfo {
    /// The owner of the zone’s SOA record if one was found.
    pub soa: Option<String>,

    /// The number of distinct names found.
    pub count: usize,
}

//------------ collect_domains -----------------------------------------------

/// Collects the distinct owner names of all records in a zone file.
///
/// A trailing dot is removed from the names. Records that fail to parse are
/// skipped. If the text cannot be tokenized any further, the names
/// collected so far are returned. Only a failure to read from `source`
/// results in an error.
pub fn collect_domains<R: BufRead>(
    source: R,
) -> Result<(ZoneInfo, BTreeSet<String>), zonefile::Error> {
    let mut reader = RecordReader::new(source);
    let mut domains = BTreeSet::new();
    let mut soa = None;
    loop {
        match reader.next_record() {
            Ok(Some(record)) => {
                if record.rtype() == Rtype::SOA {
                    soa = Some(record.owner().to_string());
                }
                let owner = record.owner();
                let owner = owner.strip_suffix('.').unwrap_or(owner);
                domains.insert(owner.into());
            }
            Ok(None) => break,
            Err(err) => {
                if matches!(err.kind(), ErrorKind::Io(_)) {
                    return Err(err);
                }
                if err.is_fatal() {
                    warn!("giving up: {err}");
                    break;
                }
                trace!("skipping entry: {err}");
            }
        }
    }
    let info = ZoneInfo {
        soa,
        count: domains.len(),
    };
    Ok((info, domains))
}

//------------ process_zone --------------------------------------------------

/// Extracts the owner names from a gzip compressed zone file.
///
/// The sorted names are written, one per line, to a gzip compressed file
/// next to the input file. Its name is the input file’s name with the
/// `.gz` extension replaced by `_domains.gz`.
///
/// Returns `Ok(None)` if the zone file doesn’t exist.
pub fn process_zone(
    path: &Path,
    config: &Config,
) -> Result<Option<ZoneInfo>, Error> {
    let _span = debug_span!("zone", path = %path.display()).entered();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found; skipping", path.display());
            return Ok(None);
        }
        Err(err) => return Err(Error::io(path, err)),
    };
    let source = BufReader::new(MultiGzDecoder::new(file));

    let out_path = output_path(path);
    let out =
        File::create(&out_path).map_err(|err| Error::io(&out_path, err))?;
    let mut out =
        GzEncoder::new(BufWriter::new(out), Compression::default());

    let info = if config.is_fast_path(path) {
        debug!("using fast path");
        let origin = origin(path);
        fastpath::extract(source, &origin, config.flush_lines, &mut out)
            .map_err(|err| Error::io(path, err))?
    } else {
        let (info, domains) =
            collect_domains(source).map_err(|err| Error::Zone {
                path: path.into(),
                err,
            })?;
        for name in &domains {
            writeln!(out, "{name}")
                .map_err(|err| Error::io(&out_path, err))?;
        }
        info
    };

    out.finish()
        .and_then(|mut out| out.flush())
        .map_err(|err| Error::io(&out_path, err))?;
    debug!("{} names written to {}", info.count, out_path.display());
    Ok(Some(info))
}

/// Returns the path of the names file for a zone file.
pub fn output_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = name.strip_suffix(".gz").unwrap_or(&name);
    path.with_file_name(format!("{stem}_domains.gz"))
}

/// Returns the zone’s origin as derived from the file name.
///
/// This is the part of the file name up to the first dot.
fn origin(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .split('.')
        .next()
        .unwrap_or_default()
        .to_string()
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn collect() {
        let zone = "\
            example. 86400 IN SOA ns.example. host.example. (\n\
                1 7200 3600 1209600 3600 )\n\
            example. 86400 IN NS ns.example.\n\
            www.example. 3600 IN A 192.0.2.1\n\
            www.example. 3600 IN AAAA 2001:db8::1\n\
            bad.example. 3600 IN BOGUS foo\n\
            mail.example. IN MX 10 mx.example.\n";
        let (info, domains) = collect_domains(zone.as_bytes()).unwrap();
        assert_eq!(info.soa.as_deref(), Some("example."));
        assert_eq!(info.count, 3);
        assert_eq!(
            domains.into_iter().collect::<Vec<_>>(),
            ["example", "mail.example", "www.example"]
        );
    }

    #[test]
    fn collect_stops_at_lexical_error() {
        let zone = "a. A 192.0.2.1\nb. TXT \"unterminated\n";
        let (info, domains) = collect_domains(zone.as_bytes()).unwrap();
        assert_eq!(info.soa, None);
        assert_eq!(domains.into_iter().collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn output_paths() {
        assert_eq!(
            output_path(Path::new("/data/net.txt.gz")),
            Path::new("/data/net.txt_domains.gz")
        );
        assert_eq!(
            output_path(Path::new("/data/org.zone")),
            Path::new("/data/org.zone_domains.gz")
        );
        assert_eq!(origin(Path::new("/data/com.zone.gz")), "com");
    }
}
