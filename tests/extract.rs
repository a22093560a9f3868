#![cfg(feature = "extract")]

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

use zonescan::extract::stats::write_stats_file;
use zonescan::extract::{pool, process_zone, Config, ZoneInfo};

//------------ Helpers -------------------------------------------------------

const NET_ZONE: &str = "\
    net. 900 IN SOA a.gtld-servers.net. nstld.verisign-grs.com. (\n\
        1700000000 1800 900 604800 86400 )\n\
    net. 172800 IN NS a.gtld-servers.net.\n\
    example.net. 172800 IN NS a.iana-servers.net.\n\
    example.net. 172800 IN NS b.iana-servers.net.\n\
    a.gtld-servers.net. 172800 IN A 192.5.6.30\n";

const COM_ZONE: &str = "\
    com. 900 IN SOA a.gtld-servers.net. nstld.verisign-grs.com. ( 1 2 3 4 5 )\n\
    EXAMPLE NS A.IANA-SERVERS.NET.\n\
    EXAMPLE NS B.IANA-SERVERS.NET.\n\
    ns1.sample A 192.0.2.1\n";

/// Writes `parts` as a gzip file with one member per part.
fn write_gz(path: &Path, parts: &[&str]) {
    let mut file = File::create(path).unwrap();
    for part in parts {
        let mut enc = GzEncoder::new(Vec::new(), Compression::fast());
        enc.write_all(part.as_bytes()).unwrap();
        file.write_all(&enc.finish().unwrap()).unwrap();
    }
}

fn read_gz(path: &Path) -> String {
    let mut res = String::new();
    MultiGzDecoder::new(File::open(path).unwrap())
        .read_to_string(&mut res)
        .unwrap();
    res
}

//----------- Tests ----------------------------------------------------------

#[test]
fn process_regular_zone() {
    let dir = TempDir::new().unwrap();
    let zone = dir.path().join("net.txt.gz");
    let (head, tail) = NET_ZONE.split_at(NET_ZONE.find("example").unwrap());
    write_gz(&zone, &[head, tail]);

    let config = Config::new(dir.path());
    let info = process_zone(&zone, &config).unwrap().unwrap();
    assert_eq!(
        info,
        ZoneInfo {
            soa: Some("net.".into()),
            count: 3
        }
    );
    assert_eq!(
        read_gz(&dir.path().join("net.txt_domains.gz")),
        "a.gtld-servers.net\nexample.net\nnet\n"
    );
}

#[test]
fn process_fast_path_zone() {
    let dir = TempDir::new().unwrap();
    let zone = dir.path().join("com.zone.gz");
    write_gz(&zone, &[COM_ZONE]);

    let config = Config::new(dir.path());
    let info = process_zone(&zone, &config).unwrap().unwrap();
    assert_eq!(info.soa.as_deref(), Some("com."));
    assert_eq!(info.count, 2);
    assert_eq!(
        read_gz(&dir.path().join("com.zone_domains.gz")),
        "example.com\nns1.sample.com\n"
    );
}

#[test]
fn missing_zone_is_skipped() {
    let dir = TempDir::new().unwrap();
    let config = Config::new(dir.path());
    assert_eq!(
        process_zone(&dir.path().join("org.zone.gz"), &config).unwrap(),
        None
    );
    assert!(!dir.path().join("org.zone_domains.gz").exists());
}

#[test]
fn zone_file_selection() {
    let dir = TempDir::new().unwrap();
    write_gz(&dir.path().join("net.txt.gz"), &[NET_ZONE]);
    write_gz(&dir.path().join("com.zone.gz"), &[COM_ZONE]);
    fs::write(dir.path().join("notes.txt"), "not a zone").unwrap();

    let config = Config::new(dir.path());
    let files = pool::zone_files(&config).unwrap();
    assert_eq!(
        files,
        [
            dir.path().join("net.txt.gz"),
            dir.path().join("com.zone.gz"),
            dir.path().join("org.zone.gz"),
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn run_directory() {
    let dir = TempDir::new().unwrap();
    write_gz(&dir.path().join("net.txt.gz"), &[NET_ZONE]);
    write_gz(&dir.path().join("info.txt.gz"), &["info. 60 IN A 192.0.2.9\n"]);
    write_gz(&dir.path().join("com.zone.gz"), &[COM_ZONE]);

    let mut config = Config::new(dir.path());
    config.progress = true;
    let config = Arc::new(config);
    let mut zones = pool::run(config.clone()).await.unwrap();
    zones.sort_by(|left, right| left.soa.cmp(&right.soa));
    assert_eq!(
        zones,
        [
            ZoneInfo {
                soa: None,
                count: 1
            },
            ZoneInfo {
                soa: Some("com.".into()),
                count: 2
            },
            ZoneInfo {
                soa: Some("net.".into()),
                count: 3
            },
        ]
    );
    for name in ["net.txt", "info.txt", "com.zone"] {
        assert!(dir.path().join(format!("{name}_domains.gz")).exists());
    }

    write_stats_file(&config.stats_path(), &zones).unwrap();
    let stats = fs::read_to_string(dir.path().join("stats")).unwrap();
    assert_eq!(stats.lines().count(), 3);
    assert!(stats.ends_with("SOA:                 net.\tNum.Domains: 3\n"));
}

#[tokio::test]
async fn run_rejects_bad_config() {
    let mut config = Config::new("/nonexistent");
    config.parallel = 0;
    assert!(pool::run(Arc::new(config)).await.is_err());
}
