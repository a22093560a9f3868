//! Reading the zone files in test-data/zonefiles.
//!
//! Each YAML file holds the text of a zone file and the sequence of records
//! and errors the record reader is expected to produce for it.

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use serde::Deserialize;

use zonescan::zonefile::{Error, ErrorCategory, Record, RecordReader};

//------------ TestCase ------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TestCase {
    zonefile: String,
    result: Vec<Expected>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Expected {
    Error { error: String, line: usize },
    Record(ExpectedRecord),
}

#[derive(Debug, Deserialize)]
struct ExpectedRecord {
    owner: String,
    ttl: Option<u32>,
    class: Option<String>,
    rtype: String,
    data: Vec<String>,
    comment: Option<String>,
}

impl ExpectedRecord {
    fn check(&self, record: &Record) {
        assert_eq!(record.owner(), self.owner);
        assert_eq!(record.ttl(), self.ttl);
        assert_eq!(
            record.class().map(|class| class.to_string()),
            self.class
        );
        assert_eq!(record.rtype().to_string(), self.rtype);
        assert_eq!(record.data(), self.data.as_slice());
        assert_eq!(record.comment(), self.comment.as_deref());
    }
}

fn category(err: &Error) -> &'static str {
    match err.category() {
        ErrorCategory::Lexical => "lexical",
        ErrorCategory::Classification => "classification",
        ErrorCategory::Structural => "structural",
    }
}

//----------- Tests ----------------------------------------------------------

/// Note: Adding or removing .yaml files on disk won't be detected until the
/// test is re-compiled.
#[rstest]
fn zonefile_cases(#[files("test-data/zonefiles/*.yaml")] path: PathBuf) {
    let case: TestCase =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let mut reader = RecordReader::from(case.zonefile.as_str());
    for (idx, expected) in case.result.iter().enumerate() {
        let res = reader.next_record();
        match expected {
            Expected::Error { error, line } => {
                let err = res.expect_err(&format!("entry {idx}"));
                assert_eq!(category(&err), error, "entry {idx}: {err}");
                assert_eq!(err.line(), *line, "entry {idx}: {err}");
            }
            Expected::Record(expected) => {
                let record = res.unwrap().expect("missing record");
                expected.check(&record);
            }
        }
    }
    assert!(reader.next_record().unwrap().is_none());
}

/// Every record of the test zones survives being written out and read
/// back in.
#[rstest]
fn zonefile_display(#[files("test-data/zonefiles/*.yaml")] path: PathBuf) {
    let case: TestCase =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    for record in RecordReader::from(case.zonefile.as_str()).flatten() {
        let text = format!("{record}\n");
        let mut reader = RecordReader::from(text.as_str());
        assert_eq!(reader.next_record().unwrap().as_ref(), Some(&record));
    }
}
