//! Extracting resource records from DNS zone files.
//!
//! This crate reads zone files, i.e., the textual representation of DNS
//! data defined in RFC 1035 and informally extended since, and turns them
//! into structured records. It is meant for mass processing of zone files
//! as published by registries, so it is lenient where it can be and does
//! not try to validate DNS semantics.
//!
//! # Modules
//!
//! The core functionality is always available:
//!
//! * [iana] contains the record classes and types recognized in zone files,
//!   and
//! * [zonefile] contains the tokenizer and the record reader.
//!
//! In addition, there are modules that are enabled by feature flags:
//!
#![cfg_attr(feature = "extract", doc = "* [extract]:")]
#![cfg_attr(not(feature = "extract"), doc = "* extract:")]
//!   Extracting the set of owner names from compressed zone files,
//!   processing many files in parallel, and writing statistics.
#![cfg_attr(feature = "cli", doc = "* [logging]:")]
#![cfg_attr(not(feature = "cli"), doc = "* logging:")]
//!   Setting up log output for the command line tool.
//!
//! # Reference of Feature Flags
//!
//! * `extract`: enables the
#![cfg_attr(feature = "extract", doc = "  [extract]")]
#![cfg_attr(not(feature = "extract"), doc = "  extract")]
//!   module. This feature is enabled by default.
//! * `cli`: builds the `zonescan` command line tool and enables the
#![cfg_attr(feature = "cli", doc = "  [logging]")]
#![cfg_attr(not(feature = "cli"), doc = "  logging")]
//!   module. Implies `extract`.
//! * `serde`: implements `Serialize` and `Deserialize` for records and the
//!   IANA types.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod extract;
pub mod iana;
pub mod logging;
pub mod zonefile;
