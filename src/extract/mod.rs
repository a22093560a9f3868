//! Extracting owner names from compressed zone files.
//!
//! This module builds on [`zonefile`][crate::zonefile] to process whole
//! directories of gzip compressed zone files. For each file, the set of
//! owner names is collected and written, sorted and compressed, next to
//! the input file. Some zones are so large and so regular that running
//! them through the full parser is wasteful; these go through a simple
//! line-oriented [fast path][fastpath] instead.
//!
//! Files are processed in parallel by [`pool::run`] which collects a
//! [`ZoneInfo`] for every file. These can finally be written to a
//! statistics file via [`stats`].
#![cfg(feature = "extract")]
#![cfg_attr(docsrs, doc(cfg(feature = "extract")))]

pub use self::config::Config;
pub use self::error::Error;
pub use self::zone::{collect_domains, process_zone, ZoneInfo};

pub mod config;
pub mod error;
pub mod fastpath;
pub mod pool;
pub mod stats;
pub mod zone;
