//! Reading of zone files.
//!
//! Reading happens in two stages. The [`Tokenizer`] splits the text into
//! tokens, taking care of quoted strings, comments, and parenthesized
//! groups spanning several lines. The [`RecordReader`] then assembles the
//! tokens of each entry into a [`Record`].
//!
//! ```
//! use zonescan::iana::{Class, Rtype};
//! use zonescan::zonefile::RecordReader;
//!
//! let mut reader = RecordReader::from("example.com. 3600 IN A 192.0.2.1\n");
//! let record = reader.next_record().unwrap().unwrap();
//! assert_eq!(record.owner(), "example.com.");
//! assert_eq!(record.ttl(), Some(3600));
//! assert_eq!(record.class(), Some(Class::IN));
//! assert_eq!(record.rtype(), Rtype::A);
//! assert_eq!(record.data(), ["192.0.2.1"]);
//! ```

pub use self::error::{Error, ErrorCategory, ErrorKind};
pub use self::record::{Record, RecordReader};
pub use self::scanner::{State, Token, Tokenizer};

pub mod error;
pub mod record;
pub mod scanner;
