//! Assembling resource records from tokens.
//!
//! A [`RecordReader`] pulls tokens from a [`Tokenizer`] and groups them
//! into [`Record`]s, one per call to
//! [`next_record`][RecordReader::next_record].
//!
//! The owner is always the first token of an entry. The TTL, class, and
//! type that follow are recognized by their content rather than their
//! position, so both `3600 IN A` and `IN 3600 A` work. Any other token
//! before the type, even a line feed, fails the record. Everything after
//! the type up to the end of the entry is record data. The data is kept as
//! the raw tokens; it is not checked against the record type.

use super::error::{Error, ErrorKind};
use super::scanner::{Token, Tokenizer};
use crate::iana::{Class, Rtype};
use std::fmt;
use std::io::BufRead;
use tracing::trace;

//------------ Record --------------------------------------------------------

/// A resource record as it appears in a zone file.
///
/// All parts are kept as text exactly as found in the source except for the
/// TTL, class, and type which are parsed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner name.
    owner: String,

    /// The TTL if one was given.
    ttl: Option<u32>,

    /// The class if one was given.
    class: Option<Class>,

    /// The record type.
    rtype: Rtype,

    /// The record data, one token per element.
    data: Vec<String>,

    /// A comment following the last data token, if any.
    comment: Option<String>,
}

impl Record {
    /// Creates a new record without TTL, class, and comment.
    ///
    /// Records produced by a [`RecordReader`] always have at least one
    /// element of data.
    pub fn new(owner: String, rtype: Rtype, data: Vec<String>) -> Self {
        Record {
            owner,
            ttl: None,
            class: None,
            rtype,
            data,
            comment: None,
        }
    }

    /// Sets the TTL of the record.
    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Sets the class of the record.
    #[must_use]
    pub fn with_class(mut self, class: Class) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets the trailing comment of the record.
    #[must_use]
    pub fn with_comment(mut self, comment: String) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Returns the owner name exactly as it appeared.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the TTL if one was given.
    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    /// Returns the class if one was given.
    pub fn class(&self) -> Option<Class> {
        self.class
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the record data.
    pub fn data(&self) -> &[String] {
        &self.data
    }

    /// Returns the comment trailing the record data.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

//--- Display

/// Writes the record in zone file format on a single line.
///
/// Reading the output back results in the same record unless the data
/// contains a bare parenthesis.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.owner)?;
        if let Some(ttl) = self.ttl {
            write!(f, " {ttl}")?;
        }
        if let Some(class) = self.class {
            write!(f, " {class}")?;
        }
        write!(f, " {}", self.rtype)?;
        for item in &self.data {
            write!(f, " {item}")?;
        }
        if let Some(comment) = self.comment.as_ref() {
            write!(f, " {comment}")?;
        }
        Ok(())
    }
}

//------------ RecordReader --------------------------------------------------

/// Reads records from a zone file.
///
/// The reader keeps no state between records other than the position of
/// its tokenizer. When a record fails, the error is returned and the next
/// call continues with the token after the one that caused the failure. It
/// is up to the caller whether to carry on or stop. After a lexical error,
/// there is nothing left to read.
///
/// Directives such as `$ORIGIN` or `$TTL` are not interpreted and an
/// entry without an owner name is not supported: the first token of every
/// entry is taken as its owner.
#[derive(Debug)]
pub struct RecordReader<R> {
    tokens: Tokenizer<R>,
}

impl<R: BufRead> RecordReader<R> {
    /// Creates a new reader for the given source.
    pub fn new(source: R) -> Self {
        Self::from_tokenizer(Tokenizer::new(source))
    }

    /// Creates a new reader atop an existing tokenizer.
    pub fn from_tokenizer(tokens: Tokenizer<R>) -> Self {
        RecordReader { tokens }
    }

    /// Returns a reference to the underlying tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer<R> {
        &self.tokens
    }

    /// Returns the next record.
    ///
    /// Returns `Ok(None)` if the end of input has been reached without any
    /// part of a record pending.
    pub fn next_record(&mut self) -> Result<Option<Record>, Error> {
        let owner = loop {
            match self.tokens.next_token()? {
                None => return Ok(None),
                Some(Token::LineFeed | Token::Comment(_)) => {}
                Some(token) => break String::from(token.as_str()),
            }
        };
        let line = self.tokens.line();

        let mut ttl = None;
        let mut class = None;
        let rtype = loop {
            let token = match self.tokens.next_token()? {
                Some(token) => token,
                None => {
                    return Err(Error::new(
                        ErrorKind::IncompleteRecord { owner },
                        line,
                    ))
                }
            };
            let token = token.as_str();
            if ttl.is_none() {
                if let Some(value) = parse_ttl(token) {
                    ttl = Some(value);
                    continue;
                }
            }
            if class.is_none() {
                if let Ok(value) = token.parse::<Class>() {
                    class = Some(value);
                    continue;
                }
            }
            match token.parse::<Rtype>() {
                Ok(rtype) => break rtype,
                Err(_) => {
                    return Err(Error::new(
                        ErrorKind::UnknownType(token.into()),
                        line,
                    ))
                }
            }
        };

        let mut data = Vec::new();
        let mut comment = None;
        loop {
            match self.tokens.next_token()? {
                Some(Token::Word(token)) => {
                    // Only a comment after the last data token is kept.
                    comment = None;
                    data.push(token);
                }
                Some(Token::Comment(token)) => comment = Some(token),
                Some(Token::OpenParen | Token::CloseParen) => {}
                Some(Token::LineFeed) => {
                    if data.is_empty() {
                        return Err(Error::new(
                            ErrorKind::MissingData { owner, rtype },
                            line,
                        ));
                    }
                    break;
                }
                None => {
                    if data.is_empty() {
                        return Err(Error::new(
                            ErrorKind::IncompleteRecord { owner },
                            line,
                        ));
                    }
                    break;
                }
            }
        }

        trace!("line {line}: {rtype} record for {owner}");
        Ok(Some(Record {
            owner,
            ttl,
            class,
            rtype,
            data,
            comment,
        }))
    }
}

impl<'a> From<&'a str> for RecordReader<&'a [u8]> {
    fn from(src: &'a str) -> Self {
        RecordReader::new(src.as_bytes())
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

//------------ Helper Functions ----------------------------------------------

/// Parses a TTL.
///
/// Only plain decimal digits are accepted, no sign or white space.
fn parse_ttl(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

//============ Tests =========================================================
