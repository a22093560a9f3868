//! Splitting zone file text into tokens.
//!
//! The [`Tokenizer`] reads characters from any [`BufRead`] and turns them
//! into a sequence of [`Token`]s. It is a small state machine with two
//! parallel tracks of states: one used outside of any parenthesized group
//! and one used inside such a group. The only difference between the two
//! tracks is the treatment of line feeds: outside of a group, a line feed
//! ends the current entry and is returned as [`Token::LineFeed`], inside a
//! group it is just white space. This is what allows entries to span
//! multiple lines.
//!
//! Tokens are returned verbatim. Quoted strings keep their quotes and any
//! escape sequences, comments keep their leading semicolon. Interpreting
//! the content is left to whoever consumes the tokens.

use super::error::{Error, ErrorKind};
use std::io::{self, BufRead};
use std::{fmt, mem, str};

//------------ Token ---------------------------------------------------------

/// A single token of a zone file.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// A word.
    ///
    /// This is either a bare sequence of non-space characters or a quoted
    /// string. The latter includes the surrounding quotes and any escape
    /// sequences exactly as they appeared in the source.
    Word(String),

    /// A comment.
    ///
    /// The content starts with the semicolon and runs up to but excluding
    /// the end of the line.
    Comment(String),

    /// The opening parenthesis of a group.
    OpenParen,

    /// The closing parenthesis of a group.
    CloseParen,

    /// A line feed outside of any group, ending the current entry.
    ///
    /// Consecutive empty lines are collapsed into a single line feed token.
    LineFeed,
}

impl Token {
    /// Returns the text of the token as it appeared in the source.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(s) | Token::Comment(s) => s.as_str(),
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::LineFeed => "\n",
        }
    }

    /// Converts a pending token text into a token.
    ///
    /// Whether the text is a comment or a word is decided by its first
    /// character: a bare word can never start with a semicolon.
    fn from_pending(text: String) -> Self {
        if text.starts_with(';') {
            Token::Comment(text)
        } else {
            Token::Word(text)
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//------------ State ---------------------------------------------------------

/// The state of a [`Tokenizer`].
///
/// Apart from `Space`, each state exists twice: once for use outside of a
/// parenthesized group and once, prefixed with `Paren`, for use inside.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum State {
    /// Between or inside bare words.
    Default,

    /// Inside a quoted string.
    String,

    /// Right after a backslash inside a quoted string.
    StringEscape,

    /// Between or inside bare words inside a group.
    Paren,

    /// Inside a comment.
    Comment,

    /// Skipping white space after a line feed.
    Space,

    /// Inside a comment inside a group.
    ParenComment,

    /// Inside a quoted string inside a group.
    ParenString,

    /// Right after a backslash inside a quoted string inside a group.
    ParenStringEscape,
}

impl State {
    /// Returns whether the end of input is acceptable in this state.
    ///
    /// Any state that leaves a quoted string, an escape sequence, or a
    /// group open is not.
    pub fn can_end(self) -> bool {
        matches!(self, State::Default | State::Space | State::Comment)
    }

    /// Returns a description of what was left open in this state.
    pub fn describe(self) -> &'static str {
        match self {
            State::Default | State::Space => "between tokens",
            State::String => "quoted string",
            State::StringEscape => "escape sequence",
            State::Paren => "parenthesized group",
            State::Comment => "comment",
            State::ParenComment => "comment in parenthesized group",
            State::ParenString => "quoted string in parenthesized group",
            State::ParenStringEscape => {
                "escape sequence in parenthesized group"
            }
        }
    }
}

//------------ Track ---------------------------------------------------------

/// Which of the two parallel sets of states we are in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Track {
    /// Outside of any group.
    Plain,

    /// Inside a parenthesized group.
    Paren,
}

impl Track {
    fn bare(self) -> State {
        match self {
            Track::Plain => State::Default,
            Track::Paren => State::Paren,
        }
    }

    fn string(self) -> State {
        match self {
            Track::Plain => State::String,
            Track::Paren => State::ParenString,
        }
    }

    fn escape(self) -> State {
        match self {
            Track::Plain => State::StringEscape,
            Track::Paren => State::ParenStringEscape,
        }
    }

    fn comment(self) -> State {
        match self {
            Track::Plain => State::Comment,
            Track::Paren => State::ParenComment,
        }
    }
}

//------------ Tokenizer -----------------------------------------------------

/// A tokenizer for zone files.
///
/// The tokenizer reads its source character by character and never holds
/// more than the current token in memory. Tokens are pulled via
/// [`next_token`][Self::next_token] or by using the value as an iterator.
///
/// Once the end of input has been reached in a state that leaves something
/// open, an error is returned. After that or after a read error, the
/// tokenizer is exhausted and only returns `None`.
#[derive(Debug)]
pub struct Tokenizer<R> {
    /// Where the characters come from.
    source: Source<R>,

    /// The current state.
    state: State,

    /// The token we are currently assembling.
    pending: String,

    /// Has the tokenizer given up on its source?
    fused: bool,
}

impl<R: BufRead> Tokenizer<R> {
    /// Creates a new tokenizer reading from the given source.
    pub fn new(source: R) -> Self {
        Tokenizer {
            source: Source::new(source),
            state: State::Default,
            pending: String::new(),
            fused: false,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the number of the line the tokenizer is currently on.
    ///
    /// Lines are counted starting from 1.
    pub fn line(&self) -> usize {
        self.source.line
    }

    /// Returns the next token.
    ///
    /// Returns `Ok(None)` once the end of input has been reached.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        if self.fused {
            return Ok(None);
        }
        loop {
            let ch = match self.source.peek() {
                Ok(Some(ch)) => ch,
                Ok(None) => return self.finish(),
                Err(err) => {
                    self.fused = true;
                    return Err(Error::new(ErrorKind::Io(err), self.line()));
                }
            };
            if let Some(token) = self.step(ch) {
                return Ok(Some(token));
            }
        }
    }

    /// Deals with the end of input.
    fn finish(&mut self) -> Result<Option<Token>, Error> {
        if !self.state.can_end() {
            self.fused = true;
            return Err(Error::new(
                ErrorKind::UnexpectedEof(self.state),
                self.line(),
            ));
        }
        if self.pending.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.flush()))
        }
    }

    /// Processes the next character.
    ///
    /// Returns a token if processing the character completed one. Whether
    /// the character is consumed is up to the state; if it isn’t, it will
    /// be presented again in the next step.
    fn step(&mut self, ch: char) -> Option<Token> {
        match self.state {
            State::Default => self.step_bare(ch, Track::Plain),
            State::Paren => self.step_bare(ch, Track::Paren),
            State::String => self.step_string(ch, Track::Plain),
            State::ParenString => self.step_string(ch, Track::Paren),
            State::StringEscape => self.step_escape(ch, Track::Plain),
            State::ParenStringEscape => self.step_escape(ch, Track::Paren),
            State::Comment => self.step_comment(ch, Track::Plain),
            State::ParenComment => self.step_comment(ch, Track::Paren),
            State::Space => self.step_space(ch),
        }
    }

    /// Processes a character between or inside bare words.
    fn step_bare(&mut self, ch: char, track: Track) -> Option<Token> {
        if ch.is_whitespace() {
            if !self.pending.is_empty() {
                return Some(self.flush());
            }
            self.skip();
            if ch == '\n' && track == Track::Plain {
                self.state = State::Space;
                return Some(Token::LineFeed);
            }
            return None;
        }

        let group = match (track, ch) {
            (Track::Plain, '(') => Some((Token::OpenParen, Track::Paren)),
            (Track::Paren, ')') => Some((Token::CloseParen, Track::Plain)),
            _ => None,
        };
        if let Some((token, next)) = group {
            if !self.pending.is_empty() {
                return Some(self.flush());
            }
            self.skip();
            self.state = next.bare();
            return Some(token);
        }

        let next = match ch {
            '"' => Some(track.string()),
            ';' => Some(track.comment()),
            _ => None,
        };
        if let Some(next) = next {
            if !self.pending.is_empty() {
                return Some(self.flush());
            }
            self.state = next;
        }
        self.push(ch);
        None
    }

    /// Processes a character inside a quoted string.
    fn step_string(&mut self, ch: char, track: Track) -> Option<Token> {
        self.push(ch);
        match ch {
            '"' => {
                self.state = track.bare();
                Some(self.flush())
            }
            '\\' => {
                self.state = track.escape();
                None
            }
            _ => None,
        }
    }

    /// Processes the character following a backslash in a quoted string.
    fn step_escape(&mut self, ch: char, track: Track) -> Option<Token> {
        self.push(ch);
        self.state = track.string();
        None
    }

    /// Processes a character inside a comment.
    ///
    /// The line feed ending the comment is left for the bare word state
    /// which will then return the comment before dealing with it.
    fn step_comment(&mut self, ch: char, track: Track) -> Option<Token> {
        if ch == '\n' {
            self.state = track.bare();
        } else {
            self.push(ch);
        }
        None
    }

    /// Processes a character after a line feed.
    fn step_space(&mut self, ch: char) -> Option<Token> {
        if ch.is_whitespace() {
            self.skip();
        } else {
            self.state = State::Default;
        }
        None
    }

    /// Consumes the current character and adds it to the pending token.
    fn push(&mut self, ch: char) {
        self.source.bump();
        self.pending.push(ch);
    }

    /// Consumes the current character without keeping it.
    fn skip(&mut self) {
        self.source.bump();
    }

    /// Returns the pending token and starts a new one.
    fn flush(&mut self) -> Token {
        Token::from_pending(mem::take(&mut self.pending))
    }
}

impl<'a> From<&'a str> for Tokenizer<&'a [u8]> {
    fn from(src: &'a str) -> Self {
        Tokenizer::new(src.as_bytes())
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

//------------ Source --------------------------------------------------------

/// A character source atop a byte reader.
///
/// Decodes UTF-8 one character at a time. Invalid sequences result in the
/// replacement character.
#[derive(Debug)]
struct Source<R> {
    /// The underlying reader.
    read: R,

    /// The next character if it has been peeked at already.
    peeked: Option<char>,

    /// The current line number.
    line: usize,
}

impl<R: BufRead> Source<R> {
    fn new(read: R) -> Self {
        Source {
            read,
            peeked: None,
            line: 1,
        }
    }

    /// Returns the next character without consuming it.
    fn peek(&mut self) -> Result<Option<char>, io::Error> {
        if self.peeked.is_none() {
            self.peeked = self.read_char()?;
        }
        Ok(self.peeked)
    }

    /// Consumes the character last returned by `peek`.
    fn bump(&mut self) {
        if self.peeked.take() == Some('\n') {
            self.line += 1;
        }
    }

    /// Decodes the next character from the reader.
    fn read_char(&mut self) -> Result<Option<char>, io::Error> {
        let first = match self.peek_byte()? {
            Some(first) => first,
            None => return Ok(None),
        };
        self.read.consume(1);

        let len = match first {
            0x00..=0x7F => return Ok(Some(char::from(first))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };

        let mut buf = [first, 0, 0, 0];
        for item in buf.iter_mut().take(len).skip(1) {
            match self.peek_byte()? {
                Some(octet) if octet & 0xC0 == 0x80 => {
                    *item = octet;
                    self.read.consume(1);
                }
                _ => return Ok(Some(char::REPLACEMENT_CHARACTER)),
            }
        }
        Ok(Some(
            str::from_utf8(&buf[..len])
                .ok()
                .and_then(|s| s.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        ))
    }

    /// Returns the next byte without consuming it.
    fn peek_byte(&mut self) -> Result<Option<u8>, io::Error> {
        loop {
            match self.read.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}

//============ Tests =========================================================
