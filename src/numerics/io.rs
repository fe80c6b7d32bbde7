// src/numerics/io.rs
// Whitespace-delimited text codec for vectors and matrices.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::{FromStr, SplitWhitespace};

use super::error::{NumericsError, Result};

/// Layout used when writing values as text.
///
/// Input is always whitespace-delimited, so only whitespace separators
/// round-trip through [`TextDecode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    /// Written between two values of the same row.
    pub separator: &'static str,

    /// Also write the separator after the last value of each row.
    pub trailing_separator: bool,

    /// Written after each matrix row. Vectors are a single row and never
    /// get a terminator.
    pub row_terminator: &'static str,
}

impl Default for TextFormat {
    /// Single spaces between values and a line break after each matrix row.
    fn default() -> Self {
        Self {
            separator: " ",
            trailing_separator: false,
            row_terminator: "\n",
        }
    }
}

impl TextFormat {
    pub fn new(separator: &'static str, trailing_separator: bool, row_terminator: &'static str) -> Self {
        Self {
            separator,
            trailing_separator,
            row_terminator,
        }
    }

    /// Stream layout: every value is followed by a space, rows end with a
    /// line break (`1 2 \n3 4 \n`).
    pub fn stream() -> Self {
        Self {
            separator: " ",
            trailing_separator: true,
            row_terminator: "\n",
        }
    }

    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_trailing_separator(mut self, trailing_separator: bool) -> Self {
        self.trailing_separator = trailing_separator;
        self
    }

    pub fn with_row_terminator(mut self, row_terminator: &'static str) -> Self {
        self.row_terminator = row_terminator;
        self
    }

    /// Write one row of values.
    pub fn write_values<'a, W, T, I>(&self, out: &mut W, values: I) -> io::Result<()>
    where
        W: Write + ?Sized,
        T: Display + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                out.write_all(self.separator.as_bytes())?;
            }
            write!(out, "{value}")?;
        }
        if self.trailing_separator {
            out.write_all(self.separator.as_bytes())?;
        }
        Ok(())
    }

    pub fn end_row<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.row_terminator.as_bytes())
    }
}

/// Values that can be written as text.
pub trait TextEncode {
    fn write_text<W: Write + ?Sized>(&self, out: &mut W, format: &TextFormat) -> Result<()>;

    fn to_text(&self, format: &TextFormat) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_text(&mut buffer, format)?;
        String::from_utf8(buffer)
            .map_err(|err| NumericsError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

/// Values that can be read back from whitespace-delimited tokens.
pub trait TextDecode: Sized {
    fn decode_tokens<S: TokenSource + ?Sized>(source: &mut S) -> Result<Self>;
}

/// A supply of whitespace-delimited tokens.
pub trait TokenSource {
    /// The next token, or `None` at the end of input.
    fn next_token(&mut self) -> Result<Option<String>>;

    /// Number of tokens handed out so far.
    fn position(&self) -> usize;
}

/// Tokens of an in-memory string.
pub struct StrTokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> StrTokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }
}

impl TokenSource for StrTokens<'_> {
    fn next_token(&mut self) -> Result<Option<String>> {
        let token = self.inner.next().map(str::to_owned);
        if token.is_some() {
            self.position += 1;
        }
        Ok(token)
    }

    fn position(&self) -> usize {
        self.position
    }
}

/// Tokens read lazily, line by line, from a buffered reader.
///
/// Several values can be read from one stream in sequence; whatever a
/// value does not consume stays available for the next read.
pub struct TokenStream<R> {
    reader: R,
    pending: VecDeque<String>,
    position: usize,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            position: 0,
        }
    }

    /// Decode the next value from the stream.
    pub fn read<V: TextDecode>(&mut self) -> Result<V> {
        V::decode_tokens(self)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> TokenSource for TokenStream<R> {
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.position += 1;
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}

/// Parse the next token as a scalar. `expected` and `found` describe the
/// value being decoded and go into the error when input runs out.
pub fn next_scalar<T, S>(source: &mut S, expected: usize, found: usize) -> Result<T>
where
    T: FromStr,
    S: TokenSource + ?Sized,
{
    let position = source.position();
    let token = source
        .next_token()?
        .ok_or(NumericsError::MissingToken { expected, found })?;
    match token.parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            tracing::debug!(%token, position, "rejected scalar token");
            Err(NumericsError::InvalidToken { token, position })
        }
    }
}

/// Decode exactly one value from `text`; leftover tokens are an error.
pub fn decode_str<V: TextDecode>(text: &str) -> Result<V> {
    let mut tokens = StrTokens::new(text);
    let value = V::decode_tokens(&mut tokens)?;
    match tokens.next_token()? {
        Some(token) => Err(NumericsError::TrailingInput { token }),
        None => Ok(value),
    }
}

/// Decode one value from the start of a reader.
pub fn read_text<V: TextDecode, R: BufRead>(reader: R) -> Result<V> {
    TokenStream::new(reader).read()
}

/// Write one value with the given layout.
pub fn write_text<V: TextEncode, W: Write>(value: &V, mut out: W, format: &TextFormat) -> Result<()> {
    value.write_text(&mut out, format)?;
    out.flush()?;
    Ok(())
}
