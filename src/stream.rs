//! Token-level stream I/O for enumeration tables.
//!
//! The table treats streams as opaque collaborators behind two small traits:
//! [`TokenRead`] yields whitespace-delimited tokens with position context,
//! and [`TokenWrite`] accepts strings, integers, and newlines. Buffering and
//! binary/text mode are the stream's concern, not this module's.

use std::io::{self, BufRead, Write};

use crate::errors::EnumTableError;
use crate::table::EnumTable;

/// A source of whitespace-delimited tokens.
pub trait TokenRead {
    /// Next token, or `None` at end of input.
    fn read_token(&mut self) -> io::Result<Option<String>>;

    /// Human-readable position context for diagnostics (e.g. `"line 3"`).
    fn context(&self) -> String;
}

/// A sink for token-level text output.
pub trait TokenWrite {
    fn write_str(&mut self, s: &str) -> io::Result<()>;

    fn write_int(&mut self, v: i64) -> io::Result<()>;

    fn newline(&mut self) -> io::Result<()>;
}

/// [`TokenRead`] over any buffered reader, tracking line numbers.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    line: u64,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 1 }
    }
}

impl<R: BufRead> TokenRead for TokenReader<R> {
    fn read_token(&mut self) -> io::Result<Option<String>> {
        // Skip leading whitespace, counting newlines as we pass them.
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            let mut consumed = 0;
            let mut at_token = false;
            for &b in buf {
                if !b.is_ascii_whitespace() {
                    at_token = true;
                    break;
                }
                if b == b'\n' {
                    self.line += 1;
                }
                consumed += 1;
            }
            self.inner.consume(consumed);
            if at_token {
                break;
            }
        }

        let mut token = Vec::new();
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut at_ws = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    at_ws = true;
                    break;
                }
                token.push(b);
                consumed += 1;
            }
            self.inner.consume(consumed);
            if at_ws {
                break;
            }
        }

        String::from_utf8(token)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn context(&self) -> String {
        format!("line {}", self.line)
    }
}

/// [`TokenWrite`] over any writer.
#[derive(Debug)]
pub struct TokenWriter<W> {
    inner: W,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> TokenWrite for TokenWriter<W> {
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }

    fn write_int(&mut self, v: i64) -> io::Result<()> {
        write!(self.inner, "{v}")
    }

    fn newline(&mut self) -> io::Result<()> {
        self.inner.write_all(b"\n")
    }
}

impl<V: PartialEq + Clone> EnumTable<V> {
    /// Read one token from `input` and resolve it to a value.
    ///
    /// ## Returns
    /// - `Err(TokenParse)` if the token matches no registered name; the
    ///   error carries the token, the stream context, and the sorted
    ///   valid-name list.
    /// - `Err(UnexpectedEof)` if the stream ends before a token.
    pub fn read(&self, input: &mut impl TokenRead) -> Result<V, EnumTableError> {
        match input.read_token()? {
            None => Err(EnumTableError::UnexpectedEof {
                context: input.context(),
            }),
            Some(token) => match self.find_name(&token) {
                Some(i) => Ok(self.values()[i].clone()),
                None => Err(EnumTableError::TokenParse {
                    text: token,
                    context: input.context(),
                    valid: self.sorted_names_owned(),
                }),
            },
        }
    }

    /// Write the canonical name of `value` to `output`.
    ///
    /// ## Notes
    /// - A no-op for values with no registered name, not an error: some
    ///   callers pass sentinel/internal values outside the named subset.
    pub fn write(&self, value: &V, output: &mut impl TokenWrite) -> io::Result<()> {
        if let Some(i) = self.find_value(value) {
            output.write_str(&self.names()[i])?;
        }
        Ok(())
    }

    /// Write all registered names as a flat space-separated listing.
    ///
    /// ## Notes
    /// - Names appear in construction order.
    /// - With `short_len == 0` everything goes on one line; otherwise the
    ///   listing wraps whenever appending the next name would push the
    ///   current line past `short_len` columns.
    pub fn write_names_list(
        &self,
        output: &mut impl TokenWrite,
        short_len: usize,
    ) -> io::Result<()> {
        let mut width = 0usize;
        for (i, name) in self.names().iter().enumerate() {
            if i > 0 {
                if short_len != 0 && width + 1 + name.len() > short_len {
                    output.newline()?;
                    width = 0;
                } else {
                    output.write_str(" ")?;
                    width += 1;
                }
            }
            output.write_str(name)?;
            width += name.len();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn levels() -> EnumTable<u8> {
        EnumTable::new([(0u8, "low"), (1, "medium"), (2, "high")])
    }

    fn reader(text: &str) -> TokenReader<Cursor<&str>> {
        TokenReader::new(Cursor::new(text))
    }

    fn written(table: &EnumTable<u8>, f: impl FnOnce(&EnumTable<u8>, &mut TokenWriter<Vec<u8>>)) -> String {
        let mut out = TokenWriter::new(Vec::new());
        f(table, &mut out);
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn reader_splits_on_whitespace_and_tracks_lines() {
        let mut input = reader("low  medium\n\thigh\n");
        assert_eq!(input.read_token().unwrap().as_deref(), Some("low"));
        assert_eq!(input.context(), "line 1");
        assert_eq!(input.read_token().unwrap().as_deref(), Some("medium"));
        assert_eq!(input.read_token().unwrap().as_deref(), Some("high"));
        assert_eq!(input.context(), "line 2");
        assert_eq!(input.read_token().unwrap(), None);
    }

    #[test]
    fn read_resolves_one_token() {
        let t = levels();
        let mut input = reader("medium high");
        assert_eq!(t.read(&mut input).unwrap(), 1);
        assert_eq!(t.read(&mut input).unwrap(), 2);
    }

    #[test]
    fn read_reports_bad_token_with_context() {
        let t = levels();
        let mut input = reader("low\nturbo");
        assert_eq!(t.read(&mut input).unwrap(), 0);
        match t.read(&mut input) {
            Err(EnumTableError::TokenParse { text, context, valid }) => {
                assert_eq!(text, "turbo");
                assert_eq!(context, "line 2");
                assert_eq!(valid, vec!["high", "low", "medium"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn read_fails_on_end_of_input() {
        let t = levels();
        let mut input = reader("   \n ");
        assert!(matches!(
            t.read(&mut input),
            Err(EnumTableError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn write_emits_canonical_name_and_skips_unregistered_values() {
        let t = EnumTable::new([(0u8, "a"), (0, "b"), (1, "c")]);
        let out = written(&t, |t, w| {
            t.write(&0, w).unwrap();
            w.newline().unwrap();
            t.write(&42, w).unwrap(); // no registered name: nothing written
            t.write(&1, w).unwrap();
        });
        assert_eq!(out, "a\nc");
    }

    #[test]
    fn names_list_is_flat_by_default() {
        let out = written(&levels(), |t, w| t.write_names_list(w, 0).unwrap());
        assert_eq!(out, "low medium high");
    }

    #[test]
    fn names_list_wraps_past_the_short_line_threshold() {
        let out = written(&levels(), |t, w| t.write_names_list(w, 10).unwrap());
        assert_eq!(out, "low medium\nhigh");
    }

    #[test]
    fn token_writer_writes_ints_and_newlines() {
        let mut out = TokenWriter::new(Vec::new());
        out.write_str("n").unwrap();
        out.write_int(-3).unwrap();
        out.newline().unwrap();
        assert_eq!(out.into_inner(), b"n-3\n");
    }
}
