//! Line source for dump files.
//!
//! Reads a dump as raw byte lines and decodes each one independently.
//! UTF-8 is tried first. A line that is not valid UTF-8 is decoded as
//! ISO-8859-1, which maps every byte to a code point, so no line is ever
//! dropped because of its encoding.

use crate::error::Result;
use std::io::BufRead;
use tracing::debug;

/// One decoded line of a dump
#[derive(Debug, Clone, PartialEq)]
pub struct DumpLine {
    /// 1-based line number in the source
    pub number: usize,
    /// Line text without its terminator
    pub text: String,
    /// Raw length in bytes, terminator included
    pub byte_len: usize,
    /// Whether the ISO-8859-1 fallback was used
    pub fallback: bool,
}

/// Iterator over the decoded lines of a dump
pub struct DumpLineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> DumpLineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    /// Read and decode the next line, `None` at end of input
    pub fn next_line(&mut self) -> Result<Option<DumpLine>> {
        self.buffer.clear();
        let byte_len = self.reader.read_until(b'\n', &mut self.buffer)?;
        if byte_len == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let (text, fallback) = decode_line(strip_terminator(&self.buffer));
        if fallback {
            debug!(
                "Line {} is not valid UTF-8, decoded as ISO-8859-1",
                self.line_number
            );
        }

        Ok(Some(DumpLine {
            number: self.line_number,
            text,
            byte_len,
            fallback,
        }))
    }
}

impl<R: BufRead> Iterator for DumpLineReader<R> {
    type Item = Result<DumpLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

/// Decode bytes as UTF-8, falling back to ISO-8859-1.
///
/// Returns the text and whether the fallback was needed.
pub fn decode_line(bytes: &[u8]) -> (String, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), false),
        Err(_) => (encoding_rs::mem::decode_latin1(bytes).into_owned(), true),
    }
}

fn strip_terminator(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
