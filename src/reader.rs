use std::io::BufRead;

use crate::error::*;

/// Pull-based line source with a single line of lookahead.
///
/// Lines are returned without their line terminator. Invalid UTF-8 is replaced
/// rather than rejected since man pages in the wild are not always clean.
pub struct LineCursor<R: BufRead> {
    input: R,
    source: String,
    peeked: Option<String>,
    line_number: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            source: "<input>".to_string(),
            peeked: None,
            line_number: 0,
        }
    }

    /// Names the input in read errors
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = source.to_string();
        self
    }

    /// Returns the next line, consuming a previously peeked one first.
    ///
    /// # Returns
    /// `None` once the input is exhausted.
    ///
    /// # Examples
    /// ```
    /// use man2md::reader::LineCursor;
    ///
    /// let mut cursor = LineCursor::new("first\nsecond\n".as_bytes());
    /// assert_eq!(cursor.peek_line().unwrap(), Some("first"));
    /// assert_eq!(cursor.next_line().unwrap().as_deref(), Some("first"));
    /// assert_eq!(cursor.next_line().unwrap().as_deref(), Some("second"));
    /// assert_eq!(cursor.next_line().unwrap(), None);
    /// ```
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.peeked.take() {
            Some(line) => Ok(Some(line)),
            None => self.read_line(),
        }
    }

    /// Reads ahead without consuming. Repeated peeks return the same line.
    pub fn peek_line(&mut self) -> Result<Option<&str>> {
        if self.peeked.is_none() {
            self.peeked = self.read_line()?;
        }
        Ok(self.peeked.as_deref())
    }

    /// Number of physical lines read from the input so far (peeked included)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .map_err(|e| Error::InputReadError {
                file: self.source.clone(),
                cause: e.to_string(),
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if bytes.last() == Some(&b'\n') {
            bytes.pop();
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}
