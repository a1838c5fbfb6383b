use std::collections::VecDeque;
use std::io::BufRead;

use crate::Error;

/// Parse one operand as a decimal `i64`, ignoring surrounding whitespace.
pub fn parse_operand(text: &str) -> Result<i64, Error> {
    text.trim()
        .parse::<i64>()
        .map_err(|source| Error::InvalidOperand {
            text: text.to_string(),
            source,
        })
}

/// Whitespace-separated tokens pulled lazily from a line-oriented reader.
///
/// Operands may share a line or be spread over several; a line is only read
/// once the tokens already buffered are used up, so an interactive user sees
/// each prompt before the driver blocks on the next line.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>, Error> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as an operand.
    pub fn next_operand(&mut self) -> Result<i64, Error> {
        let token = self.next_token()?.ok_or(Error::MissingOperand)?;
        let value = parse_operand(&token)?;
        tracing::debug!(%token, value, "read operand");
        Ok(value)
    }
}
