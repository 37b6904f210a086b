//! Line-based prompting over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::SessionError;

pub const INVALID_INTEGER: &str = "Invalid input! Please enter an integer.";
pub const INVALID_NUMBER: &str = "Invalid input! Please enter a number.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its line terminator. Bytes that are not valid
    /// UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> Result<String, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn write(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn writeln(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn prompt_string(&mut self, message: &str) -> Result<String, SessionError> {
        self.write(message)?;
        self.read_line()
    }

    pub fn prompt_int(&mut self, message: &str) -> Result<i32, SessionError> {
        self.prompt_parsed(message, INVALID_INTEGER)
    }

    pub fn prompt_f64(&mut self, message: &str) -> Result<f64, SessionError> {
        self.prompt_parsed(message, INVALID_NUMBER)
    }

    /// Re-prompts until the trimmed line parses as `T`.
    fn prompt_parsed<T: FromStr>(
        &mut self,
        message: &str,
        retry_hint: &str,
    ) -> Result<T, SessionError> {
        loop {
            let line = self.prompt_string(message)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected numeric input");
                    self.writeln(&format!("{retry_hint}\n"))?;
                }
            }
        }
    }
}
