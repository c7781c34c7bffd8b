//! Line-oriented prompting over any reader/writer pair

use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads answers from `input`
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line
    ///
    /// Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Writer for non-question output
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn ask_trims_answer() {
        let mut prompter = Prompter::new(Cursor::new("  India Gate \n"), Vec::new());
        assert_eq!(
            prompter.ask("Enter starting point: ").unwrap().as_deref(),
            Some("India Gate")
        );
        assert_eq!(prompter.into_output(), b"Enter starting point: ");
    }

    #[test]
    fn ask_returns_none_at_eof() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        assert_eq!(prompter.ask("? ").unwrap(), None);
    }
}
