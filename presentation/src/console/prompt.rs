//! Console prompt provider.
//!
//! Writes each question to the terminal and reads one line back. The
//! reader and writer are generic so the prompt can be driven from a buffer.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;
use styler_application::{PromptError, PromptProvider};

/// Line-based prompt over a reader/writer pair.
pub struct ConsolePrompt<R, W> {
    io: Mutex<(R, W)>,
}

impl ConsolePrompt<BufReader<Stdin>, Stdout> {
    /// Prompt on stdin/stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Mutex::new((reader, writer)),
        }
    }

    /// Take back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        self.io
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<R: BufRead + Send, W: Write + Send> PromptProvider for ConsolePrompt<R, W> {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        let mut guard = self
            .io
            .lock()
            .map_err(|_| io::Error::other("console prompt lock poisoned"))?;
        let (reader, writer) = &mut *guard;

        write!(writer, "{}", question)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_one_line_per_question() {
        let prompt = prompt("sam\nf\r\n");

        assert_eq!(prompt.ask("name? ").unwrap(), "sam");
        assert_eq!(prompt.ask("gender? ").unwrap(), "f");

        let (_, written) = prompt.into_inner();
        assert_eq!(String::from_utf8(written).unwrap(), "name? gender? ");
    }

    #[test]
    fn test_empty_line_is_an_answer() {
        let prompt = prompt("\n");
        assert_eq!(prompt.ask("Press enter").unwrap(), "");
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        let prompt = prompt("  mary ann  \n");
        assert_eq!(prompt.ask("name? ").unwrap(), "  mary ann  ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let prompt = prompt("n");
        assert_eq!(prompt.ask("again? ").unwrap(), "n");
    }

    #[test]
    fn test_end_of_input_is_closed() {
        let prompt = prompt("");
        assert!(matches!(prompt.ask("name? "), Err(PromptError::Closed)));
    }
}
