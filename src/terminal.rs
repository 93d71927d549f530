//! Line-oriented console used for every interactive prompt.
//!
//! The reader and writer are injected so the quiz flows run the same way
//! against stdin/stdout and against in-memory buffers.

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::str::FromStr;

use crate::QuizError;
use crate::ui::Theme;

pub type StdConsole = Console<StdinLock<'static>, Stdout>;

pub struct Console<R, W> {
    reader: R,
    writer: W,
    theme: Theme,
}

impl StdConsole {
    /// Console over stdin/stdout, colored only when stdout is a terminal.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout()).with_theme(Theme::detect())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain console; output carries no escape sequences.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            theme: Theme::PLAIN,
        }
    }

    pub(crate) fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line without its trailing line ending.
    ///
    /// Running out of input is an error: every prompt expects an answer.
    pub fn read_line(&mut self) -> Result<String, QuizError> {
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended early").into());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Print `message` on its own line, then read the reply.
    pub fn prompt(&mut self, message: &str) -> Result<String, QuizError> {
        writeln!(self.writer, "{}", message)?;
        self.read_line()
    }

    pub fn read_number<T: FromStr>(&mut self) -> Result<T, QuizError> {
        let line = self.read_line()?;
        line.trim()
            .parse()
            .map_err(|_| QuizError::InvalidNumber { input: line })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn strips_unix_and_windows_line_endings() {
        let mut console = console("first\nsecond\r\nlast");
        assert_eq!(console.read_line().unwrap(), "first");
        assert_eq!(console.read_line().unwrap(), "second");
        assert_eq!(console.read_line().unwrap(), "last");
    }

    #[test]
    fn keeps_inner_whitespace() {
        let mut console = console("  What is  2+2? \n");
        assert_eq!(console.read_line().unwrap(), "  What is  2+2? ");
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut console = console("");
        let err = console.read_line().unwrap_err();
        assert!(matches!(err, QuizError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn parses_numbers_with_surrounding_spaces() {
        let mut console = console(" 3 \n");
        assert_eq!(console.read_number::<usize>().unwrap(), 3);
    }

    #[test]
    fn malformed_number_keeps_the_input() {
        let mut console = console("three\n");
        let err = console.read_number::<usize>().unwrap_err();
        assert!(matches!(err, QuizError::InvalidNumber { ref input } if input == "three"));
    }

    #[test]
    fn prompt_writes_message_first() {
        let mut console = console("Paris\n");
        assert_eq!(console.prompt("Enter the answer.").unwrap(), "Paris");
        assert_eq!(
            String::from_utf8(console.into_writer()).unwrap(),
            "Enter the answer.\n"
        );
    }
}
