use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented input and output shared by the front-ends.
///
/// Generic over the handles so sessions can be driven from in-memory buffers.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `message` without a newline and reads one line of input.
    ///
    /// Returns `None` once the input is exhausted. The trailing line break
    /// is stripped; other whitespace is preserved. Invalid UTF-8 is decoded
    /// lossily so it reaches the caller's parser as ordinary bad input.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Writes `text` verbatim.
    pub fn write_raw(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_writes_message_and_strips_line_break() {
        let mut term = Terminal::new(Cursor::new("Alice Smith\r\n"), Vec::new());
        let answer = term.prompt("Name: ").unwrap();
        assert_eq!(answer.as_deref(), Some("Alice Smith"));
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "Name: ");
    }

    #[test]
    fn prompt_returns_none_at_end_of_input() {
        let mut term = Terminal::new(Cursor::new(""), Vec::new());
        assert_eq!(term.prompt("? ").unwrap(), None);
        assert_eq!(String::from_utf8(term.into_output()).unwrap(), "? \n");
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let mut term = Terminal::new(Cursor::new(b"\xff1\nok\n".to_vec()), Vec::new());
        assert_eq!(term.prompt("").unwrap().as_deref(), Some("\u{FFFD}1"));
        assert_eq!(term.prompt("").unwrap().as_deref(), Some("ok"));
    }

    #[test]
    fn last_line_without_newline_is_still_read() {
        let mut term = Terminal::new(Cursor::new("1\n2"), Vec::new());
        assert_eq!(term.prompt("").unwrap().as_deref(), Some("1"));
        assert_eq!(term.prompt("").unwrap().as_deref(), Some("2"));
        assert_eq!(term.prompt("").unwrap(), None);
    }
}
