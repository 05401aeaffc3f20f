use crossterm::{queue, style::Print};
use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Shows `message` and reads one line without its line ending. `None`
    /// once input is exhausted.
    fn read_line(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Asks a yes/no question. Only an answer starting with `y` or `Y`
    /// counts as yes; end of input counts as no.
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.read_line(message)?;
        Ok(matches!(
            answer.as_deref().and_then(|a| a.trim().chars().next()),
            Some('y') | Some('Y')
        ))
    }
}

pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> ConsolePrompt<R, W> {
        ConsolePrompt { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn read_line(&mut self, message: &str) -> io::Result<Option<String>> {
        queue!(self.output, Print(message)).map_err(to_io_error)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        let trimmed_len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn to_io_error(err: crossterm::ErrorKind) -> io::Error {
    match err {
        crossterm::ErrorKind::IoError(e) => e,
        other => io::Error::new(io::ErrorKind::Other, other.to_string()),
    }
}
