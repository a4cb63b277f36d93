//! Line and block input over any reader/writer pair.
//!
//! The workflows never touch stdin/stdout directly so they can be driven by
//! scripted input in tests.

use std::io::{self, BufRead, Write};

/// A line containing only this marker ends a multi-line block, as does end
/// of input (Ctrl+D on a terminal).
pub const BLOCK_END_MARKER: &str = ".";

const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Print a line of output.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Print `message` and read one line. Returns `None` at end of input.
    /// The trailing newline is stripped; other whitespace is left alone.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.say(message)?;
        self.read_line()
    }

    /// Ask a yes/no question. Only `y` (any case, surrounding whitespace
    /// ignored) counts as yes; empty input and end of input are no.
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.prompt(message)?;
        Ok(is_affirmative(answer.as_deref()))
    }

    /// Read lines until end of input or a lone [`BLOCK_END_MARKER`] line.
    /// The marker itself is not part of the block.
    pub fn read_block(&mut self) -> io::Result<String> {
        let mut block = String::new();
        while let Some(line) = self.read_line()? {
            if line.trim_end() == BLOCK_END_MARKER {
                break;
            }
            block.push_str(&line);
            block.push('\n');
        }
        Ok(block)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SEQUENCE)?;
            self.output.flush()?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

pub fn is_affirmative(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y"))
}
