//! Line-based question and answer over any reader/writer pair.
//!
//! End of input is reported as `io::ErrorKind::UnexpectedEof` so callers can
//! leave the session cleanly when stdin closes.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::constants::INLINE_TERMINATOR;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Gives back the writer, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Reads one raw line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Asks a question and returns the trimmed answer, possibly empty.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "? {} ", question)?;
        self.output.flush()?;
        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(end_of_input()),
        }
    }

    /// Asks until the answer is not blank, printing `reminder` after each blank one.
    pub fn ask_required(&mut self, question: &str, reminder: &str) -> io::Result<String> {
        loop {
            let answer = self.ask(question)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(reminder)?;
        }
    }

    /// Asks a yes/no question; an empty answer takes `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.ask(&format!("{} {}", question, hint))?;
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer yes or no.")?,
            }
        }
    }

    /// Shows a numbered list and returns the zero-based index picked.
    ///
    /// `options` must not be empty.
    pub fn choose<S: AsRef<str>>(&mut self, question: &str, options: &[S]) -> io::Result<usize> {
        self.say(question)?;
        for (i, option) in options.iter().enumerate() {
            self.say(format!("  {}) {}", i + 1, option.as_ref()))?;
        }
        loop {
            let answer = self.ask(&format!("Choose 1-{}:", options.len()))?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.say(format!(
                    "Please enter a number between 1 and {}.",
                    options.len()
                ))?,
            }
        }
    }

    /// Reads free text until a line holding only `.` or the end of input.
    ///
    /// Ending the input before any line was typed is reported as end of input.
    pub fn read_block(&mut self, message: &str) -> io::Result<String> {
        self.say(format!(
            "{} (finish with a line containing only '{}')",
            message, INLINE_TERMINATOR
        ))?;
        self.output.flush()?;

        let mut lines: Vec<String> = Vec::new();
        loop {
            match self.read_line()? {
                Some(line) if line.trim() == INLINE_TERMINATOR => break,
                Some(line) => lines.push(line),
                None if lines.is_empty() => return Err(end_of_input()),
                None => break,
            }
        }
        Ok(lines.join("\n"))
    }
}
