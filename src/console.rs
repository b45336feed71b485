//! Line-based terminal collaborator.
//!
//! The session reads and writes whole lines through [`Console`], so the game
//! can be driven from a real terminal or from a script.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

/// Reads lines from and writes lines to the user.
pub trait Console {
    /// Reads one line of input without its line terminator.
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self) -> Option<String>;

    /// Displays one line of output.
    fn write_line(&mut self, line: &str);
}

/// A console fed from a fixed list of input lines that records everything
/// written to it.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `input`, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::console::{Console, ScriptedConsole};
    ///
    /// let mut console = ScriptedConsole::new(["yes"]);
    /// assert_eq!(console.read_line().as_deref(), Some("yes"));
    /// assert_eq!(console.read_line(), None);
    /// ```
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Returns every line written so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns the number of input lines not yet read.
    #[must_use]
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Returns the output joined with newlines.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    fn write_line(&mut self, line: &str) {
        self.output.push(String::from(line));
    }
}

/// A console reading lines from any [`BufRead`](std::io::BufRead) and
/// writing to any [`Write`](std::io::Write).
///
/// Lines are read as raw bytes; bytes that are not valid UTF-8 are replaced
/// rather than ending input, so a garbled line is just another unreadable
/// answer.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// use indigo::console::{Console, IoConsole};
///
/// let mut console = IoConsole::new(Cursor::new(b"1\r\n\xff\n".to_vec()), Vec::new());
/// assert_eq!(console.read_line().as_deref(), Some("1"));
/// assert_eq!(console.read_line().as_deref(), Some("\u{fffd}"));
/// assert_eq!(console.read_line(), None);
///
/// console.write_line("Game Over");
/// let (_, written) = console.into_inner();
/// assert_eq!(written, b"Game Over\n");
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Debug)]
pub struct IoConsole<R, W> {
    reader: R,
    writer: W,
}

/// A console on the process's standard input and output.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub type StdConsole = IoConsole<std::io::StdinLock<'static>, std::io::Stdout>;

#[cfg(feature = "std")]
impl<R, W> IoConsole<R, W> {
    /// Creates a console on `reader` and `writer`.
    #[must_use]
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the reader and writer.
    #[must_use]
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(feature = "std")]
impl StdConsole {
    /// Creates a console on stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead, W: std::io::Write> Console for IoConsole<R, W> {
    fn read_line(&mut self) -> Option<String> {
        let mut buf = Vec::new();
        loop {
            match self.reader.read_until(b'\n', &mut buf) {
                Ok(0) => return None,
                Ok(_) => break,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => {
                    log::warn!("stopped reading input: {err}");
                    return None;
                }
            }
        }

        while buf.last().is_some_and(|byte| matches!(byte, b'\n' | b'\r')) {
            buf.pop();
        }
        Some(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_line(&mut self, line: &str) {
        let _ = writeln!(self.writer, "{line}");
        let _ = self.writer.flush();
    }
}
