use std::io;
use std::io::{BufRead, Write};

pub use crossterm::style::Color;

use crate::terminal::style::ColorGuard;

pub mod style;

/// Line based console over any reader/writer pair.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Reads one line without its line ending. `None` once the input is closed.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD` rather than failing the read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        if !self.color {
            return self.line(text);
        }

        let mut guard = ColorGuard::acquire(&mut self.writer, color)?;
        writeln!(guard, "{text}")
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
