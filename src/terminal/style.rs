use crossterm::queue;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use std::io;
use std::io::Write;

/// Holds a foreground color on the wrapped writer until dropped.
///
/// The reset is queued in `Drop`, so it is emitted even when a write through
/// the guard fails halfway.
pub struct ColorGuard<'w, W: Write> {
    writer: &'w mut W,
}

impl<'w, W: Write> ColorGuard<'w, W> {
    pub fn acquire(writer: &'w mut W, color: Color) -> io::Result<Self> {
        queue!(writer, SetForegroundColor(color))?;
        Ok(Self { writer })
    }
}

impl<W: Write> Write for ColorGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write> Drop for ColorGuard<'_, W> {
    fn drop(&mut self) {
        let _ = queue!(self.writer, ResetColor);
        let _ = self.writer.flush();
    }
}
