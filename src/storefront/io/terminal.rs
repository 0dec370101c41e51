//! # Terminal I/O Implementations
//!
//! crossterm-backed event and render streams. Drawing commands are queued
//! and reach the terminal on the renderer's flush; mode switches are
//! executed right away. A render stream that is dropped while still in raw
//! mode or on the alternate screen gives the terminal back.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Reads key and resize events from the real terminal
#[derive(Default)]
pub struct TerminalEventStream;

impl TerminalEventStream {
    pub fn new() -> Self {
        Self
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Renders to the real terminal
pub struct TerminalRenderStream<W: Write> {
    writer: W,
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalRenderStream<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderStream<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }
}

impl<W: Write> Drop for TerminalRenderStream<W> {
    fn drop(&mut self) {
        if self.alternate_screen {
            if let Err(e) = execute!(self.writer, cursor::Show, LeaveAlternateScreen) {
                tracing::warn!("Failed to leave the alternate screen: {}", e);
            }
        }
        if self.raw_mode {
            if let Err(e) = terminal::disable_raw_mode() {
                tracing::warn!("Failed to disable raw mode: {}", e);
            }
        }
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.writer, terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.writer, cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        execute!(self.writer, cursor::Show)?;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        execute!(self.writer, EnterAlternateScreen)?;
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        execute!(self.writer, LeaveAlternateScreen)?;
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.raw_mode = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawing_commands_should_reach_the_writer() {
        let mut stream = TerminalRenderStream::with_writer(Vec::new());

        stream.move_cursor(2, 3).unwrap();
        stream.write_all(b"Kettle").unwrap();

        assert_eq!(stream.writer().as_slice(), b"\x1b[4;3HKettle");
    }

    #[test]
    fn alternate_screen_should_be_tracked() {
        let mut stream = TerminalRenderStream::with_writer(Vec::new());
        assert!(!stream.is_alternate_screen());

        stream.enter_alternate_screen().unwrap();
        assert!(stream.is_alternate_screen());
        assert!(stream.writer().ends_with(b"\x1b[?1049h"));

        stream.leave_alternate_screen().unwrap();
        assert!(!stream.is_alternate_screen());
        assert!(stream.writer().ends_with(b"\x1b[?1049l"));
    }
}
