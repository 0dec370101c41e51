//! # Mock I/O Implementations for Testing
//!
//! Scripted input and a recording output so the whole application can run
//! headless.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Pre-programmed event stream
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Queue one key event per character
    pub fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_key(KeyCode::Char(ch));
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Flush,
}

#[derive(Debug, Default)]
struct Recording {
    commands: Vec<RenderCommand>,
    buffer: Vec<u8>,
}

/// Recording render stream
///
/// Clones share the same recording, so a test can keep one handle while the
/// renderer owns another.
#[derive(Debug, Clone)]
pub struct MockRenderStream {
    recording: Arc<Mutex<Recording>>,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            recording: Arc::new(Mutex::new(Recording::default())),
            terminal_size: size,
        }
    }

    pub fn get_commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    /// Everything written since the last clear, with escape codes left in
    pub fn get_buffer_string(&self) -> String {
        String::from_utf8_lossy(&self.lock().buffer).to_string()
    }

    /// Text written since the last clear, escape sequences stripped
    pub fn get_plain_text(&self) -> String {
        strip_escape_codes(&self.get_buffer_string())
    }

    fn lock(&self) -> MutexGuard<'_, Recording> {
        // A poisoned recording is still readable for assertions
        self.recording
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, command: RenderCommand) {
        self.lock().commands.push(command);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.lock().buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        let mut recording = self.lock();
        recording.commands.push(RenderCommand::ClearScreen);
        recording.buffer.clear();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        Ok(())
    }
}

/// Drop CSI escape sequences (`ESC [ ... final-byte`)
fn strip_escape_codes(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        plain.push(ch);
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_stream_should_replay_in_order() {
        let mut stream = MockEventStream::empty();
        stream.push_text("ab");

        assert!(stream.poll(Duration::ZERO).unwrap());
        assert_eq!(
            stream.read().unwrap(),
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
        );
        stream.read().unwrap();
        assert!(stream.is_exhausted());
        assert!(stream.read().is_err());
    }

    #[test]
    fn clones_should_share_the_recording() {
        let handle = MockRenderStream::new();
        let mut stream = handle.clone();

        stream.enable_raw_mode().unwrap();
        write!(stream, "\x1b[1mhello\x1b[0m").unwrap();

        assert!(handle.has_command(&RenderCommand::EnableRawMode));
        assert_eq!(handle.get_plain_text(), "hello");
    }

    #[test]
    fn clear_screen_should_reset_buffer() {
        let mut stream = MockRenderStream::new();
        write!(stream, "old").unwrap();

        stream.clear_screen().unwrap();

        assert_eq!(stream.get_buffer_string(), "");
    }
}
