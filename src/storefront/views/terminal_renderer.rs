//! # Terminal Renderer
//!
//! Lays out the fragments produced by the views: the page fills the screen
//! from the top, the modal (when active) is drawn as a framed box over it
//! and the notice line sits on the last row.

use super::fragment::{Fragment, Line, Tone};
use crate::storefront::context::Shop;
use crate::storefront::io::RenderStream;
use crate::storefront::models::CategoryTone;
use crate::storefront::views::ModalContent;
use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use unicode_width::UnicodeWidthChar;

const MODAL_MAX_WIDTH: u16 = 64;
const MODAL_TOP: u16 = 2;

/// Renders the shop onto a render stream
pub struct TerminalRenderer<RS: RenderStream> {
    stream: RS,
    terminal_size: (u16, u16),
    page_scroll: usize,
    modal_scroll: usize,
    modal_content: Option<ModalContent>,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(stream: RS) -> Result<Self> {
        let terminal_size = stream.get_size()?;
        Ok(Self {
            stream,
            terminal_size,
            page_scroll: 0,
            modal_scroll: 0,
            modal_content: None,
        })
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn stream(&self) -> &RS {
        &self.stream
    }

    /// Take over the terminal
    pub fn initialize(&mut self) -> Result<()> {
        self.stream.enable_raw_mode()?;
        self.stream.enter_alternate_screen()?;
        self.stream.hide_cursor()?;
        self.stream.clear_screen()
    }

    /// Draw the whole screen from the current shop state
    pub fn render(&mut self, shop: &Shop) -> Result<()> {
        let (width, height) = self.terminal_size;
        self.stream.clear_screen()?;

        let page = shop.page.render();
        let page_rows = height.saturating_sub(1) as usize;
        let visible = visible_lines(&page, page_rows, &mut self.page_scroll);
        for (row, line) in visible.into_iter().enumerate() {
            self.draw_line(0, row as u16, line, width as usize)?;
        }

        if self.modal_content != shop.modal.content() {
            self.modal_content = shop.modal.content();
            self.modal_scroll = 0;
        }
        if let Some(modal) = shop.modal_fragment() {
            self.draw_modal(&modal)?;
        }

        if let Some(notice) = shop.notice() {
            let line = Line::new(notice, Tone::Error);
            self.draw_line(0, height.saturating_sub(1), &line, width as usize)?;
        }

        self.stream.flush()?;
        Ok(())
    }

    /// Give the terminal back
    pub fn cleanup(&mut self) -> Result<()> {
        self.stream.clear_screen()?;
        self.stream.show_cursor()?;
        self.stream.leave_alternate_screen()?;
        self.stream.disable_raw_mode()
    }

    fn draw_modal(&mut self, fragment: &Fragment) -> Result<()> {
        let (width, height) = self.terminal_size;
        let box_width = width.saturating_sub(4).min(MODAL_MAX_WIDTH);
        if box_width < 4 {
            return Ok(());
        }
        let inner = (box_width - 4) as usize;
        let left = (width - box_width) / 2;
        let max_rows = height.saturating_sub(MODAL_TOP + 3) as usize;

        let border = "─".repeat(box_width as usize - 2);
        let top = Line::new(format!("┌{border}┐"), Tone::Muted);
        self.draw_line(left, MODAL_TOP, &top, box_width as usize)?;

        let mut row = MODAL_TOP + 1;
        for line in visible_lines(fragment, max_rows, &mut self.modal_scroll) {
            self.stream.move_cursor(left, row)?;
            queue!(self.stream, Print("│ "))?;
            let (text, used) = fit(&line.text, inner);
            self.print_styled(&text, line.tone)?;
            queue!(
                self.stream,
                Print(" ".repeat(inner - used)),
                Print(" │")
            )?;
            row += 1;
        }

        let bottom = Line::new(format!("└{border}┘"), Tone::Muted);
        self.draw_line(left, row, &bottom, box_width as usize)
    }

    fn draw_line(&mut self, x: u16, y: u16, line: &Line, width: usize) -> Result<()> {
        self.stream.move_cursor(x, y)?;
        let (text, _) = fit(&line.text, width);
        self.print_styled(&text, line.tone)
    }

    fn print_styled(&mut self, text: &str, tone: Tone) -> Result<()> {
        match tone {
            Tone::Plain => queue!(self.stream, Print(text))?,
            Tone::Title => queue!(
                self.stream,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?,
            Tone::Highlight => queue!(
                self.stream,
                SetAttribute(Attribute::Reverse),
                Print(text),
                SetAttribute(Attribute::Reset)
            )?,
            _ => queue!(
                self.stream,
                SetForegroundColor(tone_color(tone)),
                Print(text),
                ResetColor
            )?,
        }
        Ok(())
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Muted | Tone::Disabled => Color::DarkGrey,
        Tone::Error => Color::Red,
        Tone::Button => Color::Cyan,
        Tone::Category(CategoryTone::Soft) => Color::Green,
        Tone::Category(CategoryTone::Hard) => Color::DarkYellow,
        Tone::Category(CategoryTone::Other) => Color::Magenta,
        Tone::Category(CategoryTone::Additional) => Color::Blue,
        Tone::Category(CategoryTone::Button) => Color::Cyan,
        Tone::Plain | Tone::Title | Tone::Highlight => Color::Reset,
    }
}

/// Lines of `fragment` that fit in `rows`, keeping the pinned head and
/// footer and scrolling the body just enough to show the highlighted rows.
/// `scroll` is the body offset carried over from the previous frame.
fn visible_lines<'a>(fragment: &'a Fragment, rows: usize, scroll: &mut usize) -> Vec<&'a Line> {
    let lines = fragment.lines();
    if lines.len() <= rows {
        *scroll = 0;
        return lines.iter().collect();
    }

    let body = fragment.body_range();
    let pinned = lines.len() - body.len();
    let body_rows = rows.saturating_sub(pinned);
    if body_rows == 0 {
        *scroll = 0;
        return lines.iter().take(rows).collect();
    }

    let max_scroll = body.len() - body_rows.min(body.len());
    let mut offset = (*scroll).min(max_scroll);
    if let Some(focus) = fragment.highlighted_rows() {
        let focus_start = focus.start - body.start;
        let focus_end = focus.end - body.start;
        if focus_start < offset {
            offset = focus_start;
        } else if focus_end > offset + body_rows {
            offset = (focus_end - body_rows).min(focus_start);
        }
    }
    *scroll = offset;

    let start = body.start + offset;
    let end = (start + body_rows).min(body.end);
    lines[..body.start]
        .iter()
        .chain(&lines[start..end])
        .chain(&lines[body.end..])
        .collect()
}

/// Cut `text` to at most `width` display columns; returns the kept text and
/// the columns it occupies
fn fit(text: &str, width: usize) -> (String, usize) {
    let mut kept = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width {
            break;
        }
        used += ch_width;
        kept.push(ch);
    }
    (kept, used)
}
