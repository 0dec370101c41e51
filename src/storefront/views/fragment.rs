//! # Fragments
//!
//! The rendering surface shared by all views: a fragment is a list of styled
//! text lines that the terminal renderer lays out. Views write into
//! fragments; they never talk to the terminal directly.

use crate::storefront::models::CategoryTone;
use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

/// Visual role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Muted,
    Highlight,
    Error,
    Disabled,
    Button,
    Category(CategoryTone),
}

/// A single styled line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Ordered group of lines produced by one view
///
/// Lines before `body_start` and from `footer_start` on stay on screen when
/// the fragment is taller than the space it gets; only the body scrolls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<Line>,
    body_start: usize,
    footer_start: Option<usize>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.lines.push(Line::new(text, tone));
    }

    pub fn blank(&mut self) {
        self.push(String::new(), Tone::Plain);
    }

    pub fn append(&mut self, other: Fragment) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Lines pushed from here on belong to the scrolling body
    pub fn mark_body(&mut self) {
        self.body_start = self.lines.len();
    }

    /// Lines pushed from here on are pinned below the body
    pub fn mark_footer(&mut self) {
        self.footer_start = Some(self.lines.len());
    }

    pub fn body_range(&self) -> Range<usize> {
        let end = self.footer_start.unwrap_or(self.lines.len());
        self.body_start.min(end)..end
    }

    /// Rows of the body that are highlighted, as a range into `lines`
    pub fn highlighted_rows(&self) -> Option<Range<usize>> {
        let body = self.body_range();
        let is_highlight = |index: &usize| self.lines[*index].tone == Tone::Highlight;
        let first = body.clone().find(is_highlight)?;
        let last = body.rev().find(is_highlight)?;
        Some(first..last + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of the fragment, one line per row
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Re-tone every line, e.g. to mark a highlighted card
    pub fn with_tone(mut self, tone: Tone) -> Self {
        for line in &mut self.lines {
            line.tone = tone;
        }
        self
    }
}

/// Shared "something on screen changed" flag
///
/// Views raise it from their setters when a value actually changes; the
/// controller takes it after each dispatch to decide whether to redraw.
#[derive(Debug, Clone, Default)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl RedrawFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.0.set(true);
    }

    pub fn is_requested(&self) -> bool {
        self.0.get()
    }

    /// Return the flag and clear it
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Assign `value` to `slot`, raising `redraw` only when it differs
pub fn update<T: PartialEq>(slot: &mut T, value: T, redraw: &RedrawFlag) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    redraw.request();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_range_should_exclude_pinned_lines() {
        let mut fragment = Fragment::new();
        fragment.push("title", Tone::Title);
        fragment.mark_body();
        fragment.push("one", Tone::Plain);
        fragment.push("two", Tone::Highlight);
        fragment.push("three", Tone::Plain);
        fragment.mark_footer();
        fragment.push("[ Checkout ]", Tone::Button);

        assert_eq!(fragment.body_range(), 1..4);
        assert_eq!(fragment.highlighted_rows(), Some(2..3));
        assert_eq!(Fragment::new().highlighted_rows(), None);
    }

    #[test]
    fn update_should_only_request_redraw_on_change() {
        let redraw = RedrawFlag::new();
        let mut counter = 3;

        assert!(!update(&mut counter, 3, &redraw));
        assert!(!redraw.is_requested());

        assert!(update(&mut counter, 4, &redraw));
        assert_eq!(counter, 4);
        assert!(redraw.take());
        assert!(!redraw.is_requested());
    }

    #[test]
    fn fragment_text_should_join_lines() {
        let mut fragment = Fragment::new();
        fragment.push("one", Tone::Title);
        fragment.blank();
        fragment.push("two", Tone::Muted);

        assert_eq!(fragment.text(), "one\n\ntwo");
        assert_eq!(fragment.lines().len(), 3);
    }

    #[test]
    fn with_tone_should_restyle_all_lines() {
        let mut fragment = Fragment::new();
        fragment.push("a", Tone::Plain);
        fragment.push("b", Tone::Muted);

        let fragment = fragment.with_tone(Tone::Highlight);

        assert!(fragment.lines().iter().all(|l| l.tone == Tone::Highlight));
    }
}
