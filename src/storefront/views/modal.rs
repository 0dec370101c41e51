//! # Modal View
//!
//! Overlay container. It knows which view currently fills it and whether it
//! is visible; opening and closing are announced on the bus so the page can
//! lock and unlock itself.

use super::fragment::{update, RedrawFlag};
use crate::storefront::events::{EventEmitter, ViewEvent};

/// Which view is shown inside the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalContent {
    Preview,
    Basket,
    Order,
    Contacts,
    Success,
}

#[derive(Debug)]
pub struct ModalView {
    active: bool,
    content: Option<ModalContent>,
    events: EventEmitter,
    redraw: RedrawFlag,
}

impl ModalView {
    pub fn new(events: EventEmitter, redraw: RedrawFlag) -> Self {
        Self {
            active: false,
            content: None,
            events,
            redraw,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Content of the modal while it is visible
    pub fn content(&self) -> Option<ModalContent> {
        self.content.filter(|_| self.active)
    }

    /// Replace the content and show the modal
    pub fn render(&mut self, content: ModalContent) {
        update(&mut self.content, Some(content), &self.redraw);
        self.open();
    }

    pub fn open(&mut self) {
        update(&mut self.active, true, &self.redraw);
        self.events.emit(ViewEvent::ModalOpened);
    }

    pub fn close(&mut self) {
        update(&mut self.active, false, &self.redraw);
        self.events.emit(ViewEvent::ModalClosed);
    }
}
