//! # Application Control Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext};
use crate::storefront::context::Shop;
use crate::storefront::views::ModalContent;

/// Quit with `q` on the page or Ctrl+C anywhere
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        let ctrl_c = event.code == KeyCode::Char('c')
            && event.modifiers.contains(KeyModifiers::CONTROL);
        let q = event.code == KeyCode::Char('q') && context.on_page();
        ctrl_c || q
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        shop.request_quit();
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

/// Esc closes whatever the modal shows
pub struct CloseModalCommand;

impl Command for CloseModalCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        event.code == KeyCode::Esc && context.modal.is_some()
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        shop.modal.close();
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "CloseModal"
    }
}

/// Enter on the confirmation returns to the catalog
pub struct CloseSuccessCommand;

impl Command for CloseSuccessCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        event.code == KeyCode::Enter && context.showing(ModalContent::Success)
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        shop.modal.close();
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "CloseSuccess"
    }
}
