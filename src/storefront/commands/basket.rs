//! # Basket Commands

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext};
use crate::storefront::context::Shop;
use crate::storefront::views::ModalContent;

/// Move the basket highlight
pub struct BasketMoveCommand;

impl Command for BasketMoveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.showing(ModalContent::Basket)
            && matches!(
                event.code,
                KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j')
            )
    }

    fn execute(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        let delta = match event.code {
            KeyCode::Up | KeyCode::Char('k') => -1,
            _ => 1,
        };
        shop.basket_view.move_highlight(delta);
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "BasketMove"
    }
}

/// `d` or Delete removes the highlighted line
pub struct BasketRemoveCommand;

impl Command for BasketRemoveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.showing(ModalContent::Basket)
            && matches!(event.code, KeyCode::Char('d') | KeyCode::Delete)
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        Ok(shop.basket_view.remove_highlighted())
    }

    fn name(&self) -> &'static str {
        "BasketRemove"
    }
}

/// Enter in the basket starts checkout
pub struct CheckoutCommand;

impl Command for CheckoutCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.showing(ModalContent::Basket) && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        Ok(shop.basket_view.checkout())
    }

    fn name(&self) -> &'static str {
        "Checkout"
    }
}
