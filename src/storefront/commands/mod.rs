//! # Command System
//!
//! Key events are turned into view interactions by commands. Each command
//! states which keys it is relevant for in the current context and then
//! drives the views of the shop; the views put the resulting events on the
//! bus.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::storefront::context::Shop;

pub mod app;
pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod context;
pub mod registry;

pub use app::{CloseModalCommand, CloseSuccessCommand, QuitCommand};
pub use basket::{BasketMoveCommand, BasketRemoveCommand, CheckoutCommand};
pub use catalog::{OpenBasketCommand, OpenCardCommand, PageMoveCommand, ToggleBasketCommand};
pub use checkout::{
    FormBackspaceCommand, FormFocusCommand, FormInputCommand, FormSubmitCommand,
    PaymentSelectCommand,
};
pub use context::CommandContext;
pub use registry::CommandRegistry;

/// A key binding
pub trait Command {
    /// Whether this command handles `event` in the given context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Perform the interaction; returns false when nothing happened
    fn execute(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool>;

    /// Command name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::storefront::context::Shop;
    use crate::storefront::events::{EventEmitter, StoreEvent};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    pub fn shop() -> Shop {
        Shop::new(EventEmitter::new())
    }

    pub fn drain(shop: &Shop) -> Vec<StoreEvent> {
        std::iter::from_fn(|| shop.events.take_next()).collect()
    }
}
