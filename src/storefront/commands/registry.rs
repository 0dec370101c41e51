//! # Command Registry
//!
//! Holds every key binding and routes a key event to the first command that
//! is relevant for it. Order of registration is the order of precedence.

use anyhow::Result;
use crossterm::event::KeyEvent;

use super::{
    BasketMoveCommand, BasketRemoveCommand, CheckoutCommand, CloseModalCommand,
    CloseSuccessCommand, Command, CommandContext, FormBackspaceCommand, FormFocusCommand,
    FormInputCommand, FormSubmitCommand, OpenBasketCommand, OpenCardCommand, PageMoveCommand,
    PaymentSelectCommand, QuitCommand, ToggleBasketCommand,
};
use crate::storefront::context::Shop;

pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with every storefront binding
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.add_command(Box::new(QuitCommand));
        self.add_command(Box::new(CloseModalCommand));

        // Page
        self.add_command(Box::new(PageMoveCommand));
        self.add_command(Box::new(OpenCardCommand));
        self.add_command(Box::new(OpenBasketCommand));

        // Modal contents
        self.add_command(Box::new(ToggleBasketCommand));
        self.add_command(Box::new(BasketMoveCommand));
        self.add_command(Box::new(BasketRemoveCommand));
        self.add_command(Box::new(CheckoutCommand));
        self.add_command(Box::new(FormFocusCommand));
        self.add_command(Box::new(PaymentSelectCommand));
        self.add_command(Box::new(FormBackspaceCommand));
        self.add_command(Box::new(FormSubmitCommand));
        self.add_command(Box::new(FormInputCommand));
        self.add_command(Box::new(CloseSuccessCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Run the first relevant command; returns whether one handled the key
    pub fn process_event(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        let context = CommandContext::from_shop(shop);
        let Some(command) = self
            .commands
            .iter()
            .find(|command| command.is_relevant(&context, &event))
        else {
            tracing::debug!("No command for key {:?} in {:?}", event.code, context.modal);
            return Ok(false);
        };

        tracing::debug!("Key {:?} handled by {}", event.code, command.name());
        command.execute(event, shop)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::commands::test_support::{ctrl, drain, key, shop};
    use crate::storefront::events::{StoreEvent, ViewEvent};
    use crate::storefront::models::OrderField;
    use crate::storefront::views::ModalContent;
    use crossterm::event::KeyCode;

    #[test]
    fn registry_should_route_to_first_relevant_command() {
        let registry = CommandRegistry::new();
        let mut shop = shop();

        assert!(registry.process_event(key(KeyCode::Char('b')), &mut shop).unwrap());
        assert_eq!(drain(&shop), vec![StoreEvent::View(ViewEvent::BasketOpened)]);
    }

    #[test]
    fn q_should_type_into_forms_instead_of_quitting() {
        let registry = CommandRegistry::new();
        let mut shop = shop();
        shop.modal.render(ModalContent::Contacts);
        drain(&shop);

        registry.process_event(key(KeyCode::Char('q')), &mut shop).unwrap();

        assert!(!shop.should_quit());
        assert_eq!(shop.contacts_form.value(OrderField::Email), "q");
    }

    #[test]
    fn ctrl_c_should_always_quit() {
        let registry = CommandRegistry::new();
        let mut shop = shop();
        shop.modal.render(ModalContent::Order);

        registry.process_event(ctrl('c'), &mut shop).unwrap();

        assert!(shop.should_quit());
    }

    #[test]
    fn unbound_key_should_not_be_handled() {
        let registry = CommandRegistry::new();
        let mut shop = shop();

        assert!(!registry.process_event(key(KeyCode::F(5)), &mut shop).unwrap());
        assert!(registry.command_count() > 10);
    }
}
