//! # Checkout Form Commands
//!
//! Keys for the two checkout steps. Both steps share one view type, so the
//! commands only pick the form that is on screen and forward to it.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext};
use crate::storefront::context::Shop;
use crate::storefront::events::FormKind;
use crate::storefront::models::OrderField;
use crate::storefront::views::{ModalContent, OrderFormView};

fn on_screen_form(shop: &mut Shop) -> Option<&mut OrderFormView> {
    match shop.modal.content()? {
        ModalContent::Order => Some(shop.form_mut(FormKind::Order)),
        ModalContent::Contacts => Some(shop.form_mut(FormKind::Contacts)),
        _ => None,
    }
}

/// Tab / Shift+Tab move between inputs
pub struct FormFocusCommand;

impl Command for FormFocusCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.checkout_form().is_some() && matches!(event.code, KeyCode::Tab | KeyCode::BackTab)
    }

    fn execute(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        let Some(form) = on_screen_form(shop) else {
            return Ok(false);
        };
        if event.code == KeyCode::BackTab {
            form.focus_previous();
        } else {
            form.focus_next();
        }
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "FormFocus"
    }
}

/// Left / Right press the neighbouring payment button
pub struct PaymentSelectCommand;

impl Command for PaymentSelectCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.checkout_form() == Some(FormKind::Order)
            && matches!(event.code, KeyCode::Left | KeyCode::Right)
    }

    fn execute(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        let step = if event.code == KeyCode::Left { -1 } else { 1 };
        shop.order_form.cycle_payment(step);
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "PaymentSelect"
    }
}

/// Printable characters go into the focused text input
pub struct FormInputCommand;

impl Command for FormInputCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        let printable = matches!(event.code, KeyCode::Char(_))
            && !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        printable
            && context.checkout_form().is_some()
            && context.focused_field != Some(OrderField::Payment)
    }

    fn execute(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        let KeyCode::Char(ch) = event.code else {
            return Ok(false);
        };
        Ok(on_screen_form(shop).is_some_and(|form| form.input_char(ch)))
    }

    fn name(&self) -> &'static str {
        "FormInput"
    }
}

pub struct FormBackspaceCommand;

impl Command for FormBackspaceCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.checkout_form().is_some() && event.code == KeyCode::Backspace
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        Ok(on_screen_form(shop).is_some_and(|form| form.backspace()))
    }

    fn name(&self) -> &'static str {
        "FormBackspace"
    }
}

/// Enter presses Next / Pay
pub struct FormSubmitCommand;

impl Command for FormSubmitCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.checkout_form().is_some() && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        Ok(on_screen_form(shop).is_some_and(|form| form.submit()))
    }

    fn name(&self) -> &'static str {
        "FormSubmit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::commands::test_support::{ctrl, drain, key, shop};
    use crate::storefront::events::{StoreEvent, ViewEvent};
    use crate::storefront::models::PaymentMethod;

    fn shop_showing(content: ModalContent) -> Shop {
        let mut shop = shop();
        shop.modal.render(content);
        drain(&shop);
        shop
    }

    #[test]
    fn typing_should_be_ignored_on_payment_row() {
        let shop = shop_showing(ModalContent::Order);
        let context = CommandContext::from_shop(&shop);

        assert_eq!(context.focused_field, Some(OrderField::Payment));
        assert!(!FormInputCommand.is_relevant(&context, &key(KeyCode::Char('x'))));
        assert!(PaymentSelectCommand.is_relevant(&context, &key(KeyCode::Right)));
    }

    #[test]
    fn typing_should_edit_focused_input() {
        let mut shop = shop_showing(ModalContent::Order);
        FormFocusCommand.execute(key(KeyCode::Tab), &mut shop).unwrap();
        let context = CommandContext::from_shop(&shop);
        assert!(FormInputCommand.is_relevant(&context, &key(KeyCode::Char('M'))));
        assert!(!FormInputCommand.is_relevant(&context, &ctrl('u')));

        FormInputCommand.execute(key(KeyCode::Char('M')), &mut shop).unwrap();
        FormBackspaceCommand.execute(key(KeyCode::Backspace), &mut shop).unwrap();

        let names: Vec<String> = drain(&shop).iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["order.address:change", "order.address:change"]);
        assert_eq!(shop.order_form.value(OrderField::Address), "");
    }

    #[test]
    fn right_should_pick_payment() {
        let mut shop = shop_showing(ModalContent::Order);

        PaymentSelectCommand.execute(key(KeyCode::Right), &mut shop).unwrap();

        assert_eq!(
            drain(&shop),
            vec![StoreEvent::View(ViewEvent::PaymentChanged {
                method: PaymentMethod::Online
            })]
        );
    }

    #[test]
    fn contacts_step_should_route_to_contacts_form() {
        let mut shop = shop_showing(ModalContent::Contacts);
        let context = CommandContext::from_shop(&shop);
        assert!(!PaymentSelectCommand.is_relevant(&context, &key(KeyCode::Left)));

        FormInputCommand.execute(key(KeyCode::Char('a')), &mut shop).unwrap();

        assert_eq!(shop.contacts_form.value(OrderField::Email), "a");
        assert_eq!(shop.order_form.value(OrderField::Address), "");
    }

    #[test]
    fn submit_should_wait_for_valid_form() {
        let mut shop = shop_showing(ModalContent::Contacts);

        assert!(!FormSubmitCommand.execute(key(KeyCode::Enter), &mut shop).unwrap());
        shop.contacts_form.set_valid(true);
        assert!(FormSubmitCommand.execute(key(KeyCode::Enter), &mut shop).unwrap());

        assert_eq!(drain(&shop), vec![StoreEvent::View(ViewEvent::ContactsSubmitted)]);
    }
}
