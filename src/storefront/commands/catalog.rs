//! # Catalog Commands
//!
//! Browsing the page and the product preview.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext};
use crate::storefront::context::Shop;
use crate::storefront::views::ModalContent;

/// Move the page highlight with arrows or j/k
pub struct PageMoveCommand;

impl PageMoveCommand {
    fn delta(event: &KeyEvent) -> Option<isize> {
        match event.code {
            KeyCode::Up | KeyCode::Char('k') => Some(-1),
            KeyCode::Down | KeyCode::Char('j') => Some(1),
            _ => None,
        }
    }
}

impl Command for PageMoveCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_page() && event.modifiers.is_empty() && Self::delta(event).is_some()
    }

    fn execute(&self, event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        let Some(delta) = Self::delta(&event) else {
            return Ok(false);
        };
        shop.page.move_highlight(delta);
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "PageMove"
    }
}

/// Enter on the page opens the highlighted card
pub struct OpenCardCommand;

impl Command for OpenCardCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_page() && event.code == KeyCode::Enter
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        Ok(shop.page.select_highlighted())
    }

    fn name(&self) -> &'static str {
        "OpenCard"
    }
}

/// `b` opens the basket
pub struct OpenBasketCommand;

impl Command for OpenBasketCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.on_page()
            && event.code == KeyCode::Char('b')
            && !event.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        shop.page.open_basket();
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "OpenBasket"
    }
}

/// Enter or Space on the preview presses its basket button
pub struct ToggleBasketCommand;

impl Command for ToggleBasketCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        context.showing(ModalContent::Preview)
            && matches!(event.code, KeyCode::Enter | KeyCode::Char(' '))
    }

    fn execute(&self, _event: KeyEvent, shop: &mut Shop) -> Result<bool> {
        Ok(match &shop.preview {
            Some(card) => card.click(&shop.events),
            None => false,
        })
    }

    fn name(&self) -> &'static str {
        "ToggleBasket"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::commands::test_support::{drain, key, shop};
    use crate::storefront::events::{StoreEvent, ViewEvent};
    use crate::storefront::models::product::fixtures::product;
    use crate::storefront::models::ProductId;
    use crate::storefront::views::{Card, CardTemplate};

    fn shop_with_catalog() -> Shop {
        let mut shop = shop();
        let cards = ["a", "b"]
            .iter()
            .map(|id| Card::new(CardTemplate::Catalog, &product(id, Some(5))))
            .collect();
        shop.page.set_catalog(cards);
        shop
    }

    #[test]
    fn page_keys_should_be_ignored_while_modal_is_open() {
        let mut shop = shop_with_catalog();
        shop.modal.render(ModalContent::Basket);
        let context = CommandContext::from_shop(&shop);

        assert!(!PageMoveCommand.is_relevant(&context, &key(KeyCode::Down)));
        assert!(!OpenCardCommand.is_relevant(&context, &key(KeyCode::Enter)));
        assert!(!OpenBasketCommand.is_relevant(&context, &key(KeyCode::Char('b'))));
    }

    #[test]
    fn enter_should_select_highlighted_card() {
        let mut shop = shop_with_catalog();

        PageMoveCommand.execute(key(KeyCode::Char('j')), &mut shop).unwrap();
        assert!(OpenCardCommand.execute(key(KeyCode::Enter), &mut shop).unwrap());

        assert_eq!(
            drain(&shop),
            vec![StoreEvent::View(ViewEvent::CardSelected {
                product_id: ProductId::new("b")
            })]
        );
    }

    #[test]
    fn b_should_request_basket() {
        let mut shop = shop();

        OpenBasketCommand.execute(key(KeyCode::Char('b')), &mut shop).unwrap();

        assert_eq!(drain(&shop), vec![StoreEvent::View(ViewEvent::BasketOpened)]);
    }

    #[test]
    fn toggle_should_press_preview_button_when_purchasable() {
        let mut shop = shop();
        shop.preview = Some(Card::new(CardTemplate::Preview, &product("a", Some(5))));
        shop.modal.render(ModalContent::Preview);
        drain(&shop);
        let context = CommandContext::from_shop(&shop);
        assert!(ToggleBasketCommand.is_relevant(&context, &key(KeyCode::Char(' '))));

        assert!(ToggleBasketCommand.execute(key(KeyCode::Enter), &mut shop).unwrap());
        assert_eq!(
            drain(&shop),
            vec![StoreEvent::View(ViewEvent::BasketToggleRequested {
                product_id: ProductId::new("a")
            })]
        );

        shop.preview = Some(Card::new(CardTemplate::Preview, &product("free", None)));
        assert!(!ToggleBasketCommand.execute(key(KeyCode::Enter), &mut shop).unwrap());
        assert!(drain(&shop).is_empty());
    }
}
