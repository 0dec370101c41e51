//! # Command Context
//!
//! Read-only snapshot of the shop state that commands use to decide whether
//! a key belongs to them.

use crate::storefront::context::Shop;
use crate::storefront::events::FormKind;
use crate::storefront::models::OrderField;
use crate::storefront::views::ModalContent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// What the modal shows, `None` while the page has focus
    pub modal: Option<ModalContent>,
    pub page_locked: bool,
    /// Focused input of the checkout step on screen, if any
    pub focused_field: Option<OrderField>,
}

impl CommandContext {
    pub fn from_shop(shop: &Shop) -> Self {
        let modal = shop.modal.content();
        let focused_field = match modal {
            Some(ModalContent::Order) => Some(shop.form(FormKind::Order).focused_field()),
            Some(ModalContent::Contacts) => Some(shop.form(FormKind::Contacts).focused_field()),
            _ => None,
        };
        Self {
            modal,
            page_locked: shop.page.is_locked(),
            focused_field,
        }
    }

    /// The page is in front and accepts navigation
    pub fn on_page(&self) -> bool {
        self.modal.is_none() && !self.page_locked
    }

    pub fn showing(&self, content: ModalContent) -> bool {
        self.modal == Some(content)
    }

    /// Checkout step currently on screen
    pub fn checkout_form(&self) -> Option<FormKind> {
        match self.modal {
            Some(ModalContent::Order) => Some(FormKind::Order),
            Some(ModalContent::Contacts) => Some(FormKind::Contacts),
            _ => None,
        }
    }
}
