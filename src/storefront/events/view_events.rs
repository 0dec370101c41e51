//! # View Events
//!
//! Events published by views when the user interacts with them.

use super::types::{FormKind, Topic};
use crate::storefront::models::{OrderField, PaymentMethod, ProductId};

/// User-originated events forwarded by views
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// A catalog card was chosen for preview
    CardSelected { product_id: ProductId },

    /// The preview card's purchase button was pressed
    BasketToggleRequested { product_id: ProductId },

    /// The delete button of a basket line was pressed
    BasketItemRemoveRequested { product_id: ProductId },

    /// The basket icon on the page was pressed
    BasketOpened,

    /// Checkout was started from the basket
    OrderOpened,

    /// A payment method button was pressed on the order form
    PaymentChanged { method: PaymentMethod },

    /// A text input of a checkout form changed
    FieldChanged {
        form: FormKind,
        field: OrderField,
        value: String,
    },

    /// The order form was submitted
    OrderSubmitted,

    /// The contacts form was submitted
    ContactsSubmitted,

    /// The modal became visible
    ModalOpened,

    /// The modal was dismissed
    ModalClosed,
}

impl ViewEvent {
    pub fn topic(&self) -> Topic {
        match self {
            ViewEvent::CardSelected { .. } => Topic::CardSelected,
            ViewEvent::BasketToggleRequested { .. } => Topic::BasketToggleRequested,
            ViewEvent::BasketItemRemoveRequested { .. } => Topic::BasketItemRemoveRequested,
            ViewEvent::BasketOpened => Topic::BasketOpened,
            ViewEvent::OrderOpened => Topic::OrderOpened,
            ViewEvent::PaymentChanged { .. } => Topic::PaymentChanged,
            ViewEvent::FieldChanged { .. } => Topic::FieldChanged,
            ViewEvent::OrderSubmitted => Topic::OrderSubmitted,
            ViewEvent::ContactsSubmitted => Topic::ContactsSubmitted,
            ViewEvent::ModalOpened => Topic::ModalOpened,
            ViewEvent::ModalClosed => Topic::ModalClosed,
        }
    }

    /// Full event name; field changes get a per-field name such as
    /// `order.address:change`
    pub fn name(&self) -> String {
        match self {
            ViewEvent::FieldChanged { form, field, .. } => {
                format!("{}.{}:change", form.prefix(), field.name())
            }
            other => other.topic().name().to_string(),
        }
    }
}
