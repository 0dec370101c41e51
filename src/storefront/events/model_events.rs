//! # Model Events
//!
//! Events emitted when data models change state.
//! These events notify the views of data changes for reactive updates.

use super::types::Topic;
use crate::storefront::models::{FormErrors, OrderDraft, Product};
use crate::storefront::services::OrderResult;

/// Events emitted when models change
#[derive(Debug, Clone, PartialEq)]
pub enum ModelEvent {
    /// Catalog list was replaced
    ItemsChanged { items: Vec<Product> },

    /// Product shown in the preview changed
    PreviewChanged { product: Product },

    /// Basket contents changed
    BasketChanged { items: Vec<Product>, total: u64 },

    /// One of the checkout steps validated successfully
    OrderReady { order: OrderDraft },

    /// Address/payment track was re-validated
    AddressErrorsChanged { errors: FormErrors },

    /// Email/phone track was re-validated
    ContactErrorsChanged { errors: FormErrors },

    /// The shop API accepted the order
    OrderPlaced { result: OrderResult },
}

impl ModelEvent {
    pub fn topic(&self) -> Topic {
        match self {
            ModelEvent::ItemsChanged { .. } => Topic::ItemsChanged,
            ModelEvent::PreviewChanged { .. } => Topic::PreviewChanged,
            ModelEvent::BasketChanged { .. } => Topic::BasketChanged,
            ModelEvent::OrderReady { .. } => Topic::OrderReady,
            ModelEvent::AddressErrorsChanged { .. } => Topic::AddressErrorsChanged,
            ModelEvent::ContactErrorsChanged { .. } => Topic::ContactErrorsChanged,
            ModelEvent::OrderPlaced { .. } => Topic::OrderPlaced,
        }
    }
}
