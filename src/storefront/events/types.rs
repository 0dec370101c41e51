//! # Core Event Types
//!
//! Topics used to route events on the bus, the forms that publish per-field
//! change events, and the prefix/suffix pattern used to subscribe to them.

use std::fmt;

/// Which checkout form an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// First step: payment method and delivery address
    Order,
    /// Second step: email and phone
    Contacts,
}

impl FormKind {
    /// Topic prefix used by per-field change events of this form
    pub fn prefix(&self) -> &'static str {
        match self {
            FormKind::Order => "order",
            FormKind::Contacts => "contacts",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Exact routing key of every event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    ItemsChanged,
    PreviewChanged,
    BasketChanged,
    OrderReady,
    AddressErrorsChanged,
    ContactErrorsChanged,
    OrderPlaced,
    CardSelected,
    BasketToggleRequested,
    BasketItemRemoveRequested,
    BasketOpened,
    OrderOpened,
    PaymentChanged,
    FieldChanged,
    OrderSubmitted,
    ContactsSubmitted,
    ModalOpened,
    ModalClosed,
}

impl Topic {
    /// Stable topic name used in logs and for pattern matching
    pub fn name(&self) -> &'static str {
        match self {
            Topic::ItemsChanged => "items:change",
            Topic::PreviewChanged => "preview:change",
            Topic::BasketChanged => "basket:change",
            Topic::OrderReady => "order:ready",
            Topic::AddressErrorsChanged => "formErrors:address",
            Topic::ContactErrorsChanged => "formErrors:contacts",
            Topic::OrderPlaced => "order:placed",
            Topic::CardSelected => "card:select",
            Topic::BasketToggleRequested => "card:toggle",
            Topic::BasketItemRemoveRequested => "basket:remove",
            Topic::BasketOpened => "basket:open",
            Topic::OrderOpened => "order:open",
            Topic::PaymentChanged => "order:payment:change",
            Topic::FieldChanged => "field:change",
            Topic::OrderSubmitted => "order:submit",
            Topic::ContactsSubmitted => "contacts:submit",
            Topic::ModalOpened => "modal:open",
            Topic::ModalClosed => "modal:close",
        }
    }
}

/// Prefix/suffix predicate over event names
///
/// Matches names shaped like `<prefix><anything><suffix>`, e.g. every
/// `order.<field>:change` topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPattern {
    prefix: String,
    suffix: String,
}

impl TopicPattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Pattern matching every field change of the given form
    pub fn field_changes(form: FormKind) -> Self {
        Self::new(format!("{}.", form.prefix()), ":change")
    }

    pub fn matches(&self, name: &str) -> bool {
        name.len() >= self.prefix.len() + self.suffix.len()
            && name.starts_with(&self.prefix)
            && name.ends_with(&self.suffix)
    }
}

impl fmt::Display for TopicPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}
