//! # Order Model
//!
//! Holds the checkout draft and validates it in two independent tracks:
//! payment + address for the first step, email + phone for the second.
//! Every validation pass recomputes the error map of its track and emits it,
//! whether or not the track is valid.

use super::product::ProductId;
use crate::storefront::events::{EventEmitter, ModelEvent};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// At least four comma-separated parts, e.g. "Индекс, город, улица, дом"
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[а-яА-ЯёЁ0-9\S .-]+,){3,}[а-яА-ЯёЁ0-9\S .-]+$")
        .expect("address pattern must compile")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|.(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern must compile")
});

/// Optional country prefix, then 3-3-2-2 digit groups with flexible separators
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[0-9]?[\s.]?[(]?[0-9]{3}[)]?[\s.]?[0-9]{3}[-\s.]?[0-9]{2}[-\s.]?[0-9]{2}$")
        .expect("phone pattern must compile")
});

pub const PAYMENT_REQUIRED: &str = "Select a payment method";
pub const ADDRESS_REQUIRED: &str = "Enter a delivery address";
pub const ADDRESS_INVALID: &str =
    "Enter a real address, e.g. \"Postcode, city, street, house, building, flat\"";
pub const EMAIL_REQUIRED: &str = "Enter an email";
pub const EMAIL_INVALID: &str = "Invalid email address";
pub const PHONE_REQUIRED: &str = "Enter a phone number";
pub const PHONE_INVALID: &str = "Invalid phone number format";

/// How the customer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Online,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Online, PaymentMethod::Cash];

    /// Resolve a payment button name; `card` is the button for online payment
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "online" | "card" => Some(PaymentMethod::Online),
            "cash" => Some(PaymentMethod::Cash),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Online => "Online",
            PaymentMethod::Cash => "On delivery",
        }
    }
}

/// Field names of the order draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderField {
    Payment,
    Email,
    Phone,
    Address,
    Total,
    Items,
}

impl OrderField {
    pub fn name(&self) -> &'static str {
        match self {
            OrderField::Payment => "payment",
            OrderField::Email => "email",
            OrderField::Phone => "phone",
            OrderField::Address => "address",
            OrderField::Total => "total",
            OrderField::Items => "items",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sparse field -> message map produced by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<OrderField, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: OrderField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: OrderField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: OrderField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages of the given fields, in the given order, joined with "; "
    pub fn joined(&self, fields: &[OrderField]) -> String {
        fields
            .iter()
            .filter_map(|field| self.get(*field))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// The order being assembled during checkout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    pub payment: Option<PaymentMethod>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<ProductId>,
}

/// Checkout draft plus the errors of the last validation pass
#[derive(Debug, Clone)]
pub struct OrderModel {
    order: OrderDraft,
    form_errors: FormErrors,
    events: EventEmitter,
}

impl OrderModel {
    pub fn new(events: EventEmitter) -> Self {
        Self {
            order: OrderDraft::default(),
            form_errors: FormErrors::new(),
            events,
        }
    }

    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn set_total(&mut self, total: u64) {
        self.order.total = total;
    }

    pub fn set_items(&mut self, items: Vec<ProductId>) {
        self.order.items = items;
    }

    /// Record the payment method and re-validate the address track
    pub fn set_payment(&mut self, method: PaymentMethod) -> bool {
        self.order.payment = Some(method);
        self.validate_order_address_and_payment()
    }

    /// Update the address (other fields are ignored) and re-validate
    pub fn set_order_address(&mut self, field: OrderField, value: &str) {
        if field == OrderField::Address {
            self.order.address = value.to_string();
        }

        if self.validate_order_address_and_payment() {
            self.events.emit(ModelEvent::OrderReady {
                order: self.order.clone(),
            });
        }
    }

    /// Payment first, then address presence, then address format; only the
    /// first failing rule is reported
    pub fn validate_order_address_and_payment(&mut self) -> bool {
        let mut errors = FormErrors::new();

        if self.order.payment.is_none() {
            errors.insert(OrderField::Payment, PAYMENT_REQUIRED);
        } else if self.order.address.is_empty() {
            errors.insert(OrderField::Address, ADDRESS_REQUIRED);
        } else if !ADDRESS_PATTERN.is_match(&self.order.address) {
            errors.insert(OrderField::Address, ADDRESS_INVALID);
        }

        let valid = errors.is_empty();
        self.form_errors = errors;
        self.events.emit(ModelEvent::AddressErrorsChanged {
            errors: self.form_errors.clone(),
        });
        valid
    }

    /// Update email or phone (other fields are ignored) and re-validate
    pub fn set_order_contacts(&mut self, field: OrderField, value: &str) {
        match field {
            OrderField::Email => self.order.email = value.to_string(),
            OrderField::Phone => self.order.phone = value.to_string(),
            _ => {}
        }

        if self.validate_contacts() {
            self.events.emit(ModelEvent::OrderReady {
                order: self.order.clone(),
            });
        }
    }

    pub fn validate_contacts(&mut self) -> bool {
        let mut errors = FormErrors::new();

        if self.order.email.is_empty() {
            errors.insert(OrderField::Email, EMAIL_REQUIRED);
        } else if !EMAIL_PATTERN.is_match(&self.order.email) {
            errors.insert(OrderField::Email, EMAIL_INVALID);
        }

        if self.order.phone.is_empty() {
            errors.insert(OrderField::Phone, PHONE_REQUIRED);
        } else if !PHONE_PATTERN.is_match(&self.order.phone) {
            errors.insert(OrderField::Phone, PHONE_INVALID);
        }

        let valid = errors.is_empty();
        self.form_errors = errors;
        self.events.emit(ModelEvent::ContactErrorsChanged {
            errors: self.form_errors.clone(),
        });
        valid
    }

    /// Forget everything entered for the previous order
    pub fn reset(&mut self) {
        self.order = OrderDraft::default();
        self.form_errors = FormErrors::new();
    }
}
