//! # Checkout Form View
//!
//! One view type serves both checkout steps. The order step has the payment
//! buttons and the address input; the contacts step has the email and phone
//! inputs. Every edit is published as a per-field change event; the form
//! itself never validates, it only shows what the order model reports.

use super::fragment::{update, Fragment, RedrawFlag, Tone};
use crate::storefront::events::{EventEmitter, FormKind, ViewEvent};
use crate::storefront::models::{OrderDraft, OrderField, PaymentMethod};

#[derive(Debug)]
pub struct OrderFormView {
    kind: FormKind,
    fields: Vec<OrderField>,
    payment: Option<PaymentMethod>,
    address: String,
    email: String,
    phone: String,
    focus: usize,
    valid: bool,
    errors: String,
    events: EventEmitter,
    redraw: RedrawFlag,
}

impl OrderFormView {
    pub fn new(kind: FormKind, events: EventEmitter, redraw: RedrawFlag) -> Self {
        let fields = match kind {
            FormKind::Order => vec![OrderField::Payment, OrderField::Address],
            FormKind::Contacts => vec![OrderField::Email, OrderField::Phone],
        };
        Self {
            kind,
            fields,
            payment: None,
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            focus: 0,
            valid: false,
            errors: String::new(),
            events,
            redraw,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Fill the inputs from a draft and reset focus and status
    pub fn render_from(&mut self, draft: &OrderDraft) {
        match self.kind {
            FormKind::Order => {
                self.set_payment(draft.payment);
                self.set_value(OrderField::Address, &draft.address);
            }
            FormKind::Contacts => {
                self.set_value(OrderField::Email, &draft.email);
                self.set_value(OrderField::Phone, &draft.phone);
            }
        }
        update(&mut self.focus, 0, &self.redraw);
        self.set_valid(false);
        self.set_errors(String::new());
    }

    pub fn payment(&self) -> Option<PaymentMethod> {
        self.payment
    }

    /// Highlight the active payment button
    pub fn set_payment(&mut self, payment: Option<PaymentMethod>) {
        update(&mut self.payment, payment, &self.redraw);
    }

    pub fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::Address => &self.address,
            OrderField::Email => &self.email,
            OrderField::Phone => &self.phone,
            _ => "",
        }
    }

    pub fn set_value(&mut self, field: OrderField, value: &str) {
        let slot = match field {
            OrderField::Address => &mut self.address,
            OrderField::Email => &mut self.email,
            OrderField::Phone => &mut self.phone,
            _ => return,
        };
        update(slot, value.to_string(), &self.redraw);
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        update(&mut self.valid, valid, &self.redraw);
    }

    pub fn errors(&self) -> &str {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: String) {
        update(&mut self.errors, errors, &self.redraw);
    }

    pub fn focused_field(&self) -> OrderField {
        self.fields[self.focus]
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus + 1) % self.fields.len();
        update(&mut self.focus, next, &self.redraw);
    }

    pub fn focus_previous(&mut self) {
        let previous = (self.focus + self.fields.len() - 1) % self.fields.len();
        update(&mut self.focus, previous, &self.redraw);
    }

    /// Press a payment button
    pub fn select_payment(&mut self, method: PaymentMethod) {
        self.set_payment(Some(method));
        self.events.emit(ViewEvent::PaymentChanged { method });
    }

    /// Press the payment button next to the current one
    pub fn cycle_payment(&mut self, step: isize) {
        let all = PaymentMethod::ALL;
        let current = self
            .payment
            .and_then(|method| all.iter().position(|m| *m == method));
        let next = match current {
            Some(index) => index.saturating_add_signed(step).min(all.len() - 1),
            None => 0,
        };
        self.select_payment(all[next]);
    }

    /// Type into the focused text input
    pub fn input_char(&mut self, ch: char) -> bool {
        let field = self.focused_field();
        if field == OrderField::Payment {
            return false;
        }
        let mut value = self.value(field).to_string();
        value.push(ch);
        self.change_field(field, value);
        true
    }

    /// Delete the last character of the focused text input
    pub fn backspace(&mut self) -> bool {
        let field = self.focused_field();
        if field == OrderField::Payment {
            return false;
        }
        let mut value = self.value(field).to_string();
        if value.pop().is_none() {
            return false;
        }
        self.change_field(field, value);
        true
    }

    /// Press the submit button; a form that is not valid stays put
    pub fn submit(&self) -> bool {
        if !self.valid {
            return false;
        }
        let event = match self.kind {
            FormKind::Order => ViewEvent::OrderSubmitted,
            FormKind::Contacts => ViewEvent::ContactsSubmitted,
        };
        self.events.emit(event);
        true
    }

    fn change_field(&mut self, field: OrderField, value: String) {
        self.set_value(field, &value);
        self.events.emit(ViewEvent::FieldChanged {
            form: self.kind,
            field,
            value,
        });
    }

    pub fn render(&self) -> Fragment {
        let mut fragment = Fragment::new();
        let focused = self.focused_field();

        match self.kind {
            FormKind::Order => {
                fragment.push("Payment method", Tone::Title);
                let buttons = PaymentMethod::ALL
                    .iter()
                    .map(|method| {
                        if self.payment == Some(*method) {
                            format!("[*{}*]", method.label())
                        } else {
                            format!("[ {} ]", method.label())
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                fragment.push(buttons, Self::input_tone(focused == OrderField::Payment));
                fragment.blank();
                self.render_input(&mut fragment, "Delivery address", OrderField::Address);
            }
            FormKind::Contacts => {
                self.render_input(&mut fragment, "Email", OrderField::Email);
                fragment.blank();
                self.render_input(&mut fragment, "Phone", OrderField::Phone);
            }
        }

        fragment.mark_footer();
        fragment.blank();
        if !self.errors.is_empty() {
            fragment.push(self.errors.clone(), Tone::Error);
        }
        let (label, tone) = match (self.kind, self.valid) {
            (FormKind::Order, true) => ("[ Next ]", Tone::Button),
            (FormKind::Order, false) => ("[ Next ]", Tone::Disabled),
            (FormKind::Contacts, true) => ("[ Pay ]", Tone::Button),
            (FormKind::Contacts, false) => ("[ Pay ]", Tone::Disabled),
        };
        fragment.push(label, tone);
        fragment.push("Tab next field · Enter submit · Esc close", Tone::Muted);
        fragment
    }

    fn render_input(&self, fragment: &mut Fragment, label: &str, field: OrderField) {
        let focused = self.focused_field() == field;
        fragment.push(label, Tone::Title);
        let cursor = if focused { "_" } else { "" };
        fragment.push(
            format!("> {}{cursor}", self.value(field)),
            Self::input_tone(focused),
        );
    }

    fn input_tone(focused: bool) -> Tone {
        if focused {
            Tone::Highlight
        } else {
            Tone::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::StoreEvent;

    fn form(kind: FormKind) -> (OrderFormView, EventEmitter) {
        let emitter = EventEmitter::new();
        (
            OrderFormView::new(kind, emitter.clone(), RedrawFlag::new()),
            emitter,
        )
    }

    fn drain(emitter: &EventEmitter) -> Vec<StoreEvent> {
        std::iter::from_fn(|| emitter.take_next()).collect()
    }

    #[test]
    fn typing_should_publish_field_change_with_full_value() {
        let (mut view, emitter) = form(FormKind::Order);
        view.focus_next();

        view.input_char('a');
        view.input_char('b');

        let events = drain(&emitter);
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            StoreEvent::View(ViewEvent::FieldChanged {
                form: FormKind::Order,
                field: OrderField::Address,
                value: "ab".to_string(),
            })
        );
        assert_eq!(events[1].name(), "order.address:change");
        assert_eq!(view.value(OrderField::Address), "ab");
    }

    #[test]
    fn typing_on_payment_row_should_be_ignored() {
        let (mut view, emitter) = form(FormKind::Order);

        assert!(!view.input_char('x'));
        assert!(!view.backspace());
        assert_eq!(emitter.pending(), 0);
    }

    #[test]
    fn backspace_on_empty_input_should_not_publish() {
        let (mut view, emitter) = form(FormKind::Contacts);

        assert!(!view.backspace());
        assert!(view.input_char('1'));
        assert!(view.backspace());

        let events = drain(&emitter);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].name(), "contacts.email:change");
    }

    #[test]
    fn cycle_payment_should_select_first_then_move() {
        let (mut view, emitter) = form(FormKind::Order);

        view.cycle_payment(1);
        assert_eq!(view.payment(), Some(PaymentMethod::Online));
        view.cycle_payment(1);
        assert_eq!(view.payment(), Some(PaymentMethod::Cash));
        view.cycle_payment(1);
        assert_eq!(view.payment(), Some(PaymentMethod::Cash));

        assert_eq!(
            drain(&emitter).last(),
            Some(&StoreEvent::View(ViewEvent::PaymentChanged {
                method: PaymentMethod::Cash
            }))
        );
    }

    #[test]
    fn submit_should_respect_validity() {
        let (mut view, emitter) = form(FormKind::Contacts);

        assert!(!view.submit());
        view.set_valid(true);
        assert!(view.submit());

        assert_eq!(
            drain(&emitter),
            vec![StoreEvent::View(ViewEvent::ContactsSubmitted)]
        );
    }

    #[test]
    fn render_from_should_fill_inputs_and_reset_status() {
        let (mut view, _) = form(FormKind::Contacts);
        view.set_valid(true);
        view.set_errors("old".to_string());
        view.focus_next();
        let draft = OrderDraft {
            email: "a@b.co".to_string(),
            ..OrderDraft::default()
        };

        view.render_from(&draft);

        assert_eq!(view.value(OrderField::Email), "a@b.co");
        assert_eq!(view.focused_field(), OrderField::Email);
        assert!(!view.is_valid());
        assert!(view.errors().is_empty());
    }

    #[test]
    fn render_should_show_errors_and_buttons() {
        let (mut view, _) = form(FormKind::Order);
        view.set_payment(Some(PaymentMethod::Cash));
        view.set_errors("Enter a delivery address".to_string());

        let text = view.render().text();
        assert!(text.contains("[*On delivery*]"));
        assert!(text.contains("Enter a delivery address"));
        assert!(text.contains("[ Next ]"));
    }
}
