//! # Basket View

use super::card::{price_label, Card};
use super::fragment::{update, Fragment, RedrawFlag, Tone};
use crate::storefront::events::{EventEmitter, ViewEvent};

pub const BASKET_EMPTY: &str = "Basket is empty";

#[derive(Debug)]
pub struct BasketView {
    items: Vec<Card>,
    price: String,
    button_enabled: bool,
    highlighted: usize,
    events: EventEmitter,
    redraw: RedrawFlag,
}

impl BasketView {
    pub fn new(events: EventEmitter, redraw: RedrawFlag) -> Self {
        Self {
            items: Vec::new(),
            price: price_label(0),
            button_enabled: false,
            highlighted: 0,
            events,
            redraw,
        }
    }

    pub fn items(&self) -> &[Card] {
        &self.items
    }

    /// Show the basket lines; an empty list disables checkout
    pub fn set_items(&mut self, items: Vec<Card>) {
        let has_items = !items.is_empty();
        if update(&mut self.items, items, &self.redraw) {
            self.highlighted = self.highlighted.min(self.items.len().saturating_sub(1));
        }
        self.toggle_button(has_items);
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn set_price(&mut self, total: u64) {
        update(&mut self.price, price_label(total), &self.redraw);
    }

    /// Number the lines starting from 1
    pub fn set_indexes(&mut self) {
        for (index, card) in self.items.iter_mut().enumerate() {
            card.set_index(index + 1);
        }
        self.redraw.request();
    }

    pub fn is_button_enabled(&self) -> bool {
        self.button_enabled
    }

    pub fn toggle_button(&mut self, enabled: bool) {
        update(&mut self.button_enabled, enabled, &self.redraw);
    }

    pub fn move_highlight(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let target = self
            .highlighted
            .saturating_add_signed(delta)
            .min(self.items.len() - 1);
        update(&mut self.highlighted, target, &self.redraw);
    }

    /// Press the delete button of the highlighted line
    pub fn remove_highlighted(&self) -> bool {
        match self.items.get(self.highlighted) {
            Some(card) => card.click(&self.events),
            None => false,
        }
    }

    /// Press the checkout button
    pub fn checkout(&self) -> bool {
        if !self.button_enabled {
            return false;
        }
        self.events.emit(ViewEvent::OrderOpened);
        true
    }

    pub fn render(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.push("Basket", Tone::Title);
        fragment.blank();
        fragment.mark_body();

        if self.items.is_empty() {
            fragment.push(BASKET_EMPTY, Tone::Muted);
        }
        for (index, card) in self.items.iter().enumerate() {
            fragment.append(card.render(index == self.highlighted));
        }

        fragment.mark_footer();
        fragment.blank();
        fragment.push(self.price.clone(), Tone::Title);
        let tone = if self.button_enabled {
            Tone::Button
        } else {
            Tone::Disabled
        };
        fragment.push("[ Checkout ]", tone);
        fragment.push("d remove · Enter checkout · Esc close", Tone::Muted);
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::StoreEvent;
    use crate::storefront::models::product::fixtures::product;
    use crate::storefront::views::card::CardTemplate;

    fn cards(count: usize) -> Vec<Card> {
        (0..count)
            .map(|i| Card::new(CardTemplate::Basket, &product(&format!("p{i}"), Some(100))))
            .collect()
    }

    #[test]
    fn empty_basket_should_disable_checkout() {
        let emitter = EventEmitter::new();
        let mut view = BasketView::new(emitter.clone(), RedrawFlag::new());

        view.set_items(Vec::new());

        assert!(!view.is_button_enabled());
        assert!(!view.checkout());
        assert_eq!(emitter.pending(), 0);
        assert!(view.render().text().contains(BASKET_EMPTY));
    }

    #[test]
    fn filled_basket_should_number_lines_and_allow_checkout() {
        let emitter = EventEmitter::new();
        let mut view = BasketView::new(emitter.clone(), RedrawFlag::new());

        view.set_items(cards(2));
        view.set_indexes();
        view.set_price(200);

        let text = view.render().text();
        assert!(text.contains("  1. Product p0"));
        assert!(text.contains("  2. Product p1"));
        assert!(text.contains("200 synapses"));

        assert!(view.checkout());
        assert_eq!(
            emitter.take_next(),
            Some(StoreEvent::View(ViewEvent::OrderOpened))
        );
    }

    #[test]
    fn highlight_should_follow_shrinking_list() {
        let mut view = BasketView::new(EventEmitter::new(), RedrawFlag::new());
        view.set_items(cards(3));
        view.move_highlight(2);

        view.set_items(cards(1));

        assert!(view.remove_highlighted());
    }
}
