//! # Page View
//!
//! The main screen: header with the basket counter and the catalog list.
//! While a modal is open the page is locked and ignores navigation.

use super::card::Card;
use super::fragment::{update, Fragment, RedrawFlag, Tone};
use crate::storefront::events::{EventEmitter, ViewEvent};

#[derive(Debug)]
pub struct PageView {
    counter: usize,
    catalog: Vec<Card>,
    locked: bool,
    highlighted: usize,
    events: EventEmitter,
    redraw: RedrawFlag,
}

impl PageView {
    pub fn new(events: EventEmitter, redraw: RedrawFlag) -> Self {
        Self {
            counter: 0,
            catalog: Vec::new(),
            locked: false,
            highlighted: 0,
            events,
            redraw,
        }
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn set_counter(&mut self, counter: usize) {
        update(&mut self.counter, counter, &self.redraw);
    }

    pub fn catalog(&self) -> &[Card] {
        &self.catalog
    }

    pub fn set_catalog(&mut self, cards: Vec<Card>) {
        if update(&mut self.catalog, cards, &self.redraw) {
            let last = self.catalog.len().saturating_sub(1);
            self.highlighted = self.highlighted.min(last);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        update(&mut self.locked, locked, &self.redraw);
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Move the highlight by `delta` cards, clamped to the catalog
    pub fn move_highlight(&mut self, delta: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        let target = self.highlighted.saturating_add_signed(delta).min(last);
        update(&mut self.highlighted, target, &self.redraw);
    }

    /// Click on the highlighted card
    pub fn select_highlighted(&self) -> bool {
        match self.catalog.get(self.highlighted) {
            Some(card) => card.click(&self.events),
            None => false,
        }
    }

    /// Click on the basket icon
    pub fn open_basket(&self) {
        self.events.emit(ViewEvent::BasketOpened);
    }

    pub fn render(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.push(
            format!("storeline · basket [{}]", self.counter),
            Tone::Title,
        );
        fragment.push(
            "↑/↓ browse · Enter open · b basket · q quit",
            Tone::Muted,
        );
        fragment.blank();
        fragment.mark_body();

        if self.catalog.is_empty() {
            fragment.push("Catalog is empty", Tone::Muted);
        }
        for (index, card) in self.catalog.iter().enumerate() {
            fragment.append(card.render(!self.locked && index == self.highlighted));
        }
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::StoreEvent;
    use crate::storefront::models::product::fixtures::product;
    use crate::storefront::models::ProductId;
    use crate::storefront::views::card::CardTemplate;

    fn page_with_cards(count: usize) -> (PageView, EventEmitter, RedrawFlag) {
        let emitter = EventEmitter::new();
        let redraw = RedrawFlag::new();
        let mut page = PageView::new(emitter.clone(), redraw.clone());
        let cards = (0..count)
            .map(|i| Card::new(CardTemplate::Catalog, &product(&format!("p{i}"), Some(1))))
            .collect();
        page.set_catalog(cards);
        redraw.take();
        (page, emitter, redraw)
    }

    #[test]
    fn unchanged_counter_should_not_request_redraw() {
        let (mut page, _, redraw) = page_with_cards(0);

        page.set_counter(0);
        assert!(!redraw.is_requested());

        page.set_counter(2);
        assert!(redraw.take());
        assert!(page.render().text().contains("basket [2]"));
    }

    #[test]
    fn move_highlight_should_clamp_to_catalog() {
        let (mut page, _, _) = page_with_cards(3);

        page.move_highlight(-1);
        assert_eq!(page.highlighted(), 0);
        page.move_highlight(5);
        assert_eq!(page.highlighted(), 2);
        page.move_highlight(-1);
        assert_eq!(page.highlighted(), 1);
    }

    #[test]
    fn select_highlighted_should_publish_card_select() {
        let (mut page, emitter, _) = page_with_cards(2);
        page.move_highlight(1);

        assert!(page.select_highlighted());
        assert_eq!(
            emitter.take_next(),
            Some(StoreEvent::View(ViewEvent::CardSelected {
                product_id: ProductId::new("p1")
            }))
        );
    }

    #[test]
    fn empty_page_should_say_so() {
        let (page, _, _) = page_with_cards(0);

        assert!(!page.select_highlighted());
        assert!(page.render().text().contains("Catalog is empty"));
    }

    #[test]
    fn locked_page_should_not_highlight() {
        let (mut page, _, _) = page_with_cards(1);
        page.set_locked(true);

        let fragment = page.render();
        assert!(fragment.lines().iter().all(|l| l.tone != Tone::Highlight));
    }
}
