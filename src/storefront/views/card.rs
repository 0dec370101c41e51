//! # Card View
//!
//! Projection of a single product. The same card is used in three places,
//! picked by its template: the catalog grid, the preview modal and the
//! basket list. Cards are rebuilt on every render, so they only keep the
//! values they were last given.

use super::fragment::{Fragment, Tone};
use crate::storefront::events::{EventEmitter, ViewEvent};
use crate::storefront::models::{CategoryTone, Product, ProductId};

pub const ADD_TO_BASKET: &str = "Add to basket";
pub const REMOVE_FROM_BASKET: &str = "Remove from basket";
pub const NOT_FOR_SALE: &str = "Not for sale";
pub const PRICELESS: &str = "Priceless";

/// Format a price the way the shop displays it
pub fn price_label(price: u64) -> String {
    format!("{price} synapses")
}

/// Where a card is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTemplate {
    Catalog,
    Preview,
    Basket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    template: CardTemplate,
    id: ProductId,
    title: String,
    description: String,
    category: String,
    tone: CategoryTone,
    image: String,
    price: String,
    button: Option<String>,
    button_enabled: bool,
    index: Option<usize>,
    selected: bool,
}

impl Card {
    /// Build a card from a product
    pub fn new(template: CardTemplate, product: &Product) -> Self {
        let mut card = Self {
            template,
            id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            tone: CategoryTone::from_category(&product.category),
            image: product.image.clone(),
            price: String::new(),
            button: None,
            button_enabled: template == CardTemplate::Preview,
            index: None,
            selected: product.selected,
        };
        card.set_price(product.price);
        card
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn template(&self) -> CardTemplate {
        self.template
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn button(&self) -> Option<&str> {
        self.button.as_deref()
    }

    pub fn is_button_enabled(&self) -> bool {
        self.button_enabled
    }

    /// Set the price text; a missing price disables purchasing
    pub fn set_price(&mut self, price: Option<u64>) {
        match price {
            Some(price) => self.price = price_label(price),
            None => {
                self.price = PRICELESS.to_string();
                if self.template == CardTemplate::Preview {
                    self.button_enabled = false;
                    self.button = Some(NOT_FOR_SALE.to_string());
                }
            }
        }
    }

    /// Set the purchase button label; ignored while purchasing is disabled
    pub fn set_button(&mut self, label: &str) {
        if self.template == CardTemplate::Preview && self.button_enabled {
            self.button = Some(label.to_string());
        }
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Forward a click to the bus; returns false when the card is inert
    pub fn click(&self, events: &EventEmitter) -> bool {
        let product_id = self.id.clone();
        match self.template {
            CardTemplate::Catalog => events.emit(ViewEvent::CardSelected { product_id }),
            CardTemplate::Preview if self.button_enabled => {
                events.emit(ViewEvent::BasketToggleRequested { product_id })
            }
            CardTemplate::Preview => return false,
            CardTemplate::Basket => events.emit(ViewEvent::BasketItemRemoveRequested { product_id }),
        }
        true
    }

    pub fn render(&self, highlighted: bool) -> Fragment {
        let fragment = match self.template {
            CardTemplate::Catalog => self.render_catalog(),
            CardTemplate::Preview => self.render_preview(),
            CardTemplate::Basket => self.render_basket(),
        };
        if highlighted {
            fragment.with_tone(Tone::Highlight)
        } else {
            fragment
        }
    }

    fn render_catalog(&self) -> Fragment {
        let mut fragment = Fragment::new();
        let marker = if self.selected { "✓" } else { " " };
        fragment.push(
            format!("{marker} [{}] {} · {}", self.category, self.title, self.price),
            Tone::Category(self.tone),
        );
        fragment
    }

    fn render_preview(&self) -> Fragment {
        let mut fragment = Fragment::new();
        fragment.push(format!("[{}]", self.category), Tone::Category(self.tone));
        fragment.push(self.title.clone(), Tone::Title);
        fragment.blank();
        for line in self.description.lines() {
            fragment.push(line, Tone::Plain);
        }
        fragment.push(format!("image: {}", self.image), Tone::Muted);
        fragment.blank();
        fragment.push(self.price.clone(), Tone::Title);
        if let Some(button) = &self.button {
            let tone = if self.button_enabled {
                Tone::Button
            } else {
                Tone::Disabled
            };
            fragment.push(format!("[ {button} ]"), tone);
        }
        fragment
    }

    fn render_basket(&self) -> Fragment {
        let mut fragment = Fragment::new();
        let index = self.index.map(|i| i.to_string()).unwrap_or_default();
        fragment.push(
            format!("{index:>3}. {} · {}  [x]", self.title, self.price),
            Tone::Plain,
        );
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::StoreEvent;
    use crate::storefront::models::product::fixtures::product;

    #[test]
    fn priceless_preview_should_disable_button() {
        let mut card = Card::new(CardTemplate::Preview, &product("free", None));

        assert_eq!(card.price(), PRICELESS);
        assert_eq!(card.button(), Some(NOT_FOR_SALE));
        assert!(!card.is_button_enabled());

        card.set_button(ADD_TO_BASKET);
        assert_eq!(card.button(), Some(NOT_FOR_SALE));
        assert!(!card.click(&EventEmitter::new()));
    }

    #[test]
    fn preview_click_should_request_basket_toggle() {
        let emitter = EventEmitter::new();
        let mut card = Card::new(CardTemplate::Preview, &product("a", Some(750)));
        card.set_button(ADD_TO_BASKET);

        assert!(card.click(&emitter));
        assert_eq!(
            emitter.take_next(),
            Some(StoreEvent::View(ViewEvent::BasketToggleRequested {
                product_id: ProductId::new("a")
            }))
        );
        assert!(card.render(false).text().contains("[ Add to basket ]"));
    }

    #[test]
    fn catalog_card_should_show_price_and_selection() {
        let mut item = product("a", Some(750));
        item.selected = true;
        let card = Card::new(CardTemplate::Catalog, &item);

        let text = card.render(false).text();
        assert!(text.starts_with('✓'));
        assert!(text.contains("750 synapses"));
    }

    #[test]
    fn basket_card_should_render_index_and_remove_on_click() {
        let emitter = EventEmitter::new();
        let mut card = Card::new(CardTemplate::Basket, &product("a", Some(10)));
        card.set_index(2);

        assert!(card.render(false).text().starts_with("  2. Product a"));
        card.click(&emitter);
        assert_eq!(
            emitter.take_next(),
            Some(StoreEvent::View(ViewEvent::BasketItemRemoveRequested {
                product_id: ProductId::new("a")
            }))
        );
    }

    #[test]
    fn highlighted_card_should_use_highlight_tone() {
        let card = Card::new(CardTemplate::Catalog, &product("a", Some(1)));
        let fragment = card.render(true);
        assert_eq!(fragment.lines()[0].tone, Tone::Highlight);
    }
}
