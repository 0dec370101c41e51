//! # Basket Model
//!
//! Ordered list of products picked for purchase. The total is always derived
//! from the current list, so it cannot drift from the items it describes.

use super::product::{Product, ProductId};
use crate::storefront::events::{EventEmitter, ModelEvent};

/// Products selected for purchase
#[derive(Debug, Clone)]
pub struct BasketModel {
    items: Vec<Product>,
    events: EventEmitter,
}

impl BasketModel {
    pub fn new(events: EventEmitter) -> Self {
        Self {
            items: Vec::new(),
            events,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices; items without a price count as zero
    pub fn total(&self) -> u64 {
        self.items.iter().map(Product::price_or_zero).sum()
    }

    pub fn item_ids(&self) -> Vec<ProductId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    pub fn is_in_basket(&self, item: &Product) -> bool {
        self.items.iter().any(|entry| entry.id == item.id)
    }

    pub fn add_to_basket(&mut self, item: &Product) {
        if !item.is_purchasable() {
            tracing::warn!("Adding product '{}' without a price to the basket", item.id);
        }
        let mut entry = item.clone();
        entry.selected = true;
        self.items.push(entry);
        self.notify();
    }

    /// Remove every entry of the given product
    pub fn delete_from_basket(&mut self, item: &Product) {
        self.items.retain(|entry| entry.id != item.id);
        self.notify();
    }

    pub fn clear_basket(&mut self) {
        self.items.clear();
        self.notify();
    }

    fn notify(&self) {
        self.events.emit(ModelEvent::BasketChanged {
            items: self.items.clone(),
            total: self.total(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::events::StoreEvent;
    use crate::storefront::models::product::fixtures::product;

    fn last_basket_event(emitter: &EventEmitter) -> Option<(usize, u64)> {
        let mut last = None;
        while let Some(event) = emitter.take_next() {
            if let StoreEvent::Model(ModelEvent::BasketChanged { items, total }) = event {
                last = Some((items.len(), total));
            }
        }
        last
    }

    #[test]
    fn add_to_basket_should_increase_total_and_emit() {
        let emitter = EventEmitter::new();
        let mut basket = BasketModel::new(emitter.clone());
        let a = product("a", Some(750));

        basket.add_to_basket(&a);

        assert!(basket.is_in_basket(&a));
        assert_eq!(basket.total(), 750);
        assert_eq!(last_basket_event(&emitter), Some((1, 750)));
    }

    #[test]
    fn delete_from_basket_should_remove_membership() {
        let emitter = EventEmitter::new();
        let mut basket = BasketModel::new(emitter.clone());
        let a = product("a", Some(750));
        let b = product("b", Some(1450));
        basket.add_to_basket(&a);
        basket.add_to_basket(&b);

        basket.delete_from_basket(&a);

        assert!(!basket.is_in_basket(&a));
        assert!(basket.is_in_basket(&b));
        assert_eq!(basket.total(), 1450);
        assert_eq!(last_basket_event(&emitter), Some((1, 1450)));
    }

    #[test]
    fn delete_of_priceless_item_should_not_corrupt_total() {
        let mut basket = BasketModel::new(EventEmitter::new());
        let a = product("a", Some(100));
        let free = product("free", None);
        basket.add_to_basket(&a);
        basket.add_to_basket(&free);

        assert_eq!(basket.total(), 100);
        basket.delete_from_basket(&free);
        assert_eq!(basket.total(), 100);
    }

    #[test]
    fn clear_basket_should_leave_empty_list_and_zero_total() {
        let emitter = EventEmitter::new();
        let mut basket = BasketModel::new(emitter.clone());
        basket.add_to_basket(&product("a", Some(10)));
        basket.add_to_basket(&product("b", Some(20)));

        basket.clear_basket();

        assert!(basket.is_empty());
        assert_eq!(basket.total(), 0);
        assert_eq!(last_basket_event(&emitter), Some((0, 0)));
    }

    #[test]
    fn total_should_match_sum_of_items_for_mixed_operations() {
        let mut basket = BasketModel::new(EventEmitter::new());
        let products: Vec<Product> = (0..6)
            .map(|i| product(&format!("p{i}"), if i % 3 == 0 { None } else { Some(i * 100) }))
            .collect();

        for (step, item) in products.iter().cycle().take(20).enumerate() {
            if step % 4 == 3 || basket.is_in_basket(item) {
                basket.delete_from_basket(item);
            } else {
                basket.add_to_basket(item);
            }
            let expected: u64 = basket.items().iter().filter_map(|p| p.price).sum();
            assert_eq!(basket.total(), expected, "after step {step}");
        }
    }

    #[test]
    fn item_ids_should_follow_insertion_order() {
        let mut basket = BasketModel::new(EventEmitter::new());
        basket.add_to_basket(&product("b", Some(1)));
        basket.add_to_basket(&product("a", Some(1)));

        assert_eq!(
            basket.item_ids(),
            vec![ProductId::new("b"), ProductId::new("a")]
        );
        assert!(basket.items().iter().all(|p| p.selected));
    }
}
