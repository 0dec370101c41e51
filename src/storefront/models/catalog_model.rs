//! # Catalog Model
//!
//! Flat replace-and-notify store for the product list and the product
//! currently shown in the preview.

use super::product::{Product, ProductId};
use crate::storefront::events::{EventEmitter, ModelEvent};

/// Product list and preview selection
#[derive(Debug, Clone)]
pub struct CatalogModel {
    items: Vec<Product>,
    preview: Option<ProductId>,
    events: EventEmitter,
}

impl CatalogModel {
    pub fn new(events: EventEmitter) -> Self {
        Self {
            items: Vec::new(),
            preview: None,
            events,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Replace the full product list
    pub fn set_items(&mut self, items: Vec<Product>) {
        tracing::debug!("Catalog replaced with {} item(s)", items.len());
        self.items = items;
        self.events.emit(ModelEvent::ItemsChanged {
            items: self.items.clone(),
        });
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Currently previewed product, if it is still in the catalog
    pub fn preview(&self) -> Option<&Product> {
        self.preview.as_ref().and_then(|id| self.find(id))
    }

    /// Set the previewed product
    pub fn set_preview(&mut self, product: &Product) {
        self.preview = Some(product.id.clone());
        self.events.emit(ModelEvent::PreviewChanged {
            product: product.clone(),
        });
    }

    /// Mirror basket membership into the transient `selected` markers
    pub fn sync_selection(&mut self, selected: &[ProductId]) {
        for item in &mut self.items {
            item.selected = selected.contains(&item.id);
        }
    }
}
