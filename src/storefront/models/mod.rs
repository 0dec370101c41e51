//! # Models Module
//!
//! Data models of the storefront. Each model owns its state exclusively and
//! reports every mutation through the event emitter it was built with.

pub mod basket_model;
pub mod catalog_model;
pub mod order_model;
pub mod product;

pub use basket_model::BasketModel;
pub use catalog_model::CatalogModel;
pub use order_model::{FormErrors, OrderDraft, OrderField, OrderModel, PaymentMethod};
pub use product::{CategoryTone, Product, ProductId};
