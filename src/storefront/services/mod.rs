//! # Services Layer
//!
//! Access to the remote shop. `ShopApi` performs the HTTP calls;
//! `ShopService` runs them in the background and queues their results for
//! the controller.

pub mod api;
pub mod shop_service;

pub use api::{ApiError, ApiListResponse, OrderResult, ShopApi};
pub use shop_service::{ApiResponseMessage, ShopService};
