//! # Controllers
//!
//! `AppController` runs the interactive storefront; `wiring` connects models
//! and views through the bus; `listing` is the non-interactive output.

pub mod app_controller;
pub mod listing;
pub mod wiring;

pub use app_controller::AppController;
pub use listing::write_catalog;
pub use wiring::subscribe_handlers;
