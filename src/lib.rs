//! # storeline - Terminal Storefront
//!
//! Browse a product catalog, fill a basket and check out from the terminal.
//!
//! ## Architecture
//!
//! Models own state and announce every change on an event bus. Views turn
//! model data into text fragments and put user interactions on the same
//! bus. The controller runs the loop that feeds keys in, dispatches events,
//! applies API results and redraws.
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Events    ┌─────────┐
//! │    Views    │─────────────▶│   EventBus   │◀─────────────│ Models  │
//! │             │◀─────────────│   handlers   │─────────────▶│         │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ keys, API results
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod storefront;

// Re-export main types for easy access
pub use storefront::*;
