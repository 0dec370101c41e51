//! # Storefront
//!
//! Event-driven terminal shop.
//!
//! ```text
//! ┌──────────┐  key  ┌──────────┐ interaction ┌───────┐  event  ┌──────────┐
//! │ Terminal │──────▶│ Commands │────────────▶│ Views │────────▶│ EventBus │
//! └──────────┘       └──────────┘             └───────┘         └──────────┘
//!      ▲                                          ▲                  │
//!      │ fragments                       handlers │                  │ handlers
//!      │                                          │                  ▼
//! ┌──────────┐                                    │            ┌──────────┐
//! │ Renderer │◀───────────── Shop ────────────────┴────────────│  Models  │
//! └──────────┘                                                 └──────────┘
//! ```
//!
//! Models and views only enqueue events; the bus delivers them in order to
//! the handlers registered in `controllers::wiring`, which receive the whole
//! `Shop` by `&mut`.

pub mod commands;
pub mod context;
pub mod controllers;
pub mod events;
pub mod io;
pub mod models;
pub mod services;
pub mod views;

pub use context::Shop;
pub use controllers::AppController;
pub use io::{EventStream, RenderStream};
