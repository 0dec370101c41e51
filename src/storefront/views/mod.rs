//! # View Layer
//!
//! Views project model data into fragments and forward user interactions to
//! the event bus. The terminal renderer composes their fragments into the
//! screen.

pub mod basket_view;
pub mod card;
pub mod fragment;
pub mod modal;
pub mod order_form;
pub mod page;
pub mod success;
pub mod terminal_renderer;

pub use basket_view::BasketView;
pub use card::{Card, CardTemplate};
pub use fragment::{Fragment, Line, RedrawFlag, Tone};
pub use modal::{ModalContent, ModalView};
pub use order_form::OrderFormView;
pub use page::PageView;
pub use success::SuccessView;
pub use terminal_renderer::TerminalRenderer;
