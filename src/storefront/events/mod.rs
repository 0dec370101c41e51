//! # Events Module
//!
//! Re-exports all event system components organized by category.

pub mod event_bus;
pub mod model_events;
pub mod types;
pub mod view_events;

pub use event_bus::{
    EventBus, EventEmitter, EventHandler, SimpleEventBus, StoreEvent, TopicMatcher,
};
pub use model_events::ModelEvent;
pub use types::{FormKind, Topic, TopicPattern};
pub use view_events::ViewEvent;
