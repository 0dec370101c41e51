//! # Event Bus
//!
//! Central event distribution for decoupled communication between
//! models and views using the observer pattern.
//!
//! Models and views hold an [`EventEmitter`] and only ever enqueue events.
//! The [`SimpleEventBus`] owns the subscriptions and drains the queue,
//! handing every handler mutable access to the application context. Events
//! enqueued by a handler are delivered after the current event, in publish
//! order, before `publish` returns.

use super::model_events::ModelEvent;
use super::types::{Topic, TopicPattern};
use super::view_events::ViewEvent;
use anyhow::Result;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Anything that travels over the bus
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Model(ModelEvent),
    View(ViewEvent),
}

impl StoreEvent {
    pub fn topic(&self) -> Topic {
        match self {
            StoreEvent::Model(event) => event.topic(),
            StoreEvent::View(event) => event.topic(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            StoreEvent::Model(event) => event.topic().name().to_string(),
            StoreEvent::View(event) => event.name(),
        }
    }
}

impl From<ModelEvent> for StoreEvent {
    fn from(event: ModelEvent) -> Self {
        StoreEvent::Model(event)
    }
}

impl From<ViewEvent> for StoreEvent {
    fn from(event: ViewEvent) -> Self {
        StoreEvent::View(event)
    }
}

/// Cloneable handle used by models and views to enqueue events
#[derive(Debug, Clone, Default)]
pub struct EventEmitter {
    queue: Rc<RefCell<VecDeque<StoreEvent>>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event for the next dispatch pass
    pub fn emit(&self, event: impl Into<StoreEvent>) {
        self.queue.borrow_mut().push_back(event.into());
    }

    /// Pop the oldest pending event
    pub fn take_next(&self) -> Option<StoreEvent> {
        self.queue.borrow_mut().pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

/// Type alias for event handlers to reduce complexity
pub type EventHandler<C> = Box<dyn Fn(&mut C, &StoreEvent) -> Result<()>>;

/// What a subscription listens to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicMatcher {
    Exact(Topic),
    Pattern(TopicPattern),
}

impl TopicMatcher {
    fn matches(&self, event: &StoreEvent) -> bool {
        match self {
            TopicMatcher::Exact(topic) => event.topic() == *topic,
            TopicMatcher::Pattern(pattern) => pattern.matches(&event.name()),
        }
    }
}

struct Subscription<C> {
    matcher: TopicMatcher,
    handler: EventHandler<C>,
}

/// Event bus for decoupled communication between components
pub trait EventBus<C> {
    /// Subscribe to one exact topic
    fn subscribe(&mut self, topic: Topic, handler: EventHandler<C>);

    /// Subscribe to every event whose name matches the pattern
    fn subscribe_pattern(&mut self, pattern: TopicPattern, handler: EventHandler<C>);

    /// Publish an event and deliver everything it causes
    fn publish(&mut self, context: &mut C, event: StoreEvent);

    /// Deliver events that were emitted outside of a `publish` call
    fn dispatch_pending(&mut self, context: &mut C);
}

/// Simple in-memory, single-threaded event bus implementation
pub struct SimpleEventBus<C> {
    emitter: EventEmitter,
    subscriptions: Vec<Subscription<C>>,
}

impl<C> SimpleEventBus<C> {
    /// Create a bus draining the queue behind `emitter`
    pub fn new(emitter: EventEmitter) -> Self {
        Self {
            emitter,
            subscriptions: Vec::new(),
        }
    }

    pub fn emitter(&self) -> &EventEmitter {
        &self.emitter
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn deliver(&self, context: &mut C, event: &StoreEvent) {
        let mut delivered = 0usize;
        for subscription in &self.subscriptions {
            if !subscription.matcher.matches(event) {
                continue;
            }
            delivered += 1;
            if let Err(e) = (subscription.handler)(context, event) {
                tracing::warn!("Handler for '{}' failed: {:#}", event.name(), e);
            }
        }
        tracing::debug!("Delivered '{}' to {} handler(s)", event.name(), delivered);
    }
}

impl<C> EventBus<C> for SimpleEventBus<C> {
    fn subscribe(&mut self, topic: Topic, handler: EventHandler<C>) {
        self.subscriptions.push(Subscription {
            matcher: TopicMatcher::Exact(topic),
            handler,
        });
    }

    fn subscribe_pattern(&mut self, pattern: TopicPattern, handler: EventHandler<C>) {
        self.subscriptions.push(Subscription {
            matcher: TopicMatcher::Pattern(pattern),
            handler,
        });
    }

    fn publish(&mut self, context: &mut C, event: StoreEvent) {
        self.emitter.emit(event);
        self.dispatch_pending(context);
    }

    fn dispatch_pending(&mut self, context: &mut C) {
        while let Some(event) = self.emitter.take_next() {
            self.deliver(context, &event);
        }
    }
}
