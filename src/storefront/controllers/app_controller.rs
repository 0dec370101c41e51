//! # Application Controller
//!
//! Owns the shop, the event bus and the I/O streams and runs the main loop:
//! keys go through the command registry, the events they cause are
//! dispatched on the bus, API results come back from the shop service, and
//! the screen is redrawn whenever a view reported a change.

use crate::config::StoreConfig;
use crate::storefront::{
    commands::CommandRegistry,
    context::Shop,
    controllers::wiring::subscribe_handlers,
    events::{EventBus, EventEmitter, ModelEvent, SimpleEventBus},
    io::{EventStream, RenderStream},
    services::{ApiResponseMessage, ShopApi, ShopService},
    views::TerminalRenderer,
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct AppController<ES: EventStream, RS: RenderStream> {
    shop: Shop,
    event_bus: SimpleEventBus<Shop>,
    command_registry: CommandRegistry,
    service: ShopService,
    view_renderer: TerminalRenderer<RS>,
    event_stream: ES,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create the controller with injected I/O streams
    pub fn with_io_streams(config: &StoreConfig, event_stream: ES, render_stream: RS) -> Result<Self> {
        let api = ShopApi::new(config.api_url(), config.cdn_url())?;

        let events = EventEmitter::new();
        let mut event_bus = SimpleEventBus::new(events.clone());
        subscribe_handlers(&mut event_bus);
        tracing::debug!(
            "Event bus ready with {} subscription(s)",
            event_bus.subscription_count()
        );

        Ok(Self {
            shop: Shop::new(events),
            event_bus,
            command_registry: CommandRegistry::new(),
            service: ShopService::new(api),
            view_renderer: TerminalRenderer::with_render_stream(render_stream)?,
            event_stream,
        })
    }

    /// Take over the terminal and start loading the catalog
    pub fn start(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.service.request_products();
        self.view_renderer.render(&self.shop)?;
        self.shop.redraw.take();
        Ok(())
    }

    /// Run until the user quits; the terminal is restored even on error
    pub async fn run(&mut self) -> Result<()> {
        self.start()?;
        let result = self.event_loop().await;
        self.view_renderer.cleanup()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.shop.should_quit() {
            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                        self.process_key_event(key_event)?;
                    }
                    Event::Resize(width, height) => {
                        self.view_renderer.update_size(width, height);
                        self.shop.redraw.request();
                    }
                    _ => {}
                }
            }

            while let Some(message) = self.service.poll_response() {
                self.apply_api_response(message);
            }
            self.render_if_needed()?;

            // Let response tasks make progress between polls
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Handle one key the way the main loop does
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);
        if let Err(e) = self
            .command_registry
            .process_event(key_event, &mut self.shop)
        {
            tracing::warn!("Key {:?} failed: {:#}", key_event.code, e);
        }
        self.dispatch();
        self.render_if_needed()
    }

    /// Apply the outcome of a background request
    pub fn apply_api_response(&mut self, message: ApiResponseMessage) {
        match message {
            ApiResponseMessage::Products(Ok(items)) => {
                self.shop.set_notice(None);
                self.shop.catalog.set_items(items);
            }
            ApiResponseMessage::Products(Err(e)) => {
                tracing::error!("Failed to load catalog: {}", e);
                self.shop
                    .set_notice(Some(format!("Could not load the catalog: {e}")));
            }
            ApiResponseMessage::OrderPlaced(Ok(result)) => {
                self.shop.finish_order();
                self.shop.set_notice(None);
                self.event_bus
                    .publish(&mut self.shop, ModelEvent::OrderPlaced { result }.into());
            }
            ApiResponseMessage::OrderPlaced(Err(e)) => {
                self.shop.finish_order();
                tracing::error!("Failed to place order: {}", e);
                self.shop.set_notice(Some(format!("Order was not placed: {e}")));
            }
        }
        self.dispatch();
    }

    /// Wait for every outstanding request and apply its result
    pub async fn settle(&mut self) -> Result<()> {
        while let Some(message) = self.service.next_response().await {
            self.apply_api_response(message);
        }
        self.render_if_needed()
    }

    /// Deliver queued events and hand queued orders to the service
    fn dispatch(&mut self) {
        self.event_bus.dispatch_pending(&mut self.shop);
        while let Some(draft) = self.shop.take_pending_order() {
            self.service.request_order(draft);
        }
    }

    fn render_if_needed(&mut self) -> Result<()> {
        if self.shop.redraw.take() {
            self.view_renderer.render(&self.shop)?;
        }
        Ok(())
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn render_stream(&self) -> &RS {
        self.view_renderer.stream()
    }

    pub fn should_quit(&self) -> bool {
        self.shop.should_quit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::io::{MockEventStream, MockRenderStream, RenderCommand};
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn controller(server: &MockServer) -> AppController<MockEventStream, MockRenderStream> {
        let config = StoreConfig::new(&server.uri(), "https://cdn.example.com").unwrap();
        AppController::with_io_streams(&config, MockEventStream::empty(), MockRenderStream::new())
            .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn start_should_load_and_render_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/product"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": 1,
                "items": [{
                    "id": "p1",
                    "title": "Mouse",
                    "description": "Wireless",
                    "category": "другое",
                    "image": "/mouse.svg",
                    "price": 750
                }]
            })))
            .mount(&server)
            .await;
        let mut app = controller(&server);

        app.start().unwrap();
        app.settle().await.unwrap();

        assert_eq!(app.shop().catalog.items()[0].image, "https://cdn.example.com/mouse.svg");
        assert_eq!(app.shop().page.catalog().len(), 1);
        assert!(app.render_stream().get_plain_text().contains("Mouse"));
        assert!(app
            .render_stream()
            .has_command(&RenderCommand::EnterAlternateScreen));
    }

    #[tokio::test]
    async fn failed_catalog_should_leave_page_empty_with_notice() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/product"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let mut app = controller(&server);

        app.start().unwrap();
        app.settle().await.unwrap();

        assert!(app.shop().catalog.items().is_empty());
        assert!(app
            .shop()
            .notice()
            .is_some_and(|notice| notice.contains("HTTP 500")));
        assert!(app.render_stream().get_plain_text().contains("Catalog is empty"));
    }

    #[tokio::test]
    async fn keys_should_open_basket_and_quit() {
        let server = MockServer::start().await;
        let mut app = controller(&server);

        app.process_key_event(key(KeyCode::Char('b'))).unwrap();
        assert!(app.shop().page.is_locked());
        assert!(app.render_stream().get_plain_text().contains("Basket is empty"));

        app.process_key_event(key(KeyCode::Esc)).unwrap();
        assert!(!app.shop().page.is_locked());

        app.process_key_event(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn run_should_restore_terminal_on_quit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/product"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "items": [] })))
            .mount(&server)
            .await;
        let config = StoreConfig::new(&server.uri(), "https://cdn.example.com").unwrap();
        let mut events = MockEventStream::empty();
        events.push_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        let stream = MockRenderStream::new();
        let handle = stream.clone();
        let mut app = AppController::with_io_streams(&config, events, stream).unwrap();

        app.run().await.unwrap();

        assert!(app.should_quit());
        assert_eq!(handle.get_commands().last(), Some(&RenderCommand::DisableRawMode));
    }
}
