//! Shared helpers for the headless storefront tests

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};
use storeline::config::StoreConfig;
use storeline::io::{MockEventStream, MockRenderStream};
use storeline::AppController;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestApp = AppController<MockEventStream, MockRenderStream>;

pub const CDN: &str = "https://cdn.example.com";

pub fn product_json(id: &str, title: &str, price: Option<u64>) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("All about {title}"),
        "category": "софт-скил",
        "image": format!("/{id}.svg"),
        "price": price,
    })
}

/// Serve `items` from `GET /product`
pub async fn mount_catalog(server: &MockServer, items: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": items.len(),
            "items": items,
        })))
        .mount(server)
        .await;
}

/// Controller against `server` with the catalog loaded
pub async fn started_app(server: &MockServer) -> TestApp {
    let config = StoreConfig::new(&server.uri(), CDN).expect("valid test config");
    let mut app =
        AppController::with_io_streams(&config, MockEventStream::empty(), MockRenderStream::new())
            .expect("controller");
    app.start().expect("start");
    app.settle().await.expect("catalog loaded");
    app
}

pub fn press(app: &mut TestApp, code: KeyCode) {
    app.process_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handled");
}

pub fn type_text(app: &mut TestApp, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
