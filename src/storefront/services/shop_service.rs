//! # Shop Service
//!
//! Runs the two API operations as single-shot background tasks and hands
//! their outcome back to the dispatch loop over a channel, so that every
//! continuation runs on the same thread as the rest of the application.

use super::api::{ApiError, OrderResult, ShopApi};
use crate::storefront::models::{OrderDraft, Product};
use tokio::sync::mpsc;

/// Message type for async API response handling
#[derive(Debug)]
pub enum ApiResponseMessage {
    /// Result of the initial catalog fetch
    Products(Result<Vec<Product>, ApiError>),
    /// Result of an order submission
    OrderPlaced(Result<OrderResult, ApiError>),
}

/// Service for dispatching shop API calls off the input loop
pub struct ShopService {
    api: ShopApi,
    in_flight: usize,
    /// Channel for receiving async API responses
    response_receiver: mpsc::Receiver<ApiResponseMessage>,
    /// Channel sender for async tasks to send responses
    response_sender: mpsc::Sender<ApiResponseMessage>,
}

impl ShopService {
    pub fn new(api: ShopApi) -> Self {
        let (response_sender, response_receiver) = mpsc::channel(10);
        Self {
            api,
            in_flight: 0,
            response_receiver,
            response_sender,
        }
    }

    pub fn api(&self) -> &ShopApi {
        &self.api
    }

    /// Number of requests whose response has not been received yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start fetching the catalog
    pub fn request_products(&mut self) {
        let api = self.api.clone();
        let sender = self.response_sender.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = api.list_products().await;
            if sender.send(ApiResponseMessage::Products(result)).await.is_err() {
                tracing::debug!("Catalog response dropped: receiver closed");
            }
        });
    }

    /// Start submitting an order
    pub fn request_order(&mut self, order: OrderDraft) {
        let api = self.api.clone();
        let sender = self.response_sender.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let result = api.place_order(&order).await;
            if sender
                .send(ApiResponseMessage::OrderPlaced(result))
                .await
                .is_err()
            {
                tracing::debug!("Order response dropped: receiver closed");
            }
        });
    }

    /// Check if there are any pending API responses (non-blocking)
    pub fn poll_response(&mut self) -> Option<ApiResponseMessage> {
        let message = self.response_receiver.try_recv().ok();
        if message.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        message
    }

    /// Wait for the next API response, if any request is outstanding
    pub async fn next_response(&mut self) -> Option<ApiResponseMessage> {
        if self.in_flight == 0 {
            return None;
        }
        let message = self.response_receiver.recv().await;
        if message.is_some() {
            self.in_flight -= 1;
        }
        message
    }
}
