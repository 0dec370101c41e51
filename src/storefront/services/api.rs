//! # Shop API Client
//!
//! Thin reqwest wrapper around the two remote operations of the shop:
//! listing products and placing an order.

use crate::storefront::models::{OrderDraft, Product};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors of the shop API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// The order draft cannot be submitted as is
    #[error("order is incomplete: {0}")]
    IncompleteOrder(&'static str),

    /// A configured base URL could not be parsed
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),
}

/// Paginated-shaped list response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse<T> {
    pub total: u64,
    pub items: Vec<T>,
}

/// Confirmation returned for a placed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    pub id: String,
    pub total: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the shop HTTP API
#[derive(Debug, Clone)]
pub struct ShopApi {
    client: Client,
    base_url: Url,
    cdn_url: String,
}

impl ShopApi {
    /// Create a client for `api_url`; product images are resolved against `cdn_url`
    pub fn new(api_url: &str, cdn_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(api_url).map_err(|_| ApiError::InvalidUrl(api_url.to_string()))?;
        Url::parse(cdn_url).map_err(|_| ApiError::InvalidUrl(cdn_url.to_string()))?;

        tracing::debug!("Creating ShopApi for {} (cdn {})", base_url, cdn_url);
        Ok(Self {
            client: Client::new(),
            base_url,
            cdn_url: cdn_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the catalog, with image paths rewritten onto the CDN
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint("/product");
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let list: ApiListResponse<Product> = Self::decode(response).await?;

        tracing::info!("Fetched {} of {} product(s)", list.items.len(), list.total);
        Ok(list
            .items
            .into_iter()
            .map(|mut product| {
                product.image = self.cdn_image(&product.image);
                product
            })
            .collect())
    }

    /// Submit an order draft
    pub async fn place_order(&self, order: &OrderDraft) -> Result<OrderResult, ApiError> {
        if order.payment.is_none() {
            return Err(ApiError::IncompleteOrder("payment method is not set"));
        }
        if order.items.is_empty() {
            return Err(ApiError::IncompleteOrder("no items"));
        }

        let url = self.endpoint("/order");
        tracing::debug!("POST {} with {} item(s)", url, order.items.len());

        let response = self
            .client
            .post(&url)
            .json(order)
            .send()
            .await
            .map_err(ApiError::Network)?;
        let result: OrderResult = Self::decode(response).await?;

        tracing::info!("Order {} placed, total {}", result.id, result.total);
        Ok(result)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn cdn_image(&self, image: &str) -> String {
        if image.starts_with('/') {
            format!("{}{}", self.cdn_url, image)
        } else {
            format!("{}/{}", self.cdn_url, image)
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ApiError::Decode);
        }

        // `{ "error": ... }` when the API explains itself, else the raw text
        let text = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) if !text.trim().is_empty() => text.trim().to_string(),
            Err(_) => Self::reason(status),
        };
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    fn reason(status: StatusCode) -> String {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    }
}
