//! The composed resource client: `ProductClient` plus an injected `Transport`.

use serde_json::Value;
use tracing::debug;

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{Product, ProductDraft, ProductId};

/// Performs the six product operations over `T`.
///
/// No retries, caching or deduplication: one call is one round-trip.
#[derive(Debug, Clone)]
pub struct ProductsApi<T> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductsApi<T> {
    pub fn new(client: ProductClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.send(self.client.build_list_products())?;
        self.client.parse_list_products(response)
    }

    pub fn get(&self, id: ProductId) -> Result<Option<Product>, ApiError> {
        let response = self.send(self.client.build_get_product(id))?;
        self.client.parse_get_product(response)
    }

    pub fn create(&self, payload: &ProductDraft) -> Result<Option<Product>, ApiError> {
        let response = self.send(self.client.build_create_product(payload)?)?;
        self.client.parse_create_product(response)
    }

    pub fn update(&self, id: ProductId, payload: &ProductDraft) -> Result<Option<Product>, ApiError> {
        let response = self.send(self.client.build_update_product(id, payload)?)?;
        self.client.parse_update_product(response)
    }

    pub fn delete(&self, id: ProductId) -> Result<Value, ApiError> {
        let response = self.send(self.client.build_delete_product(id))?;
        self.client.parse_delete_product(response)
    }

    /// Same as [`delete`](Self::delete).
    pub fn remove(&self, id: ProductId) -> Result<Value, ApiError> {
        self.delete(id)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
