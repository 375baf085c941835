//! Stateless HTTP request builder and response parser for the store API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. `ProductsApi` glues the two halves to a `Transport`.
//!
//! Any 2xx status is accepted: the demo API answers creates with either 200
//! or 201 depending on deployment, and the client does not attach meaning to
//! the difference.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Product, ProductDraft, ProductId};

/// Base address of the public demo store.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com/";

/// Synchronous, stateless client for the `/products` resource.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl Default for ProductClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_products(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_product(&self, id: ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/products/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_product(&self, input: &ProductDraft) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/products", self.base_url),
            headers: json_headers(),
            body: Some(to_body(input)?),
        })
    }

    pub fn build_update_product(
        &self,
        id: ProductId,
        input: &ProductDraft,
    ) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/products/{id}", self.base_url),
            headers: json_headers(),
            body: Some(to_body(input)?),
        })
    }

    pub fn build_delete_product(&self, id: ProductId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/products/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_products(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response)?;
        from_body(&response.body)
    }

    /// An empty (or `null`) body means the lookup found nothing; the demo API
    /// answers unknown ids that way instead of with a 404.
    pub fn parse_get_product(&self, response: HttpResponse) -> Result<Option<Product>, ApiError> {
        check_status(&response)?;
        if is_blank(&response.body) {
            return Ok(None);
        }
        from_body(&response.body)
    }

    /// Success is decided by status alone. The echoed product is returned
    /// when the body holds one; any other 2xx body yields `None`.
    pub fn parse_create_product(&self, response: HttpResponse) -> Result<Option<Product>, ApiError> {
        check_status(&response)?;
        Ok(echoed_product(&response.body))
    }

    /// Same leniency as [`parse_create_product`](Self::parse_create_product).
    pub fn parse_update_product(&self, response: HttpResponse) -> Result<Option<Product>, ApiError> {
        check_status(&response)?;
        Ok(echoed_product(&response.body))
    }

    /// Returns whatever acknowledgment the server sent, `Value::Null` if none.
    pub fn parse_delete_product(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        from_body(&response.body)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_body(input: &ProductDraft) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

fn echoed_product(body: &str) -> Option<Product> {
    if is_blank(body) {
        return None;
    }
    serde_json::from_str(body).ok()
}

fn is_blank(body: &str) -> bool {
    let body = body.trim();
    body.is_empty() || body == "null"
}

/// Reject every non-2xx status with the raw status and body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
