//! In-process imitation of the demo store API.
//!
//! Serves a fixed seed catalog. Writes are accepted and echoed back with a
//! plausible id but never stored, and unknown ids get `200` with an empty
//! body, matching the public service's behavior.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    /// Echoed verbatim; clients send numbers or strings.
    pub price: Value,
    pub description: String,
    pub image: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

#[derive(Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub price: Value,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

impl ProductInput {
    fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            image: self.image,
            category: self.category,
            rating: None,
        }
    }
}

pub type Catalog = Arc<Vec<Product>>;

/// The catalog every fresh `app()` serves.
pub fn seed() -> Vec<Product> {
    let item = |id: u64, title: &str, price: f64, category: &str, rate: f64, count: u64| Product {
        id,
        title: title.to_string(),
        price: Value::from(price),
        description: format!("{title} from the demo catalog"),
        image: format!("https://fakestoreapi.com/img/{id}.png"),
        category: category.to_string(),
        rating: Some(Rating { rate, count }),
    };
    vec![
        item(1, "Fjallraven Backpack", 109.95, "men's clothing", 3.9, 120),
        item(2, "Slim Fit T-Shirt", 22.3, "men's clothing", 4.1, 259),
        item(3, "Cotton Jacket", 55.99, "men's clothing", 4.7, 500),
        item(4, "Gold Chain Bracelet", 695.0, "jewelery", 4.6, 400),
        item(5, "Portable External Drive", 64.0, "electronics", 3.3, 203),
    ]
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(products: Vec<Product>) -> Router {
    let catalog: Catalog = Arc::new(products);
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn found_or_empty(product: Option<Product>) -> Response {
    match product {
        Some(product) => Json(product).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

async fn list_products(State(catalog): State<Catalog>) -> Json<Vec<Product>> {
    debug!(count = catalog.len(), "list products");
    Json(catalog.as_ref().clone())
}

async fn get_product(State(catalog): State<Catalog>, Path(id): Path<u64>) -> Response {
    debug!(id, "get product");
    found_or_empty(catalog.iter().find(|p| p.id == id).cloned())
}

async fn create_product(
    State(catalog): State<Catalog>,
    Json(input): Json<ProductInput>,
) -> (StatusCode, Json<Product>) {
    let id = catalog.len() as u64 + 1;
    debug!(id, "create product (not stored)");
    (StatusCode::CREATED, Json(input.into_product(id)))
}

async fn update_product(Path(id): Path<u64>, Json(input): Json<ProductInput>) -> Json<Product> {
    debug!(id, "update product (not stored)");
    Json(input.into_product(id))
}

async fn delete_product(State(catalog): State<Catalog>, Path(id): Path<u64>) -> Response {
    debug!(id, "delete product (not stored)");
    found_or_empty(catalog.iter().find(|p| p.id == id).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_sequential() {
        let ids: Vec<_> = seed().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn product_serializes_to_json() {
        let product = seed().remove(0);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["price"], 109.95);
        assert_eq!(json["rating"]["count"], 120);
    }

    #[test]
    fn input_keeps_price_shape() {
        let input: ProductInput =
            serde_json::from_str(r#"{"title":"Lamp","price":"19.50"}"#).unwrap();
        let product = input.into_product(6);
        assert_eq!(product.price, Value::from("19.50"));
        assert_eq!(product.description, "");
        assert!(product.rating.is_none());
    }

    #[test]
    fn input_rejects_missing_title() {
        let result: Result<ProductInput, _> = serde_json::from_str(r#"{"price":1}"#);
        assert!(result.is_err());
    }
}
