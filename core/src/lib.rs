//! Data access and view-state core for the storefront admin.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values for the
//! `/products` resource without touching the network (host-does-IO pattern),
//! and drives the list, detail and form views from the results.
//!
//! # Design
//! - `ProductClient` is stateless; it holds only `base_url`.
//! - `ProductsApi` pairs it with an injected `Transport` so controllers can be
//!   tested against a fake.
//! - Controllers share one `RemoteState` shape and talk to the user only
//!   through the `Confirm`, `Notify` and `Navigate` traits.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod route;
pub mod state;
pub mod types;
pub mod ui;

pub use api::ProductsApi;
pub use client::{ProductClient, DEFAULT_BASE_URL};
pub use controller::{
    DeleteOutcome, DetailController, DetailView, Field, FormController, FormMode, FormPhase,
    ListController, UnknownField, View,
};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use route::{Resolved, Route, RouteError};
pub use state::{LoadTicket, RemoteState};
pub use types::{Price, Product, ProductDraft, ProductId, Rating};
pub use ui::{Confirm, Navigate, Notify};
