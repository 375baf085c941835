//! Product detail: a read-only view of one product keyed by the route id.

use tracing::{error, warn};

use crate::api::ProductsApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::state::{Generation, LoadTicket, RemoteState};
use crate::types::{Product, ProductId};

pub const LOAD_FAILED: &str = "Failed to load product details";

/// What the detail view should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    NotStarted,
    Loading,
    Failed(&'a str),
    NotFound,
    Ready(&'a Product),
}

#[derive(Debug)]
pub struct DetailController {
    id: ProductId,
    /// `Ready(None)` is a successful lookup that found nothing.
    state: RemoteState<Option<Product>>,
    generation: Generation,
}

impl DetailController {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            state: RemoteState::NotStarted,
            generation: Generation::default(),
        }
    }

    pub fn view(&self) -> DetailView<'_> {
        match &self.state {
            RemoteState::NotStarted => DetailView::NotStarted,
            RemoteState::Loading => DetailView::Loading,
            RemoteState::Failed(message) => DetailView::Failed(message),
            RemoteState::Ready(None) => DetailView::NotFound,
            RemoteState::Ready(Some(product)) => DetailView::Ready(product),
        }
    }

    pub fn activate<T: Transport>(&mut self, api: &ProductsApi<T>) {
        let ticket = self.begin();
        self.finish(ticket, api.get(self.id));
    }

    /// Point the view at another product and reload. Same id is a no-op.
    pub fn set_id<T: Transport>(&mut self, id: ProductId, api: &ProductsApi<T>) {
        if id == self.id && self.state != RemoteState::NotStarted {
            return;
        }
        self.id = id;
        self.activate(api);
    }

    pub fn begin(&mut self) -> LoadTicket {
        self.state = RemoteState::Loading;
        self.generation.next()
    }

    /// Start loading a different id without running the request.
    pub fn begin_for(&mut self, id: ProductId) -> LoadTicket {
        self.id = id;
        self.begin()
    }

    /// Apply a lookup result. Returns `false` if the ticket was stale.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<Option<Product>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(found) => {
                if found.is_none() {
                    warn!(id = self.id, "product not found");
                }
                RemoteState::Ready(found)
            }
            Err(err) => {
                error!(id = self.id, error = %err, "failed to load product");
                RemoteState::Failed(LOAD_FAILED.to_string())
            }
        };
        true
    }
}
