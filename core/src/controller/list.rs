//! Product list: loads the whole catalog and deletes from it locally.

use tracing::{error, info};

use crate::api::ProductsApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::state::{Generation, LoadTicket, RemoteState};
use crate::types::{Product, ProductId};
use crate::ui::{Confirm, Notify};

pub const LOAD_FAILED: &str = "Failed to load products";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";
pub const DELETED: &str = "Product deleted successfully (mock)";
pub const DELETE_FAILED: &str = "Failed to delete product";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined; no request was sent.
    Cancelled,
    Deleted,
    Failed,
}

#[derive(Debug, Default)]
pub struct ListController {
    state: RemoteState<Vec<Product>>,
    generation: Generation,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RemoteState<Vec<Product>> {
        &self.state
    }

    /// The loaded collection, empty until ready.
    pub fn products(&self) -> &[Product] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn activate<T: Transport>(&mut self, api: &ProductsApi<T>) {
        let ticket = self.begin();
        self.finish(ticket, api.list());
    }

    pub fn begin(&mut self) -> LoadTicket {
        self.state = RemoteState::Loading;
        self.generation.next()
    }

    /// Apply a list result. Returns `false` if the ticket was stale.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<Vec<Product>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.state = match result {
            Ok(products) => RemoteState::Ready(products),
            Err(err) => {
                error!(error = %err, "failed to load products");
                RemoteState::Failed(LOAD_FAILED.to_string())
            }
        };
        true
    }

    /// Confirm, delete remotely, then drop `id` from the local collection.
    ///
    /// The backing service does not persist deletions, so the collection is
    /// never re-fetched.
    pub fn delete<T, U>(&mut self, api: &ProductsApi<T>, ui: &mut U, id: ProductId) -> DeleteOutcome
    where
        T: Transport,
        U: Confirm + Notify,
    {
        if !ui.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Cancelled;
        }
        match api.delete(id) {
            Ok(_) => {
                if let Some(products) = self.state.ready_mut() {
                    products.retain(|p| p.id != id);
                }
                info!(id, "product deleted");
                ui.notify(DELETED);
                DeleteOutcome::Deleted
            }
            Err(err) => {
                error!(id, error = %err, "failed to delete product");
                ui.notify(DELETE_FAILED);
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::testing::{api, catalog, FakeTransport, RecordingUi};
    use crate::http::HttpMethod;

    fn loaded() -> (ListController, ProductsApi<FakeTransport>) {
        let api = api(FakeTransport::default().respond(200, &catalog()));
        let mut list = ListController::new();
        list.activate(&api);
        (list, api)
    }

    #[test]
    fn activation_goes_from_loading_to_ready_in_server_order() {
        let api = api(FakeTransport::default().respond(200, &catalog()));
        let mut list = ListController::new();

        let ticket = list.begin();
        assert!(list.state().is_loading());
        assert!(list.finish(ticket, api.list()));

        let ids: Vec<_> = list.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn load_failure_sets_fixed_message() {
        let api = api(FakeTransport::default().respond(500, "boom"));
        let mut list = ListController::new();
        list.activate(&api);
        assert_eq!(list.state().error(), Some(LOAD_FAILED));
        assert!(list.products().is_empty());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut list = ListController::new();
        let old = list.begin();
        let current = list.begin();
        assert!(!list.finish(old, Err(ApiError::DeserializationError("late".into()))));
        assert!(list.state().is_loading());
        assert!(list.finish(current, Ok(Vec::new())));
        assert_eq!(list.state(), &RemoteState::Ready(Vec::new()));
    }

    #[test]
    fn confirmed_delete_removes_item_without_refetch() {
        let api = api(
            FakeTransport::default()
                .respond(200, &catalog())
                .respond(200, r#"{"id":2}"#),
        );
        let mut list = ListController::new();
        list.activate(&api);
        let mut ui = RecordingUi::answering(true);

        let outcome = list.delete(&api, &mut ui, 2);

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(list.products().iter().all(|p| p.id != 2));
        assert_eq!(list.products().len(), 2);
        assert_eq!(ui.prompts, vec![DELETE_PROMPT.to_string()]);
        assert_eq!(ui.notices, vec![DELETED.to_string()]);

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].path, "http://store.test/products/2");
    }

    #[test]
    fn declined_delete_sends_nothing() {
        let (mut list, api) = loaded();
        let mut ui = RecordingUi::answering(false);

        assert_eq!(list.delete(&api, &mut ui, 1), DeleteOutcome::Cancelled);
        assert_eq!(list.products().len(), 3);
        assert_eq!(api.transport().requests().len(), 1);
        assert!(ui.notices.is_empty());
    }

    #[test]
    fn failed_delete_leaves_collection_unchanged() {
        let api = api(
            FakeTransport::default()
                .respond(200, &catalog())
                .fail("connection reset"),
        );
        let mut list = ListController::new();
        list.activate(&api);
        let before = list.products().to_vec();
        let mut ui = RecordingUi::answering(true);

        assert_eq!(list.delete(&api, &mut ui, 1), DeleteOutcome::Failed);
        assert_eq!(list.products(), before.as_slice());
        assert_eq!(ui.notices, vec![DELETE_FAILED.to_string()]);
    }
}
