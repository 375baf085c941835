//! View-state controllers for the three product views.
//!
//! # Design
//! Every controller is a plain `&mut self` state machine built on
//! `RemoteState`. Loads go through `begin`/`finish` pairs so a host driving
//! requests itself can interleave them; `activate` runs both around a
//! blocking `ProductsApi` call. Failures are logged with their cause and
//! surfaced to the view only as one fixed message per action.

pub mod detail;
pub mod form;
pub mod list;

pub use detail::{DetailController, DetailView};
pub use form::{Field, FormController, FormMode, FormPhase, UnknownField};
pub use list::{DeleteOutcome, ListController};

use crate::api::ProductsApi;
use crate::http::Transport;
use crate::route::Route;

/// The controller selected for a route.
#[derive(Debug)]
pub enum View {
    List(ListController),
    Detail(DetailController),
    Form(FormController),
}

impl View {
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::List => View::List(ListController::new()),
            Route::Detail(id) => View::Detail(DetailController::new(id)),
            Route::Create => View::Form(FormController::new(FormMode::Create)),
            Route::Edit(id) => View::Form(FormController::new(FormMode::Edit(id))),
        }
    }

    /// Run the controller's initial load.
    pub fn activate<T: Transport>(&mut self, api: &ProductsApi<T>) {
        match self {
            View::List(c) => c.activate(api),
            View::Detail(c) => c.activate(api),
            View::Form(c) => c.activate(api),
        }
    }
}
