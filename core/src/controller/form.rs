//! Create/edit form for a single product.
//!
//! # Design
//! The mode is fixed at construction: `Edit(id)` fetches the product once and
//! copies its five editable fields into the form; `Create` starts blank.
//! Field edits are plain local writes with no validation. Submission sends
//! the full field set (never a partial merge) and leaves the form untouched
//! on failure so the user can retry.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::api::ProductsApi;
use crate::error::ApiError;
use crate::http::Transport;
use crate::route::Route;
use crate::state::{Generation, LoadTicket, RemoteState};
use crate::types::{Price, Product, ProductDraft, ProductId};
use crate::ui::{Navigate, Notify};

pub const LOAD_FAILED: &str = "Failed to load product details";
pub const SAVE_FAILED: &str = "Failed to save product";
pub const CREATED: &str = "Product created successfully (mock)";
pub const UPDATED: &str = "Product updated successfully (mock)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Edit mode only: the existing product is being fetched.
    Fetching,
    Idle,
    Submitting,
}

/// One of the five editable inputs, named as in the form markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Price,
    Description,
    Image,
    Category,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Price,
        Field::Description,
        Field::Image,
        Field::Category,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Price => "price",
            Field::Description => "description",
            Field::Image => "image",
            Field::Category => "category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub struct FormController {
    mode: FormMode,
    fields: ProductDraft,
    load: RemoteState<()>,
    /// `Ready(None)` is a save the server acknowledged without echoing it.
    save: RemoteState<Option<Product>>,
    generation: Generation,
}

impl FormController {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            fields: ProductDraft::default(),
            load: RemoteState::NotStarted,
            save: RemoteState::NotStarted,
            generation: Generation::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn fields(&self) -> &ProductDraft {
        &self.fields
    }

    pub fn field(&self, field: Field) -> String {
        match field {
            Field::Title => self.fields.title.clone(),
            Field::Price => self.fields.price.to_string(),
            Field::Description => self.fields.description.clone(),
            Field::Image => self.fields.image.clone(),
            Field::Category => self.fields.category.clone(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.load.is_loading() {
            FormPhase::Fetching
        } else if self.save.is_loading() {
            FormPhase::Submitting
        } else {
            FormPhase::Idle
        }
    }

    /// The single aggregate error slot.
    pub fn error(&self) -> Option<&str> {
        self.save.error().or_else(|| self.load.error())
    }

    /// The product echoed by the last successful submission, if any.
    pub fn saved(&self) -> Option<&Product> {
        self.save.ready().and_then(Option::as_ref)
    }

    /// Fetch the product in edit mode; nothing to do in create mode.
    pub fn activate<T: Transport>(&mut self, api: &ProductsApi<T>) {
        if let FormMode::Edit(id) = self.mode {
            let ticket = self.begin_fetch();
            self.finish_fetch(ticket, api.get(id));
        }
    }

    pub fn begin_fetch(&mut self) -> LoadTicket {
        self.load = RemoteState::Loading;
        self.generation.next()
    }

    /// Populate the fields from a fetched product. Returns `false` if the
    /// ticket was stale.
    pub fn finish_fetch(
        &mut self,
        ticket: LoadTicket,
        result: Result<Option<Product>, ApiError>,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.load = match result {
            Ok(Some(product)) => {
                self.fields = ProductDraft::from(&product);
                RemoteState::Ready(())
            }
            Ok(None) => {
                warn!(mode = ?self.mode, "product to edit not found");
                RemoteState::Failed(LOAD_FAILED.to_string())
            }
            Err(err) => {
                error!(mode = ?self.mode, error = %err, "failed to load product for editing");
                RemoteState::Failed(LOAD_FAILED.to_string())
            }
        };
        true
    }

    /// Overwrite one field with raw input. Price input is kept as text.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.fields.title = value,
            Field::Price => self.fields.price = Price::Text(value),
            Field::Description => self.fields.description = value,
            Field::Image => self.fields.image = value,
            Field::Category => self.fields.category = value,
        }
    }

    /// [`change`](Self::change) addressed by input name.
    pub fn change_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = name.parse()?;
        self.change(field, value);
        Ok(())
    }

    /// Create or update with the current fields, then return to the list.
    ///
    /// Ignored unless the form is idle. Returns `true` on success.
    pub fn submit<T, U>(&mut self, api: &ProductsApi<T>, ui: &mut U) -> bool
    where
        T: Transport,
        U: Notify + Navigate,
    {
        let Some((ticket, draft)) = self.begin_submit() else {
            return false;
        };
        let result = match self.mode {
            FormMode::Create => api.create(&draft),
            FormMode::Edit(id) => api.update(id, &draft),
        };
        self.finish_submit(ticket, result, ui)
    }

    /// Enter `Submitting` and hand out the payload to send. `None` unless the
    /// form is idle.
    pub fn begin_submit(&mut self) -> Option<(LoadTicket, ProductDraft)> {
        if self.phase() != FormPhase::Idle {
            return None;
        }
        self.save = RemoteState::Loading;
        Some((self.generation.next(), self.fields.clone()))
    }

    /// Apply a save result. Any `Ok` is a success, whatever the body held.
    /// Returns `true` only when the save succeeded on a current ticket.
    pub fn finish_submit<U: Notify + Navigate>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Option<Product>, ApiError>,
        ui: &mut U,
    ) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        match result {
            Ok(echoed) => {
                info!(id = ?echoed.as_ref().map(|p| p.id), mode = ?self.mode, "product saved");
                self.save = RemoteState::Ready(echoed);
                ui.notify(match self.mode {
                    FormMode::Create => CREATED,
                    FormMode::Edit(_) => UPDATED,
                });
                ui.navigate(Route::List);
                true
            }
            Err(err) => {
                error!(mode = ?self.mode, error = %err, "failed to save product");
                self.save = RemoteState::Failed(SAVE_FAILED.to_string());
                false
            }
        }
    }
}
