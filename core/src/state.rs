//! Remote resource state shared by every controller.
//!
//! # Design
//! A load is split into `begin` and `finish` so the host can run the request
//! however it likes. `begin` hands out a `LoadTicket` stamped with the
//! controller's current generation; a result arriving with an older ticket is
//! stale and must be dropped. This stops a slow response for a previous id
//! from overwriting the view of the current one.

/// Lifecycle of one remotely fetched value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RemoteState<T> {
    #[default]
    NotStarted,
    Loading,
    Ready(T),
    /// Holds the user-facing message, never the underlying cause.
    Failed(String),
}

impl<T> RemoteState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a load was started at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Monotonic counter handing out `LoadTicket`s.
#[derive(Debug, Default)]
pub(crate) struct Generation(u64);

impl Generation {
    pub(crate) fn next(&mut self) -> LoadTicket {
        self.0 += 1;
        LoadTicket(self.0)
    }

    pub(crate) fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.0
    }
}
