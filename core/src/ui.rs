//! Capabilities the controllers need from whatever presents them.
//!
//! Blocking confirmation, alerts and navigation are presentation concerns;
//! the controllers only see these traits.

use crate::route::Route;

/// Ask the user a yes/no question, blocking until answered.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Show the user a one-off message.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// Move the application to another view.
pub trait Navigate {
    fn navigate(&mut self, route: Route);
}
