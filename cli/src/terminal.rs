//! Line-oriented `Confirm`, `Notify` and `Navigate` over a reader and writer.

use std::io::{BufRead, Write};

use storefront_core::{Confirm, Navigate, Notify, Route};
use tracing::warn;

pub struct Terminal<R, W> {
    input: R,
    output: W,
    assume_yes: bool,
    pending: Option<Route>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            assume_yes: false,
            pending: None,
        }
    }

    /// Answer every confirmation with yes without prompting.
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// The last route a controller navigated to, if not yet followed.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.pending.take()
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

impl<R: BufRead, W: Write> Confirm for Terminal<R, W> {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if let Err(err) = write!(self.output, "{message} [y/N] ").and_then(|_| self.output.flush()) {
            warn!(error = %err, "failed to write prompt");
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(err) => {
                warn!(error = %err, "failed to read answer");
                false
            }
        }
    }
}

impl<R: BufRead, W: Write> Notify for Terminal<R, W> {
    fn notify(&mut self, message: &str) {
        if let Err(err) = writeln!(self.output, "{message}") {
            warn!(error = %err, "failed to write notification");
        }
    }
}

impl<R, W> Navigate for Terminal<R, W> {
    fn navigate(&mut self, route: Route) {
        self.pending = Some(route);
    }
}
