//! Connectivity status derived from refresh outcomes.

use crate::fetch::FetchError;

/// Binary connectivity signal shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

/// Status line content for the composition step.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub connectivity: Connectivity,
    pub message: String,
}

impl StatusView {
    pub fn is_online(&self) -> bool {
        self.connectivity == Connectivity::Online
    }
}

/// Two-state machine over retrieval outcomes. No hysteresis: the state is a
/// pure function of the most recent outcome processed.
#[derive(Debug)]
pub struct StatusController {
    current: StatusView,
}

impl StatusController {
    /// Offline until the first outcome arrives.
    pub fn new() -> Self {
        Self {
            current: StatusView {
                connectivity: Connectivity::Offline,
                message: "Connecting…".to_string(),
            },
        }
    }

    pub fn current(&self) -> &StatusView {
        &self.current
    }

    /// A retrieval succeeded; `last_updated` is the already-formatted
    /// backend timestamp when the payload carried one.
    pub fn on_success(&mut self, last_updated: Option<&str>) -> &StatusView {
        let message = match last_updated {
            Some(stamp) => format!("Synchronised · updated {stamp}"),
            None => "Synchronisation complete".to_string(),
        };
        self.current = StatusView {
            connectivity: Connectivity::Online,
            message,
        };
        &self.current
    }

    /// A retrieval failed; the panels keep their last rendered state and
    /// only this message changes.
    pub fn on_failure(&mut self, error: &FetchError) -> &StatusView {
        self.current = StatusView {
            connectivity: Connectivity::Offline,
            message: format!("Connection lost: {error}"),
        };
        &self.current
    }
}

impl Default for StatusController {
    fn default() -> Self {
        Self::new()
    }
}
