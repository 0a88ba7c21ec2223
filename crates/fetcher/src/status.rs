//! Status and progress reporting for fetch operations
//!
//! Statuses are tagged events rather than bare strings, so embeddings can
//! switch on the kind (re-enable input, color a label, pick an exit code)
//! without sniffing message text. Progress is a separate stream of 0-100
//! percent values.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::FetchError;

/// Outcome tag on a status event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    /// The operation has begun
    Starting,
    /// Informational step along the way
    Info,
    /// Terminal: the package was downloaded
    Success,
    /// Terminal: the operation failed
    Error,
    /// Terminal: the user declined to pick a destination
    Cancelled,
}

/// A single human-readable status with its machine-readable tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusEvent {
    pub fn starting<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Starting,
            text: text.into(),
        }
    }

    pub fn info<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    pub fn cancelled<S: Into<String>>(text: S) -> Self {
        Self {
            kind: StatusKind::Cancelled,
            text: text.into(),
        }
    }

    /// Convert a fetch error to its terminal status event
    ///
    /// Cancellation keeps its own kind; everything else is an error. The
    /// text comes from the error's Display impl, which already names the
    /// offending value where the error carries one.
    pub fn from_error(error: &FetchError) -> Self {
        match error {
            FetchError::Cancelled => Self::cancelled(error.to_string()),
            _ => Self::error(error.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            StatusKind::Success | StatusKind::Error | StatusKind::Cancelled
        )
    }
}

/// Status callback for fetch operations
pub type StatusCallback = Arc<dyn Fn(StatusEvent) + Send + Sync>;

/// Progress callback receiving whole percents, 0 through 100
///
/// Values are monotonically non-decreasing; duplicates are possible. 100 is
/// guaranteed as the final call on any completed download.
pub type ProgressCallback = Arc<dyn Fn(u8) + Send + Sync>;

/// Trait for sinks that consume both channels
pub trait FetchReporter: Send + Sync {
    fn on_status(&self, _event: &StatusEvent) {}
    fn on_progress(&self, _percent: u8) {}
}

/// Extension trait to convert a FetchReporter into the callback pair
pub trait IntoCallbacks {
    fn into_callbacks(self) -> (StatusCallback, ProgressCallback);
}

impl<T: FetchReporter + 'static> IntoCallbacks for T {
    fn into_callbacks(self) -> (StatusCallback, ProgressCallback) {
        let reporter = Arc::new(self);
        let status_reporter = Arc::clone(&reporter);
        let on_status: StatusCallback = Arc::new(move |event| status_reporter.on_status(&event));
        let on_progress: ProgressCallback = Arc::new(move |percent| reporter.on_progress(percent));
        (on_status, on_progress)
    }
}

/// Simple console reporter implementation
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    pub verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl FetchReporter for ConsoleReporter {
    fn on_status(&self, event: &StatusEvent) {
        match event.kind {
            StatusKind::Error => eprintln!("error: {}", event.text),
            StatusKind::Cancelled => println!("cancelled: {}", event.text),
            StatusKind::Success => println!("{}", event.text),
            StatusKind::Starting | StatusKind::Info => {
                if self.verbose {
                    println!("{}", event.text);
                }
            }
        }
    }

    fn on_progress(&self, percent: u8) {
        if self.verbose {
            println!("{percent}%");
        }
    }
}

/// Null reporter that does nothing
#[derive(Debug, Default)]
pub struct NullReporter;

impl FetchReporter for NullReporter {}
