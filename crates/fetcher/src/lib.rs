//! VSIX Fetcher Library
//!
//! This library downloads a VSIX extension package from the Visual Studio
//! Marketplace. It derives the direct download endpoint from a marketplace
//! page URL plus a version string, streams the package to a caller-chosen
//! path, and reports status and percentage progress through injected
//! callbacks.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fetcher::{
//!     ConsoleReporter, FetchConfig, FetchOutcome, FixedDestination,
//!     IntoCallbacks, VsixFetcher,
//! };
//!
//! # async fn example() {
//! let fetcher = VsixFetcher::new(FetchConfig::default());
//!
//! // Destination picking is a pluggable collaborator; a GUI embedding
//! // would back this with a save dialog.
//! let picker = FixedDestination::new("/tmp/python-latest.vsix");
//!
//! let reporter = ConsoleReporter::new(true);
//! let (on_status, on_progress) = reporter.into_callbacks();
//!
//! let outcome = fetcher
//!     .fetch_package(
//!         "https://marketplace.visualstudio.com/items?itemName=ms-python.python",
//!         "latest",
//!         &picker,
//!         on_status,
//!         Some(on_progress),
//!     )
//!     .await;
//!
//! match outcome {
//!     FetchOutcome::Completed { path } => println!("saved to {}", path.display()),
//!     FetchOutcome::Cancelled => println!("cancelled"),
//!     FetchOutcome::Failed => println!("failed"),
//! }
//! # }
//! ```
//!
//! # Features
//!
//! - **Input validation**: pure shape checks for the marketplace URL and the
//!   version string, usable independently of any network access
//! - **Identity resolution**: publisher/extension derived from the page
//!   URL's `itemName` query parameter
//! - **Streaming download**: chunked transfer to a temp file with an atomic
//!   rename on success, so the destination never holds a partial package
//! - **Structured status reporting**: tagged status events plus a 0-100
//!   percent stream, decoupled from any presentation technology

pub mod config;
pub mod destination;
pub mod error;
pub mod fetch;
pub mod http;
pub mod marketplace;
pub mod status;
pub mod validate;

// Re-export commonly used types for convenience
pub use config::FetchConfig;
pub use destination::{DestinationPicker, DirectoryDestination, FixedDestination};
pub use error::{FetchError, FileOperation, Result};
pub use fetch::{FetchOutcome, VsixFetcher};
pub use http::HttpClient;
pub use marketplace::{
    DEFAULT_GALLERY_BASE, PackageIdentity, download_endpoint, suggested_filename,
};
pub use status::{
    ConsoleReporter, FetchReporter, IntoCallbacks, NullReporter, ProgressCallback, StatusCallback,
    StatusEvent, StatusKind,
};
pub use validate::{is_valid_marketplace_url, is_valid_version};
