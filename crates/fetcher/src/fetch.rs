//! The fetch operation: validate, resolve, pick a destination, download
//!
//! One logical operation per invocation, single attempt, no shared state
//! across invocations. Every failure is converted to a terminal status
//! event at this boundary; nothing propagates to the embedding as an error.

use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::destination::DestinationPicker;
use crate::error::{FetchError, Result};
use crate::http::HttpClient;
use crate::marketplace::{
    DEFAULT_GALLERY_BASE, PackageIdentity, download_endpoint_with_base, suggested_filename,
};
use crate::status::{ProgressCallback, StatusCallback, StatusEvent};
use crate::validate::{is_valid_marketplace_url, is_valid_version};

/// Terminal result of one fetch invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Package written to `path` in full
    Completed { path: PathBuf },
    /// The destination picker declined; no network call was made
    Cancelled,
    /// A terminal error status was emitted
    Failed,
}

/// Downloads one VSIX package per invocation
pub struct VsixFetcher {
    config: FetchConfig,
    gallery_base: String,
}

impl VsixFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            config,
            gallery_base: DEFAULT_GALLERY_BASE.to_string(),
        }
    }

    /// Point package requests at a different gallery host, e.g. a private
    /// mirror
    pub fn with_gallery_base<S: Into<String>>(mut self, base: S) -> Self {
        self.gallery_base = base.into();
        self
    }

    /// Fetch the package identified by a marketplace page URL and a version
    ///
    /// Steps, short-circuiting on first failure: shape-check both inputs,
    /// resolve the identity from `itemName`, ask `picker` for a destination
    /// (a `None` cancels before any network traffic), then stream the
    /// package. Status events arrive on `on_status`, ending with exactly
    /// one terminal event; whole percents arrive on `on_progress` while
    /// the content length is known, with a guaranteed final `100` on
    /// success.
    pub async fn fetch_package(
        &self,
        page_url: &str,
        version: &str,
        picker: &dyn DestinationPicker,
        on_status: StatusCallback,
        on_progress: Option<ProgressCallback>,
    ) -> FetchOutcome {
        on_status(StatusEvent::starting("Starting fetch..."));

        match self
            .run(page_url, version, picker, &on_status, on_progress)
            .await
        {
            Ok(path) => {
                let filename = display_filename(&path);
                on_status(StatusEvent::success(format!(
                    "Download complete: {filename}"
                )));
                FetchOutcome::Completed { path }
            }
            Err(FetchError::Cancelled) => {
                debug!("fetch cancelled at destination selection");
                on_status(StatusEvent::from_error(&FetchError::Cancelled));
                FetchOutcome::Cancelled
            }
            Err(e) => {
                warn!("fetch failed: {e}");
                on_status(StatusEvent::from_error(&e));
                FetchOutcome::Failed
            }
        }
    }

    async fn run(
        &self,
        page_url: &str,
        version: &str,
        picker: &dyn DestinationPicker,
        on_status: &StatusCallback,
        on_progress: Option<ProgressCallback>,
    ) -> Result<PathBuf> {
        if !is_valid_marketplace_url(page_url) {
            return Err(FetchError::InvalidMarketplaceUrl {
                url: page_url.to_string(),
            });
        }

        if !is_valid_version(version) {
            return Err(FetchError::InvalidVersion {
                version: version.to_string(),
            });
        }

        let identity = PackageIdentity::from_page_url(page_url)?;
        let endpoint = download_endpoint_with_base(&self.gallery_base, &identity, version);
        debug!("resolved {} -> {}", identity, endpoint);

        on_status(StatusEvent::info(format!(
            "Preparing download: {identity} version {version}"
        )));

        let dest_path = picker
            .pick(&suggested_filename(&identity, version))
            .ok_or(FetchError::Cancelled)?;

        on_status(StatusEvent::info(format!(
            "Downloading to: {}",
            display_filename(&dest_path)
        )));

        let client = HttpClient::from_config(&self.config)?;
        match client
            .download_to_file(&endpoint, &dest_path, on_progress.as_ref())
            .await
        {
            Ok(_bytes) => Ok(dest_path),
            Err(FetchError::RemoteStatus { status: 404, .. }) => Err(FetchError::NotFound {
                identity,
                version: version.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

fn display_filename(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
