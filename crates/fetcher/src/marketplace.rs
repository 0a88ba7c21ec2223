//! Package identity and download endpoint derivation
//!
//! A marketplace page URL carries the package identity in its `itemName`
//! query parameter as `publisher.extension`. The gallery serves the actual
//! package from a separate endpoint synthesized from that identity plus the
//! requested version.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{FetchError, Result};

/// Who publishes the extension and what it is called
///
/// Derived per request from the page URL; never stored beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageIdentity {
    pub publisher: String,
    pub extension: String,
}

impl PackageIdentity {
    /// Resolve the identity from a marketplace page URL
    ///
    /// Pulls the `itemName` query parameter and splits it on `.`. Anything
    /// other than exactly two non-empty parts is unresolvable.
    pub fn from_page_url(page_url: &str) -> Result<Self> {
        let parsed = Url::parse(page_url).map_err(|_| FetchError::InvalidMarketplaceUrl {
            url: page_url.to_string(),
        })?;

        let item_name = parsed
            .query_pairs()
            .find(|(key, _)| key == "itemName")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| FetchError::MissingItemName {
                url: page_url.to_string(),
            })?;

        let parts: Vec<&str> = item_name.split('.').collect();
        match parts.as_slice() {
            [publisher, extension] if !publisher.is_empty() && !extension.is_empty() => Ok(Self {
                publisher: (*publisher).to_string(),
                extension: (*extension).to_string(),
            }),
            _ => Err(FetchError::MalformedItemName { item_name }),
        }
    }
}

impl std::fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.publisher, self.extension)
    }
}

/// Base URL of the public gallery
pub const DEFAULT_GALLERY_BASE: &str = "https://marketplace.visualstudio.com";

/// Build the gallery download endpoint for an identity and version
pub fn download_endpoint(identity: &PackageIdentity, version: &str) -> String {
    download_endpoint_with_base(DEFAULT_GALLERY_BASE, identity, version)
}

/// Endpoint formula against an arbitrary gallery base, for mirrors and tests
pub(crate) fn download_endpoint_with_base(
    base: &str,
    identity: &PackageIdentity,
    version: &str,
) -> String {
    format!(
        "{base}/_apis/public/gallery/publishers/{}/vsextensions/{}/{}/vspackage",
        identity.publisher, identity.extension, version
    )
}

/// Default filename offered to the destination picker
pub fn suggested_filename(identity: &PackageIdentity, version: &str) -> String {
    format!("{}-{}.vsix", identity.extension, version)
}
