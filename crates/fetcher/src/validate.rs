//! Input shape checks for the two user-supplied strings
//!
//! Both predicates are pure and touch neither the network nor the file
//! system. They check shape only: a version that validates here may still
//! not exist on the marketplace.

use url::Url;

pub const MARKETPLACE_HOST: &str = "marketplace.visualstudio.com";

/// Check the version string shape
///
/// Accepts the literal `latest` in any letter case, or a dotted
/// three-component string where every component is all ASCII digits.
/// There is no upper bound on digit count; this matches the pattern,
/// it does not order versions.
pub fn is_valid_version(version: &str) -> bool {
    if version.eq_ignore_ascii_case("latest") {
        return true;
    }

    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Check the marketplace page URL shape
///
/// The URL must parse as absolute http(s), point at the marketplace host
/// exactly, have `/items` in its path, and carry an `itemName=` query.
/// Strings that fail to parse return false rather than erroring.
pub fn is_valid_marketplace_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    matches!(parsed.scheme(), "http" | "https")
        && parsed.host_str() == Some(MARKETPLACE_HOST)
        && parsed.path().contains("/items")
        && parsed.query().is_some_and(|q| q.contains("itemName="))
}
