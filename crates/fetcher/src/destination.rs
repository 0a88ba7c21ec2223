//! Destination picking, the one interactive collaborator
//!
//! Where the bytes land is decided outside the core. A GUI embedding backs
//! this trait with a save dialog; scripted embeddings use the
//! implementations here. Returning `None` means the user cancelled, which
//! is the only cancellation point the fetcher models.

use std::path::{Path, PathBuf};

/// Supplies the destination path for a download
pub trait DestinationPicker: Send + Sync {
    /// Pick a destination, given the default filename for this package.
    /// `None` cancels the fetch before any network call is made.
    fn pick(&self, suggested_filename: &str) -> Option<PathBuf>;
}

/// Always saves to one exact path, ignoring the suggestion
#[derive(Debug, Clone)]
pub struct FixedDestination {
    path: PathBuf,
}

impl FixedDestination {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl DestinationPicker for FixedDestination {
    fn pick(&self, _suggested_filename: &str) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}

/// Saves under a directory using the suggested filename
#[derive(Debug, Clone)]
pub struct DirectoryDestination {
    dir: PathBuf,
}

impl DirectoryDestination {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DestinationPicker for DirectoryDestination {
    fn pick(&self, suggested_filename: &str) -> Option<PathBuf> {
        Some(self.dir.join(suggested_filename))
    }
}
