mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for discovering candidate source files under a root.
pub trait FileScanner {
    /// Collect matching files beneath `root`.
    ///
    /// # Errors
    /// Returns an error if the scan fails.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
