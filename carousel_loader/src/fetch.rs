// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::FetchError;

/// Transport that turns a URL into raw encoded image bytes.
///
/// Implementations decide what a URL means (file path, HTTP, asset bundle).
/// No retry, caching or timeout is expected at this layer.
pub trait Fetch {
    /// Fetch the bytes behind `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, FetchError>> + Send;
}

/// Fetches `file://` URLs and bare paths from the local filesystem.
///
/// Relative paths resolve against the root given to [`FileFetcher::new`];
/// absolute paths are used as they are.
#[derive(Clone, Debug)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    /// Creates a fetcher resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory for relative paths.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a URL resolves to.
    pub fn resolve(&self, url: &str) -> PathBuf {
        self.root.join(url.strip_prefix("file://").unwrap_or(url))
    }
}

impl Default for FileFetcher {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Fetch for FileFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.resolve(url);
        trace!(url, path = %path.display(), "reading image file");
        Ok(tokio::fs::read(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::FileFetcher;

    #[test]
    fn resolve_strips_scheme_and_keeps_absolute_paths() {
        let fetcher = FileFetcher::new("/srv/assets");
        assert_eq!(
            fetcher.resolve("file:///tmp/0.jpg"),
            PathBuf::from("/tmp/0.jpg")
        );
        assert_eq!(
            fetcher.resolve("file://images/1.jpg"),
            PathBuf::from("/srv/assets/images/1.jpg")
        );
        assert_eq!(
            fetcher.resolve("images/2.jpg"),
            PathBuf::from("/srv/assets/images/2.jpg")
        );
    }

    #[test]
    fn default_root_is_current_directory() {
        assert_eq!(FileFetcher::default().root(), PathBuf::from("."));
    }
}
