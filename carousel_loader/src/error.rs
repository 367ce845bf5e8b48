// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failure reported by a [`Fetch`](crate::Fetch) implementation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Reading the resource failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The transport refused or could not serve the request.
    #[error("{0}")]
    Transport(String),
}

/// Why a batch load was rejected.
///
/// Every variant names the URL that sank the batch.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The bytes for `url` could not be fetched.
    #[error("failed to fetch image {url}")]
    Fetch {
        /// URL that failed.
        url: String,
        /// Underlying transport error.
        #[source]
        source: FetchError,
    },
    /// The bytes for `url` are not a decodable image.
    #[error("failed to decode image {url}")]
    Decode {
        /// URL that failed.
        url: String,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The blocking decode task for `url` panicked or was cancelled.
    #[error("decode task for image {url} did not complete")]
    Task {
        /// URL whose task failed.
        url: String,
        /// Runtime join error.
        #[source]
        source: tokio::task::JoinError,
    },
}

impl LoadError {
    /// URL of the image that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Fetch { url, .. } | Self::Decode { url, .. } | Self::Task { url, .. } => url,
        }
    }
}
