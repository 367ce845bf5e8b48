// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use futures_util::future::try_join_all;
use tokio::task;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::fetch::Fetch;
use crate::loaded::LoadedImage;

/// Loads and decodes every URL, all or nothing.
///
/// All loads run concurrently. The returned images are in the same order as
/// `urls` no matter which finishes first. The first failure rejects the whole
/// batch immediately; the remaining loads are dropped and no partial result is
/// returned. An empty list resolves to an empty vector.
///
/// Decoding runs on tokio's blocking pool, so this must be awaited inside a
/// tokio runtime.
pub async fn load_all<F, U>(fetcher: &F, urls: &[U]) -> Result<Vec<LoadedImage>, LoadError>
where
    F: Fetch + Sync,
    U: AsRef<str>,
{
    let loads = urls.iter().map(|url| load_one(fetcher, url.as_ref()));
    match try_join_all(loads).await {
        Ok(images) => {
            debug!(count = images.len(), "image batch loaded");
            Ok(images)
        }
        Err(err) => {
            warn!(error = ?err, url = err.url(), "image batch rejected");
            Err(err)
        }
    }
}

/// Fetches and decodes a single image.
pub async fn load_one<F>(fetcher: &F, url: &str) -> Result<LoadedImage, LoadError>
where
    F: Fetch + Sync,
{
    let bytes = fetcher
        .fetch(url)
        .await
        .map_err(|source| LoadError::Fetch {
            url: url.to_owned(),
            source,
        })?;

    let decoded = task::spawn_blocking(move || image::load_from_memory(&bytes))
        .await
        .map_err(|source| LoadError::Task {
            url: url.to_owned(),
            source,
        })?
        .map_err(|source| LoadError::Decode {
            url: url.to_owned(),
            source,
        })?;

    let pixels = decoded.into_rgba8();
    debug!(url, width = pixels.width(), height = pixels.height(), "image decoded");
    Ok(LoadedImage::new(url, pixels))
}
