// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Loader: all-or-nothing image batch loading.
//!
//! [`load_all`] takes an ordered list of URLs and a [`Fetch`] transport and
//! resolves to decoded [`LoadedImage`]s in the same order, or to the first
//! [`LoadError`] encountered. There is no best-effort mode: one bad URL rejects
//! the whole batch.
//!
//! ```no_run
//! use carousel_loader::{FileFetcher, load_all};
//!
//! # async fn run() -> Result<(), carousel_loader::LoadError> {
//! let fetcher = FileFetcher::new("assets");
//! let images = load_all(&fetcher, &["images/0.jpg", "images/1.jpg"]).await?;
//! assert_eq!(images[1].url(), "images/1.jpg");
//! # Ok(())
//! # }
//! ```
//!
//! Loaded images implement `carousel_compositor::IntrinsicSize` and borrow as
//! `image::RgbaImage`, so they can be handed straight to the compositor and
//! its raster surface.

mod batch;
mod error;
mod fetch;
mod loaded;

pub use batch::{load_all, load_one};
pub use error::{FetchError, LoadError};
pub use fetch::{Fetch, FileFetcher};
pub use loaded::LoadedImage;
