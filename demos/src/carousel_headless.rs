// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless carousel: load images from disk, replay a drag, write one frame as a PNG.
//!
//! Run:
//! - `cargo run -p carousel_demos --bin carousel_headless -- --drag-from 500 --drag-to 100 a.png b.jpg`
//!
//! Set `RUST_LOG=carousel=debug` to see per-image and per-frame events.

use std::path::PathBuf;

use anyhow::{Context, bail};
use carousel::{Carousel, CarouselConfig, InputEvent};
use carousel_loader::{FileFetcher, LoadedImage, load_all};
use clap::Parser;
use image::ImageFormat;
use kurbo::Point;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "carousel=info";

#[derive(Parser, Debug)]
#[command(about = "Render one frame of an image carousel to a PNG")]
struct Args {
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,
    /// Pointer x where the replayed drag starts.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    drag_from: f64,
    /// Pointer x where the replayed drag ends.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    drag_to: f64,
    /// Extra "next" steps applied after the drag.
    #[arg(long, default_value_t = 0)]
    steps: usize,
    /// Background behind letterboxed images, as a CSS color.
    #[arg(long, default_value = "transparent", value_parser = parse_background)]
    background: Color,
    /// Directory image paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Where to write the rendered frame.
    #[arg(long, short, default_value = "carousel.png")]
    output: PathBuf,
    /// Images, in slot order.
    #[arg(required = true)]
    images: Vec<String>,
}

fn parse_background(s: &str) -> Result<Color, String> {
    parse_color(s)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|err| err.to_string())
}

/// Filter from `RUST_LOG` when it is set and valid, `carousel=info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let args = Args::parse();
    let config = CarouselConfig::default()
        .with_size(f64::from(args.width), f64::from(args.height))
        .with_background(args.background);
    let mut carousel = Carousel::<LoadedImage>::new(config)?;

    let fetcher = FileFetcher::new(&args.root);
    carousel.finish_loading(load_all(&fetcher, &args.images).await);
    if let Some(err) = carousel.load_state().error() {
        bail!("could not load {}: {err}", err.url());
    }

    let y = f64::from(args.height) / 2.0;
    carousel.handle(InputEvent::PointerDown(Point::new(args.drag_from, y)));
    carousel.handle(InputEvent::PointerMove(Point::new(args.drag_to, y)));
    carousel.handle(InputEvent::PointerUp);
    for _ in 0..args.steps {
        if !carousel.step_next() {
            break;
        }
    }
    info!(offset = carousel.scroll_offset(), "input replayed");

    let mut surface = carousel.config().raster_surface();
    let placed = match carousel.frame(&mut surface) {
        Some(placed) => placed,
        None => carousel.render(&mut surface),
    };
    for placement in &placed {
        info!(
            index = placement.index,
            x = placement.x,
            y = placement.y,
            width = placement.width,
            height = placement.height,
            "slot drawn"
        );
    }

    let a11y = carousel.accessibility();
    info!(
        role = a11y.role,
        label = a11y.label,
        current = a11y.value_now,
        max = a11y.value_max,
        "accessibility"
    );

    surface
        .pixels()
        .save_with_format(&args.output, ImageFormat::Png)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!(path = %args.output.display(), "frame written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing::level_filters::LevelFilter;

    use super::log_filter;

    #[test]
    fn rust_log_overrides_default_directive() {
        let filter = log_filter(Some("carousel=debug"));
        assert_eq!(filter.to_string(), "carousel=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn missing_or_blank_rust_log_falls_back_to_info() {
        assert_eq!(log_filter(None).to_string(), "carousel=info");
        assert_eq!(log_filter(Some("  ")).to_string(), "carousel=info");
    }
}
