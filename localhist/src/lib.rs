//! localhist - Local histogram image filters for Rust
//!
//! Filters that derive every output pixel from the color histogram of a
//! disc-shaped neighborhood, computed with an incremental sliding window
//! whose per-pixel cost grows with the radius rather than the area.
//!
//! # Overview
//!
//! - Core types: [`ColorBgra`], [`Surface`], [`SurfaceMut`], [`Rect`]
//! - [`filter`]: the scanner, histogram accumulators, percentile queries
//!   and the median, noise reduction, outline, unfocus and surface blur effects
//!
//! # Example
//!
//! ```
//! use localhist::filter::{MedianOptions, median_filter};
//! use localhist::{ColorBgra, Surface};
//!
//! let src = Surface::filled(64, 48, ColorBgra::from_bgr(0, 128, 255)).unwrap();
//! let out = median_filter(&src, &MedianOptions::new().with_radius(5)).unwrap();
//! assert_eq!(out.width(), 64);
//! assert_eq!(out.height(), 48);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use localhist_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use localhist_filter as filter;
