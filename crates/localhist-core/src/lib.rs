//! localhist-core - Basic data structures for local histogram filtering
//!
//! This crate provides the data structures shared by the localhist
//! engine and its callers:
//!
//! - [`ColorBgra`] - Four-channel 8-bit pixel
//! - [`Surface`] / [`SurfaceMut`] - The image container (immutable / mutable)
//! - [`RowBandMut`] - Disjoint mutable run of destination rows
//! - [`Rect`] - Region of interest with inclusive bounds

pub mod color;
pub mod error;
pub mod rect;
pub mod surface;

pub use color::{ColorBgra, clamp_f64_to_byte, clamp_to_byte};
pub use error::{Error, Result};
pub use rect::Rect;
pub use surface::{RowBandMut, Surface, SurfaceMut};
