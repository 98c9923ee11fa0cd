//! Local histogram effects
//!
//! Statistic functions plugged into the scanner, each paired with an
//! options struct:
//!
//! - [`median`]: per-channel percentile of the neighborhood
//! - [`reduce_noise`]: pulls each channel toward its local rank
//! - [`outline`]: inverted spread between two percentiles
//! - [`unfocus`]: alpha-weighted mean of the neighborhood
//! - [`surface_blur`]: mean of the neighbors close in value to the center
//!
//! Every effect validates its options, checks that source and destination
//! have the same size, and clips each region of interest to the surface
//! before scanning it. Regions that fall entirely outside are skipped.

pub mod median;
pub mod outline;
pub mod reduce_noise;
pub mod surface_blur;
pub mod unfocus;

pub use median::{MedianOptions, median_filter};
pub use outline::{OutlineOptions, outline};
pub use reduce_noise::{ReduceNoiseOptions, reduce_noise};
pub use surface_blur::{IntensityFunction, SurfaceBlurOptions, surface_blur};
pub use unfocus::{UnfocusOptions, unfocus};

use crate::accumulator::Accumulator;
use crate::error::{FilterError, FilterResult};
use crate::mask::DiscMask;
use crate::scanner::scan_rect;
use localhist_core::{ColorBgra, Rect, Surface, SurfaceMut};
use std::ops::RangeInclusive;

/// Smallest radius an effect accepts.
pub const MIN_RADIUS: u32 = 1;

/// Largest radius an effect accepts.
pub const MAX_RADIUS: u32 = 200;

pub(crate) fn check_radius(name: &str, radius: u32) -> FilterResult<()> {
    check_range(name, radius, MIN_RADIUS..=MAX_RADIUS)
}

pub(crate) fn check_range(name: &str, value: u32, range: RangeInclusive<u32>) -> FilterResult<()> {
    if !range.contains(&value) {
        return Err(FilterError::InvalidParameters(format!(
            "{name} must be in {}..={}, got {value}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

/// Scan every region of interest of `src` into `dst` with `apply`.
pub(crate) fn render_rois<A, F>(
    effect: &'static str,
    radius: u32,
    src: &Surface,
    dst: &mut SurfaceMut,
    rois: &[Rect],
    mut apply: F,
) -> FilterResult<()>
where
    A: Accumulator,
    F: FnMut(ColorBgra, &A) -> ColorBgra,
{
    src.check_same_size(dst.width(), dst.height())?;
    tracing::debug!(effect, radius, rois = rois.len(), "rendering effect");

    let mask = DiscMask::new(radius);
    let mut band = dst.as_band_mut();
    for roi in rois {
        match roi.clip(src.width(), src.height()) {
            Some(rect) => scan_rect::<A, _>(&mut apply, &mask, src, &mut band, rect),
            None => tracing::debug!(effect, ?roi, "region outside surface, skipped"),
        }
    }
    Ok(())
}
