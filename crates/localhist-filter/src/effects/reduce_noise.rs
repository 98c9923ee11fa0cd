//! Noise reduction
//!
//! Each channel value is compared with the rank it has in its own
//! neighborhood (the fraction of neighbors strictly darker). The pixel is
//! then pushed away from that rank-normalized color, more strongly in
//! dark areas than in bright ones.

use super::{check_radius, render_rois};
use crate::accumulator::{Accumulator, ChannelHistogram, Histogram};
use crate::error::{FilterError, FilterResult};
use crate::percentile::count_below;
use localhist_core::{ColorBgra, Rect, Surface, SurfaceMut};

/// Options for noise reduction
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceNoiseOptions {
    /// Neighborhood radius in pixels (default: 6)
    pub radius: u32,

    /// Effect strength, 0.0 to 1.0 (default: 0.4)
    pub strength: f64,
}

impl Default for ReduceNoiseOptions {
    fn default() -> Self {
        Self {
            radius: 6,
            strength: 0.4,
        }
    }
}

impl ReduceNoiseOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the strength
    pub fn with_strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> FilterResult<()> {
        check_radius("radius", self.radius)?;
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(FilterError::InvalidParameters(format!(
                "strength must be in 0.0..=1.0, got {}",
                self.strength
            )));
        }
        Ok(())
    }

    /// Statistic for one window.
    pub fn apply(&self, color: ColorBgra, hist: &ChannelHistogram) -> ColorBgra {
        let area = hist.area();
        let rank = |value: u8, channel: &Histogram| (count_below(value, channel) * 255 / area) as u8;
        let normalized = ColorBgra::from_bgr(
            rank(color.b, hist.blue()),
            rank(color.g, hist.green()),
            rank(color.r, hist.red()),
        );

        let frac = -0.2 * self.strength * (1.0 - 0.75 * color.intensity());
        ColorBgra::lerp(color, normalized, frac)
    }

    /// Filter the given regions of `src` into `dst`.
    pub fn render(&self, src: &Surface, dst: &mut SurfaceMut, rois: &[Rect]) -> FilterResult<()> {
        self.validate()?;
        render_rois(
            "reduce_noise",
            self.radius,
            src,
            dst,
            rois,
            |p, h: &ChannelHistogram| self.apply(p, h),
        )
    }
}

/// Reduce noise over the whole surface.
pub fn reduce_noise(src: &Surface, options: &ReduceNoiseOptions) -> FilterResult<Surface> {
    let mut dst = src.create_template();
    options.render(src, &mut dst, &[src.bounds()])?;
    Ok(dst.into())
}
