//! Outline
//!
//! Measures how widely each channel is spread around its local median:
//! the distance between a lower and an upper percentile, symmetric about
//! 50 and `intensity` apart. Flat regions come out white and edges dark.
//!
//! Alpha is the upper position of the alpha walk. That walk starts at the
//! first occupied *blue* bucket, not the first occupied alpha bucket, so
//! alpha values below the lowest blue value are never counted. Opaque input
//! always yields opaque output.

use super::{check_radius, render_rois};
use crate::accumulator::{Accumulator, ChannelHistogram, Histogram};
use crate::error::{FilterError, FilterResult};
use localhist_core::{ColorBgra, Rect, Surface, SurfaceMut};

/// Options for the outline effect
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineOptions {
    /// Neighborhood radius in pixels (default: 3)
    pub thickness: u32,

    /// Percentile spread, 0 to 100 (default: 50)
    pub intensity: u32,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            thickness: 3,
            intensity: 50,
        }
    }
}

impl OutlineOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline thickness (the neighborhood radius)
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the intensity
    pub fn with_intensity(mut self, intensity: u32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> FilterResult<()> {
        check_radius("thickness", self.thickness)?;
        if self.intensity > 100 {
            return Err(FilterError::InvalidParameters(format!(
                "intensity must be in 0..=100, got {}",
                self.intensity
            )));
        }
        Ok(())
    }

    /// Statistic for one window.
    pub fn apply(&self, _src: ColorBgra, hist: &ChannelHistogram) -> ColorBgra {
        let area = hist.area();
        let intensity = self.intensity as i32;
        let lower = area * (100 - intensity) / 200;
        let upper = area * (100 + intensity) / 200;

        let [b, g, r] = [hist.blue(), hist.green(), hist.red()]
            .map(|channel| percentile_span(lower, upper, channel));
        let (_, a) = span_from(first_occupied(hist.blue()), lower, upper, hist.alpha());
        let spread = |(lo, hi): (u8, u8)| 255 - (hi - lo);
        ColorBgra::from_bgra(spread(b), spread(g), spread(r), a)
    }

    /// Filter the given regions of `src` into `dst`.
    pub fn render(&self, src: &Surface, dst: &mut SurfaceMut, rois: &[Rect]) -> FilterResult<()> {
        self.validate()?;
        render_rois(
            "outline",
            self.thickness,
            src,
            dst,
            rois,
            |p, h: &ChannelHistogram| self.apply(p, h),
        )
    }
}

/// Outline the whole surface.
pub fn outline(src: &Surface, options: &OutlineOptions) -> FilterResult<Surface> {
    let mut dst = src.create_template();
    options.render(src, &mut dst, &[src.bounds()])?;
    Ok(dst.into())
}

/// Positions reached when the running count first meets `lower` and then,
/// continuing from there, `upper`.
fn percentile_span(lower: i32, upper: i32, hist: &Histogram) -> (u8, u8) {
    span_from(first_occupied(hist), lower, upper, hist)
}

/// First non-empty bucket, or 255.
fn first_occupied(hist: &Histogram) -> usize {
    hist[..255].iter().position(|&n| n != 0).unwrap_or(255)
}

fn span_from(start: usize, lower: i32, upper: i32, hist: &Histogram) -> (u8, u8) {
    let mut lo = start;
    let mut count = 0;
    while lo < 255 && count < lower {
        count += hist[lo];
        lo += 1;
    }

    let mut hi = lo;
    while hi < 255 && count < upper {
        count += hist[hi];
        hi += 1;
    }
    (lo as u8, hi as u8)
}
