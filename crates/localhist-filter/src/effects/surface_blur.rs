//! Surface blur
//!
//! Edge-preserving blur. Every neighbor value is weighted by a triangular
//! function of its distance from the center value, so neighbors across an
//! edge contribute little or nothing. Alpha is copied from the source pixel.

use super::{check_range, render_rois};
use crate::accumulator::{ChannelHistogram, HISTOGRAM_LEN, Histogram};
use crate::error::FilterResult;
use localhist_core::{ColorBgra, Rect, Surface, SurfaceMut};

/// Largest radius and threshold surface blur accepts.
const MAX_SETTING: u32 = 100;

/// Options for surface blur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceBlurOptions {
    /// Neighborhood radius in pixels, 1 to 100 (default: 6)
    pub radius: u32,

    /// Value distance over which the weight falls off, 1 to 100 (default: 15)
    pub threshold: u32,
}

impl Default for SurfaceBlurOptions {
    fn default() -> Self {
        Self {
            radius: 6,
            threshold: 15,
        }
    }
}

impl SurfaceBlurOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> FilterResult<()> {
        check_range("radius", self.radius, 1..=MAX_SETTING)?;
        check_range("threshold", self.threshold, 1..=MAX_SETTING)
    }

    /// Weight table for the configured threshold.
    pub fn intensity_function(&self) -> IntensityFunction {
        IntensityFunction::new(self.threshold)
    }

    /// Filter the given regions of `src` into `dst`.
    pub fn render(&self, src: &Surface, dst: &mut SurfaceMut, rois: &[Rect]) -> FilterResult<()> {
        self.validate()?;
        let weights = self.intensity_function();
        render_rois(
            "surface_blur",
            self.radius,
            src,
            dst,
            rois,
            |p, h: &ChannelHistogram| weights.apply(p, h),
        )
    }
}

/// Weight of a neighbor as a function of its distance from the center value.
///
/// The weight is `255 - d * 96 / threshold`, rounded half away from zero and
/// floored at 0. It is computed once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityFunction {
    factors: [i32; HISTOGRAM_LEN],
}

impl IntensityFunction {
    /// Build the table for `threshold`, which must be positive.
    pub fn new(threshold: u32) -> Self {
        debug_assert!(threshold > 0);
        let slope = 96.0 / threshold as f64;
        let mut factors = [0; HISTOGRAM_LEN];
        for (i, factor) in factors.iter_mut().enumerate() {
            // f64::round rounds half away from zero
            *factor = ((255.0 - i as f64 * slope).round() as i32).max(0);
        }
        Self { factors }
    }

    /// Weight for a value distance of `diff`.
    pub fn factor(&self, diff: u8) -> i32 {
        self.factors[diff as usize]
    }

    /// Weighted mean of `hist` around `current`, or `current` when every
    /// occupied bucket has zero weight.
    pub fn blur_channel(&self, current: u8, hist: &Histogram) -> u8 {
        let mut sum = 0i64;
        let mut divisor = 0i64;
        for (bin, &count) in hist.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let weight = self.factor((bin as i32 - current as i32).unsigned_abs() as u8);
            if weight > 0 {
                let t = count as i64 * weight as i64;
                sum += t * bin as i64;
                divisor += t;
            }
        }
        if divisor == 0 {
            return current;
        }
        ((sum + (divisor >> 1)) / divisor) as u8
    }

    /// Statistic for one window.
    pub fn apply(&self, color: ColorBgra, hist: &ChannelHistogram) -> ColorBgra {
        ColorBgra::from_bgra(
            self.blur_channel(color.b, hist.blue()),
            self.blur_channel(color.g, hist.green()),
            self.blur_channel(color.r, hist.red()),
            color.a,
        )
    }
}

/// Surface-blur the whole surface.
pub fn surface_blur(src: &Surface, options: &SurfaceBlurOptions) -> FilterResult<Surface> {
    let mut dst = src.create_template();
    options.render(src, &mut dst, &[src.bounds()])?;
    Ok(dst.into())
}
