//! Unfocus
//!
//! A disc blur computed from the alpha-weighted histogram: every channel
//! becomes the alpha-weighted mean of its neighborhood and alpha becomes
//! the plain mean alpha. Transparent neighbors take up room in the
//! window without lending their color.

use super::{check_radius, render_rois};
use crate::accumulator::{Accumulator, AlphaWeightedHistogram, Histogram};
use crate::error::FilterResult;
use localhist_core::{ColorBgra, Rect, Surface, SurfaceMut};

/// Options for the unfocus effect
#[derive(Debug, Clone, PartialEq)]
pub struct UnfocusOptions {
    /// Neighborhood radius in pixels (default: 4)
    pub radius: u32,
}

impl Default for UnfocusOptions {
    fn default() -> Self {
        Self { radius: 4 }
    }
}

impl UnfocusOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> FilterResult<()> {
        check_radius("radius", self.radius)
    }

    /// Statistic for one window.
    pub fn apply(&self, _src: ColorBgra, hist: &AlphaWeightedHistogram) -> ColorBgra {
        let area = hist.area();
        // each bucket holds up to area * 255, so the weighted sums need 64 bits
        let div = area as i64 * 255;
        let [b, g, r] = hist
            .channels()
            .map(|channel| (weighted_total(channel) / div) as i32);
        ColorBgra::from_bgra_clamped(b, g, r, hist.sum() / area)
    }

    /// Filter the given regions of `src` into `dst`.
    pub fn render(&self, src: &Surface, dst: &mut SurfaceMut, rois: &[Rect]) -> FilterResult<()> {
        self.validate()?;
        render_rois(
            "unfocus",
            self.radius,
            src,
            dst,
            rois,
            |p, h: &AlphaWeightedHistogram| self.apply(p, h),
        )
    }
}

/// Unfocus the whole surface.
pub fn unfocus(src: &Surface, options: &UnfocusOptions) -> FilterResult<Surface> {
    let mut dst = src.create_template();
    options.render(src, &mut dst, &[src.bounds()])?;
    Ok(dst.into())
}

fn weighted_total(hist: &Histogram) -> i64 {
    hist.iter()
        .enumerate()
        .skip(1)
        .map(|(value, &weight)| value as i64 * weight as i64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfocus_options_validate() {
        assert!(UnfocusOptions::default().validate().is_ok());
        assert_eq!(UnfocusOptions::default().radius, 4);
        assert!(UnfocusOptions::new().with_radius(0).validate().is_err());
        assert!(UnfocusOptions::new().with_radius(201).validate().is_err());
    }

    #[test]
    fn test_unfocus_uniform_opaque_is_identity() {
        let color = ColorBgra::from_bgr(10, 20, 30);
        let src = Surface::filled(10, 7, color).unwrap();
        let out = unfocus(&src, &UnfocusOptions::default()).unwrap();
        assert!(out.data().iter().all(|&p| p == color));
    }

    #[test]
    fn test_unfocus_apply_weights_by_alpha() {
        let opts = UnfocusOptions::default();
        let mut hist = AlphaWeightedHistogram::default();
        hist.add(ColorBgra::from_bgra(200, 200, 200, 255));
        hist.add(ColorBgra::from_bgra(0, 0, 0, 0));
        // b = 200 * 255 / (2 * 255) = 100, alpha = 255 / 2
        let out = opts.apply(ColorBgra::TRANSPARENT, &hist);
        assert_eq!(out, ColorBgra::from_bgra(100, 100, 100, 127));
    }

    #[test]
    fn test_unfocus_transparent_surface_stays_transparent() {
        let src = Surface::filled(6, 6, ColorBgra::from_bgra(90, 90, 90, 0)).unwrap();
        let out = unfocus(&src, &UnfocusOptions::new().with_radius(2)).unwrap();
        assert!(out.data().iter().all(|&p| p == ColorBgra::TRANSPARENT));
    }
}
