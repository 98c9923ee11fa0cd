//! Median (percentile) filter
//!
//! Replaces each channel of every pixel with the chosen percentile of the
//! same channel over its disc neighborhood. With the default 50 this is a
//! circular median filter.

use super::{check_radius, render_rois};
use crate::accumulator::ChannelHistogram;
use crate::error::{FilterError, FilterResult};
use crate::percentile::percentile;
use localhist_core::{ColorBgra, Rect, Surface, SurfaceMut};

/// Options for the median filter
#[derive(Debug, Clone, PartialEq)]
pub struct MedianOptions {
    /// Neighborhood radius in pixels (default: 10)
    pub radius: u32,

    /// Percentile to select, 0 to 100 (default: 50)
    pub percentile: u32,
}

impl Default for MedianOptions {
    fn default() -> Self {
        Self {
            radius: 10,
            percentile: 50,
        }
    }
}

impl MedianOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighborhood radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the percentile
    pub fn with_percentile(mut self, percentile: u32) -> Self {
        self.percentile = percentile;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> FilterResult<()> {
        check_radius("radius", self.radius)?;
        if self.percentile > 100 {
            return Err(FilterError::InvalidParameters(format!(
                "percentile must be in 0..=100, got {}",
                self.percentile
            )));
        }
        Ok(())
    }

    /// Statistic for one window.
    pub fn apply(&self, _src: ColorBgra, hist: &ChannelHistogram) -> ColorBgra {
        percentile(self.percentile, hist)
    }

    /// Filter the given regions of `src` into `dst`.
    ///
    /// Pixels of `dst` outside every region are left untouched.
    pub fn render(&self, src: &Surface, dst: &mut SurfaceMut, rois: &[Rect]) -> FilterResult<()> {
        self.validate()?;
        render_rois("median", self.radius, src, dst, rois, |p, h: &ChannelHistogram| {
            self.apply(p, h)
        })
    }
}

/// Median-filter the whole surface.
///
/// # Examples
///
/// ```
/// use localhist_core::{ColorBgra, Surface};
/// use localhist_filter::{MedianOptions, median_filter};
///
/// let src = Surface::filled(16, 16, ColorBgra::from_bgr(40, 80, 120)).unwrap();
/// let out = median_filter(&src, &MedianOptions::new().with_radius(3)).unwrap();
/// assert_eq!(out.get_pixel(8, 8), Some(ColorBgra::from_bgr(41, 81, 121)));
/// ```
pub fn median_filter(src: &Surface, options: &MedianOptions) -> FilterResult<Surface> {
    let mut dst = src.create_template();
    options.render(src, &mut dst, &[src.bounds()])?;
    Ok(dst.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salt_and_pepper() -> Surface {
        let gray = ColorBgra::from_bgr(100, 100, 100);
        let mut pixels = vec![gray; 15 * 15];
        // isolated outliers, far enough apart for radius 2
        for &(x, y) in &[(3usize, 3usize), (10, 4), (7, 11)] {
            pixels[y * 15 + x] = ColorBgra::WHITE;
        }
        pixels[7 * 15 + 7] = ColorBgra::BLACK;
        Surface::from_pixels(15, 15, pixels).unwrap()
    }

    #[test]
    fn test_median_options_default() {
        let opts = MedianOptions::default();
        assert_eq!(opts.radius, 10);
        assert_eq!(opts.percentile, 50);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_median_options_validate() {
        assert!(MedianOptions::new().with_radius(0).validate().is_err());
        assert!(MedianOptions::new().with_radius(201).validate().is_err());
        assert!(MedianOptions::new().with_radius(200).validate().is_ok());
        assert!(MedianOptions::new().with_percentile(101).validate().is_err());
        assert!(MedianOptions::new().with_percentile(0).validate().is_ok());
        assert!(MedianOptions::new().with_percentile(100).validate().is_ok());
    }

    #[test]
    fn test_median_removes_isolated_outliers() {
        let src = salt_and_pepper();
        let out = median_filter(&src, &MedianOptions::new().with_radius(2)).unwrap();
        for &(x, y) in &[(3, 3), (10, 4), (7, 11), (7, 7)] {
            let p = out.get_pixel(x, y).unwrap();
            assert_eq!((p.b, p.g, p.r), (101, 101, 101), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn test_median_dimension_mismatch() {
        let src = salt_and_pepper();
        let mut dst = Surface::new(14, 15).unwrap().to_mut();
        let result = MedianOptions::new().render(&src, &mut dst, &[src.bounds()]);
        assert!(matches!(result, Err(FilterError::Core(_))));
    }

    #[test]
    fn test_median_roi_outside_is_skipped() {
        let src = salt_and_pepper();
        let mut dst = src.create_template();
        let far = Rect::new(100, 100, 5, 5).unwrap();
        MedianOptions::new()
            .render(&src, &mut dst, &[far])
            .unwrap();
        assert!(dst.data().iter().all(|&p| p == ColorBgra::TRANSPARENT));
    }
}
