//! Histogram accumulators
//!
//! Fixed-size per-channel frequency tables that the scanner updates one
//! pixel at a time as the window slides. Two strategies exist:
//!
//! - [`ChannelHistogram`]: four tables (B, G, R, A), each pixel counts 1.
//! - [`AlphaWeightedHistogram`]: three color tables, each pixel counts
//!   its alpha value; a separate unweighted `area` and weighted `sum`
//!   are kept alongside.
//!
//! Removing a pixel that was never added is a caller error. It is not
//! detected in the hot path; [`Accumulator::is_consistent`] exists so
//! debug builds and tests can verify the bookkeeping.

use localhist_core::ColorBgra;

/// Number of buckets per channel (one per 8-bit value).
pub const HISTOGRAM_LEN: usize = 256;

/// One channel's frequency table.
pub type Histogram = [i32; HISTOGRAM_LEN];

/// Add/remove/reset strategy driven by the scanner.
pub trait Accumulator: Default {
    /// Zero every bucket and running total.
    fn reset(&mut self);

    /// Add one pixel's contribution.
    fn add(&mut self, pixel: ColorBgra);

    /// Remove one pixel's contribution.
    ///
    /// The pixel must have been added earlier and not yet removed.
    fn remove(&mut self, pixel: ColorBgra);

    /// Number of pixels currently contributing.
    fn area(&self) -> i32;

    /// Check the bucket invariants: no negative bucket or total, and
    /// every table sums to the total it is weighted by.
    fn is_consistent(&self) -> bool;
}

/// Plain four-channel histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistogram {
    blue: Histogram,
    green: Histogram,
    red: Histogram,
    alpha: Histogram,
    area: i32,
}

impl Default for ChannelHistogram {
    fn default() -> Self {
        Self {
            blue: [0; HISTOGRAM_LEN],
            green: [0; HISTOGRAM_LEN],
            red: [0; HISTOGRAM_LEN],
            alpha: [0; HISTOGRAM_LEN],
            area: 0,
        }
    }
}

impl ChannelHistogram {
    /// Blue channel counts.
    #[inline]
    pub fn blue(&self) -> &Histogram {
        &self.blue
    }

    /// Green channel counts.
    #[inline]
    pub fn green(&self) -> &Histogram {
        &self.green
    }

    /// Red channel counts.
    #[inline]
    pub fn red(&self) -> &Histogram {
        &self.red
    }

    /// Alpha channel counts.
    #[inline]
    pub fn alpha(&self) -> &Histogram {
        &self.alpha
    }

    /// The four tables in B, G, R, A order.
    #[inline]
    pub fn channels(&self) -> [&Histogram; 4] {
        [&self.blue, &self.green, &self.red, &self.alpha]
    }
}

impl Accumulator for ChannelHistogram {
    fn reset(&mut self) {
        self.blue.fill(0);
        self.green.fill(0);
        self.red.fill(0);
        self.alpha.fill(0);
        self.area = 0;
    }

    #[inline]
    fn add(&mut self, pixel: ColorBgra) {
        self.blue[pixel.b as usize] += 1;
        self.green[pixel.g as usize] += 1;
        self.red[pixel.r as usize] += 1;
        self.alpha[pixel.a as usize] += 1;
        self.area += 1;
    }

    #[inline]
    fn remove(&mut self, pixel: ColorBgra) {
        self.blue[pixel.b as usize] -= 1;
        self.green[pixel.g as usize] -= 1;
        self.red[pixel.r as usize] -= 1;
        self.alpha[pixel.a as usize] -= 1;
        self.area -= 1;
    }

    #[inline]
    fn area(&self) -> i32 {
        self.area
    }

    fn is_consistent(&self) -> bool {
        self.area >= 0
            && self
                .channels()
                .iter()
                .all(|h| h.iter().all(|&n| n >= 0) && sum_of(h) == self.area as i64)
    }
}

/// Alpha-weighted three-channel histogram.
///
/// Each color bucket accumulates the alpha of the pixels that fall in it,
/// so fully transparent pixels occupy space in the window without
/// influencing the color statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaWeightedHistogram {
    blue: Histogram,
    green: Histogram,
    red: Histogram,
    area: i32,
    sum: i32,
}

impl Default for AlphaWeightedHistogram {
    fn default() -> Self {
        Self {
            blue: [0; HISTOGRAM_LEN],
            green: [0; HISTOGRAM_LEN],
            red: [0; HISTOGRAM_LEN],
            area: 0,
            sum: 0,
        }
    }
}

impl AlphaWeightedHistogram {
    /// Alpha-weighted blue channel.
    #[inline]
    pub fn blue(&self) -> &Histogram {
        &self.blue
    }

    /// Alpha-weighted green channel.
    #[inline]
    pub fn green(&self) -> &Histogram {
        &self.green
    }

    /// Alpha-weighted red channel.
    #[inline]
    pub fn red(&self) -> &Histogram {
        &self.red
    }

    /// The three tables in B, G, R order.
    #[inline]
    pub fn channels(&self) -> [&Histogram; 3] {
        [&self.blue, &self.green, &self.red]
    }

    /// Total alpha mass currently in the window.
    #[inline]
    pub fn sum(&self) -> i32 {
        self.sum
    }
}

impl Accumulator for AlphaWeightedHistogram {
    fn reset(&mut self) {
        self.blue.fill(0);
        self.green.fill(0);
        self.red.fill(0);
        self.area = 0;
        self.sum = 0;
    }

    #[inline]
    fn add(&mut self, pixel: ColorBgra) {
        let w = pixel.a as i32;
        self.blue[pixel.b as usize] += w;
        self.green[pixel.g as usize] += w;
        self.red[pixel.r as usize] += w;
        self.sum += w;
        self.area += 1;
    }

    #[inline]
    fn remove(&mut self, pixel: ColorBgra) {
        let w = pixel.a as i32;
        self.blue[pixel.b as usize] -= w;
        self.green[pixel.g as usize] -= w;
        self.red[pixel.r as usize] -= w;
        self.sum -= w;
        self.area -= 1;
    }

    #[inline]
    fn area(&self) -> i32 {
        self.area
    }

    fn is_consistent(&self) -> bool {
        self.area >= 0
            && self.sum >= 0
            && self.sum <= self.area.saturating_mul(255)
            && self
                .channels()
                .iter()
                .all(|h| h.iter().all(|&n| n >= 0) && sum_of(h) == self.sum as i64)
    }
}

fn sum_of(h: &Histogram) -> i64 {
    h.iter().map(|&n| n as i64).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(b: u8, g: u8, r: u8, a: u8) -> ColorBgra {
        ColorBgra::from_bgra(b, g, r, a)
    }

    #[test]
    fn test_channel_add_remove() {
        let mut h = ChannelHistogram::default();
        h.add(px(1, 2, 3, 4));
        h.add(px(1, 5, 6, 7));
        assert_eq!(h.area(), 2);
        assert_eq!(h.blue()[1], 2);
        assert_eq!(h.green()[2], 1);
        assert_eq!(h.red()[6], 1);
        assert_eq!(h.alpha()[7], 1);
        assert!(h.is_consistent());

        h.remove(px(1, 2, 3, 4));
        assert_eq!(h.area(), 1);
        assert_eq!(h.blue()[1], 1);
        assert_eq!(h.green()[2], 0);
        assert!(h.is_consistent());
    }

    #[test]
    fn test_channel_reset() {
        let mut h = ChannelHistogram::default();
        for v in 0..=255u8 {
            h.add(px(v, v, v, v));
        }
        assert_eq!(h.area(), 256);
        h.reset();
        assert_eq!(h, ChannelHistogram::default());
    }

    #[test]
    fn test_channel_unbalanced_remove_detected() {
        let mut h = ChannelHistogram::default();
        h.add(px(9, 9, 9, 9));
        h.remove(px(8, 9, 9, 9));
        assert_eq!(h.area(), 0);
        assert_eq!(h.blue()[8], -1);
        assert!(!h.is_consistent());
    }

    #[test]
    fn test_weighted_add_remove() {
        let mut h = AlphaWeightedHistogram::default();
        h.add(px(10, 20, 30, 255));
        h.add(px(10, 40, 50, 0));
        h.add(px(11, 20, 30, 100));
        assert_eq!(h.area(), 3);
        assert_eq!(h.sum(), 355);
        assert_eq!(h.blue()[10], 255);
        assert_eq!(h.blue()[11], 100);
        assert_eq!(h.green()[40], 0);
        assert!(h.is_consistent());

        h.remove(px(10, 20, 30, 255));
        assert_eq!(h.area(), 2);
        assert_eq!(h.sum(), 100);
        assert_eq!(h.blue()[10], 0);
        assert!(h.is_consistent());
    }

    #[test]
    fn test_weighted_transparent_pixels_count_in_area_only() {
        let mut h = AlphaWeightedHistogram::default();
        for _ in 0..5 {
            h.add(px(200, 200, 200, 0));
        }
        assert_eq!(h.area(), 5);
        assert_eq!(h.sum(), 0);
        assert!(h.channels().iter().all(|c| c.iter().all(|&n| n == 0)));
        assert!(h.is_consistent());
    }

    #[test]
    fn test_weighted_reset() {
        let mut h = AlphaWeightedHistogram::default();
        h.add(px(1, 2, 3, 4));
        h.reset();
        assert_eq!(h, AlphaWeightedHistogram::default());
    }
}
