//! Percentile queries over channel histograms
//!
//! The canonical statistic plugged into the scanner. A percentile `p` of a
//! window with `area` pixels is located by walking the histogram upward
//! until the running count reaches `area * p / 100`.

use crate::accumulator::{Accumulator, ChannelHistogram, Histogram};
use localhist_core::ColorBgra;

/// Walk `hist` to the position where the running count reaches `min_count`.
///
/// Leading empty buckets are skipped first, so the result for `p = 0` is
/// the smallest value present. The walk stops at 255, which is also what
/// an empty histogram yields. The returned value is one past the last
/// bucket consumed: the count of buckets strictly below it is the first
/// running count `>= min_count`.
///
/// The result is the position *after* the qualifying bucket, not the
/// qualifying value itself: ten pixels at 5 and ten at 200 give 6 for
/// `min_count = 10`.
pub fn channel_percentile(min_count: i32, hist: &Histogram) -> u8 {
    let mut c = 0usize;
    while c < 255 && hist[c] == 0 {
        c += 1;
    }

    let mut count = 0;
    while c < 255 && count < min_count {
        count += hist[c];
        c += 1;
    }
    c as u8
}

/// Per-channel percentile of a window.
///
/// `p` is in `0..=100`; the same threshold `area * p / 100` is applied to
/// all four channels independently.
///
/// # Examples
///
/// ```
/// use localhist_core::ColorBgra;
/// use localhist_filter::{Accumulator, ChannelHistogram, percentile};
///
/// let mut hist = ChannelHistogram::default();
/// for v in [10u8, 20, 30] {
///     hist.add(ColorBgra::from_bgra(v, v, v, 255));
/// }
/// assert_eq!(percentile(0, &hist).b, 10);
/// ```
pub fn percentile(p: u32, hist: &ChannelHistogram) -> ColorBgra {
    debug_assert!(p <= 100, "percentile {p} out of range");
    let min_count = hist.area() * p as i32 / 100;
    let [b, g, r, a] = hist
        .channels()
        .map(|channel| channel_percentile(min_count, channel));
    ColorBgra::from_bgra(b, g, r, a)
}

/// Number of samples strictly below `value`.
#[inline]
pub fn count_below(value: u8, hist: &Histogram) -> i32 {
    hist[..value as usize].iter().sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_cluster() -> Histogram {
        let mut h = [0; 256];
        h[5] = 10;
        h[200] = 10;
        h
    }

    #[test]
    fn test_channel_percentile_boundaries() {
        let h = two_cluster();
        // area 20
        assert_eq!(channel_percentile(0, &h), 5);
        assert_eq!(channel_percentile(20 * 50 / 100, &h), 6);
        assert_eq!(channel_percentile(20, &h), 201);
    }

    #[test]
    fn test_channel_percentile_stops_after_qualifying_bucket() {
        let h = two_cluster();
        // any threshold up to the first cluster stops right after it
        for min_count in 1..=10 {
            assert_eq!(channel_percentile(min_count, &h), 6);
        }
        assert_eq!(channel_percentile(11, &h), 201);
    }

    #[test]
    fn test_channel_percentile_empty_and_saturated() {
        let empty = [0; 256];
        assert_eq!(channel_percentile(0, &empty), 255);
        assert_eq!(channel_percentile(5, &empty), 255);

        let mut top = [0; 256];
        top[255] = 3;
        assert_eq!(channel_percentile(0, &top), 255);
        assert_eq!(channel_percentile(3, &top), 255);

        let mut bottom = [0; 256];
        bottom[0] = 4;
        assert_eq!(channel_percentile(0, &bottom), 0);
        assert_eq!(channel_percentile(2, &bottom), 1);
    }

    #[test]
    fn test_percentile_per_channel() {
        let mut hist = ChannelHistogram::default();
        for i in 0..10u8 {
            hist.add(ColorBgra::from_bgra(5, 100 + i, 7, 255));
        }
        for _ in 0..10 {
            hist.add(ColorBgra::from_bgra(200, 50, 7, 255));
        }
        let p0 = percentile(0, &hist);
        assert_eq!((p0.b, p0.g, p0.r, p0.a), (5, 50, 7, 255));

        let p50 = percentile(50, &hist);
        assert_eq!(p50.b, 6);
        assert_eq!(p50.g, 51);

        let p100 = percentile(100, &hist);
        assert_eq!(p100.b, 201);
        assert_eq!(p100.g, 110);
        assert_eq!(p100.a, 255);
    }

    #[test]
    fn test_count_below() {
        let h = two_cluster();
        assert_eq!(count_below(0, &h), 0);
        assert_eq!(count_below(5, &h), 0);
        assert_eq!(count_below(6, &h), 10);
        assert_eq!(count_below(255, &h), 20);
    }
}
