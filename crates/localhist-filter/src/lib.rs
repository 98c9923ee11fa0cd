//! localhist-filter - Sliding-window local histogram filtering
//!
//! This crate computes, for every pixel of a [`Surface`](localhist_core::Surface),
//! the per-channel histogram of a disc-shaped neighborhood and passes it to a
//! statistic function that produces the output pixel:
//!
//! - [`mask`] - Disc geometry and the leading-edge table
//! - [`accumulator`] - Plain and alpha-weighted channel histograms
//! - [`scanner`] - Incremental O(radius) per-pixel window update
//! - [`percentile`] - Percentile queries, the canonical statistic
//! - [`effects`] - Median, noise reduction, outline, unfocus and surface blur
//!
//! The scanner writes into a [`RowBandMut`](localhist_core::RowBandMut), so
//! callers can split a destination into disjoint bands and scan each on its
//! own thread. The crate itself never spawns threads.

pub mod accumulator;
pub mod effects;
mod error;
pub mod mask;
pub mod percentile;
pub mod scanner;

pub use error::{FilterError, FilterResult};

pub use accumulator::{Accumulator, AlphaWeightedHistogram, ChannelHistogram, HISTOGRAM_LEN, Histogram};
pub use effects::{
    IntensityFunction, MAX_RADIUS, MIN_RADIUS, MedianOptions, OutlineOptions, ReduceNoiseOptions,
    SurfaceBlurOptions, UnfocusOptions, median_filter, outline, reduce_noise, surface_blur, unfocus,
};
pub use mask::{DiscMask, MAX_SCAN_RADIUS, cutoff_for_radius, max_area_for_radius};
pub use percentile::{channel_percentile, count_below, percentile};
pub use scanner::{
    accumulate_at, render_rect, render_rect_with_alpha, scan_rect, scan_rect_brute_force,
};
