//! Banded concurrent scan regression test
//!
//! The scanner keeps no state between rows, so a destination split into
//! disjoint row bands can be filled in parallel on the rayon pool. These tests
//! check that such a banded scan is pixel-identical to a single scan:
//!   (1) Plain histogram with a percentile statistic
//!   (2) Alpha-weighted histogram with the unfocus statistic
//!   (3) A sub-rectangle split by Rect::split_rows()

use localhist_core::{ColorBgra, Rect, Surface};
use localhist_filter::{
    Accumulator, AlphaWeightedHistogram, ChannelHistogram, DiscMask, MedianOptions,
    UnfocusOptions, scan_rect,
};
use localhist_test::{RegParams, gradient_surface, noise_surface};
use rayon::prelude::*;

/// Scan `rect` of `src` in parallel bands of `rows_per_band` rows.
fn banded_scan<A, F>(
    src: &Surface,
    radius: u32,
    rect: Rect,
    rows_per_band: u32,
    apply: F,
) -> Surface
where
    A: Accumulator,
    F: Fn(ColorBgra, &A) -> ColorBgra + Sync,
{
    let mask = DiscMask::new(radius);
    let mut dst = src.create_template();
    let bands = dst.bands_mut(rows_per_band).unwrap();

    bands.into_par_iter().for_each(|mut band| {
        let rows = Rect::new_unchecked(
            0,
            band.top() as i32,
            src.width() as i32,
            band.rows() as i32,
        );
        if let Some(part) = rect.intersect(&rows) {
            scan_rect::<A, _>(&apply, &mask, src, &mut band, part);
        }
    });
    dst.into()
}

fn single_scan<A, F>(src: &Surface, radius: u32, rect: Rect, apply: F) -> Surface
where
    A: Accumulator,
    F: FnMut(ColorBgra, &A) -> ColorBgra,
{
    let mask = DiscMask::new(radius);
    let mut dst = src.create_template();
    scan_rect(apply, &mask, src, &mut dst.as_band_mut(), rect);
    dst.into()
}

/// Test 1: banded median equals a single-threaded median
#[test]
fn concurrent_reg_plain() {
    let mut rp = RegParams::new("concurrent_plain");

    let src = noise_surface(40, 37, 5).unwrap();
    let opts = MedianOptions::new().with_radius(6);
    let apply = |p, h: &ChannelHistogram| opts.apply(p, h);
    let expected = single_scan(&src, 6, src.bounds(), apply);
    for rows_per_band in [1u32, 4, 9, 37, 100] {
        let out = banded_scan(&src, 6, src.bounds(), rows_per_band, apply);
        rp.compare_surfaces(&expected, &out);
    }

    assert!(rp.cleanup(), "concurrent_plain regression test failed");
}

/// Test 2: banded unfocus equals a single-threaded unfocus
#[test]
fn concurrent_reg_weighted() {
    let mut rp = RegParams::new("concurrent_weighted");

    let src = noise_surface(33, 29, 17).unwrap();
    let opts = UnfocusOptions::new().with_radius(5);
    let expected = localhist_filter::unfocus(&src, &opts).unwrap();
    for rows_per_band in [2u32, 7, 29] {
        let out = banded_scan(&src, 5, src.bounds(), rows_per_band, |p, h: &AlphaWeightedHistogram| {
            opts.apply(p, h)
        });
        rp.compare_surfaces(&expected, &out);
    }

    assert!(rp.cleanup(), "concurrent_weighted regression test failed");
}

/// Test 3: a sub-rectangle split into row bands covers it exactly once
#[test]
fn concurrent_reg_split_rows() {
    let mut rp = RegParams::new("concurrent_split_rows");

    let src = gradient_surface(30, 30).unwrap();
    let rect = Rect::from_ltrb(4, 3, 25, 26);
    let opts = MedianOptions::new().with_radius(4).with_percentile(30);
    let apply = |p, h: &ChannelHistogram| opts.apply(p, h);
    let expected = single_scan(&src, 4, rect, apply);

    let parts = rect.split_rows(5).unwrap();
    rp.compare_values(5.0, parts.len() as f64, 0.0);
    let covered: i64 = parts.iter().map(|r| r.area()).sum();
    rp.compare_values(rect.area() as f64, covered as f64, 0.0);

    let out = banded_scan(&src, 4, rect, 5, apply);
    rp.compare_surfaces(&expected, &out);

    assert!(rp.cleanup(), "concurrent_split_rows regression test failed");
}
