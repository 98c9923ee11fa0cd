//! Sliding-window local histogram scanner
//!
//! For every pixel of a rectangle, builds the histogram of the disc
//! around it and hands it to a caller-supplied statistic function that
//! produces the output pixel.
//!
//! The histogram for the first pixel of each row is built from scratch
//! in O(r²). Moving one column right only changes the leftmost pixel of
//! every disc row (it leaves) and the pixel just past the rightmost one
//! (it enters). The [`DiscMask`] leading-edge table gives both columns
//! per row, so each step costs O(r). Rows never share state, which is
//! what lets callers scan disjoint bands concurrently.
//!
//! Pixels outside the surface are excluded from the window; near the
//! border the window simply contains fewer pixels.
//!
//! # Preconditions
//!
//! The rectangle must lie inside the source surface, the destination
//! band must have the source's width and cover every row of the
//! rectangle. These are caller obligations checked only by
//! `debug_assert!`.

use crate::accumulator::{Accumulator, AlphaWeightedHistogram, ChannelHistogram};
use crate::mask::{DiscMask, MAX_SCAN_RADIUS};
use localhist_core::{ColorBgra, Rect, RowBandMut, Surface, SurfaceMut};

/// Scan `rect` with the plain four-channel histogram.
///
/// `apply` receives the source pixel at the window center and the
/// histogram of its neighborhood, and returns the pixel written to `dst`.
/// Pixels of `dst` outside `rect` are left untouched.
///
/// # Examples
///
/// ```
/// use localhist_core::{ColorBgra, Surface};
/// use localhist_filter::{percentile, render_rect};
///
/// let src = Surface::filled(8, 8, ColorBgra::from_bgr(10, 20, 30)).unwrap();
/// let mut dst = src.create_template();
/// render_rect(
///     |_, hist| percentile(0, hist),
///     2,
///     &src,
///     &mut dst,
///     src.bounds(),
/// );
/// assert_eq!(dst.get_pixel(4, 4), Some(ColorBgra::from_bgr(10, 20, 30)));
/// ```
pub fn render_rect<F>(apply: F, radius: u32, src: &Surface, dst: &mut SurfaceMut, rect: Rect)
where
    F: FnMut(ColorBgra, &ChannelHistogram) -> ColorBgra,
{
    let mask = DiscMask::new(radius);
    scan_rect(apply, &mask, src, &mut dst.as_band_mut(), rect);
}

/// Scan `rect` with the alpha-weighted three-channel histogram.
///
/// Same traversal as [`render_rect`]; the callback receives an
/// [`AlphaWeightedHistogram`] whose color buckets are weighted by alpha.
pub fn render_rect_with_alpha<F>(
    apply: F,
    radius: u32,
    src: &Surface,
    dst: &mut SurfaceMut,
    rect: Rect,
) where
    F: FnMut(ColorBgra, &AlphaWeightedHistogram) -> ColorBgra,
{
    let mask = DiscMask::new(radius);
    scan_rect(apply, &mask, src, &mut dst.as_band_mut(), rect);
}

/// Scan `rect` incrementally, writing into a destination band.
///
/// This is the generic entry point behind [`render_rect`] and
/// [`render_rect_with_alpha`]. The accumulator strategy `A` is chosen by
/// the callback's signature. A prebuilt `mask` can be shared across
/// calls, and `dst` may be one band of a larger surface so that several
/// threads can each scan their own rows.
pub fn scan_rect<A, F>(
    mut apply: F,
    mask: &DiscMask,
    src: &Surface,
    dst: &mut RowBandMut<'_>,
    rect: Rect,
) where
    A: Accumulator,
    F: FnMut(ColorBgra, &A) -> ColorBgra,
{
    if rect.is_empty() {
        return;
    }
    check_preconditions(mask, src, dst, rect);
    tracing::trace!(radius = mask.radius(), ?rect, "local histogram scan");

    let height = src.height() as i32;
    let r = mask.radius() as i32;
    let mut acc = A::default();

    for y in rect.top()..=rect.bottom() {
        acc.reset();

        // assert: v + y >= 0
        let top = -r.min(y);
        // assert: v + y <= height - 1
        let bottom = r.min(height - 1 - y);

        fill_window(&mut acc, mask, src, rect.left(), y, top, bottom);
        debug_assert!(acc.is_consistent(), "row {y}: inconsistent histogram");

        let src_row = src.row(y as u32);
        let dst_row = dst.row_mut(y as u32);
        for x in rect.left()..=rect.right() {
            if x > rect.left() {
                slide_right(&mut acc, mask, src, x - 1, y, top, bottom);
                debug_assert!(acc.is_consistent(), "({x}, {y}): inconsistent histogram");
            }
            dst_row[x as usize] = apply(src_row[x as usize], &acc);
        }
    }
}

/// Scan `rect` by rebuilding the full histogram at every pixel.
///
/// O(r²) per pixel. Produces exactly the same output as [`scan_rect`]
/// and serves as its reference definition.
pub fn scan_rect_brute_force<A, F>(
    mut apply: F,
    mask: &DiscMask,
    src: &Surface,
    dst: &mut RowBandMut<'_>,
    rect: Rect,
) where
    A: Accumulator,
    F: FnMut(ColorBgra, &A) -> ColorBgra,
{
    if rect.is_empty() {
        return;
    }
    check_preconditions(mask, src, dst, rect);

    let mut acc = A::default();
    for y in rect.top()..=rect.bottom() {
        for x in rect.left()..=rect.right() {
            accumulate_at(mask, src, x as u32, y as u32, &mut acc);
            let out = apply(src.get_pixel_unchecked(x as u32, y as u32), &acc);
            dst.set_pixel_unchecked(x as u32, y as u32, out);
        }
    }
}

/// Reset `acc` and add every in-surface disc member around `(x, y)`.
pub fn accumulate_at<A: Accumulator>(mask: &DiscMask, src: &Surface, x: u32, y: u32, acc: &mut A) {
    debug_assert!(x < src.width() && y < src.height());
    let r = mask.radius() as i32;
    let (x, y) = (x as i32, y as i32);
    let top = -r.min(y);
    let bottom = r.min(src.height() as i32 - 1 - y);

    acc.reset();
    fill_window(acc, mask, src, x, y, top, bottom);
}

/// Add every disc member around `(x, y)` on rows `top..=bottom`,
/// clipping columns to the surface.
fn fill_window<A: Accumulator>(
    acc: &mut A,
    mask: &DiscMask,
    src: &Surface,
    x: i32,
    y: i32,
    top: i32,
    bottom: i32,
) {
    let r = mask.radius() as i32;
    // assert: u + x >= 0
    let left = -r.min(x);
    // assert: u + x <= width - 1
    let right = r.min(src.width() as i32 - 1 - x);

    for v in top..=bottom {
        let row = src.row((y + v) as u32);
        for u in left..=right {
            if mask.contains(u, v) {
                acc.add(row[(x + u) as usize]);
            }
        }
    }
}

/// Move the window centered at `(x, y)` to `(x + 1, y)`.
fn slide_right<A: Accumulator>(
    acc: &mut A,
    mask: &DiscMask,
    src: &Surface,
    x: i32,
    y: i32,
    top: i32,
    bottom: i32,
) {
    let r = mask.radius() as i32;
    // Trailing pixel x - u leaves only if it was inside the surface.
    let left = -r.min(x);
    // Leading pixel x + u + 1 enters only if it is inside the surface.
    let right = (r + 1).min(src.width() as i32 - 1 - x);

    let pixel = |u: i32, v: i32| src.get_pixel_unchecked((x + u) as u32, (y + v) as u32);

    // upper half, walking outward from the center row
    slide_half(acc, mask, (top..=-1).rev(), left, right, pixel);
    // lower half
    slide_half(acc, mask, 0..=bottom, left, right, pixel);
}

/// Update one half of the disc for a one-column step.
///
/// `rows` walks outward from the center. Edge offsets never widen going
/// outward, so rows whose edge pixel is outside the surface form a
/// prefix of the walk; skip it and process the remainder.
#[inline]
fn slide_half<A, I, P>(acc: &mut A, mask: &DiscMask, rows: I, left: i32, right: i32, pixel: P)
where
    A: Accumulator,
    I: Iterator<Item = i32> + Clone,
    P: Fn(i32, i32) -> ColorBgra,
{
    for v in rows.clone().skip_while(|&v| -mask.edge(v) < left) {
        acc.remove(pixel(-mask.edge(v), v));
    }
    for v in rows.skip_while(|&v| mask.edge(v) + 1 > right) {
        acc.add(pixel(mask.edge(v) + 1, v));
    }
}

#[inline]
fn check_preconditions(mask: &DiscMask, src: &Surface, dst: &RowBandMut<'_>, rect: Rect) {
    debug_assert!(
        mask.radius() <= MAX_SCAN_RADIUS,
        "radius {} exceeds {MAX_SCAN_RADIUS}",
        mask.radius()
    );
    debug_assert!(
        src.bounds().contains_rect(&rect),
        "rect {rect:?} outside {}x{} surface",
        src.width(),
        src.height()
    );
    debug_assert_eq!(dst.width(), src.width(), "destination width mismatch");
    debug_assert!(
        dst.contains_row(rect.top() as u32) && dst.contains_row(rect.bottom() as u32),
        "destination rows {}..={} do not cover rect {rect:?}",
        dst.top(),
        dst.bottom()
    );
}
