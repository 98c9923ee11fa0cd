//! Rect - Region of interest
//!
//! An axis-aligned integer rectangle. Scans address pixels with the
//! inclusive `left..=right` / `top..=bottom` bounds, so those accessors
//! are inclusive; `w` and `h` are pixel counts.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A small `Copy` type, passed by value everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width in pixels
    pub w: i32,
    /// Height in pixels
    pub h: i32,
}

impl Rect {
    /// Create a new rect
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rect without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rect from inclusive corner coordinates
    ///
    /// `right < left` or `bottom < top` yields an empty rect.
    pub fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            x: left,
            y: top,
            w: (right - left + 1).max(0),
            h: (bottom - top + 1).max(0),
        }
    }

    /// Left x coordinate (inclusive)
    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Top y coordinate (inclusive)
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Right x coordinate (inclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    /// Bottom y coordinate (inclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rect is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the rect
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if this rect contains another rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Compute the intersection of two rects
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if left <= right && top <= bottom {
            Some(Rect::from_ltrb(left, top, right, bottom))
        } else {
            None
        }
    }


    /// Clip the rect to an image of the given size
    ///
    /// Returns `None` when nothing of the rect lies inside the image.
    pub fn clip(&self, width: u32, height: u32) -> Option<Rect> {
        let bounds = Rect::new_unchecked(0, 0, width as i32, height as i32);
        if self.is_empty() || bounds.is_empty() {
            return None;
        }
        self.intersect(&bounds)
    }

    /// Split the rect into horizontal bands of at most `rows_per_band` rows
    ///
    /// Bands are disjoint, ordered top to bottom, and together cover the
    /// rect exactly. Each one can be scanned independently.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows_per_band` is zero.
    pub fn split_rows(&self, rows_per_band: u32) -> Result<Vec<Rect>> {
        if rows_per_band == 0 {
            return Err(Error::InvalidParameter(
                "rows_per_band must be positive".to_string(),
            ));
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let step = rows_per_band.min(i32::MAX as u32) as i32;
        let mut bands = Vec::new();
        let mut top = self.top();
        while top <= self.bottom() {
            let h = step.min(self.bottom() - top + 1);
            bands.push(Rect::new_unchecked(self.x, top, self.w, h));
            top += h;
        }
        Ok(bands)
    }
}
