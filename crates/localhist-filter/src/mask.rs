//! Disc mask geometry
//!
//! The neighborhood of a pixel is the set of offsets `(u, v)` with
//! `u² + v² <= cutoff`, where `cutoff = ((2r + 1)² + 2) / 4` using
//! integer division. That is approximately `(r + 0.5)²`; the exact
//! rounding is part of the output contract and must not be replaced by
//! a true Euclidean test.
//!
//! For every vertical offset `v` in `0..=r` the mask also records the
//! widest horizontal offset still inside the disc. The scanner uses this
//! leading-edge table to find the pixels that enter and leave the window
//! when it slides one column.

/// Largest radius the scanner accepts.
///
/// Bounds `(2r + 1)² * 255` well inside an `i32` bucket.
pub const MAX_SCAN_RADIUS: u32 = 1024;

/// Squared-distance cutoff for a radius.
#[inline]
pub fn cutoff_for_radius(radius: u32) -> i32 {
    let d = 2 * radius as i32 + 1;
    (d * d + 2) / 4
}

/// Number of offsets inside an unclipped disc of the given radius.
pub fn max_area_for_radius(radius: u32) -> u32 {
    DiscMask::new(radius).area()
}

/// Precomputed disc membership and leading-edge table for one radius.
///
/// Immutable once built and cheap to share between scans of the same
/// radius, including concurrent ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscMask {
    radius: u32,
    cutoff: i32,
    leading_edge: Vec<i32>,
}

impl DiscMask {
    /// Build the mask for `radius`.
    pub fn new(radius: u32) -> Self {
        debug_assert!(
            radius <= MAX_SCAN_RADIUS,
            "radius {radius} exceeds {MAX_SCAN_RADIUS}"
        );
        let cutoff = cutoff_for_radius(radius);
        let r = radius as i32;

        let mut leading_edge = vec![0i32; radius as usize + 1];
        for (v, edge) in (0..=r).zip(leading_edge.iter_mut()) {
            for u in 0..=r {
                if u * u + v * v <= cutoff {
                    *edge = u;
                }
            }
        }

        Self {
            radius,
            cutoff,
            leading_edge,
        }
    }

    /// Radius the mask was built for.
    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Squared-distance cutoff.
    #[inline]
    pub fn cutoff(&self) -> i32 {
        self.cutoff
    }

    /// Check whether offset `(u, v)` is inside the disc.
    #[inline]
    pub fn contains(&self, u: i32, v: i32) -> bool {
        u * u + v * v <= self.cutoff
    }

    /// Widest horizontal offset inside the disc on the row `|v|` away
    /// from the center.
    ///
    /// # Panics
    ///
    /// Panics if `|v| > radius`.
    #[inline]
    pub fn edge(&self, v: i32) -> i32 {
        self.leading_edge[v.unsigned_abs() as usize]
    }

    /// The leading-edge table, indexed by `v` in `0..=radius`.
    #[inline]
    pub fn leading_edge(&self) -> &[i32] {
        &self.leading_edge
    }

    /// Number of offsets inside the unclipped disc.
    pub fn area(&self) -> u32 {
        self.leading_edge
            .iter()
            .enumerate()
            .map(|(v, &u)| {
                let row = 2 * u as u32 + 1;
                if v == 0 { row } else { 2 * row }
            })
            .sum()
    }
}
