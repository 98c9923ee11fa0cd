//! Row bands - disjoint mutable views of destination rows

use crate::color::ColorBgra;

/// A mutable view of consecutive full-width rows of a [`SurfaceMut`].
///
/// Row coordinates are absolute (surface coordinates), so a scan writing
/// pixel `(x, y)` addresses the same location whether it writes through
/// the whole surface or through one band of it.
///
/// [`SurfaceMut`]: super::SurfaceMut
#[derive(Debug)]
pub struct RowBandMut<'a> {
    top: u32,
    width: u32,
    data: &'a mut [ColorBgra],
}

impl<'a> RowBandMut<'a> {
    pub(super) fn new(top: u32, width: u32, data: &'a mut [ColorBgra]) -> Self {
        debug_assert!(width > 0 && data.len() % width as usize == 0);
        Self { top, width, data }
    }

    /// First row covered by the band.
    #[inline]
    pub fn top(&self) -> u32 {
        self.top
    }

    /// Last row covered by the band (inclusive).
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.top + self.rows() - 1
    }

    /// Number of rows in the band.
    #[inline]
    pub fn rows(&self) -> u32 {
        (self.data.len() / self.width as usize) as u32
    }

    /// Row width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Check whether absolute row `y` lies in the band.
    #[inline]
    pub fn contains_row(&self, y: u32) -> bool {
        y >= self.top && y <= self.bottom()
    }

    /// Mutable access to absolute row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the band.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [ColorBgra] {
        let width = self.width as usize;
        let start = (y - self.top) as usize * width;
        &mut self.data[start..start + width]
    }

    /// Read the pixel at absolute `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the band.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> ColorBgra {
        self.data[(y - self.top) as usize * self.width as usize + x as usize]
    }

    /// Write the pixel at absolute `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the band.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: ColorBgra) {
        self.data[(y - self.top) as usize * self.width as usize + x as usize] = color;
    }
}
