//! Pixel access functions
//!
//! Checked accessors return `Option`/`Result`; the `_unchecked` variants
//! skip the coordinate test and rely on slice indexing to panic on misuse.

use super::{Surface, SurfaceMut};
use crate::color::ColorBgra;
use crate::error::{Error, Result};

#[inline]
fn index_of(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Surface {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<ColorBgra> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> ColorBgra {
        self.data()[index_of(self.width(), x, y)]
    }
}

impl SurfaceMut {
    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<ColorBgra> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the pixel at (x, y) without the coordinate check.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> ColorBgra {
        self.data()[index_of(self.width(), x, y)]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: ColorBgra) -> Result<()> {
        if x >= self.width() {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.width() as usize,
            });
        }
        if y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.height() as usize,
            });
        }
        self.set_pixel_unchecked(x, y, color);
        Ok(())
    }

    /// Set the pixel at (x, y) without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, color: ColorBgra) {
        let idx = index_of(self.width(), x, y);
        self.data_mut()[idx] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_pixel() {
        let mut m = Surface::new(4, 3).unwrap().to_mut();
        let c = ColorBgra::from_bgra(1, 2, 3, 4);
        m.set_pixel(3, 2, c).unwrap();
        assert_eq!(m.get_pixel(3, 2), Some(c));

        let s: Surface = m.into();
        assert_eq!(s.get_pixel(3, 2), Some(c));
        assert_eq!(s.get_pixel_unchecked(3, 2), c);
        assert_eq!(s.data()[2 * 4 + 3], c);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut m = Surface::new(4, 3).unwrap().to_mut();
        assert_eq!(m.get_pixel(4, 0), None);
        assert_eq!(m.get_pixel(0, 3), None);
        assert!(matches!(
            m.set_pixel(4, 0, ColorBgra::BLACK),
            Err(Error::IndexOutOfBounds { index: 4, len: 4 })
        ));
        assert!(m.set_pixel(0, 3, ColorBgra::BLACK).is_err());
    }
}
