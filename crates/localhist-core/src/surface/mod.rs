//! Surface - The image container
//!
//! A `Surface` is a row-major grid of [`ColorBgra`] pixels. Rows are
//! tightly packed: the stride equals the width, so pixel `(x, y)` lives
//! at index `y * width + x`.
//!
//! # Ownership model
//!
//! `Surface` uses `Arc` for cheap cloning (shared ownership) and is
//! `Send + Sync`, so one source can feed several concurrent scans.
//! To modify pixel data, convert to [`SurfaceMut`] via
//! [`Surface::try_into_mut`] or [`Surface::to_mut`], then convert back
//! with `Into<Surface>`. A `SurfaceMut` can be split into disjoint
//! [`RowBandMut`] views for writers on separate threads.

mod access;
mod band;

pub use band::RowBandMut;

use crate::color::ColorBgra;
use crate::error::{Error, Result};
use crate::rect::Rect;
use std::sync::Arc;

/// Internal surface data
#[derive(Debug, Clone)]
struct SurfaceData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixels, row-major, `width * height` entries
    data: Vec<ColorBgra>,
}

impl SurfaceData {
    fn check_dimensions(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }
}

/// Surface - immutable, shareable image buffer
///
/// # Examples
///
/// ```
/// use localhist_core::{ColorBgra, Surface};
///
/// let surface = Surface::filled(64, 48, ColorBgra::WHITE).unwrap();
/// assert_eq!(surface.width(), 64);
/// assert_eq!(surface.get_pixel(10, 10), Some(ColorBgra::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct Surface {
    inner: Arc<SurfaceData>,
}

impl Surface {
    /// Create a new surface with the specified dimensions.
    ///
    /// All pixels are initialized to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, ColorBgra::TRANSPARENT)
    }

    /// Create a new surface with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, color: ColorBgra) -> Result<Self> {
        let len = SurfaceData::check_dimensions(width, height)?;
        Ok(Surface {
            inner: Arc::new(SurfaceData {
                width,
                height,
                data: vec![color; len],
            }),
        })
    }

    /// Wrap an existing row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::DataLength`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<ColorBgra>) -> Result<Self> {
        let expected = SurfaceData::check_dimensions(width, height)?;
        if pixels.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Surface {
            inner: Arc::new(SurfaceData {
                width,
                height,
                data: pixels,
            }),
        })
    }

    /// Get the surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Rectangle covering the whole surface.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.inner.width as i32, self.inner.height as i32)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[ColorBgra] {
        &self.inner.data
    }

    /// Get one row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[ColorBgra] {
        let width = self.inner.width as usize;
        let start = y as usize * width;
        &self.inner.data[start..start + width]
    }

    /// Check if two surfaces have the same width and height.
    pub fn sizes_equal(&self, other: &Surface) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Check that `width` x `height` matches this surface's dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_same_size(&self, width: u32, height: u32) -> Result<()> {
        if self.inner.width != width || self.inner.height != height {
            return Err(Error::DimensionMismatch {
                expected: (self.inner.width, self.inner.height),
                actual: (width, height),
            });
        }
        Ok(())
    }

    /// Create a new mutable surface with the same dimensions.
    ///
    /// The pixel data is initialized to transparent black.
    pub fn create_template(&self) -> SurfaceMut {
        SurfaceMut {
            inner: SurfaceData {
                width: self.inner.width,
                height: self.inner.height,
                data: vec![ColorBgra::TRANSPARENT; self.inner.data.len()],
            },
        }
    }

    /// Create a deep copy of this surface.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Surface {
            inner: Arc::new(SurfaceData::clone(&self.inner)),
        }
    }

    /// Try to get mutable access to the pixel data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<SurfaceMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(SurfaceMut { inner: data }),
            Err(arc) => Err(Surface { inner: arc }),
        }
    }

    /// Create a mutable copy of this surface.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> SurfaceMut {
        SurfaceMut {
            inner: SurfaceData::clone(&self.inner),
        }
    }
}

/// Mutable surface
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Surface`] using `Into<Surface>`.
#[derive(Debug)]
pub struct SurfaceMut {
    inner: SurfaceData,
}

impl SurfaceMut {
    /// Get the surface width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the surface height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Rectangle covering the whole surface.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new_unchecked(0, 0, self.inner.width as i32, self.inner.height as i32)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[ColorBgra] {
        &self.inner.data
    }

    /// Get mutable access to the pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [ColorBgra] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [ColorBgra] {
        let width = self.inner.width as usize;
        let start = y as usize * width;
        &mut self.inner.data[start..start + width]
    }

    /// Borrow every row as a single band.
    pub fn as_band_mut(&mut self) -> RowBandMut<'_> {
        RowBandMut::new(0, self.inner.width, &mut self.inner.data)
    }

    /// Split the surface into disjoint bands of at most `rows_per_band` rows.
    ///
    /// Bands are ordered top to bottom. They borrow disjoint slices, so each
    /// can be handed to a different thread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `rows_per_band` is zero.
    pub fn bands_mut(&mut self, rows_per_band: u32) -> Result<Vec<RowBandMut<'_>>> {
        if rows_per_band == 0 {
            return Err(Error::InvalidParameter(
                "rows_per_band must be positive".to_string(),
            ));
        }
        let width = self.inner.width;
        let chunk = width as usize * rows_per_band as usize;
        Ok(self
            .inner
            .data
            .chunks_mut(chunk)
            .enumerate()
            .map(|(i, rows)| RowBandMut::new(i as u32 * rows_per_band, width, rows))
            .collect())
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: ColorBgra) {
        self.inner.data.fill(color);
    }
}

impl From<SurfaceMut> for Surface {
    fn from(surface: SurfaceMut) -> Self {
        Surface {
            inner: Arc::new(surface.inner),
        }
    }
}
