//! Four-channel 8-bit pixel
//!
//! Channels are stored in B, G, R, A order. The histogram engine treats
//! every channel as an opaque 0-255 integer; the blending helpers here
//! exist for the effects built on top of it and apply no premultiplied
//! alpha policy of their own.

/// A BGRA pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct ColorBgra {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
    /// Alpha channel
    pub a: u8,
}

impl ColorBgra {
    /// Fully transparent black.
    pub const TRANSPARENT: ColorBgra = ColorBgra::from_bgra(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: ColorBgra = ColorBgra::from_bgra(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: ColorBgra = ColorBgra::from_bgra(255, 255, 255, 255);

    /// Compose a pixel from its four channels.
    #[inline]
    pub const fn from_bgra(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Compose an opaque pixel (alpha = 255).
    #[inline]
    pub const fn from_bgr(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    /// Compose a pixel from wide integers, clamping each to 0..=255.
    #[inline]
    pub fn from_bgra_clamped(b: i32, g: i32, r: i32, a: i32) -> Self {
        Self {
            b: clamp_to_byte(b),
            g: clamp_to_byte(g),
            r: clamp_to_byte(r),
            a: clamp_to_byte(a),
        }
    }

    /// Pack into a `0xAARRGGBB` word.
    #[inline]
    pub fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpack from a `0xAARRGGBB` word.
    #[inline]
    pub fn from_argb(word: u32) -> Self {
        Self {
            b: (word & 0xff) as u8,
            g: ((word >> 8) & 0xff) as u8,
            r: ((word >> 16) & 0xff) as u8,
            a: (word >> 24) as u8,
        }
    }

    /// Luminance of the color channels in `[0.0, 1.0]`. Alpha is ignored.
    #[inline]
    pub fn intensity(self) -> f64 {
        (0.114 * self.b as f64 + 0.587 * self.g as f64 + 0.299 * self.r as f64) / 255.0
    }

    /// Channel-wise linear interpolation from `from` (at 0.0) to `to` (at 1.0).
    ///
    /// `frac` is not restricted to `[0, 1]`; each channel result is clamped
    /// to the byte range and truncated toward zero.
    pub fn lerp(from: ColorBgra, to: ColorBgra, frac: f64) -> ColorBgra {
        let mix = |a: u8, b: u8| clamp_f64_to_byte(a as f64 + (b as f64 - a as f64) * frac);
        ColorBgra {
            b: mix(from.b, to.b),
            g: mix(from.g, to.g),
            r: mix(from.r, to.r),
            a: mix(from.a, to.a),
        }
    }
}

/// Clamp an integer into the byte range.
#[inline]
pub fn clamp_to_byte(x: i32) -> u8 {
    x.clamp(0, 255) as u8
}

/// Clamp a float into the byte range, truncating the fraction.
#[inline]
pub fn clamp_f64_to_byte(x: f64) -> u8 {
    x.clamp(0.0, 255.0) as u8
}
