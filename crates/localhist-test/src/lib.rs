//! localhist-test - Regression test framework for localhist
//!
//! This crate provides the regression harness used by the integration
//! tests together with deterministic synthetic test surfaces. There are no
//! image files involved; every input is generated.
//!
//! # Usage
//!
//! ```
//! use localhist_test::{RegParams, noise_surface};
//!
//! let src = noise_surface(16, 16, 7).unwrap();
//! let mut rp = RegParams::new("example");
//! rp.compare_surfaces(&src, &noise_surface(16, 16, 7).unwrap());
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;

use localhist_core::{ColorBgra, Surface};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smooth opaque gradient
///
/// Blue ramps left to right, green top to bottom and red along the
/// diagonal. Useful for checking that filters preserve structure.
pub fn gradient_surface(width: u32, height: u32) -> TestResult<Surface> {
    let ramp = |v: u32, max: u32| if max == 0 { 0 } else { (v * 255 / max) as u8 };
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            ColorBgra::from_bgr(
                ramp(x, width.saturating_sub(1)),
                ramp(y, height.saturating_sub(1)),
                ramp(x + y, (width + height).saturating_sub(2)),
            )
        })
        .collect();
    Ok(Surface::from_pixels(width, height, pixels)?)
}

/// Uniform random pixels, alpha included
///
/// The same `seed` always yields the same surface.
pub fn noise_surface(width: u32, height: u32, seed: u64) -> TestResult<Surface> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels = (0..width as usize * height as usize)
        .map(|_| {
            ColorBgra::from_bgra(
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>(),
            )
        })
        .collect();
    Ok(Surface::from_pixels(width, height, pixels)?)
}

/// Every pixel set to `color`
pub fn uniform_surface(width: u32, height: u32, color: ColorBgra) -> TestResult<Surface> {
    Ok(Surface::filled(width, height, color)?)
}

/// Checkerboard of `cell`-sized squares alternating between `even` and `odd`
///
/// The top-left cell is `even`.
pub fn checker_surface(
    width: u32,
    height: u32,
    cell: u32,
    even: ColorBgra,
    odd: ColorBgra,
) -> TestResult<Surface> {
    if cell == 0 {
        return Err(TestError::InvalidParameters(
            "cell size must be positive".to_string(),
        ));
    }
    let pixels = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| {
            if (x / cell + y / cell) % 2 == 0 {
                even
            } else {
                odd
            }
        })
        .collect();
    Ok(Surface::from_pixels(width, height, pixels)?)
}
