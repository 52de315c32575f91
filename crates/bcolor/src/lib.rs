//! Color conversions for the bpaint color catalog.
//!
//! Every color is stored as a single [`PackedRgba`]: one `u32` holding red, green, blue
//! and alpha, eight bits each, red in the most significant byte.
//! Everything else is a view decoded from (or encoded into) that integer:
//!
//! * [`Rgba`] and `[u8; 3]` for plain channels,
//! * [`Hsla`] and [`Hsl`] for hue, saturation and lightness,
//! * [`Cmyk`] for print-style cyan, magenta, yellow and black,
//! * [`HexColor`] for `#rgb`, `#rgba`, `#rrggbb` and `#rrggbbaa` text.
//!
//! If you want a named color that remembers its packed value, use [`DigitalColor`].
//!
//! ## Conventions
//! Channels are `u8` in 0-255. Alpha is exposed as an `f64` in 0-1, rounded to two decimals.
//! Saturation, lightness and the CMYK components are read back as [`WholePercent`]
//! and written with a [`Percentage`], which accepts fractions, percents and `"NN%"` text.
//!
//! The alpha byte keeps a historical bias: encoding alpha `a` stores `floor(a * 256) - 1`
//! (saturating at zero), so `1.0` becomes `0xff` and `0.5` becomes `0x7f`.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#[cfg(feature = "cint")]
mod cint_impl;

mod cmyk;
pub use cmyk::*;

mod digital;
pub use digital::*;

mod error;
pub use error::*;

mod hex;
pub use hex::*;

#[cfg(feature = "color-hex")]
mod hex_macro;
#[cfg(feature = "color-hex")]
#[doc(hidden)]
pub use color_hex;

mod hsla;
pub use hsla::*;

mod packed;
pub use packed::*;

mod percentage;
pub use percentage::*;

mod rgba;
pub use rgba::*;

// ----------------------------------------------------------------------------

/// An assert that is only active when `bcolor` is compiled with the `extra_asserts` feature
/// or with the `extra_debug_asserts` feature in debug builds.
#[macro_export]
macro_rules! bcolor_assert {
    ($($arg: tt)*) => {
        if cfg!(any(
            feature = "extra_asserts",
            all(feature = "extra_debug_asserts", debug_assertions),
        )) {
            assert!($($arg)*);
        }
    }
}

// ----------------------------------------------------------------------------

/// channel [0, 255] -> unit [0, 1].
#[inline(always)]
pub fn unit_from_u8(c: u8) -> f64 {
    f64::from(c) / 255.0
}

/// Round to two decimals, ties to even.
#[inline]
pub(crate) fn round_to_hundredths(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

#[test]
fn test_unit_from_u8() {
    assert_eq!(unit_from_u8(0), 0.0);
    assert_eq!(unit_from_u8(255), 1.0);
    for c in 0..=255 {
        let unit = unit_from_u8(c);
        assert!((0.0..=1.0).contains(&unit));
        assert_eq!((unit * 255.0).round() as u8, c);
    }
}

#[test]
fn test_round_to_hundredths() {
    assert_eq!(round_to_hundredths(0.996_093_75), 1.0);
    assert_eq!(round_to_hundredths(0.496_093_75), 0.5);
    // Exact ties go to the even neighbor:
    assert_eq!(round_to_hundredths(0.125), 0.12);
    assert_eq!(round_to_hundredths(0.625), 0.62);
}
