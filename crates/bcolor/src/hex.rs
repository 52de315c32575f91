//! Convert colors to and from hex text at runtime.
//!
//! Supports the 3, 4, 6 and 8-digit formats, with an optional leading `#` or `0x`.
//! The short forms expand each digit by duplication (`abc` is `aabbcc`),
//! and forms without alpha are opaque.

use std::{fmt::Display, str::FromStr};

use crate::{ColorError, PackedRgba};

/// A [`PackedRgba`] together with the hex form it was written in.
///
/// Implements [`Display`] and [`FromStr`] to convert to and from the hex string.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum HexColor {
    /// 3 hexadecimal digits, one for each of the r, g, b channels
    Hex3(PackedRgba),

    /// 4 hexadecimal digits, one for each of the r, g, b, a channels
    Hex4(PackedRgba),

    /// 6 hexadecimal digits, two for each of the r, g, b channels
    Hex6(PackedRgba),

    /// 8 hexadecimal digits, two for each of the r, g, b, a channels
    Hex8(PackedRgba),
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        Self::from_digits(s)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex3(color) => {
                let [r, g, b, _] = color.to_array().map(|u| u >> 4);
                write!(f, "#{r:x}{g:x}{b:x}")
            }
            Self::Hex4(color) => {
                let [r, g, b, a] = color.to_array().map(|u| u >> 4);
                write!(f, "#{r:x}{g:x}{b:x}{a:x}")
            }
            Self::Hex6(color) => {
                let rgb = color.to_u32() >> 8;
                write!(f, "#{rgb:06x}")
            }
            Self::Hex8(color) => write!(f, "#{:08x}", color.to_u32()),
        }
    }
}

impl HexColor {
    /// Retrieves the inner [`PackedRgba`]
    #[inline]
    pub fn color(&self) -> PackedRgba {
        match self {
            Self::Hex3(color) | Self::Hex4(color) | Self::Hex6(color) | Self::Hex8(color) => {
                *color
            }
        }
    }

    /// Parses bare hex digits, without any `#` or `0x` prefix.
    ///
    /// # Errors
    /// [`ColorError::InvalidHexLength`] if there are not 3, 4, 6 or 8 digits,
    /// [`ColorError::InvalidHexDigit`] if any of them is not a hex digit.
    pub fn from_digits(s: &str) -> Result<Self, ColorError> {
        let count = s.chars().count();
        if !matches!(count, 3 | 4 | 6 | 8) {
            return Err(ColorError::InvalidHexLength(count));
        }

        let mut nibbles = [0_u8; 8];
        for (nibble, c) in nibbles.iter_mut().zip(s.chars()) {
            *nibble = c.to_digit(16).ok_or(ColorError::InvalidHexDigit(c))? as u8;
        }

        let doubled = |n: u8| n << 4 | n;
        let byte = |hi: u8, lo: u8| hi << 4 | lo;

        Ok(match count {
            3 => {
                let [r, g, b, ..] = nibbles.map(doubled);
                Self::Hex3(PackedRgba::from_rgb(r, g, b))
            }
            4 => {
                let [r, g, b, a, ..] = nibbles.map(doubled);
                Self::Hex4(PackedRgba::from_channels(r, g, b, a))
            }
            6 => {
                let [r1, r0, g1, g0, b1, b0, ..] = nibbles;
                Self::Hex6(PackedRgba::from_rgb(byte(r1, r0), byte(g1, g0), byte(b1, b0)))
            }
            _ => {
                let [r1, r0, g1, g0, b1, b0, a1, a0] = nibbles;
                Self::Hex8(PackedRgba::from_channels(
                    byte(r1, r0),
                    byte(g1, g0),
                    byte(b1, b0),
                    byte(a1, a0),
                ))
            }
        })
    }
}

impl PackedRgba {
    /// Parses a color from a hex string
    ///
    /// Supports the 3, 4, 6, and 8-digit formats, with or without a leading `#` or `0x`.
    ///
    /// # Example
    /// ```rust
    /// use bcolor::PackedRgba;
    /// assert_eq!(Ok(PackedRgba::RED), PackedRgba::from_hex_string("#ff0000"));
    /// assert_eq!(Ok(PackedRgba::GREEN), PackedRgba::from_hex_string("00ff00ff"));
    /// assert_eq!(Ok(PackedRgba::BLUE), PackedRgba::from_hex_string("#00f"));
    /// assert_eq!(Ok(PackedRgba::TRANSPARENT), PackedRgba::from_hex_string("0x0000"));
    /// ```
    ///
    /// # Errors
    /// Returns an error if the remaining length does not correspond to one of the standard
    /// formats (3, 4, 6, or 8), or if it contains non-hex characters.
    pub fn from_hex_string(hex: &str) -> Result<Self, ColorError> {
        HexColor::from_str(hex).map(|h| h.color())
    }

    /// Formats the color as a hex string
    ///
    /// # Example
    /// ```rust
    /// use bcolor::PackedRgba;
    /// assert_eq!(PackedRgba::RED.to_hex_string(), "#ff0000ff");
    /// assert_eq!(PackedRgba::GREEN.to_hex_string(), "#00ff00ff");
    /// assert_eq!(PackedRgba::TRANSPARENT.to_hex_string(), "#00000000");
    /// ```
    ///
    /// Uses the 8-digit format, as that is the only format that is lossless.
    /// For other formats, see [`HexColor`].
    #[inline]
    pub fn to_hex_string(&self) -> String {
        HexColor::Hex8(*self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_string_formats() {
        use HexColor as H;
        use PackedRgba as C;
        let cases = [
            (H::Hex3(C::RED), "#f00"),
            (H::Hex4(C::RED), "#f00f"),
            (H::Hex6(C::RED), "#ff0000"),
            (H::Hex8(C::RED), "#ff0000ff"),
            (H::Hex3(C::GREEN), "#0f0"),
            (H::Hex6(C::GREEN), "#00ff00"),
            (H::Hex3(C::BLUE), "#00f"),
            (H::Hex8(C::BLUE), "#0000ffff"),
            (H::Hex3(C::WHITE), "#fff"),
            (H::Hex8(C::WHITE), "#ffffffff"),
            (H::Hex4(C::BLACK), "#000f"),
            (H::Hex6(C::BLACK), "#000000"),
            (H::Hex4(C::TRANSPARENT), "#0000"),
            (H::Hex8(C::TRANSPARENT), "#00000000"),
        ];
        for (color, string) in cases {
            assert_eq!(color.to_string(), string, "{color:?} <=> {string}");
            assert_eq!(
                H::from_str(string).unwrap(),
                color,
                "{color:?} <=> {string}"
            );
        }
    }

    #[test]
    fn prefixes_are_optional() {
        let expected = PackedRgba(0xaabb_ccff);
        for text in ["#aabbcc", "aabbcc", "0xaabbcc", "0XAABBCC", "#0xaabbcc", "#AaBbCc"] {
            assert_eq!(PackedRgba::from_hex_string(text), Ok(expected), "{text}");
        }
    }

    #[test]
    fn short_forms_expand_by_duplication() {
        assert_eq!(
            PackedRgba::from_hex_string("#abc"),
            PackedRgba::from_hex_string("#aabbccff")
        );
        assert_eq!(PackedRgba::from_hex_string("#abc"), Ok(PackedRgba(0xaabb_ccff)));
        assert_eq!(PackedRgba::from_hex_string("abc8"), Ok(PackedRgba(0xaabb_cc88)));
    }

    #[test]
    fn invalid_lengths() {
        for (text, count) in [("", 0), ("#", 0), ("f", 1), ("ff", 2), ("abcde", 5), ("abcdefa", 7), ("abcdef123", 9)] {
            assert_eq!(
                PackedRgba::from_hex_string(text),
                Err(ColorError::InvalidHexLength(count)),
                "{text}"
            );
        }
    }

    #[test]
    fn invalid_digits() {
        assert_eq!(
            PackedRgba::from_hex_string("#abg"),
            Err(ColorError::InvalidHexDigit('g'))
        );
        // `from_str_radix` would accept a sign here:
        assert_eq!(
            PackedRgba::from_hex_string("+bcdef12"),
            Err(ColorError::InvalidHexDigit('+'))
        );
        assert_eq!(
            PackedRgba::from_hex_string("ab cd"),
            Err(ColorError::InvalidHexLength(5))
        );
    }

    #[test]
    fn hex_string_round_trip() {
        for packed in [0, 1, 0xff, 0x100, 0x00ff_00ff, 0x1234_5678, 0xdead_beef, u32::MAX] {
            let color = PackedRgba(packed);
            assert_eq!(
                PackedRgba::from_hex_string(color.to_hex_string().as_str()),
                Ok(color)
            );
        }
    }

    #[test]
    fn every_short_form_round_trips() {
        for value in 0..0x1000_u32 {
            let text = format!("{value:03x}");
            let color = HexColor::from_digits(&text).unwrap();
            assert_eq!(color.to_string(), format!("#{text}"));
            assert_eq!(
                PackedRgba::from_hex_string(&color.color().to_hex_string()),
                Ok(color.color())
            );
        }
    }
}
