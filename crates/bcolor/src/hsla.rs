use crate::{
    ColorError, PackedRgba, Percentage, WholePercent, alpha_fraction_from_byte, encode_rgba,
    unit_from_u8,
};

/// Hue, saturation, lightness and alpha, as read back from a [`PackedRgba`].
///
/// See [`decode_hsla`] and [`encode_hsla`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Hsla {
    /// Hue in whole degrees, 0-359. Zero for achromatic colors.
    pub h: u16,

    pub s: WholePercent,

    pub l: WholePercent,

    /// 0-1
    pub a: f64,
}

/// [`Hsla`] without alpha.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Hsl {
    /// Hue in whole degrees, 0-359.
    pub h: u16,
    pub s: WholePercent,
    pub l: WholePercent,
}

impl Hsla {
    #[inline]
    pub fn hsl(&self) -> Hsl {
        let Self { h, s, l, a: _ } = *self;
        Hsl { h, s, l }
    }

    /// Encode this view back into a packed value.
    ///
    /// # Errors
    /// [`ColorError::InvalidChannelRange`] if alpha is outside 0-1.
    pub fn to_packed(&self) -> Result<PackedRgba, ColorError> {
        encode_hsla(f64::from(self.h), self.s, self.l, self.a)
    }
}

impl From<PackedRgba> for Hsla {
    #[inline]
    fn from(packed: PackedRgba) -> Self {
        decode_hsla(packed)
    }
}

impl std::fmt::Display for Hsla {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { h, s, l, a } = self;
        write!(f, "({h}, {s}, {l}, {a})")
    }
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { h, s, l } = self;
        write!(f, "({h}, {s}, {l})")
    }
}

// ----------------------------------------------------------------------------

/// Hue, saturation and lightness of a packed color.
///
/// Saturation and lightness are rounded to whole percents, hue is truncated to whole degrees.
/// Grays (including black and white) have no hue; they report `h = 0` and `s = 0%`.
///
/// ```
/// use bcolor::{decode_hsla, PackedRgba};
/// let red = decode_hsla(PackedRgba::RED);
/// assert_eq!((red.h, red.s.to_string(), red.l.to_string(), red.a), (0, "100%".to_owned(), "50%".to_owned(), 1.0));
/// ```
pub fn decode_hsla(packed: PackedRgba) -> Hsla {
    let [r8, g8, b8, a8] = packed.to_array();
    let a = alpha_fraction_from_byte(a8);

    let max8 = r8.max(g8).max(b8);
    let min8 = r8.min(g8).min(b8);
    let (max, min) = (unit_from_u8(max8), unit_from_u8(min8));
    let l = (min + max) / 2.0;

    if max8 == min8 {
        log::trace!("Achromatic color {packed:?}: hue defaults to 0");
        return Hsla {
            h: 0,
            s: WholePercent::ZERO,
            l: WholePercent::from_fraction_rounded(l),
            a,
        };
    }

    let delta = max - min;
    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let (r, g, b) = (unit_from_u8(r8), unit_from_u8(g8), unit_from_u8(b8));
    let sextant = if r8 == max8 {
        (g - b) / delta
    } else if g8 == max8 {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let mut h = sextant * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsla {
        h: (h.trunc() as u16).min(359),
        s: WholePercent::from_fraction_rounded(s),
        l: WholePercent::from_fraction_rounded(l),
        a,
    }
}

/// Pack a hue (degrees, any finite value, taken modulo 360), saturation, lightness and alpha.
///
/// Channels are floored, so a decode/encode round trip may drift by one per channel.
///
/// ```
/// use bcolor::{encode_hsla, PackedRgba, Percentage};
/// assert_eq!(encode_hsla(0.0, "100%", "50%", 1.0), Ok(PackedRgba::RED));
/// assert_eq!(
///     encode_hsla(120.0, Percentage::Fraction(1.0), Percentage::Percent(50.0), 1.0),
///     Ok(PackedRgba::GREEN),
/// );
/// ```
///
/// # Errors
/// [`ColorError::InvalidHue`] for a non-finite hue,
/// any error of [`Percentage::to_fraction`] for saturation or lightness,
/// and [`ColorError::InvalidChannelRange`] for alpha outside 0-1.
pub fn encode_hsla(
    h: f64,
    s: impl Into<Percentage>,
    l: impl Into<Percentage>,
    a: f64,
) -> Result<PackedRgba, ColorError> {
    if !h.is_finite() {
        return Err(ColorError::InvalidHue(h));
    }
    let s = s.into().to_fraction()?;
    let l = l.into().to_fraction()?;

    let [r, g, b] = if s <= 0.0 {
        let gray = (l * 255.0).round() as i32;
        [gray; 3]
    } else {
        let l1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let l2 = 2.0 * l - l1;
        let hue = h.rem_euclid(360.0) / 360.0;

        let mut r_hue = hue + 1.0 / 3.0;
        if r_hue > 1.0 {
            r_hue -= 1.0;
        }
        let g_hue = hue;
        let mut b_hue = hue - 1.0 / 3.0;
        if b_hue < 0.0 {
            b_hue += 1.0;
        }

        [r_hue, g_hue, b_hue].map(|t| channel_from_unit(channel_from_hue(t, l1, l2)))
    };

    encode_rgba(r, g, b, a)
}

/// Hue, saturation and lightness of an opaque color; alpha is dropped.
#[inline]
pub fn decode_hsl(packed: PackedRgba) -> Hsl {
    decode_hsla(packed).hsl()
}

/// [`encode_hsla`] with alpha fixed at `1.0`.
///
/// # Errors
/// See [`encode_hsla`].
#[inline]
pub fn encode_hsl(
    h: f64,
    s: impl Into<Percentage>,
    l: impl Into<Percentage>,
) -> Result<PackedRgba, ColorError> {
    encode_hsla(h, s, l, 1.0)
}

/// One channel of an HSL color, given its hue offset `t` in 0-1.
///
/// `l1` is the upper and `l2` the lower bound of the channel.
fn channel_from_hue(t: f64, l1: f64, l2: f64) -> f64 {
    if 6.0 * t < 1.0 {
        l2 + (l1 - l2) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        l1
    } else if 3.0 * t < 2.0 {
        l2 + (l1 - l2) * (2.0 / 3.0 - t) * 6.0
    } else {
        l2
    }
}

/// unit [0, 1] -> channel [0, 255], floored.
/// Values just outside the range (from float error) are clamped.
fn channel_from_unit(unit: f64) -> i32 {
    (unit * 255.0).floor().clamp(0.0, 255.0) as i32
}
