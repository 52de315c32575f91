use crate::{ColorError, PackedRgba, Percentage, WholePercent, encode_rgb, unit_from_u8};

/// Cyan, magenta, yellow and black, as read back from a [`PackedRgba`].
///
/// Alpha does not take part in CMYK.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Cmyk {
    pub c: WholePercent,
    pub m: WholePercent,
    pub y: WholePercent,
    pub k: WholePercent,
}

impl Cmyk {
    /// Encode this view back into an opaque packed value.
    ///
    /// Truncation on decode means this may land a few steps from the color it was read from.
    pub fn to_packed(&self) -> PackedRgba {
        let [r, g, b] = rgb_from_fractions([self.c, self.m, self.y, self.k].map(WholePercent::fraction));
        PackedRgba::from_rgb(r, g, b)
    }
}

impl From<PackedRgba> for Cmyk {
    #[inline]
    fn from(packed: PackedRgba) -> Self {
        decode_cmyk(packed)
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { c, m, y, k } = self;
        write!(f, "({c}, {m}, {y}, {k})")
    }
}

/// Cyan, magenta, yellow and black of a packed color, each truncated to a whole percent.
///
/// Pure black is `0% 0% 0% 100%`.
///
/// ```
/// use bcolor::{decode_cmyk, PackedRgba};
/// assert_eq!(decode_cmyk(PackedRgba::WHITE).to_string(), "(0%, 0%, 0%, 0%)");
/// assert_eq!(decode_cmyk(PackedRgba::BLACK).to_string(), "(0%, 0%, 0%, 100%)");
/// assert_eq!(decode_cmyk(PackedRgba::RED).to_string(), "(0%, 100%, 100%, 0%)");
/// ```
pub fn decode_cmyk(packed: PackedRgba) -> Cmyk {
    let [r, g, b, _] = packed.to_array();
    let max = r.max(g).max(b);
    let k = 1.0 - unit_from_u8(max);

    if max == 0 {
        log::trace!("Pure black {packed:?}: cyan, magenta and yellow default to 0%");
        return Cmyk {
            k: WholePercent::FULL,
            ..Default::default()
        };
    }

    let ink = |channel: u8| (1.0 - unit_from_u8(channel) - k) / (1.0 - k);
    Cmyk {
        c: WholePercent::from_fraction_truncated(ink(r)),
        m: WholePercent::from_fraction_truncated(ink(g)),
        y: WholePercent::from_fraction_truncated(ink(b)),
        k: WholePercent::from_fraction_truncated(k),
    }
}

/// Pack cyan, magenta, yellow and black into an opaque color.
///
/// Every component is a percentage: use [`Percentage::Percent`] or `"NN%"` text for bare 0-100 numbers.
///
/// ```
/// use bcolor::{encode_cmyk, PackedRgba, Percentage};
/// assert_eq!(encode_cmyk("0%", "100%", "100%", "0%"), Ok(PackedRgba::RED));
/// assert_eq!(
///     encode_cmyk(Percentage::Percent(0.0), "0", "0", Percentage::Percent(100.0)),
///     Ok(PackedRgba::BLACK),
/// );
/// ```
///
/// # Errors
/// Any error of [`Percentage::to_fraction`].
pub fn encode_cmyk(
    c: impl Into<Percentage>,
    m: impl Into<Percentage>,
    y: impl Into<Percentage>,
    k: impl Into<Percentage>,
) -> Result<PackedRgba, ColorError> {
    let fractions = [
        c.into().to_fraction()?,
        m.into().to_fraction()?,
        y.into().to_fraction()?,
        k.into().to_fraction()?,
    ];
    let [r, g, b] = rgb_from_fractions(fractions);
    encode_rgb(i32::from(r), i32::from(g), i32::from(b))
}

/// `255 * (1 - ink) * (1 - k)`, rounded.
fn rgb_from_fractions([c, m, y, k]: [f64; 4]) -> [u8; 3] {
    [c, m, y].map(|ink| (255.0 * (1.0 - ink) * (1.0 - k)).round().clamp(0.0, 255.0) as u8)
}
