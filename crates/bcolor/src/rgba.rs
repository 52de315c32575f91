use crate::{Channel, ColorError, PackedRgba, round_to_hundredths};

/// Red, green and blue in 0-255 and alpha as a 0-1 fraction.
///
/// This is a view of a [`PackedRgba`]; see [`decode_rgba`] and [`encode_rgba`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// 0-1, two decimals when decoded.
    pub a: f64,
}

impl Rgba {
    #[inline(always)]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque, i.e. with `a = 1.0`.
    #[inline(always)]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline(always)]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// # Errors
    /// [`ColorError::InvalidChannelRange`] if alpha is outside 0-1.
    pub fn to_packed(&self) -> Result<PackedRgba, ColorError> {
        Ok(PackedRgba::from_channels(
            self.r,
            self.g,
            self.b,
            alpha_byte_from_fraction(self.a)?,
        ))
    }
}

impl From<PackedRgba> for Rgba {
    #[inline]
    fn from(packed: PackedRgba) -> Self {
        decode_rgba(packed)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { r, g, b, a } = self;
        write!(f, "({r}, {g}, {b}, {a})")
    }
}

// ----------------------------------------------------------------------------

/// Split the packed value into its channels, with alpha as a fraction rounded to two decimals.
///
/// ```
/// use bcolor::{decode_rgba, PackedRgba, Rgba};
/// assert_eq!(decode_rgba(PackedRgba(0xff0000ff)), Rgba::new(255, 0, 0, 1.0));
/// assert_eq!(decode_rgba(PackedRgba(0x0080ff7f)), Rgba::new(0, 128, 255, 0.5));
/// ```
pub fn decode_rgba(packed: PackedRgba) -> Rgba {
    let [r, g, b, a] = packed.to_array();
    Rgba::new(r, g, b, alpha_fraction_from_byte(a))
}

/// Pack channels in 0-255 and alpha in 0-1 into a single value.
///
/// The alpha byte is `floor(a * 256) - 1`, saturating at zero,
/// so `a = 1.0` encodes as `0xff` and `a = 0.0` as `0x00`.
///
/// ```
/// use bcolor::{encode_rgba, PackedRgba};
/// assert_eq!(encode_rgba(255, 0, 0, 1.0), Ok(PackedRgba(0xff0000ff)));
/// assert_eq!(encode_rgba(0, 128, 255, 0.5), Ok(PackedRgba(0x0080ff7f)));
/// ```
///
/// # Errors
/// [`ColorError::InvalidChannelRange`] if any channel is outside 0-255 or alpha is outside 0-1.
pub fn encode_rgba(r: i32, g: i32, b: i32, a: f64) -> Result<PackedRgba, ColorError> {
    Ok(PackedRgba::from_channels(
        channel_byte(Channel::Red, r)?,
        channel_byte(Channel::Green, g)?,
        channel_byte(Channel::Blue, b)?,
        alpha_byte_from_fraction(a)?,
    ))
}

/// The first three components of [`decode_rgba`].
#[inline]
pub fn decode_rgb(packed: PackedRgba) -> [u8; 3] {
    decode_rgba(packed).rgb()
}

/// [`encode_rgba`] with alpha fixed at `1.0`.
///
/// # Errors
/// [`ColorError::InvalidChannelRange`] if any channel is outside 0-255.
#[inline]
pub fn encode_rgb(r: i32, g: i32, b: i32) -> Result<PackedRgba, ColorError> {
    encode_rgba(r, g, b, 1.0)
}

// ----------------------------------------------------------------------------

/// Alpha byte -> fraction, `byte / 256` rounded to two decimals (ties to even).
///
/// `0xff` reads as `1.0`, `0x7f` as `0.5`, `0x20` as `0.12`.
pub fn alpha_fraction_from_byte(a: u8) -> f64 {
    round_to_hundredths(f64::from(a) / 256.0)
}

/// Alpha fraction -> byte, `floor(a * 256) - 1`, saturating at zero.
///
/// # Errors
/// [`ColorError::InvalidChannelRange`] if `a` is outside 0-1 (or NaN).
pub fn alpha_byte_from_fraction(a: f64) -> Result<u8, ColorError> {
    if !(0.0..=1.0).contains(&a) {
        return Err(ColorError::InvalidChannelRange {
            channel: Channel::Alpha,
            value: a,
        });
    }
    let biased = (a * 256.0).floor() as i32 - 1;
    Ok(biased.clamp(0, 255) as u8)
}

fn channel_byte(channel: Channel, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value)
        .ok()
        .ok_or(ColorError::InvalidChannelRange {
            channel,
            value: f64::from(value),
        })
}
