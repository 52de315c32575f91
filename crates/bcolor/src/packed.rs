use crate::{Channel, ColorError};

/// The canonical color representation: 32 bits of `RGBA`, one byte per channel.
///
/// Red lives in bits 31-24, green in 23-16, blue in 15-8 and alpha in 7-0,
/// so `0xff0000ff` is opaque red.
///
/// Instead of manipulating this directly it is often better
/// to first convert it to one of the views: [`crate::Rgba`], [`crate::Hsla`] or [`crate::Cmyk`].
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const TRANSPARENT: Self = Self::from_channels(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const GRAY: Self = Self::from_rgb(128, 128, 128);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);

    pub const CYAN: Self = Self::from_rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::from_rgb(255, 0, 255);
    pub const YELLOW: Self = Self::from_rgb(255, 255, 0);

    /// From the four raw channel bytes.
    #[inline(always)]
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_be_bytes([r, g, b, a]))
    }

    /// Opaque, i.e. with an alpha byte of `0xff`.
    #[inline(always)]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_channels(r, g, b, 255)
    }

    #[inline(always)]
    pub const fn from_gray(l: u8) -> Self {
        Self::from_rgb(l, l, l)
    }

    #[inline(always)]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// The raw channel bytes, `[r, g, b, a]`.
    #[inline(always)]
    pub const fn to_array(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline(always)]
    pub const fn r(self) -> u8 {
        self.to_array()[0]
    }

    #[inline(always)]
    pub const fn g(self) -> u8 {
        self.to_array()[1]
    }

    #[inline(always)]
    pub const fn b(self) -> u8 {
        self.to_array()[2]
    }

    /// The raw alpha byte. See [`crate::decode_rgba`] for alpha as a fraction.
    #[inline(always)]
    pub const fn a(self) -> u8 {
        self.to_array()[3]
    }

    #[inline(always)]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Same color channels, different raw alpha byte.
    #[inline(always)]
    pub const fn with_alpha_byte(self, a: u8) -> Self {
        let [r, g, b, _] = self.to_array();
        Self::from_channels(r, g, b, a)
    }
}

impl From<u32> for PackedRgba {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedRgba> for u32 {
    #[inline(always)]
    fn from(packed: PackedRgba) -> Self {
        packed.0
    }
}

/// Storage layers often hand the packed value back as a signed 64-bit integer.
impl TryFrom<i64> for PackedRgba {
    type Error = ColorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .map(Self)
            .ok_or(ColorError::InvalidChannelRange {
                channel: Channel::Packed,
                value: value as f64,
            })
    }
}

impl TryFrom<u64> for PackedRgba {
    type Error = ColorError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .map(Self)
            .ok_or(ColorError::InvalidChannelRange {
                channel: Channel::Packed,
                value: value as f64,
            })
    }
}
