use thiserror::Error;

/// Which value an [`ColorError::InvalidChannelRange`] refers to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Channel {
    Red,
    Green,
    Blue,

    /// Alpha as a 0-1 fraction.
    Alpha,

    /// The whole packed 32-bit value.
    Packed,
}

impl Channel {
    /// The inclusive range a value for this channel must lie in.
    pub fn valid_range(self) -> std::ops::RangeInclusive<f64> {
        match self {
            Self::Red | Self::Green | Self::Blue => 0.0..=255.0,
            Self::Alpha => 0.0..=1.0,
            Self::Packed => 0.0..=f64::from(u32::MAX),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
            Self::Packed => "packed",
        })
    }
}

/// Everything that can go wrong when converting between color representations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ColorError {
    /// A channel or packed value is outside its valid numeric bounds.
    #[error("{channel} value {value} is outside {:?}", channel.valid_range())]
    InvalidChannelRange { channel: Channel, value: f64 },

    /// Hex text does not have 3, 4, 6 or 8 digits (6 or 8 after short-form expansion).
    #[error("hex color must have 3, 4, 6 or 8 digits, got {0}")]
    InvalidHexLength(usize),

    /// Hex text contains something other than `0-9`, `a-f` and `A-F`.
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),

    /// A saturation, lightness or CMYK value could not be read as a percentage.
    #[error("cannot read {0:?} as a percentage")]
    InvalidPercentageFormat(String),

    /// A percentage was read fine but lies outside 0-100%.
    #[error("{0}% is outside 0-100%")]
    PercentageOutOfRange(f64),

    /// A hue was NaN or infinite.
    #[error("hue {0} is not a finite number of degrees")]
    InvalidHue(f64),
}
