use crate::ColorError;

/// A saturation, lightness or CMYK component as supplied by a caller.
///
/// All three forms resolve through [`Percentage::to_fraction`], so every setter
/// agrees on how `"50%"`, `Percent(50.0)` and `Fraction(0.5)` relate.
///
/// ```
/// use bcolor::Percentage;
/// assert_eq!(Percentage::from("50%").to_fraction(), Ok(0.5));
/// assert_eq!(Percentage::Percent(50.0).to_fraction(), Ok(0.5));
/// assert_eq!(Percentage::Fraction(0.5).to_fraction(), Ok(0.5));
/// assert_eq!(Percentage::number(50.0), Percentage::Percent(50.0));
/// assert_eq!(Percentage::number(0.5), Percentage::Fraction(0.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Percentage {
    /// 0-1
    Fraction(f64),

    /// 0-100
    Percent(f64),

    /// Text on the 0-100 scale, with or without a trailing `%`, e.g. `"42%"` or `"42"`.
    Text(String),
}

impl Percentage {
    #[inline]
    pub fn fraction(fraction: f64) -> Self {
        Self::Fraction(fraction)
    }

    #[inline]
    pub fn percent(percent: f64) -> Self {
        Self::Percent(percent)
    }

    /// A bare number of unknown scale: anything above `1` is taken to already be a percent,
    /// anything else is a fraction. So `1` means 100%, and `2` means 2%.
    #[inline]
    pub fn number(value: f64) -> Self {
        if value > 1.0 {
            Self::Percent(value)
        } else {
            Self::Fraction(value)
        }
    }

    /// Resolve to a fraction in `[0, 1]`.
    ///
    /// # Errors
    /// [`ColorError::InvalidPercentageFormat`] if text does not hold a number, or any form is NaN or infinite.
    /// [`ColorError::PercentageOutOfRange`] if the value lies outside 0-100%.
    pub fn to_fraction(&self) -> Result<f64, ColorError> {
        let fraction = match self {
            Self::Fraction(fraction) => *fraction,
            Self::Percent(percent) => *percent / 100.0,
            Self::Text(text) => {
                let trimmed = text.trim();
                let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
                number
                    .parse::<f64>()
                    .ok()
                    .ok_or_else(|| ColorError::InvalidPercentageFormat(text.clone()))?
                    / 100.0
            }
        };

        if !fraction.is_finite() {
            Err(ColorError::InvalidPercentageFormat(self.to_string()))
        } else if !(0.0..=1.0).contains(&fraction) {
            Err(ColorError::PercentageOutOfRange(fraction * 100.0))
        } else {
            Ok(fraction)
        }
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fraction(fraction) => write!(f, "{fraction}"),
            Self::Percent(percent) => write!(f, "{percent}%"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Percentage {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Percentage {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<WholePercent> for Percentage {
    #[inline]
    fn from(percent: WholePercent) -> Self {
        Self::Percent(f64::from(percent.0))
    }
}

// ----------------------------------------------------------------------------

/// A percentage as read back from a color: a whole number in 0-100.
///
/// Displays as `"NN%"`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct WholePercent(u8);

impl WholePercent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// `None` above 100.
    #[inline]
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= 100 {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Round `fraction * 100` to the nearest whole percent, ties to even.
    pub fn from_fraction_rounded(fraction: f64) -> Self {
        crate::bcolor_assert!(fraction.is_finite());
        Self((fraction * 100.0).round_ties_even().clamp(0.0, 100.0) as u8)
    }

    /// Drop everything after the decimal point of `fraction * 100`.
    pub fn from_fraction_truncated(fraction: f64) -> Self {
        crate::bcolor_assert!(fraction.is_finite());
        Self((fraction * 100.0).trunc().clamp(0.0, 100.0) as u8)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl TryFrom<u8> for WholePercent {
    type Error = ColorError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        Self::new(percent).ok_or(ColorError::PercentageOutOfRange(f64::from(percent)))
    }
}

impl From<WholePercent> for u8 {
    #[inline]
    fn from(percent: WholePercent) -> Self {
        percent.0
    }
}

impl std::fmt::Display for WholePercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl std::str::FromStr for WholePercent {
    type Err = ColorError;

    /// Parses `"NN%"` or `"NN"` where `NN` is a whole number in 0-100.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let percent = digits
            .parse::<u8>()
            .ok()
            .ok_or_else(|| ColorError::InvalidPercentageFormat(s.to_owned()))?;
        Self::try_from(percent)
    }
}
