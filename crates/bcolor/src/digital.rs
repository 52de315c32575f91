use crate::{
    Cmyk, ColorError, Hsl, Hsla, PackedRgba, Percentage, Rgba, decode_cmyk, decode_hsla,
    decode_rgba, encode_cmyk, encode_hsla, encode_rgba,
};

/// A screen color: an optional name and a packed value.
///
/// The packed value is the only stored state. Every getter decodes a view from it,
/// and every `set_*` method replaces it with the encoding of the given view.
/// A failed setter leaves the color untouched.
///
/// ```
/// use bcolor::DigitalColor;
/// let mut color = DigitalColor::named("Cadmium Red", bcolor::PackedRgba::RED);
/// assert_eq!(color.hex(), "#ff0000ff");
///
/// color.set_hex("#abc")?;
/// assert_eq!(color.rgb(), [0xaa, 0xbb, 0xcc]);
/// assert_eq!(color.to_string(), "Cadmium Red (170, 187, 204, 1)");
/// # Ok::<(), bcolor::ColorError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DigitalColor {
    /// A label only; it plays no part in any conversion.
    pub name: Option<String>,

    value: PackedRgba,
}

impl DigitalColor {
    #[inline]
    pub fn new(value: PackedRgba) -> Self {
        Self { name: None, value }
    }

    #[inline]
    pub fn named(name: impl Into<String>, value: PackedRgba) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    /// # Errors
    /// See [`PackedRgba::from_hex_string`].
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        PackedRgba::from_hex_string(hex).map(Self::new)
    }

    #[inline]
    pub fn value(&self) -> PackedRgba {
        self.value
    }

    /// Replaces this color's packed value.
    #[inline]
    pub fn set_value(&mut self, value: PackedRgba) {
        self.value = value;
    }

    // ------------------------------------------------------------------------

    #[inline]
    pub fn rgba(&self) -> Rgba {
        decode_rgba(self.value)
    }

    /// # Errors
    /// See [`encode_rgba`].
    pub fn set_rgba(&mut self, r: i32, g: i32, b: i32, a: f64) -> Result<(), ColorError> {
        self.value = encode_rgba(r, g, b, a)?;
        Ok(())
    }

    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        self.rgba().rgb()
    }

    /// Alpha is set to `1.0`.
    ///
    /// # Errors
    /// See [`encode_rgba`].
    pub fn set_rgb(&mut self, r: i32, g: i32, b: i32) -> Result<(), ColorError> {
        self.set_rgba(r, g, b, 1.0)
    }

    #[inline]
    pub fn hsla(&self) -> Hsla {
        decode_hsla(self.value)
    }

    /// # Errors
    /// See [`encode_hsla`].
    pub fn set_hsla(
        &mut self,
        h: f64,
        s: impl Into<Percentage>,
        l: impl Into<Percentage>,
        a: f64,
    ) -> Result<(), ColorError> {
        self.value = encode_hsla(h, s, l, a)?;
        Ok(())
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.hsla().hsl()
    }

    /// Alpha is set to `1.0`.
    ///
    /// # Errors
    /// See [`encode_hsla`].
    pub fn set_hsl(
        &mut self,
        h: f64,
        s: impl Into<Percentage>,
        l: impl Into<Percentage>,
    ) -> Result<(), ColorError> {
        self.set_hsla(h, s, l, 1.0)
    }

    #[inline]
    pub fn cmyk(&self) -> Cmyk {
        decode_cmyk(self.value)
    }

    /// Alpha is set to `1.0`.
    ///
    /// # Errors
    /// See [`encode_cmyk`].
    pub fn set_cmyk(
        &mut self,
        c: impl Into<Percentage>,
        m: impl Into<Percentage>,
        y: impl Into<Percentage>,
        k: impl Into<Percentage>,
    ) -> Result<(), ColorError> {
        self.value = encode_cmyk(c, m, y, k)?;
        Ok(())
    }

    /// Always `#rrggbbaa`.
    #[inline]
    pub fn hex(&self) -> String {
        self.value.to_hex_string()
    }

    /// # Errors
    /// See [`PackedRgba::from_hex_string`].
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        self.value = PackedRgba::from_hex_string(hex)?;
        Ok(())
    }
}

impl From<PackedRgba> for DigitalColor {
    #[inline]
    fn from(value: PackedRgba) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for DigitalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("NO NAME SET");
        write!(f, "{name} {}", self.rgba())
    }
}
