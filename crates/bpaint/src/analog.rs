use bcolor::DigitalColor;

use crate::CatalogError;

keyed_enum! {
    /// What the paint is made of, or made for.
    pub enum Medium("medium") {
        Acrylic => "acrylic",
        Oil => "oil",
        Watercolor => "watercolor",
        Gouache => "gouache",
        Mixed => "mixed",
        Dye => "dye",
        Pastel => "pastel",
        ColoredPencil => "colored_pencil",
        Graphite => "graphite",
        Charcoal => "charcoal",
        LiquidGraphite => "liquid_graphite",
    }
}

keyed_enum! {
    /// Viscosity of the paint as it comes out of the container.
    #[derive(Default)]
    pub enum Body("body") {
        #[default]
        Heavy => "heavy",
        Medium => "medium",
        Light => "light",
    }
}

/// Resistance to fading, graded I (best) to III.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Lightfastness {
    #[default]
    I,
    II,
    III,
}

impl Lightfastness {
    /// 1, 2 or 3.
    pub const fn grade(self) -> u8 {
        match self {
            Self::I => 1,
            Self::II => 2,
            Self::III => 3,
        }
    }
}

impl TryFrom<u8> for Lightfastness {
    type Error = CatalogError;

    fn try_from(grade: u8) -> Result<Self, Self::Error> {
        match grade {
            1 => Ok(Self::I),
            2 => Ok(Self::II),
            3 => Ok(Self::III),
            _ => Err(CatalogError::InvalidLightfastness(grade)),
        }
    }
}

impl From<Lightfastness> for u8 {
    fn from(lightfastness: Lightfastness) -> Self {
        lightfastness.grade()
    }
}

impl std::fmt::Display for Lightfastness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
        })
    }
}

// ----------------------------------------------------------------------------

/// A 0-100 property of a paint, such as its glossiness.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Rating(u8);

impl Rating {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// `field` only names the property in the error.
    ///
    /// # Errors
    /// [`CatalogError::RatingOutOfRange`] above 100.
    pub fn new(field: &'static str, value: u32) -> Result<Self, CatalogError> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= 100)
            .map(Self)
            .ok_or(CatalogError::RatingOutOfRange { field, value })
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new("rating", u32::from(value))
    }
}

impl From<Rating> for u8 {
    #[inline]
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ----------------------------------------------------------------------------

/// One physical paint.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AnalogColor {
    pub name: String,
    pub brandname: String,
    pub series: String,
    pub medium: Medium,
    pub body: Body,
    pub image_url: String,
    pub lightfastness: Lightfastness,

    /// Defaults to 100.
    pub glossiness: Rating,

    /// Defaults to 100.
    pub opaqueness: Rating,

    /// Defaults to 75.
    pub thickness: Rating,

    /// Tinting strength / pigmentation. Defaults to 100.
    pub tinting: Rating,

    /// What the paint looks like on screen, if known.
    pub swatch: Option<DigitalColor>,
}

/// The fields that make an [`AnalogColor`] unique within a [`crate::Catalog`].
///
/// Everything except the image and the swatch.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ColorIdentity {
    pub name: String,
    pub brandname: String,
    pub series: String,
    pub medium: Medium,
    pub body: Body,
    pub lightfastness: Lightfastness,
    pub glossiness: Rating,
    pub opaqueness: Rating,
    pub thickness: Rating,
    pub tinting: Rating,
}

impl AnalogColor {
    pub fn new(
        name: impl Into<String>,
        brandname: impl Into<String>,
        series: impl Into<String>,
        medium: Medium,
    ) -> Self {
        Self {
            name: name.into(),
            brandname: brandname.into(),
            series: series.into(),
            medium,
            body: Body::default(),
            image_url: String::new(),
            lightfastness: Lightfastness::default(),
            glossiness: Rating::FULL,
            opaqueness: Rating::FULL,
            thickness: Rating(75),
            tinting: Rating::FULL,
            swatch: None,
        }
    }

    #[inline]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    #[inline]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    #[inline]
    pub fn with_lightfastness(mut self, lightfastness: Lightfastness) -> Self {
        self.lightfastness = lightfastness;
        self
    }

    /// # Errors
    /// [`CatalogError::RatingOutOfRange`] above 100.
    pub fn with_glossiness(mut self, glossiness: u32) -> Result<Self, CatalogError> {
        self.glossiness = Rating::new("glossiness", glossiness)?;
        Ok(self)
    }

    /// # Errors
    /// [`CatalogError::RatingOutOfRange`] above 100.
    pub fn with_opaqueness(mut self, opaqueness: u32) -> Result<Self, CatalogError> {
        self.opaqueness = Rating::new("opaqueness", opaqueness)?;
        Ok(self)
    }

    /// # Errors
    /// [`CatalogError::RatingOutOfRange`] above 100.
    pub fn with_thickness(mut self, thickness: u32) -> Result<Self, CatalogError> {
        self.thickness = Rating::new("thickness", thickness)?;
        Ok(self)
    }

    /// # Errors
    /// [`CatalogError::RatingOutOfRange`] above 100.
    pub fn with_tinting(mut self, tinting: u32) -> Result<Self, CatalogError> {
        self.tinting = Rating::new("tinting", tinting)?;
        Ok(self)
    }

    #[inline]
    pub fn with_swatch(mut self, swatch: DigitalColor) -> Self {
        self.swatch = Some(swatch);
        self
    }

    /// Set the swatch from hex text, see [`bcolor::PackedRgba::from_hex_string`].
    ///
    /// # Errors
    /// [`CatalogError::Color`] if the hex text is malformed.
    pub fn with_swatch_hex(self, hex: &str) -> Result<Self, CatalogError> {
        let swatch = DigitalColor::named(self.name.clone(), bcolor::PackedRgba::from_hex_string(hex)?);
        Ok(self.with_swatch(swatch))
    }

    pub fn identity(&self) -> ColorIdentity {
        ColorIdentity {
            name: self.name.clone(),
            brandname: self.brandname.clone(),
            series: self.series.clone(),
            medium: self.medium,
            body: self.body,
            lightfastness: self.lightfastness,
            glossiness: self.glossiness,
            opaqueness: self.opaqueness,
            thickness: self.thickness,
            tinting: self.tinting,
        }
    }

    /// A multi-line summary of every property, for logs and terminals.
    pub fn details(&self) -> String {
        let Self {
            name,
            brandname,
            series,
            medium,
            body,
            image_url,
            lightfastness,
            glossiness,
            opaqueness,
            thickness,
            tinting,
            swatch,
        } = self;
        let swatch = swatch
            .as_ref()
            .map_or_else(|| "none".to_owned(), DigitalColor::hex);
        format!(
            "{name}\n\
             image_url: {image_url}\n\
             medium: {}\n\
             body: {}\n\
             brandname: {brandname}\n\
             series: {series}\n\
             lightfastness: {lightfastness}\n\
             glossiness: {glossiness}\n\
             opaqueness: {opaqueness}\n\
             thickness: {thickness}\n\
             tinting: {tinting}\n\
             swatch: {swatch}",
            medium.label(),
            body.label(),
        )
    }
}

impl std::fmt::Display for AnalogColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.medium)
    }
}
