use enum_map::EnumMap;

use crate::{CatalogError, ColorId};

keyed_enum! {
    /// What a paint comes in.
    pub enum ContainerSize("container size") {
        SmallBottle => "small_bottle",
        MediumBottle => "medium_bottle",
        LargeBottle => "large_bottle",
        ExtraLargeBottle => "extra_large_bottle",
        SmallJar => "small_jar",
        MediumJar => "medium_jar",
        LargeJar => "large_jar",
        ExtraLargeJar => "extra_large_jar",
        SmallTube => "small_tube",
        MediumTube => "medium_tube",
        LargeTube => "large_tube",
        ExtraLargeTube => "extra_large_tube",
        Pencil => "pencil",
        Stick => "stick",
        Pen => "pen",
        Marker => "marker",
    }
}

keyed_enum! {
    /// How much is left in a container.
    #[derive(enum_map::Enum)]
    pub enum FillLevel("fill level") {
        Full => "full",
        ThreeFourths => "three_fourths",
        Half => "half",
        OneFourth => "one_fourth",
    }
}

impl FillLevel {
    /// The fraction of a container this level stands for.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Full => 1.0,
            Self::ThreeFourths => 0.75,
            Self::Half => 0.5,
            Self::OneFourth => 0.25,
        }
    }
}

/// The containers on hand of one color in one size.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Inventory {
    color: ColorId,
    size: ContainerSize,
    counts: EnumMap<FillLevel, u32>,
}

impl Inventory {
    /// An empty row.
    pub fn new(color: ColorId, size: ContainerSize) -> Self {
        Self {
            color,
            size,
            counts: EnumMap::default(),
        }
    }

    #[inline]
    pub fn color(&self) -> ColorId {
        self.color
    }

    #[inline]
    pub fn size(&self) -> ContainerSize {
        self.size
    }

    #[inline]
    pub fn count(&self, level: FillLevel) -> u32 {
        self.counts[level]
    }

    #[inline]
    pub fn set_count(&mut self, level: FillLevel, count: u32) {
        self.counts[level] = count;
    }

    pub fn add(&mut self, level: FillLevel, count: u32) {
        self.counts[level] = self.counts[level].saturating_add(count);
    }

    /// # Errors
    /// [`CatalogError::InsufficientStock`] if fewer than `count` containers are at that level.
    /// Nothing is removed in that case.
    pub fn remove(&mut self, level: FillLevel, count: u32) -> Result<(), CatalogError> {
        let available = self.counts[level];
        let Some(left) = available.checked_sub(count) else {
            log::warn!(
                "Cannot remove {count} {level} {} of {}: only {available} in stock",
                self.size,
                self.color
            );
            return Err(CatalogError::InsufficientStock {
                level,
                available,
                requested: count,
            });
        };
        self.counts[level] = left;
        Ok(())
    }

    /// Number of containers, however full. Saturates at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.counts
            .values()
            .fold(0, |total, count| total.saturating_add(*count))
    }

    /// Number of full containers' worth of paint.
    pub fn full_equivalent(&self) -> f64 {
        self.counts
            .iter()
            .map(|(level, count)| level.fraction() * f64::from(*count))
            .sum()
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.color, self.size, self.total())
    }
}
