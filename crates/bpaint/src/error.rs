use thiserror::Error;

use crate::{Additive, ColorId, ContainerSize, FillLevel};

/// Everything that can go wrong when editing a [`crate::Catalog`] or its parts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error(transparent)]
    Color(#[from] bcolor::ColorError),

    /// A 0-100 rating such as glossiness was given a larger value.
    #[error("{field} must be within 0-100, got {value}")]
    RatingOutOfRange { field: &'static str, value: u32 },

    /// Lightfastness is graded I, II or III.
    #[error("lightfastness must be 1, 2 or 3, got {0}")]
    InvalidLightfastness(u8),

    /// A text key did not name any known medium, body, container size or additive.
    #[error("unknown {kind} {key:?}")]
    UnknownKey { kind: &'static str, key: String },

    #[error("recipe quantities start at 1")]
    ZeroQuantity,

    #[error("{additive} amount {amount} is outside 0-100")]
    AdditiveOutOfRange { additive: Additive, amount: u32 },

    #[error("no color with id {0}")]
    UnknownColor(ColorId),

    /// Another color already has the same identifying fields.
    #[error("this color is already in the catalog as {0}")]
    DuplicateColor(ColorId),

    #[error("{ingredient} is already an ingredient of {color}")]
    DuplicateIngredient { color: ColorId, ingredient: ColorId },

    /// A stored recipe lists the same color twice.
    #[error("{0} is listed more than once in a recipe")]
    RepeatedIngredient(ColorId),

    #[error("{0} cannot be an ingredient of itself")]
    SelfIngredient(ColorId),

    #[error("{color} already has an inventory row for {size}")]
    DuplicateInventory { color: ColorId, size: ContainerSize },

    #[error("{color} has no inventory row for {size}")]
    UnknownInventory { color: ColorId, size: ContainerSize },

    /// Colors that are still stocked cannot be removed.
    #[error("{0} is still held in inventory")]
    ColorInUse(ColorId),

    #[error("only {available} {level} containers in stock, cannot remove {requested}")]
    InsufficientStock {
        level: FillLevel,
        available: u32,
        requested: u32,
    },
}
