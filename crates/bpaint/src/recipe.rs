use enum_map::EnumMap;

use crate::{CatalogError, ColorId};

keyed_enum! {
    /// Something other than a color that goes into a mix.
    #[derive(enum_map::Enum)]
    pub enum Additive("additive") {
        Gloss => "gloss",
        Matte => "matte",
        Medium => "medium",
        Oil => "oil",
        Thinner => "thinner",
        Water => "water",
    }
}

/// `quantity` parts of another color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Ingredient {
    pub color: ColorId,

    /// At least 1.
    pub quantity: u32,
}

/// How to mix a color: parts of other colors, plus additives.
///
/// Each color appears at most once. Additive amounts are 0-100; zero means "not used".
///
/// Deserializing runs the same checks as [`Recipe::add_color`] and [`Recipe::set_additive`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "StoredRecipe", into = "StoredRecipe")
)]
pub struct Recipe {
    colors: Vec<Ingredient>,
    additives: EnumMap<Additive, u32>,
}

/// A [`Recipe`] as written to disk, not yet checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize, serde::Serialize)]
struct StoredRecipe {
    colors: Vec<Ingredient>,
    additives: EnumMap<Additive, u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<StoredRecipe> for Recipe {
    type Error = CatalogError;

    fn try_from(stored: StoredRecipe) -> Result<Self, Self::Error> {
        let mut recipe = Self::default();
        for Ingredient { color, quantity } in stored.colors {
            if quantity == 0 {
                return Err(CatalogError::ZeroQuantity);
            }
            if recipe.contains(color) {
                return Err(CatalogError::RepeatedIngredient(color));
            }
            recipe.colors.push(Ingredient { color, quantity });
        }
        for (additive, amount) in stored.additives {
            recipe.set_additive(additive, amount)?;
        }
        Ok(recipe)
    }
}

#[cfg(feature = "serde")]
impl From<Recipe> for StoredRecipe {
    fn from(recipe: Recipe) -> Self {
        let Recipe { colors, additives } = recipe;
        Self { colors, additives }
    }
}

impl Recipe {
    /// No colors and no additives.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.additives.values().all(|amount| *amount == 0)
    }

    #[inline]
    pub fn colors(&self) -> &[Ingredient] {
        &self.colors
    }

    pub fn quantity_of(&self, color: ColorId) -> Option<u32> {
        self.colors
            .iter()
            .find(|ingredient| ingredient.color == color)
            .map(|ingredient| ingredient.quantity)
    }

    #[inline]
    pub fn contains(&self, color: ColorId) -> bool {
        self.quantity_of(color).is_some()
    }

    /// Add `quantity` parts of `color`.
    ///
    /// # Errors
    /// [`CatalogError::ZeroQuantity`] for zero parts,
    /// and [`CatalogError::DuplicateIngredient`] if the color is already listed
    /// (use [`Self::set_quantity`] to change it).
    pub fn add_color(
        &mut self,
        owner: ColorId,
        color: ColorId,
        quantity: u32,
    ) -> Result<(), CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::ZeroQuantity);
        }
        if self.contains(color) {
            return Err(CatalogError::DuplicateIngredient {
                color: owner,
                ingredient: color,
            });
        }
        self.colors.push(Ingredient { color, quantity });
        Ok(())
    }

    /// Change how many parts of an already listed color go in.
    ///
    /// Returns the previous quantity, or `None` if the color is not an ingredient.
    ///
    /// # Errors
    /// [`CatalogError::ZeroQuantity`] for zero parts; use [`Self::remove_color`] instead.
    pub fn set_quantity(&mut self, color: ColorId, quantity: u32) -> Result<Option<u32>, CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::ZeroQuantity);
        }
        Ok(self
            .colors
            .iter_mut()
            .find(|ingredient| ingredient.color == color)
            .map(|ingredient| std::mem::replace(&mut ingredient.quantity, quantity)))
    }

    /// Returns the removed quantity, if the color was an ingredient.
    pub fn remove_color(&mut self, color: ColorId) -> Option<u32> {
        let index = self.colors.iter().position(|ingredient| ingredient.color == color)?;
        Some(self.colors.remove(index).quantity)
    }

    #[inline]
    pub fn additive(&self, additive: Additive) -> u32 {
        self.additives[additive]
    }

    /// # Errors
    /// [`CatalogError::AdditiveOutOfRange`] above 100.
    pub fn set_additive(&mut self, additive: Additive, amount: u32) -> Result<(), CatalogError> {
        if amount > 100 {
            return Err(CatalogError::AdditiveOutOfRange { additive, amount });
        }
        self.additives[additive] = amount;
        Ok(())
    }

    /// Like [`Self::set_additive`], with the additive named by its key, e.g. `"thinner"`.
    ///
    /// # Errors
    /// [`CatalogError::UnknownKey`] if no additive has that key,
    /// and [`CatalogError::AdditiveOutOfRange`] above 100.
    pub fn set_additive_by_key(&mut self, key: &str, amount: u32) -> Result<(), CatalogError> {
        self.set_additive(key.parse()?, amount)
    }

    /// The additives in use, in declaration order.
    pub fn additives(&self) -> impl Iterator<Item = (Additive, u32)> + '_ {
        self.additives
            .iter()
            .filter(|(_, amount)| **amount > 0)
            .map(|(additive, amount)| (additive, *amount))
    }
}
