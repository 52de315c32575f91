use std::collections::BTreeMap;

use crate::{
    Additive, AnalogColor, CatalogError, ColorIdentity, ContainerSize, Inventory, Recipe,
};

/// Identifies an [`AnalogColor`] within one [`Catalog`].
///
/// Ids are handed out in increasing order and never reused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(transparent)
)]
pub struct ColorId(pub(crate) u64);

impl ColorId {
    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry {
    color: AnalogColor,
    recipe: Recipe,
}

/// All paints, their recipes and their inventory.
///
/// Rules kept by the catalog:
/// * no two colors share a [`ColorIdentity`],
/// * a recipe only lists colors in the catalog, never its own color, and each one once,
/// * there is at most one [`Inventory`] row per color and container size,
/// * a color with inventory rows cannot be removed; removing any other color
///   also drops it from every recipe that used it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    next_id: u64,
    entries: BTreeMap<ColorId, Entry>,
    identities: ahash::HashMap<ColorIdentity, ColorId>,
    inventory: BTreeMap<(ColorId, ContainerSize), Inventory>,
}

impl Catalog {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// # Errors
    /// [`CatalogError::DuplicateColor`] if a color with the same identity is already present.
    pub fn add_color(&mut self, color: AnalogColor) -> Result<ColorId, CatalogError> {
        let identity = color.identity();
        if let Some(existing) = self.identities.get(&identity) {
            return Err(CatalogError::DuplicateColor(*existing));
        }

        let id = ColorId(self.next_id);
        self.next_id += 1;
        log::debug!("Adding {color} as {id}");
        self.identities.insert(identity, id);
        self.entries.insert(
            id,
            Entry {
                color,
                recipe: Recipe::default(),
            },
        );
        Ok(id)
    }

    #[inline]
    pub fn color(&self, id: ColorId) -> Option<&AnalogColor> {
        self.entries.get(&id).map(|entry| &entry.color)
    }

    /// All colors, in the order they were added.
    pub fn colors(&self) -> impl Iterator<Item = (ColorId, &AnalogColor)> + '_ {
        self.entries.iter().map(|(id, entry)| (*id, &entry.color))
    }

    pub fn find(&self, identity: &ColorIdentity) -> Option<ColorId> {
        self.identities.get(identity).copied()
    }

    /// Colors whose name or brand name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<ColorId> {
        let query = query.trim().to_lowercase();
        self.colors()
            .filter(|(_, color)| {
                color.name.to_lowercase().contains(&query)
                    || color.brandname.to_lowercase().contains(&query)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Edit a color in place.
    ///
    /// # Errors
    /// [`CatalogError::UnknownColor`], or [`CatalogError::DuplicateColor`] if the edit
    /// would make the color identical to another one. The edit is undone in that case.
    pub fn update_color(
        &mut self,
        id: ColorId,
        edit: impl FnOnce(&mut AnalogColor),
    ) -> Result<(), CatalogError> {
        let entry = self.entries.get_mut(&id).ok_or(CatalogError::UnknownColor(id))?;
        let before = entry.color.clone();
        edit(&mut entry.color);

        let old_identity = before.identity();
        let new_identity = entry.color.identity();
        if old_identity == new_identity {
            return Ok(());
        }
        if let Some(existing) = self.identities.get(&new_identity) {
            let existing = *existing;
            entry.color = before;
            return Err(CatalogError::DuplicateColor(existing));
        }

        self.identities.remove(&old_identity);
        self.identities.insert(new_identity, id);
        Ok(())
    }

    /// Remove a color, and remove it from every recipe it was used in.
    ///
    /// # Errors
    /// [`CatalogError::UnknownColor`], or [`CatalogError::ColorInUse`] while it has inventory rows.
    pub fn remove_color(&mut self, id: ColorId) -> Result<AnalogColor, CatalogError> {
        if !self.entries.contains_key(&id) {
            return Err(CatalogError::UnknownColor(id));
        }
        if self.inventory_for(id).next().is_some() {
            return Err(CatalogError::ColorInUse(id));
        }

        for user in self.used_in(id) {
            if let Some(entry) = self.entries.get_mut(&user) {
                entry.recipe.remove_color(id);
            }
        }

        let entry = self.entries.remove(&id).ok_or(CatalogError::UnknownColor(id))?;
        self.identities.remove(&entry.color.identity());
        log::debug!("Removed {} ({id})", entry.color);
        Ok(entry.color)
    }

    // ------------------------------------------------------------------------
    // Recipes:

    /// # Errors
    /// [`CatalogError::UnknownColor`].
    pub fn recipe(&self, id: ColorId) -> Result<&Recipe, CatalogError> {
        self.entries
            .get(&id)
            .map(|entry| &entry.recipe)
            .ok_or(CatalogError::UnknownColor(id))
    }

    /// Add `quantity` parts of `ingredient` to the recipe of `id`.
    ///
    /// # Errors
    /// [`CatalogError::UnknownColor`] if either color is missing,
    /// [`CatalogError::SelfIngredient`] if they are the same,
    /// and the errors of [`Recipe::add_color`].
    pub fn add_ingredient(
        &mut self,
        id: ColorId,
        ingredient: ColorId,
        quantity: u32,
    ) -> Result<(), CatalogError> {
        if id == ingredient {
            return Err(CatalogError::SelfIngredient(id));
        }
        if !self.entries.contains_key(&ingredient) {
            return Err(CatalogError::UnknownColor(ingredient));
        }
        self.recipe_mut(id)?.add_color(id, ingredient, quantity)
    }

    /// Returns the removed quantity, if `ingredient` was in the recipe.
    ///
    /// # Errors
    /// [`CatalogError::UnknownColor`].
    pub fn remove_ingredient(
        &mut self,
        id: ColorId,
        ingredient: ColorId,
    ) -> Result<Option<u32>, CatalogError> {
        Ok(self.recipe_mut(id)?.remove_color(ingredient))
    }

    /// # Errors
    /// [`CatalogError::UnknownColor`] and the errors of [`Recipe::set_additive`].
    pub fn set_additive(
        &mut self,
        id: ColorId,
        additive: Additive,
        amount: u32,
    ) -> Result<(), CatalogError> {
        self.recipe_mut(id)?.set_additive(additive, amount)
    }

    /// Colors whose recipe lists `id`.
    pub fn used_in(&self, id: ColorId) -> Vec<ColorId> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.recipe.contains(id))
            .map(|(user, _)| *user)
            .collect()
    }

    /// The recipe of `id` spelled out with color names.
    ///
    /// A color without color ingredients is made of one part of itself.
    ///
    /// # Errors
    /// [`CatalogError::UnknownColor`].
    pub fn describe_recipe(&self, id: ColorId) -> Result<RecipeSummary, CatalogError> {
        let entry = self.entries.get(&id).ok_or(CatalogError::UnknownColor(id))?;

        let mut colors: Vec<String> = entry
            .recipe
            .colors()
            .iter()
            .filter_map(|ingredient| {
                self.color(ingredient.color)
                    .map(|color| format!("{color} x{}", ingredient.quantity))
            })
            .collect();
        if colors.is_empty() {
            colors.push(format!("{} x1", entry.color));
        }

        Ok(RecipeSummary {
            colors,
            additives: entry.recipe.additives().collect(),
        })
    }

    fn recipe_mut(&mut self, id: ColorId) -> Result<&mut Recipe, CatalogError> {
        self.entries
            .get_mut(&id)
            .map(|entry| &mut entry.recipe)
            .ok_or(CatalogError::UnknownColor(id))
    }

    // ------------------------------------------------------------------------
    // Inventory:

    /// # Errors
    /// [`CatalogError::UnknownColor`] if the row's color is not in the catalog,
    /// and [`CatalogError::DuplicateInventory`] if that color already has a row of that size.
    pub fn add_inventory(&mut self, inventory: Inventory) -> Result<(), CatalogError> {
        let (color, size) = (inventory.color(), inventory.size());
        if !self.entries.contains_key(&color) {
            return Err(CatalogError::UnknownColor(color));
        }
        if self.inventory.contains_key(&(color, size)) {
            return Err(CatalogError::DuplicateInventory { color, size });
        }
        log::debug!("Adding inventory {inventory}");
        self.inventory.insert((color, size), inventory);
        Ok(())
    }

    #[inline]
    pub fn inventory(&self, color: ColorId, size: ContainerSize) -> Option<&Inventory> {
        self.inventory.get(&(color, size))
    }

    #[inline]
    pub fn inventory_mut(&mut self, color: ColorId, size: ContainerSize) -> Option<&mut Inventory> {
        self.inventory.get_mut(&(color, size))
    }

    /// All rows for one color, by container size.
    pub fn inventory_for(&self, color: ColorId) -> impl Iterator<Item = &Inventory> + '_ {
        self.inventory
            .range((color, ContainerSize::ALL[0])..)
            .take_while(move |((row_color, _), _)| *row_color == color)
            .map(|(_, inventory)| inventory)
    }

    /// # Errors
    /// [`CatalogError::UnknownInventory`] if there is no such row.
    pub fn remove_inventory(
        &mut self,
        color: ColorId,
        size: ContainerSize,
    ) -> Result<Inventory, CatalogError> {
        let inventory = self
            .inventory
            .remove(&(color, size))
            .ok_or(CatalogError::UnknownInventory { color, size })?;
        log::debug!("Removed inventory {inventory}");
        Ok(inventory)
    }

    /// Containers on hand of one color, across all sizes. Saturates at `u32::MAX`.
    pub fn total_containers(&self, color: ColorId) -> u32 {
        self.inventory_for(color)
            .fold(0, |total, inventory| total.saturating_add(inventory.total()))
    }
}

/// A recipe with the ingredient colors spelled out, see [`Catalog::describe_recipe`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RecipeSummary {
    /// e.g. `"Burnt Umber (oil) x2"`
    pub colors: Vec<String>,

    pub additives: Vec<(Additive, u32)>,
}

impl std::fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "colors: {}", self.colors.join(", "))?;
        for (additive, amount) in &self.additives {
            write!(f, "\n{additive}: {amount}")?;
        }
        Ok(())
    }
}
