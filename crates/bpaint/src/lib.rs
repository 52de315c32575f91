//! Paint colors, the recipes that mix them, and how much of each is on hand.
//!
//! * [`AnalogColor`] is one physical paint: a brand, series and medium plus a handful of 0-100 ratings.
//! * [`Recipe`] lists which other colors (and how many parts of each) plus which additives go into a color.
//! * [`Inventory`] counts the containers of one color and size, by how full they are.
//! * [`Catalog`] keeps all of the above together and enforces the uniqueness rules between them.
//!
//! Screen colors are [`bcolor::DigitalColor`]s; an [`AnalogColor`] can carry one as a swatch.
//!
//! Nothing here is persisted. The catalog is an in-memory value; storing it is up to the caller.
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

/// A closed set of choices, each with a stable `snake_case` key.
///
/// Generates `ALL`, `key()`, `label()`, [`std::fmt::Display`] (the key)
/// and a case-insensitive [`std::str::FromStr`] that fails with [`CatalogError::UnknownKey`].
macro_rules! keyed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Deserialize, serde::Serialize),
            serde(rename_all = "snake_case")
        )]
        $vis enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// The key in capitals, for display: `colored_pencil` is `COLORED PENCIL`.
            pub fn label(self) -> String {
                self.key().replace('_', " ").to_uppercase()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.key().eq_ignore_ascii_case(key))
                    .ok_or_else(|| $crate::CatalogError::UnknownKey {
                        kind: $kind,
                        key: s.to_owned(),
                    })
            }
        }
    };
}

mod analog;
pub use analog::*;

mod catalog;
pub use catalog::*;

mod error;
pub use error::*;

mod inventory;
pub use inventory::*;

mod recipe;
pub use recipe::*;

pub use bcolor;
