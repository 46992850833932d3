//! Recipe values for the kitchen manual
//!
//! A [`Recipe`] is built once, validated, and then only read. The vegetables
//! it needs are a map from [`Vegetable`] to a positive [`Quantity`].
//!
//! ```
//! use kitchen_recipe::{Recipe, Vegetable};
//!
//! let recipe = Recipe::new(
//!     "Ratatouille",
//!     [
//!         (Vegetable::Eggplant, 1),
//!         (Vegetable::Zucchini, 2),
//!         (Vegetable::Tomato, 3),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(recipe.name(), "Ratatouille");
//! assert_eq!(recipe.vegetables().len(), 3);
//! ```

pub mod attributes;
mod document;
pub mod error;
pub mod model;
pub mod quantity;
pub mod vegetable;

pub use document::{RecipeDocument, TimeValue};
pub use error::{ErrorKind, RecipeError, RecipeResult};
pub use model::{Recipe, RecipeBuilder};
pub use quantity::Quantity;
pub use vegetable::Vegetable;
