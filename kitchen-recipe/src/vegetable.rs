//! Vegetable identifiers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::RecipeError;

/// A kind of vegetable
///
/// Common vegetables have their own variant. Anything else is kept by name
/// in [`Vegetable::Other`], normalized to lower case with `_` separators.
///
/// Parsing is case insensitive and accepts spaces, `-` or `_` between words,
/// plus a few regional aliases (`aubergine`, `courgette`...).
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "snake_case")]
pub enum Vegetable {
    Artichoke,
    Asparagus,
    Beetroot,
    BellPepper,
    Broccoli,
    Cabbage,
    Carrot,
    Cauliflower,
    Celery,
    Cucumber,
    Eggplant,
    Garlic,
    GreenBean,
    Kale,
    Leek,
    Lettuce,
    Mushroom,
    Onion,
    Pea,
    Potato,
    Pumpkin,
    Radish,
    Spinach,
    SpringOnion,
    SweetPotato,
    Tomato,
    Turnip,
    Zucchini,
    /// Any vegetable without its own variant
    Other(String),
}

impl Vegetable {
    /// All the vegetables with their own variant
    pub fn known() -> impl Iterator<Item = Vegetable> {
        Vegetable::iter().filter(|v| !v.is_other())
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Vegetable::Other(_))
    }

    /// Name used to display and store the vegetable
    pub fn name(&self) -> &str {
        match self {
            Vegetable::Other(name) => name,
            known => known.as_ref(),
        }
    }

    /// Alternative names accepted when parsing
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Vegetable::Eggplant => &["aubergine", "brinjal"],
            Vegetable::Zucchini => &["courgette"],
            Vegetable::BellPepper => &["capsicum", "pepper", "sweet_pepper"],
            Vegetable::SpringOnion => &["scallion", "green_onion"],
            Vegetable::Beetroot => &["beet"],
            Vegetable::GreenBean => &["string_bean", "french_bean"],
            Vegetable::Pumpkin => &["squash"],
            Vegetable::Tomato => &["tomatoe"],
            _ => &[],
        }
    }

    /// Re-parses an [`Vegetable::Other`] built by hand, so it ends up
    /// normalized or as a known variant
    pub(crate) fn normalized(self) -> Result<Self, RecipeError> {
        match self {
            Vegetable::Other(name) => name.parse(),
            known => Ok(known),
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.as_ref() == normalized || self.aliases().contains(&normalized)
    }
}

// "carrots" -> "carrot", "tomatoes" -> "tomato"
fn singular(name: &str) -> Option<&str> {
    let stem = name.strip_suffix('s')?;
    Some(if stem.ends_with("oe") {
        &stem[..stem.len() - 1]
    } else {
        stem
    })
}

fn normalize(name: &str) -> String {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

impl FromStr for Vegetable {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        if name.is_empty() {
            return Err(RecipeError::EmptyVegetableName);
        }
        let singular = singular(&name);
        let found = Vegetable::known()
            .find(|v| v.matches(&name) || singular.is_some_and(|n| v.matches(n)));
        Ok(found.unwrap_or(Vegetable::Other(name)))
    }
}

impl TryFrom<String> for Vegetable {
    type Error = RecipeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Vegetable> for String {
    fn from(value: Vegetable) -> Self {
        match value {
            Vegetable::Other(name) => name,
            known => known.as_ref().to_string(),
        }
    }
}

impl fmt::Display for Vegetable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
