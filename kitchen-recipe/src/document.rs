//! Text form of a recipe
//!
//! A recipe document is TOML or JSON with the same shape:
//!
//! ```toml
//! name = "Ratatouille"
//! time = "1h 15m"
//! equipment = ["dutch oven"]
//!
//! [vegetables]
//! eggplant = 1
//! zucchini = 2
//! tomato = 3
//! ```
//!
//! Reading a document always goes through [`RecipeBuilder::build`], so an
//! invalid document never becomes a [`Recipe`]. Vegetable keys are kept as
//! written until then, so `tomato` and `tomatoes` in the same table are
//! reported as the same vegetable listed twice.

use serde::{Deserialize, Serialize};

use crate::{
    attributes::TimeInput,
    error::{RecipeError, RecipeResult},
    model::{Recipe, RecipeBuilder},
    vegetable::Vegetable,
};

/// Unvalidated recipe, as found in a document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RecipeDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    // tables go last in TOML
    #[serde(default, with = "vegetable_table")]
    pub vegetables: Vec<(String, i64)>,
}

/// Time to make, either minutes or human readable text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TimeValue {
    Minutes(u64),
    Text(String),
}

impl From<TimeValue> for TimeInput {
    fn from(value: TimeValue) -> Self {
        match value {
            TimeValue::Minutes(m) => TimeInput::Minutes(m),
            TimeValue::Text(t) => TimeInput::Text(t),
        }
    }
}

impl TryFrom<RecipeDocument> for Recipe {
    type Error = RecipeError;

    fn try_from(doc: RecipeDocument) -> Result<Self, Self::Error> {
        let vegetables = doc
            .vegetables
            .into_iter()
            .map(|(name, quantity)| name.parse::<Vegetable>().map(|v| (v, quantity)))
            .collect::<RecipeResult<Vec<_>>>()?;
        let mut builder = RecipeBuilder::new(doc.name).vegetables(vegetables);
        if let Some(description) = doc.description {
            builder = builder.description(description);
        }
        if let Some(time) = doc.time {
            builder = builder.time(time);
        }
        for item in doc.equipment {
            builder = builder.equipment(item);
        }
        for note in doc.notes {
            builder = builder.note(note);
        }
        builder.build()
    }
}

impl From<Recipe> for RecipeDocument {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name().to_string(),
            description: recipe.description().map(str::to_string),
            time: recipe
                .time()
                .map(|t| TimeValue::Text(humantime::format_duration(t).to_string())),
            equipment: recipe.equipment().to_vec(),
            notes: recipe.notes().to_vec(),
            vegetables: recipe
                .vegetables()
                .iter()
                .map(|(v, q)| (v.to_string(), i64::from(q.get())))
                .collect(),
        }
    }
}

/// The vegetables table as `(key, quantity)` pairs in document order,
/// repeated keys included
mod vegetable_table {
    use std::fmt;

    use serde::{
        de::{MapAccess, Visitor},
        Deserializer, Serializer,
    };

    pub fn serialize<S>(pairs: &[(String, i64)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, i64)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, i64)>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a table of vegetable quantities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, i64>()? {
                    pairs.push(entry);
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

impl Recipe {
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_toml_str(s: &str) -> RecipeResult<Self> {
        Ok(toml::from_str(s)?)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_json_str(s: &str) -> RecipeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> RecipeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> RecipeResult<String> {
        let s = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(s)
    }
}
