//! Recipe representation

use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    attributes::{self, TimeInput},
    document::RecipeDocument,
    error::{RecipeError, RecipeResult},
    quantity::Quantity,
    vegetable::Vegetable,
};

/// A complete recipe
///
/// Built once with [`Recipe::new`] or [`Recipe::builder`] and never changed
/// afterwards. To get a different recipe, build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDocument", into = "RecipeDocument")]
pub struct Recipe {
    name: String,
    vegetables: BTreeMap<Vegetable, Quantity>,
    description: Option<String>,
    equipment: Vec<String>,
    time: Option<Duration>,
    notes: Vec<String>,
}

impl Recipe {
    /// Creates a recipe from its name and the vegetables it needs
    ///
    /// Fails when the name is empty, a quantity is not a positive integer or
    /// a vegetable is given more than once.
    pub fn new<I>(name: impl Into<String>, vegetables: I) -> RecipeResult<Self>
    where
        I: IntoIterator<Item = (Vegetable, i64)>,
    {
        Self::builder(name).vegetables(vegetables).build()
    }

    pub fn builder(name: impl Into<String>) -> RecipeBuilder {
        RecipeBuilder::new(name)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vegetables and how many of each are needed
    pub fn vegetables(&self) -> &BTreeMap<Vegetable, Quantity> {
        &self.vegetables
    }

    /// Quantity of a vegetable, looked up the same way it was stored, so
    /// `Other("Courgette")` finds [`Vegetable::Zucchini`]
    pub fn quantity_of(&self, vegetable: &Vegetable) -> Option<Quantity> {
        let key = vegetable.clone().normalized().ok()?;
        self.vegetables.get(&key).copied()
    }

    pub fn contains(&self, vegetable: &Vegetable) -> bool {
        self.quantity_of(vegetable).is_some()
    }

    /// Sum of all the quantities
    pub fn total_quantity(&self) -> u64 {
        self.vegetables.values().map(|q| u64::from(q.get())).sum()
    }

    /// Number of different vegetables
    pub fn len(&self) -> usize {
        self.vegetables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vegetables.is_empty()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Required equipment
    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    /// Approximate time to make
    pub fn time(&self) -> Option<Duration> {
        self.time
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

/// Builder for a [`Recipe`] with its optional attributes
///
/// Nothing is checked until [`RecipeBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct RecipeBuilder {
    name: String,
    vegetables: Vec<(Vegetable, i64)>,
    description: Option<String>,
    equipment: Vec<String>,
    time: Option<TimeInput>,
    notes: Vec<String>,
}

impl RecipeBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn vegetable(mut self, vegetable: Vegetable, quantity: i64) -> Self {
        self.vegetables.push((vegetable, quantity));
        self
    }

    pub fn vegetables<I>(mut self, vegetables: I) -> Self
    where
        I: IntoIterator<Item = (Vegetable, i64)>,
    {
        self.vegetables.extend(vegetables);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    pub fn time(mut self, time: impl Into<TimeInput>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn time_minutes(self, minutes: u64) -> Self {
        self.time(TimeInput::Minutes(minutes))
    }

    /// Time as text, like `1h 30m`
    pub fn time_text(self, time: impl Into<String>) -> Self {
        self.time(TimeInput::Text(time.into()))
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[tracing::instrument(level = "trace", skip_all, fields(name = %self.name))]
    pub fn build(self) -> RecipeResult<Recipe> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(RecipeError::EmptyName);
        }

        let mut vegetables = BTreeMap::new();
        for (vegetable, quantity) in self.vegetables {
            let vegetable = vegetable.normalized()?;
            let quantity = match Quantity::new(quantity) {
                Ok(q) => q,
                Err(_) => {
                    return Err(RecipeError::InvalidQuantity {
                        vegetable,
                        quantity,
                    })
                }
            };
            if vegetables.contains_key(&vegetable) {
                return Err(RecipeError::DuplicateVegetable(vegetable));
            }
            vegetables.insert(vegetable, quantity);
        }

        let recipe = Recipe {
            name: name.to_string(),
            vegetables,
            description: attributes::description(self.description),
            equipment: attributes::equipment(self.equipment)?,
            time: self.time.map(TimeInput::resolve).transpose()?,
            notes: attributes::notes(self.notes)?,
        };
        tracing::trace!(vegetables = recipe.len(), "recipe built");
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ErrorKind;

    fn q(n: i64) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn ratatouille() {
        let recipe = Recipe::new(
            "Ratatouille",
            [
                (Vegetable::Eggplant, 1),
                (Vegetable::Zucchini, 2),
                (Vegetable::Tomato, 3),
            ],
        )
        .unwrap();

        assert_eq!(recipe.name(), "Ratatouille");
        let expected = BTreeMap::from([
            (Vegetable::Eggplant, q(1)),
            (Vegetable::Zucchini, q(2)),
            (Vegetable::Tomato, q(3)),
        ]);
        assert_eq!(recipe.vegetables(), &expected);
        assert_eq!(recipe.total_quantity(), 6);
        assert_eq!(recipe.quantity_of(&Vegetable::Zucchini), Some(q(2)));
        assert_eq!(recipe.quantity_of(&Vegetable::Carrot), None);
        assert!(recipe.contains(&Vegetable::Eggplant));
        assert_eq!(recipe.description(), None);
        assert!(recipe.equipment().is_empty());
        assert_eq!(recipe.time(), None);
        assert!(recipe.notes().is_empty());
    }

    #[test]
    fn empty_name() {
        let err = Recipe::new("", [(Vegetable::Carrot, 1)]).unwrap_err();
        assert!(matches!(err, RecipeError::EmptyName));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = Recipe::new(" \t ", [(Vegetable::Carrot, 1)]).unwrap_err();
        assert!(matches!(err, RecipeError::EmptyName));
    }

    #[test]
    fn name_is_trimmed() {
        let recipe = Recipe::builder("  Soup ").build().unwrap();
        assert_eq!(recipe.name(), "Soup");
        assert!(recipe.is_empty());
    }

    #[test]
    fn non_positive_quantity() {
        for bad in [0, -1, i64::MIN, u32::MAX as i64 + 1] {
            let err = Recipe::new("Salad", [(Vegetable::Lettuce, 1), (Vegetable::Tomato, bad)])
                .unwrap_err();
            assert!(
                matches!(
                    &err,
                    RecipeError::InvalidQuantity { vegetable: Vegetable::Tomato, quantity }
                        if *quantity == bad
                ),
                "{err:?}"
            );
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn duplicate_vegetable() {
        let err = Recipe::new("Stew", [(Vegetable::Carrot, 1), (Vegetable::Carrot, 2)])
            .unwrap_err();
        assert!(matches!(err, RecipeError::DuplicateVegetable(Vegetable::Carrot)));

        // the same vegetable written in two ways
        let err = Recipe::new(
            "Stew",
            [
                (Vegetable::Zucchini, 1),
                (Vegetable::Other("Courgette".into()), 2),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, RecipeError::DuplicateVegetable(Vegetable::Zucchini)));
    }

    #[test]
    fn blank_other_vegetable() {
        let err = Recipe::new("Stew", [(Vegetable::Other(" ".into()), 1)]).unwrap_err();
        assert!(matches!(err, RecipeError::EmptyVegetableName));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn returned_map_is_independent() {
        let recipe = Recipe::new("Soup", [(Vegetable::Leek, 2)]).unwrap();
        let mut copy = recipe.vegetables().clone();
        copy.insert(Vegetable::Potato, q(4));
        copy.remove(&Vegetable::Leek);

        assert_eq!(recipe.vegetables().len(), 1);
        assert_eq!(recipe.quantity_of(&Vegetable::Leek), Some(q(2)));
        assert!(!recipe.contains(&Vegetable::Potato));
    }

    #[test]
    fn lookup_by_other_spelling() {
        let recipe = Recipe::new("Ratatouille", [(Vegetable::Zucchini, 2)]).unwrap();
        assert_eq!(recipe.quantity_of(&Vegetable::Other("Courgette".into())), Some(q(2)));
        assert!(recipe.contains(&Vegetable::Other("zucchinis".into())));
        assert!(!recipe.contains(&Vegetable::Other("okra".into())));
        assert!(!recipe.contains(&Vegetable::Other(String::new())));

        let recipe = Recipe::new("Soup", [(Vegetable::Other("Okra ".into()), 1)]).unwrap();
        assert!(recipe.contains(&Vegetable::Other("okra".into())));
    }

    #[test]
    fn insertion_order_irrelevant() {
        let a = Recipe::new(
            "Ratatouille",
            [
                (Vegetable::Eggplant, 1),
                (Vegetable::Zucchini, 2),
                (Vegetable::Tomato, 3),
            ],
        )
        .unwrap();
        let b = Recipe::new(
            "Ratatouille",
            [
                (Vegetable::Tomato, 3),
                (Vegetable::Eggplant, 1),
                (Vegetable::Zucchini, 2),
            ],
        )
        .unwrap();
        assert_eq!(a, b);
        assert!(a.vegetables().iter().eq(b.vegetables().iter()));
    }

    #[test]
    fn from_hash_map() {
        let input = HashMap::from([(Vegetable::Onion, 2), (Vegetable::Garlic, 3)]);
        let recipe = Recipe::new("Sofrito", input).unwrap();
        assert_eq!(recipe.len(), 2);
        assert_eq!(recipe.quantity_of(&Vegetable::Garlic), Some(q(3)));
    }

    #[test]
    fn builder_attributes() {
        let recipe = Recipe::builder("Ratatouille")
            .vegetable(Vegetable::Eggplant, 1)
            .vegetable(Vegetable::Zucchini, 2)
            .description("  Provençal stewed vegetables ")
            .equipment("Dutch oven")
            .equipment("dutch oven")
            .equipment("Knife")
            .time_text("1h 15m")
            .note("Better the next day")
            .build()
            .unwrap();

        assert_eq!(recipe.description(), Some("Provençal stewed vegetables"));
        assert_eq!(recipe.equipment(), ["Dutch oven", "Knife"]);
        assert_eq!(recipe.time(), Some(Duration::from_secs(75 * 60)));
        assert_eq!(recipe.notes(), ["Better the next day"]);
    }

    #[test]
    fn builder_bad_attributes() {
        let err = Recipe::builder("Soup").time_minutes(0).build().unwrap_err();
        assert!(matches!(err, RecipeError::InvalidAttribute { attribute: "time", .. }));
        let err = Recipe::builder("Soup").note("").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = Recipe::builder("Soup").time_text("soon").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn shareable_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recipe>();

        let recipe = std::sync::Arc::new(Recipe::new("Soup", [(Vegetable::Leek, 2)]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recipe = recipe.clone();
                std::thread::spawn(move || recipe.total_quantity())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 2);
        }
    }
}
