//! Checks that writing a recipe with every attribute and reading it back
//! ends with an equal recipe, in both document formats

use kitchen_recipe::{ErrorKind, Recipe, Vegetable};

fn full_recipe() -> Recipe {
    Recipe::builder("Ratatouille")
        .vegetable(Vegetable::Eggplant, 1)
        .vegetable(Vegetable::Zucchini, 2)
        .vegetable(Vegetable::Tomato, 3)
        .vegetable(Vegetable::BellPepper, 1)
        .vegetable(Vegetable::Other("herbes de provence".into()), 1)
        .description("Stewed summer vegetables from Provence")
        .equipment("Dutch oven")
        .equipment("Chef knife")
        .time_text("1h 15m")
        .note("Even better the next day")
        .build()
        .unwrap()
}

#[test]
fn serde_json_test() {
    let recipe = full_recipe();

    let serialized = recipe.to_json_string(true).unwrap();
    let deserialized = Recipe::from_json_str(&serialized).unwrap();

    assert_eq!(recipe, deserialized);
}

#[test]
fn serde_toml_test() {
    let recipe = full_recipe();

    let serialized = recipe.to_toml_string().unwrap();
    let deserialized = Recipe::from_toml_str(&serialized).unwrap();

    assert_eq!(recipe, deserialized);
}

#[test]
fn json_shape() {
    let recipe = Recipe::new("Salad", [(Vegetable::Lettuce, 1), (Vegetable::Cucumber, 2)]).unwrap();
    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Salad",
            "vegetables": { "cucumber": 2, "lettuce": 1 }
        })
    );
}

#[test]
fn invalid_json_is_format_error() {
    let err = Recipe::from_json_str(r#"{"name": "", "vegetables": {"carrot": 1}}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);

    let err = serde_json::from_str::<Recipe>(r#"{"name": "Stew", "vegetables": {"carrot": 0}}"#)
        .unwrap_err();
    assert!(err.to_string().contains("carrot"), "{err}");
}
