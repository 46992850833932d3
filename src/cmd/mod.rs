pub mod config;
pub mod generate_completions;
pub mod recipe;
pub mod vegetables;
