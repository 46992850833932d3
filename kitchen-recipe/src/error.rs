use thiserror::Error;

use crate::vegetable::Vegetable;

pub type RecipeResult<T> = Result<T, RecipeError>;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("The recipe name cannot be empty")]
    EmptyName,
    #[error("Invalid quantity for '{vegetable}': {quantity}. It must be a positive integer")]
    InvalidQuantity { vegetable: Vegetable, quantity: i64 },
    #[error("Vegetable '{0}' is listed more than once")]
    DuplicateVegetable(Vegetable),
    #[error("A vegetable name cannot be empty")]
    EmptyVegetableName,
    #[error("Invalid {attribute}: {reason}")]
    InvalidAttribute {
        attribute: &'static str,
        reason: String,
    },
    #[error("Bad TOML recipe document")]
    Toml(#[from] toml::de::Error),
    #[error("Cannot write recipe as TOML")]
    TomlWrite(#[from] toml::ser::Error),
    #[error("Bad JSON recipe document")]
    Json(#[from] serde_json::Error),
}

/// Broad category of a [`RecipeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// A value given to build a recipe is not valid
    InvalidArgument,
    /// A recipe document could not be read or written
    Format,
}

impl RecipeError {
    /// Validation errors raised while deserializing a document are reported
    /// as [`ErrorKind::Format`], with the reason in the message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecipeError::EmptyName
            | RecipeError::InvalidQuantity { .. }
            | RecipeError::DuplicateVegetable(_)
            | RecipeError::EmptyVegetableName
            | RecipeError::InvalidAttribute { .. } => ErrorKind::InvalidArgument,
            RecipeError::Toml(_) | RecipeError::TomlWrite(_) | RecipeError::Json(_) => {
                ErrorKind::Format
            }
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub(crate) fn invalid_attribute(attribute: &'static str, reason: impl Into<String>) -> Self {
        RecipeError::InvalidAttribute {
            attribute,
            reason: reason.into(),
        }
    }
}
