use crate::{Group, Name, NameError};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no exercises")]
    Empty,
    #[error("duplicate exercise name \"{0}\"")]
    DuplicateName(Name),
    #[error("exercise \"{name}\" of group {found:?} filed under {expected:?}")]
    GroupMismatch {
        name: Name,
        expected: Group,
        found: Group,
    },
    #[error("invalid exercise name: {0}")]
    Name(#[from] NameError),
    #[error("invalid catalog: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        CatalogError::Parse(value.to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("routine length {requested} exceeds the {available} distinct exercises available")]
    LengthExceedsCatalog { requested: usize, available: usize },
    #[error("no exercises available for the selected groups")]
    NoExercises,
    #[error("lock mask length {mask} does not match routine length {routine}")]
    LockMaskMismatch { routine: usize, mask: usize },
    #[error("index {index} out of range for routine of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
