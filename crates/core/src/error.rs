//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (missing
/// records, duplicate ids, rejected arguments). Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item is stored under the requested id.
    #[error("item with id {0} does not exist")]
    NotFound(ItemId),

    /// An item with the same id is already stored.
    #[error("item with id {0} already exists")]
    Conflict(ItemId),

    /// The request was well-typed but cannot be carried out as given.
    #[error("{0}")]
    InvalidArgument(String),

    /// A value failed validation (e.g. unknown enum value).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn conflict(id: ItemId) -> Self {
        Self::Conflict(id)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_item_id() {
        assert_eq!(
            DomainError::not_found(ItemId::new(7)).to_string(),
            "item with id 7 does not exist"
        );
        assert_eq!(
            DomainError::conflict(ItemId::new(0)).to_string(),
            "item with id 0 already exists"
        );
    }

    #[test]
    fn invalid_argument_message_is_passed_through() {
        let err = DomainError::invalid_argument("no parameters provided for update");
        assert_eq!(err.to_string(), "no parameters provided for update");
    }
}
