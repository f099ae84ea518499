use thiserror::Error;

use crate::core::feed::FeedKind;

#[derive(Error, Debug)]
/// Feed generation error
pub enum FeedError {
    /// A required header or item field is missing.
    #[error("Missing {field}, {hint}")]
    Validation {
        /// Name of the missing field
        field: &'static str,
        /// What the caller has to do to fix the record
        hint: String,
    },

    /// An item does not belong to the feed kind being generated.
    #[error("Feed item #{index} is a {found} item, expected a {expected} item")]
    ItemType {
        /// Position of the item in the collection
        index: usize,
        expected: FeedKind,
        found: FeedKind,
    },

    #[error("MarkupWriter from: {0}")]
    Writer(String),
}

impl FeedError {
    /// Validation error for a missing field, pointing at the builder method
    /// that sets it.
    pub fn missing(field: &'static str, builder_method: &str) -> Self {
        FeedError::Validation {
            field,
            hint: format!("call {}().", builder_method),
        }
    }

    /// Sets the position of the offending item on an `ItemType` error.
    pub(crate) fn at_index(self, index: usize) -> Self {
        match self {
            FeedError::ItemType {
                expected, found, ..
            } => FeedError::ItemType {
                index,
                expected,
                found,
            },
            other => other,
        }
    }
}
