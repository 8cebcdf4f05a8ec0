use thiserror::Error;

use super::definition::Category;

/// Errors raised while building or querying the item catalog
///
/// These are configuration defects, not player mistakes: an unknown
/// name means some menu or config refers to an item that was never
/// registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No entry with this name in the table
    #[error("no {category} named '{name}' in the catalog")]
    NotFound { category: Category, name: String },

    /// No entry with this name in any table
    #[error("no item named '{0}' in the catalog")]
    UnknownItem(String),

    /// Name registered twice in the same table
    #[error("{category} '{name}' is already registered")]
    DuplicateName { category: Category, name: String },

    /// Ran out of 16-bit ids
    #[error("item id space exhausted while registering '{0}'")]
    IdSpaceExhausted(String),

    /// Catalog definition file couldn't be read or parsed
    #[error("failed to load catalog definition: {0}")]
    Definition(String),
}
