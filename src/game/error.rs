use thiserror::Error;

use crate::item::CatalogError;

/// Errors from gameplay actions (buying, equipping, crafting, ...)
///
/// Apart from `Catalog`, these are all recoverable: the menu reports
/// them and prompts again.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("not enough dust (needed {needed}, have {available})")]
    InsufficientDust { needed: u32, available: u32 },

    #[error("'{0}' is not a weapon")]
    NotAWeapon(String),

    #[error("'{0}' is not a consumable")]
    NotAConsumable(String),

    /// Menu choice that doesn't map to anything
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),

    /// One-time workshop creation made twice
    #[error("'{0}' has already been created")]
    AlreadyCrafted(String),

    /// Not enough room left on the item's stack
    #[error("can't carry that many '{0}'")]
    StackFull(String),

    #[error("price does not fit in a dust purse")]
    PriceOverflow,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
