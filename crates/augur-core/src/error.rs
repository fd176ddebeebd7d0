/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when parsing or looking up reference data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The spread name does not match any known spread.
    #[error("unknown spread: {0}")]
    UnknownSpread(String),

    /// The deck name does not match any known deck.
    #[error("unknown deck: {0} (expected tarot, runes, or angel-cards)")]
    UnknownDeck(String),

    /// No item in any deck carries this identifier.
    #[error("no divination item with id \"{0}\"")]
    ItemNotFound(String),
}
