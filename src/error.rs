use thiserror::Error;

/// Errors surfaced by the marketplace client.
///
/// Page controllers never let one of these escape to the caller as a panic:
/// every variant is converted into a user-visible toast at the page boundary.
#[derive(Debug, Error)]
pub enum MarketError {
    /// A record failed client-side validation. The write was never attempted.
    #[error("{0}")]
    Validation(String),

    /// The remote gateway rejected or failed the call.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// A by-id lookup matched no row.
    #[error("not found")]
    NotFound,

    /// Anything that does not fit the taxonomy above.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type Result<T, E = MarketError> = std::result::Result<T, E>;
