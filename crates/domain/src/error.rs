//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`MeterDashError`]
//! via `#[from]` or an explicit `From` impl at the port boundary.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum MeterDashError {
    /// A value failed a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The backend answered with an `error` field.
    #[error("{0}")]
    Backend(String),

    /// The request never produced a usable payload (network, status, JSON).
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A command was refused locally before any request was sent.
    #[error("command rejected: {0}")]
    Rejected(#[from] RelayRejection),
}

impl MeterDashError {
    /// Wrap any transport-level failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Meter numbers must contain at least one non-whitespace character.
    #[error("meter number must not be empty")]
    EmptyMeterNumber,

    /// Relay states are `on` or `off`.
    #[error("unknown relay state: {0}")]
    UnknownRelayState(String),
}

/// Reasons a relay command is refused without contacting the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RelayRejection {
    /// The last known power reading is exactly zero.
    #[error("Not enough power to turn relay ON!")]
    NoPower,
    /// No numeric power reading is known yet.
    #[error("Error fetching power value!")]
    UnknownPower,
}
