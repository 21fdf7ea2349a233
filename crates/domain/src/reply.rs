//! Backend reply envelope.
//!
//! Every read and command endpoint answers either with its payload or with
//! `{ "error": "..." }`, often regardless of HTTP status. The error shape is
//! tried first so a payload type with optional fields never swallows it.

use serde::Deserialize;

use crate::error::MeterDashError;

/// Either the endpoint payload or an application-level error message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Failure { error: String },
    Success(T),
}

impl<T> Reply<T> {
    /// Turn the envelope into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`MeterDashError::Backend`] carrying the server message when
    /// the reply is a failure.
    pub fn into_result(self) -> Result<T, MeterDashError> {
        match self {
            Self::Failure { error } => Err(MeterDashError::Backend(error)),
            Self::Success(payload) => Ok(payload),
        }
    }
}
