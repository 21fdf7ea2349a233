//! Relay commands and the local power precondition.
//!
//! The client never tracks whether the relay is on or off; it only decides
//! whether a command may be sent and trusts the backend's reply otherwise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RelayRejection, ValidationError};
use crate::meter::MeterNumber;
use crate::power::Watts;

/// Target state of a relay command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayState {
    On,
    Off,
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

impl FromStr for RelayState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ValidationError::UnknownRelayState(s.to_string())),
        }
    }
}

/// JSON body of the relay-control endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayCommand {
    pub meter_number: MeterNumber,
    pub state: RelayState,
}

/// Successful relay-control reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayAck {
    pub message: String,
}

/// Decide locally whether a command may be sent.
///
/// Any command needs a known, finite power value. Turning the relay on
/// additionally needs that value to be non-zero.
///
/// # Errors
///
/// Returns [`RelayRejection::UnknownPower`] when `last_power` is `None` or
/// not finite, and
/// [`RelayRejection::NoPower`] for [`RelayState::On`] at exactly zero watts.
pub fn check_precondition(
    state: RelayState,
    last_power: Option<Watts>,
) -> Result<(), RelayRejection> {
    let power = last_power
        .filter(|power| power.is_finite())
        .ok_or(RelayRejection::UnknownPower)?;
    if state == RelayState::On && power.is_zero() {
        return Err(RelayRejection::NoPower);
    }
    Ok(())
}
