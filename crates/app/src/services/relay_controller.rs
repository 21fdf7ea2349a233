//! Relay controller: sends relay commands guarded by the last known power.
//!
//! The controller is stateless regarding the relay itself: every outcome is
//! reported through the [`Notifier`] and nothing is remembered. Repeated
//! clicks send repeated commands.

use meterdash_domain::error::{MeterDashError, RelayRejection};
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::notification::Notification;
use meterdash_domain::power::Watts;
use meterdash_domain::relay::{RelayCommand, RelayState, check_precondition};

use crate::ports::{MeterApi, Notifier};

/// Shown when the command request fails or its reply cannot be read.
pub const RELAY_FAILURE_MESSAGE: &str = "Failed to send relay command";

/// What happened to a relay command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Refused locally; no request was sent.
    Rejected(RelayRejection),
    /// The backend answered with an error message.
    Refused(String),
    /// The backend accepted the command.
    Applied(String),
    /// The request failed.
    Failed,
}

impl RelayOutcome {
    #[must_use]
    pub fn notification(&self) -> Notification {
        match self {
            Self::Rejected(rejection) => Notification::error(rejection.to_string()),
            Self::Refused(message) => Notification::error(message.clone()),
            Self::Applied(message) => Notification::success(message.clone()),
            Self::Failed => Notification::error(RELAY_FAILURE_MESSAGE),
        }
    }
}

/// Application service behind the relay on/off buttons.
pub struct RelayController<A, N> {
    api: A,
    notifier: N,
    meter: MeterNumber,
}

impl<A: MeterApi, N: Notifier> RelayController<A, N> {
    pub fn new(api: A, notifier: N, meter: MeterNumber) -> Self {
        Self {
            api,
            notifier,
            meter,
        }
    }

    /// Send `state` unless `last_power` forbids it, then notify the outcome.
    pub async fn send(&self, state: RelayState, last_power: Option<Watts>) -> RelayOutcome {
        let outcome = self.dispatch(state, last_power).await;
        self.notifier.notify(outcome.notification());
        outcome
    }

    async fn dispatch(&self, state: RelayState, last_power: Option<Watts>) -> RelayOutcome {
        if let Err(rejection) = check_precondition(state, last_power) {
            tracing::info!(meter = %self.meter, %state, %rejection, "relay command rejected");
            return RelayOutcome::Rejected(rejection);
        }

        let command = RelayCommand {
            meter_number: self.meter.clone(),
            state,
        };
        match self.api.send_relay_command(&command).await {
            Ok(ack) => {
                tracing::info!(meter = %self.meter, %state, message = %ack.message, "relay command sent");
                RelayOutcome::Applied(ack.message)
            }
            Err(MeterDashError::Backend(message)) => RelayOutcome::Refused(message),
            Err(err) => {
                tracing::error!(meter = %self.meter, %state, error = %err, "error sending relay command");
                RelayOutcome::Failed
            }
        }
    }
}
