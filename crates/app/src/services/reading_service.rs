//! Reading service: fetches the latest sensor sample on demand.

use meterdash_domain::error::MeterDashError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::reading::SensorReading;

use crate::ports::MeterApi;

/// Result of a reading refresh, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadingOutcome {
    Reading(SensorReading),
    /// The backend answered with an error message.
    Unavailable(String),
    /// The request failed.
    Failed,
}

impl ReadingOutcome {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Reading(reading) => reading.summary(),
            Self::Unavailable(message) => message.clone(),
            Self::Failed => "Error fetching data.".to_string(),
        }
    }
}

/// Application service behind the "refresh reading" button.
pub struct ReadingService<A> {
    api: A,
    meter: MeterNumber,
}

impl<A: MeterApi> ReadingService<A> {
    pub fn new(api: A, meter: MeterNumber) -> Self {
        Self { api, meter }
    }

    pub async fn latest(&self) -> ReadingOutcome {
        match self.api.latest_reading(&self.meter).await {
            Ok(reading) => ReadingOutcome::Reading(reading),
            Err(MeterDashError::Backend(message)) => ReadingOutcome::Unavailable(message),
            Err(err) => {
                tracing::warn!(meter = %self.meter, error = %err, "failed to fetch latest reading");
                ReadingOutcome::Failed
            }
        }
    }
}
