//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for alert bookkeeping and cache busting.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// The Unix epoch; alert timestamps start here so the first alert always fires.
#[must_use]
pub fn epoch() -> Timestamp {
    DateTime::<Utc>::UNIX_EPOCH
}
