//! Polling cadence.
//!
//! Pollers run their first cycle immediately and then once per period. A
//! failed cycle is skipped, never retried early.

use std::time::Duration;

/// Period of the current-power poll.
pub const POWER_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Period of the aggregate report poll.
pub const REPORT_POLL_INTERVAL: Duration = Duration::from_millis(2000);
