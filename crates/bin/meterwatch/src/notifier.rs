//! Notifier that renders notifications as log lines.

use meterdash_app::ports::Notifier;
use meterdash_domain::notification::{Notification, ToastColor};

/// Writes every notification to the log; green ones at `info`, the rest at
/// `warn`. A log line has no lifetime, so nothing is dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        let Notification { text, color } = notification;
        match color {
            ToastColor::Green => tracing::info!(target: "meterwatch::notify", %color, "{text}"),
            ToastColor::Red | ToastColor::Orange => {
                tracing::warn!(target: "meterwatch::notify", %color, "{text}");
            }
        }
    }
}
