//! Power monitor: polls the current power of a meter and raises throttled
//! low-power alerts.
//!
//! The monitor keeps the last successfully fetched reading so commands can be
//! guarded against it directly, instead of re-reading rendered text.

use std::sync::{Mutex, MutexGuard, PoisonError};

use meterdash_domain::alert::AlertState;
use meterdash_domain::error::MeterDashError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::power::Watts;
use meterdash_domain::time::Timestamp;

use crate::ports::{MeterApi, Notifier};

#[derive(Debug, Default)]
struct MonitorState {
    alerts: AlertState,
    last_power: Option<Watts>,
}

/// Application service for the current-power poll.
pub struct PowerMonitor<A, N> {
    api: A,
    notifier: N,
    meter: MeterNumber,
    state: Mutex<MonitorState>,
}

impl<A: MeterApi, N: Notifier> PowerMonitor<A, N> {
    /// Create a monitor for `meter` with no known reading.
    pub fn new(api: A, notifier: N, meter: MeterNumber) -> Self {
        Self {
            api,
            notifier,
            meter,
            state: Mutex::new(MonitorState::default()),
        }
    }

    /// Seed the last known reading, e.g. from a value rendered by the host page.
    #[must_use]
    pub fn with_initial_power(self, power: Option<Watts>) -> Self {
        self.lock_state().last_power = power;
        self
    }

    /// The meter this monitor polls.
    pub fn meter(&self) -> &MeterNumber {
        &self.meter
    }

    /// Run one poll cycle at `now`.
    ///
    /// On success the reading becomes the last known value and is evaluated
    /// against the alert policy. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the error from the [`MeterApi`]; it is already logged.
    pub async fn refresh(&self, now: Timestamp) -> Result<Watts, MeterDashError> {
        let power = match self.api.current_power(&self.meter).await {
            Ok(power) => power,
            Err(err) => {
                tracing::warn!(meter = %self.meter, error = %err, "skipping current power poll");
                return Err(err);
            }
        };
        tracing::debug!(meter = %self.meter, %power, "current power updated");

        let alert = {
            let mut state = self.lock_state();
            state.last_power = Some(power);
            state.alerts.evaluate(power, now)
        };
        if let Some(alert) = alert {
            tracing::info!(
                meter = %self.meter,
                severity = ?alert.severity,
                fired_at = %alert.fired_at,
                %power,
                "low power alert"
            );
            self.notifier.notify(alert.notification());
        }
        Ok(power)
    }

    /// Last successfully fetched (or seeded) reading.
    pub fn last_power(&self) -> Option<Watts> {
        self.lock_state().last_power
    }

    /// Snapshot of the alert bookkeeping.
    pub fn alert_state(&self) -> AlertState {
        self.lock_state().alerts
    }

    fn lock_state(&self) -> MutexGuard<'_, MonitorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::TimeDelta;
    use meterdash_domain::alert::Severity;
    use meterdash_domain::notification::ToastColor;
    use meterdash_domain::time::epoch;

    use super::*;
    use crate::services::fakes::{FakeMeterApi, RecordingNotifier, meter, transport_error};

    type Monitor = PowerMonitor<Rc<FakeMeterApi>, Rc<RecordingNotifier>>;

    fn make_monitor() -> (Monitor, Rc<FakeMeterApi>, Rc<RecordingNotifier>) {
        let api = Rc::new(FakeMeterApi::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let monitor = PowerMonitor::new(Rc::clone(&api), Rc::clone(&notifier), meter());
        (monitor, api, notifier)
    }

    fn at(millis: i64) -> Timestamp {
        epoch() + TimeDelta::days(20_000) + TimeDelta::milliseconds(millis)
    }

    #[tokio::test]
    async fn should_record_last_power_on_success() {
        let (monitor, api, notifier) = make_monitor();
        api.push_power(Ok(Watts::new(42.0)));

        let power = monitor.refresh(at(0)).await.unwrap();

        assert_eq!(power, Watts::new(42.0));
        assert_eq!(monitor.last_power(), Some(Watts::new(42.0)));
        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn should_raise_critical_alert_once_per_window() {
        let (monitor, api, notifier) = make_monitor();
        for _ in 0..4 {
            api.push_power(Ok(Watts::new(0.0)));
        }

        for ms in [0, 1000, 2000, 3000] {
            monitor.refresh(at(ms)).await.unwrap();
        }

        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].text, "Power is 0, please buy electricity!");
        assert_eq!(shown[0].color, ToastColor::Red);
    }

    #[tokio::test]
    async fn should_raise_warning_for_low_power() {
        let (monitor, api, notifier) = make_monitor();
        api.push_power(Ok(Watts::new(2.5)));

        monitor.refresh(at(0)).await.unwrap();

        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].color, ToastColor::Orange);
        assert_eq!(monitor.alert_state().last_fired(Severity::Warning), at(0));
    }

    #[tokio::test]
    async fn should_leave_state_untouched_when_poll_fails() {
        let (monitor, api, notifier) = make_monitor();
        api.push_power(Ok(Watts::new(10.0)));
        api.push_power(Err(MeterDashError::Backend("Meter not found".to_string())));
        api.push_power(Err(transport_error()));

        monitor.refresh(at(0)).await.unwrap();
        let before = monitor.alert_state();
        assert!(matches!(
            monitor.refresh(at(1000)).await,
            Err(MeterDashError::Backend(_))
        ));
        assert!(matches!(
            monitor.refresh(at(2000)).await,
            Err(MeterDashError::Transport(_))
        ));

        assert_eq!(monitor.last_power(), Some(Watts::new(10.0)));
        assert_eq!(monitor.alert_state(), before);
        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn should_not_alert_at_threshold() {
        let (monitor, api, notifier) = make_monitor();
        api.push_power(Ok(Watts::new(3.0)));

        monitor.refresh(at(0)).await.unwrap();

        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn should_expose_seeded_power_before_first_poll() {
        let (monitor, api, _notifier) = make_monitor();
        let monitor = monitor.with_initial_power(Some(Watts::new(7.5)));

        assert_eq!(monitor.last_power(), Some(Watts::new(7.5)));
        assert_eq!(api.request_count(), 0);
        assert_eq!(monitor.meter().as_str(), "MTR-001");
    }
}
