//! Low-power alert policy and per-severity throttling.
//!
//! A reading of exactly zero is **critical**; anything below three watts is a
//! **warning**. Each severity has its own cooldown window and fires at most
//! once per window. The bookkeeping lives in [`AlertState`], an explicit value
//! owned by whoever polls the meter.

use chrono::TimeDelta;

use crate::notification::{Notification, ToastColor};
use crate::power::Watts;
use crate::time::{Timestamp, epoch};

/// Readings strictly below this value (and above zero) raise a warning.
pub const LOW_POWER_THRESHOLD: Watts = Watts::new(3.0);

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Power is exhausted.
    Critical,
    /// Power is about to run out.
    Warning,
}

impl Severity {
    /// Minimum time between two alerts of this severity.
    #[must_use]
    pub fn cooldown(self) -> TimeDelta {
        match self {
            Self::Critical => TimeDelta::milliseconds(3000),
            Self::Warning => TimeDelta::milliseconds(5000),
        }
    }

    /// Text shown to the user.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Critical => "Power is 0, please buy electricity!",
            Self::Warning => "Buy new Power almost over!",
        }
    }

    #[must_use]
    pub fn color(self) -> ToastColor {
        match self {
            Self::Critical => ToastColor::Red,
            Self::Warning => ToastColor::Orange,
        }
    }

    /// Classify a reading. Comparisons are strict: `== 0` then `< 3`.
    #[must_use]
    pub fn classify(power: Watts) -> Option<Self> {
        if power.is_zero() {
            Some(Self::Critical)
        } else if power < LOW_POWER_THRESHOLD {
            Some(Self::Warning)
        } else {
            None
        }
    }
}

/// An alert that passed its cooldown and should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub fired_at: Timestamp,
}

impl Alert {
    #[must_use]
    pub fn notification(&self) -> Notification {
        Notification::new(self.severity.message(), self.severity.color())
    }
}

/// Last-fired timestamps, one per severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertState {
    last_critical: Timestamp,
    last_warning: Timestamp,
}

impl Default for AlertState {
    fn default() -> Self {
        Self {
            last_critical: epoch(),
            last_warning: epoch(),
        }
    }
}

impl AlertState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When `severity` last fired (the epoch if never).
    #[must_use]
    pub fn last_fired(&self, severity: Severity) -> Timestamp {
        match severity {
            Severity::Critical => self.last_critical,
            Severity::Warning => self.last_warning,
        }
    }

    /// Evaluate a fresh reading taken at `now`.
    ///
    /// Returns the alert to show, if any, and records its firing time. A
    /// suppressed alert leaves the state untouched, so the window is measured
    /// from the last alert actually shown.
    pub fn evaluate(&mut self, power: Watts, now: Timestamp) -> Option<Alert> {
        let severity = Severity::classify(power)?;
        let last = self.last_fired(severity);
        if now - last <= severity.cooldown() {
            return None;
        }
        match severity {
            Severity::Critical => self.last_critical = now,
            Severity::Warning => self.last_warning = now,
        }
        Some(Alert {
            severity,
            fired_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> Timestamp {
        epoch() + TimeDelta::days(20_000) + TimeDelta::milliseconds(millis)
    }

    #[test]
    fn should_classify_with_strict_boundaries() {
        assert_eq!(Severity::classify(Watts::new(0.0)), Some(Severity::Critical));
        assert_eq!(Severity::classify(Watts::new(0.01)), Some(Severity::Warning));
        assert_eq!(Severity::classify(Watts::new(2.99)), Some(Severity::Warning));
        assert_eq!(Severity::classify(Watts::new(3.0)), None);
        assert_eq!(Severity::classify(Watts::new(250.0)), None);
    }

    #[test]
    fn should_fire_first_critical_alert_immediately() {
        let mut state = AlertState::new();
        let alert = state.evaluate(Watts::new(0.0), at(0)).unwrap();
        assert_eq!(alert.severity, Severity::Critical);
        assert_eq!(alert.fired_at, at(0));
        assert_eq!(state.last_fired(Severity::Critical), at(0));
        assert_eq!(state.last_fired(Severity::Warning), epoch());
    }

    #[test]
    fn should_suppress_critical_within_cooldown() {
        let mut state = AlertState::new();
        assert!(state.evaluate(Watts::new(0.0), at(0)).is_some());
        assert!(state.evaluate(Watts::new(0.0), at(1000)).is_none());
        assert!(state.evaluate(Watts::new(0.0), at(2000)).is_none());
        assert!(state.evaluate(Watts::new(0.0), at(3000)).is_none());
        assert!(state.evaluate(Watts::new(0.0), at(3001)).is_some());
    }

    #[test]
    fn should_fire_critical_every_four_seconds_when_polled_each_second() {
        let mut state = AlertState::new();
        let fired: Vec<i64> = (0..10)
            .map(|sec| sec * 1000)
            .filter(|&ms| state.evaluate(Watts::new(0.0), at(ms)).is_some())
            .collect();
        assert_eq!(fired, vec![0, 4000, 8000]);
    }

    #[test]
    fn should_suppress_warning_within_five_seconds() {
        let mut state = AlertState::new();
        assert!(state.evaluate(Watts::new(1.5), at(0)).is_some());
        assert!(state.evaluate(Watts::new(2.0), at(5000)).is_none());
        let alert = state.evaluate(Watts::new(2.0), at(5001)).unwrap();
        assert_eq!(alert.severity, Severity::Warning);
    }

    #[test]
    fn should_track_severities_independently() {
        let mut state = AlertState::new();
        assert!(state.evaluate(Watts::new(1.0), at(0)).is_some());
        let critical = state.evaluate(Watts::new(0.0), at(100)).unwrap();
        assert_eq!(critical.severity, Severity::Critical);
        assert!(state.evaluate(Watts::new(1.0), at(200)).is_none());
    }

    #[test]
    fn should_never_alert_at_or_above_threshold() {
        let mut state = AlertState::new();
        for ms in [0, 10_000, 20_000] {
            assert!(state.evaluate(Watts::new(3.0), at(ms)).is_none());
        }
        assert_eq!(state, AlertState::new());
    }

    #[test]
    fn should_build_notification_for_alert() {
        let mut state = AlertState::new();
        let note = state
            .evaluate(Watts::new(0.0), at(0))
            .unwrap()
            .notification();
        assert_eq!(note.text, "Power is 0, please buy electricity!");
        assert_eq!(note.color, ToastColor::Red);

        let note = state
            .evaluate(Watts::new(2.0), at(0))
            .unwrap()
            .notification();
        assert_eq!(note.text, "Buy new Power almost over!");
        assert_eq!(note.color, ToastColor::Orange);
    }
}
