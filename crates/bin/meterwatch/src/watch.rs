//! Poll loops for the `watch` command.
//!
//! Each loop ticks immediately and then once per period. Every tick spawns
//! its own request on the current `LocalSet`, so a slow reply never delays the
//! next tick and replies may land out of order.

use std::rc::Rc;
use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior};

use meterdash_app::ports::{MeterApi, Notifier};
use meterdash_app::services::power_monitor::PowerMonitor;
use meterdash_app::services::report_monitor::ReportMonitor;
use meterdash_domain::time::now;

use crate::display::TerminalDisplay;

/// Fixed-period ticker. After a stall the next tick is delayed instead of
/// firing a catch-up burst of polls.
fn fixed_ticker(period: Duration) -> Interval {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

/// Poll current power forever, rendering readings and raising alerts.
pub async fn poll_power<A, N>(
    monitor: Rc<PowerMonitor<A, N>>,
    display: Rc<TerminalDisplay>,
    period: Duration,
) where
    A: MeterApi + 'static,
    N: Notifier + 'static,
{
    let mut ticker = fixed_ticker(period);
    loop {
        ticker.tick().await;
        let monitor = Rc::clone(&monitor);
        let display = Rc::clone(&display);
        tokio::task::spawn_local(async move {
            if let Ok(power) = monitor.refresh(now()).await {
                display.show_power(power);
            }
        });
    }
}

/// Poll the aggregate report forever, rendering it on success.
pub async fn poll_reports<A>(
    monitor: Rc<ReportMonitor<A>>,
    display: Rc<TerminalDisplay>,
    period: Duration,
) where
    A: MeterApi + 'static,
{
    let mut ticker = fixed_ticker(period);
    loop {
        ticker.tick().await;
        let monitor = Rc::clone(&monitor);
        let display = Rc::clone(&display);
        tokio::task::spawn_local(async move {
            if let Ok(report) = monitor.refresh().await {
                display.show_report(&report);
            }
        });
    }
}
