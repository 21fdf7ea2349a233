//! Meter dashboard page.
//!
//! Starts both pollers on mount. Each poll runs once immediately and then on
//! its own interval; every tick spawns an independent request, so replies may
//! arrive out of order. Intervals are cleared when the page unmounts.

use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use meterdash_app::polling::{POWER_POLL_INTERVAL, REPORT_POLL_INTERVAL};
use meterdash_domain::report::PortReport;
use meterdash_domain::time::now;

use crate::api::GlooMeterApi;
use crate::components::{
    PowerReadout, PurchaseForm, ReadingPanel, RelayControls, ReportCard, use_toasts,
};
use crate::config::DashboardConfig;
use crate::services::{DashboardServices, SharedServices};

/// Start `tick` now and every `period` until the owner is cleaned up.
fn every(period: Duration, tick: impl Fn() + 'static) {
    tick();
    match set_interval_with_handle(tick, period) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => leptos::logging::error!("failed to schedule poll: {err:?}"),
    }
}

#[component]
pub fn Dashboard(config: DashboardConfig) -> impl IntoView {
    let api = GlooMeterApi::default();
    let services: SharedServices = StoredValue::new_local(Rc::new(DashboardServices::new(
        &api,
        use_toasts(),
        &config,
    )));

    let (power, set_power) = signal(config.initial_power);
    let (report, set_report) = signal(None::<PortReport>);

    every(POWER_POLL_INTERVAL, move || {
        let services = services.get_value();
        spawn_local(async move {
            if let Ok(value) = services.power.refresh(now()).await {
                set_power.set(Some(value));
            }
        });
    });

    every(REPORT_POLL_INTERVAL, move || {
        let services = services.get_value();
        spawn_local(async move {
            if let Ok(next) = services.report.refresh().await {
                set_report.set(Some(next));
            }
        });
    });

    let meter = config.meter.to_string();

    view! {
        <div class="dashboard">
            <h1>"Meter " {meter}</h1>
            <PowerReadout power=power/>
            <ReadingPanel services=services/>
            <ReportCard report=report/>
            <RelayControls services=services/>
            <PurchaseForm services=services/>
        </div>
    }
}
