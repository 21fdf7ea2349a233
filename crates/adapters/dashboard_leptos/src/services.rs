//! Application services shared by the dashboard components.

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};
use meterdash_app::services::meter_lookup::MeterLookup;
use meterdash_app::services::power_monitor::PowerMonitor;
use meterdash_app::services::reading_service::ReadingService;
use meterdash_app::services::relay_controller::RelayController;
use meterdash_app::services::report_monitor::ReportMonitor;

use crate::api::GlooMeterApi;
use crate::components::ToastProvider;
use crate::config::DashboardConfig;

/// Every use-case the page drives, wired to one backend client.
pub struct DashboardServices {
    pub power: PowerMonitor<GlooMeterApi, ToastProvider>,
    pub report: ReportMonitor<GlooMeterApi>,
    pub readings: ReadingService<GlooMeterApi>,
    pub relay: RelayController<GlooMeterApi, ToastProvider>,
    pub lookup: MeterLookup<GlooMeterApi>,
}

impl DashboardServices {
    pub fn new(api: &GlooMeterApi, toasts: ToastProvider, config: &DashboardConfig) -> Self {
        let meter = &config.meter;
        Self {
            power: PowerMonitor::new(api.clone(), toasts, meter.clone())
                .with_initial_power(config.initial_power),
            report: ReportMonitor::new(api.clone(), meter.clone()),
            readings: ReadingService::new(api.clone(), meter.clone()),
            relay: RelayController::new(api.clone(), toasts, meter.clone()),
            lookup: MeterLookup::new(api.clone()),
        }
    }
}

/// Handle to the services that reactive closures can copy freely.
pub type SharedServices = StoredValue<Rc<DashboardServices>, LocalStorage>;
