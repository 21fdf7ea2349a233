//! Report monitor: polls the aggregate purchase/consumption report.

use meterdash_domain::error::MeterDashError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::report::PortReport;

use crate::ports::MeterApi;

/// Application service for the report poll.
pub struct ReportMonitor<A> {
    api: A,
    meter: MeterNumber,
}

impl<A: MeterApi> ReportMonitor<A> {
    pub fn new(api: A, meter: MeterNumber) -> Self {
        Self { api, meter }
    }

    /// Run one poll cycle.
    ///
    /// # Errors
    ///
    /// Returns the error from the [`MeterApi`]; it is already logged and the
    /// caller should leave its display slots as they are.
    pub async fn refresh(&self) -> Result<PortReport, MeterDashError> {
        match self.api.port_report(&self.meter).await {
            Ok(report) => {
                tracing::debug!(meter = %self.meter, "port report updated");
                Ok(report)
            }
            Err(err) => {
                tracing::warn!(meter = %self.meter, error = %err, "skipping port report poll");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use meterdash_domain::power::Watts;

    use super::*;
    use crate::services::fakes::{FakeMeterApi, meter};

    fn report() -> PortReport {
        PortReport {
            meter_number: "MTR-001".to_string(),
            latest_purchased_power: Watts::new(50.0),
            current_power: Watts::new(20.0),
            consumed_power: Watts::new(30.0),
            purchased_date: "2025-01-01 08:00:00".to_string(),
            latest_date: "2025-01-02 08:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn should_return_report_on_success() {
        let api = Rc::new(FakeMeterApi::default());
        api.push_report(Ok(report()));
        let monitor = ReportMonitor::new(Rc::clone(&api), meter());

        assert_eq!(monitor.refresh().await.unwrap(), report());
    }

    #[tokio::test]
    async fn should_surface_backend_error() {
        let api = Rc::new(FakeMeterApi::default());
        api.push_report(Err(MeterDashError::Backend("meter not found".to_string())));
        api.push_report(Ok(report()));
        let monitor = ReportMonitor::new(Rc::clone(&api), meter());

        let first = monitor.refresh().await;
        assert!(matches!(first, Err(MeterDashError::Backend(msg)) if msg == "meter not found"));
        assert!(monitor.refresh().await.is_ok());
        assert_eq!(api.request_count(), 2);
    }
}
