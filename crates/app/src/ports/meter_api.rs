//! Meter API port: the read endpoints and relay command of the metering backend.
//!
//! Implementations map an `{ "error": ... }` reply to
//! [`MeterDashError::Backend`] and anything that prevents reading a reply
//! (network failure, undecodable body) to [`MeterDashError::Transport`].
//! Returned futures are not required to be `Send`.

use std::future::Future;
use std::rc::Rc;

use meterdash_domain::error::MeterDashError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::power::Watts;
use meterdash_domain::purchase::{MeterExistence, MeterQuery};
use meterdash_domain::reading::SensorReading;
use meterdash_domain::relay::{RelayAck, RelayCommand};
use meterdash_domain::report::PortReport;

/// Client for the metering backend.
pub trait MeterApi {
    /// Current remaining power of a meter.
    fn current_power(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<Watts, MeterDashError>>;

    /// Latest raw sensor sample of a meter.
    fn latest_reading(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<SensorReading, MeterDashError>>;

    /// Aggregate purchase/consumption report of a meter.
    fn port_report(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<PortReport, MeterDashError>>;

    /// Whether a meter number belongs to a registered user.
    fn check_meter(
        &self,
        query: &MeterQuery,
    ) -> impl Future<Output = Result<MeterExistence, MeterDashError>>;

    /// Ask the backend to switch a relay.
    fn send_relay_command(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, MeterDashError>>;
}

impl<T: MeterApi> MeterApi for Rc<T> {
    fn current_power(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<Watts, MeterDashError>> {
        (**self).current_power(meter)
    }

    fn latest_reading(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<SensorReading, MeterDashError>> {
        (**self).latest_reading(meter)
    }

    fn port_report(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<PortReport, MeterDashError>> {
        (**self).port_report(meter)
    }

    fn check_meter(
        &self,
        query: &MeterQuery,
    ) -> impl Future<Output = Result<MeterExistence, MeterDashError>> {
        (**self).check_meter(query)
    }

    fn send_relay_command(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, MeterDashError>> {
        (**self).send_relay_command(command)
    }
}
