//! Scripted in-memory port implementations shared by the service tests.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use meterdash_domain::error::MeterDashError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::notification::Notification;
use meterdash_domain::power::Watts;
use meterdash_domain::purchase::{MeterExistence, MeterQuery};
use meterdash_domain::reading::SensorReading;
use meterdash_domain::relay::{RelayAck, RelayCommand};
use meterdash_domain::report::PortReport;

use crate::ports::{MeterApi, Notifier};

type Script<T> = Mutex<VecDeque<Result<T, MeterDashError>>>;

/// Replies are popped in order; an exhausted script answers with a
/// transport error.
#[derive(Default)]
pub(crate) struct FakeMeterApi {
    power: Script<Watts>,
    readings: Script<SensorReading>,
    reports: Script<PortReport>,
    lookups: Script<MeterExistence>,
    relays: Script<RelayAck>,
    pub(crate) queries: Mutex<Vec<String>>,
    pub(crate) commands: Mutex<Vec<RelayCommand>>,
    pub(crate) requests: Mutex<usize>,
}

fn pop<T>(script: &Script<T>) -> Result<T, MeterDashError> {
    script.lock().unwrap().pop_front().unwrap_or_else(|| {
        Err(MeterDashError::transport(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "no scripted reply",
        )))
    })
}

pub(crate) fn transport_error() -> MeterDashError {
    MeterDashError::transport(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "connection reset",
    ))
}

impl FakeMeterApi {
    pub(crate) fn push_power(&self, reply: Result<Watts, MeterDashError>) {
        self.power.lock().unwrap().push_back(reply);
    }

    pub(crate) fn push_reading(&self, reply: Result<SensorReading, MeterDashError>) {
        self.readings.lock().unwrap().push_back(reply);
    }

    pub(crate) fn push_report(&self, reply: Result<PortReport, MeterDashError>) {
        self.reports.lock().unwrap().push_back(reply);
    }

    pub(crate) fn push_lookup(&self, reply: Result<MeterExistence, MeterDashError>) {
        self.lookups.lock().unwrap().push_back(reply);
    }

    pub(crate) fn push_relay(&self, reply: Result<RelayAck, MeterDashError>) {
        self.relays.lock().unwrap().push_back(reply);
    }

    pub(crate) fn request_count(&self) -> usize {
        *self.requests.lock().unwrap()
    }

    fn record(&self) {
        *self.requests.lock().unwrap() += 1;
    }
}

impl MeterApi for FakeMeterApi {
    fn current_power(
        &self,
        _meter: &MeterNumber,
    ) -> impl Future<Output = Result<Watts, MeterDashError>> {
        self.record();
        let reply = pop(&self.power);
        async move { reply }
    }

    fn latest_reading(
        &self,
        _meter: &MeterNumber,
    ) -> impl Future<Output = Result<SensorReading, MeterDashError>> {
        self.record();
        let reply = pop(&self.readings);
        async move { reply }
    }

    fn port_report(
        &self,
        _meter: &MeterNumber,
    ) -> impl Future<Output = Result<PortReport, MeterDashError>> {
        self.record();
        let reply = pop(&self.reports);
        async move { reply }
    }

    fn check_meter(
        &self,
        query: &MeterQuery,
    ) -> impl Future<Output = Result<MeterExistence, MeterDashError>> {
        self.record();
        self.queries.lock().unwrap().push(query.as_str().to_string());
        let reply = pop(&self.lookups);
        async move { reply }
    }

    fn send_relay_command(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, MeterDashError>> {
        self.record();
        self.commands.lock().unwrap().push(command.clone());
        let reply = pop(&self.relays);
        async move { reply }
    }
}

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) shown: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn shown(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

pub(crate) fn meter() -> MeterNumber {
    MeterNumber::new("MTR-001").unwrap()
}
