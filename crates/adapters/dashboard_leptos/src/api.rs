//! HTTP API client wrapping `gloo-net` for calls to the metering backend.
//!
//! Requests go to the page's own origin unless a base URL is given.

use std::future::Future;

use gloo_net::http::{Request, Response};
use meterdash_app::ports::MeterApi;
use meterdash_domain::error::MeterDashError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::power::Watts;
use meterdash_domain::purchase::{MeterExistence, MeterQuery};
use meterdash_domain::reading::{CurrentPower, SensorReading};
use meterdash_domain::relay::{RelayAck, RelayCommand};
use meterdash_domain::reply::Reply;
use meterdash_domain::report::PortReport;
use meterdash_domain::time::now;
use serde::de::DeserializeOwned;

/// A reply that could not be decoded as JSON.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Decode a reply envelope regardless of status.
///
/// The backend attaches `{ "error": ... }` to non-2xx replies, so the body
/// is read first and the status only matters when it is not JSON.
async fn read_reply<T: DeserializeOwned>(resp: Response) -> Result<T, MeterDashError> {
    let status = resp.status();
    let body = resp.text().await.map_err(MeterDashError::transport)?;
    let reply: Reply<T> = serde_json::from_str(&body).map_err(|err| {
        MeterDashError::transport(ApiError {
            message: format!("HTTP {status}: {err}"),
        })
    })?;
    reply.into_result()
}

/// Percent-encode a path segment or query value (handles `+`, `&`, `=`, `/`, spaces, etc.).
fn encode_component(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "%20")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
}

/// Browser implementation of [`MeterApi`].
#[derive(Debug, Clone, Default)]
pub struct GlooMeterApi {
    base_url: String,
}

impl GlooMeterApi {
    /// Client for the backend at `base_url`; an empty string means same origin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn meter_url(&self, endpoint: &str, meter: &MeterNumber) -> String {
        format!(
            "{}/api/{endpoint}/{}",
            self.base_url,
            encode_component(meter.as_str())
        )
    }

    fn report_url(&self, meter: &MeterNumber, cache_buster: i64) -> String {
        format!(
            "{}?_={cache_buster}",
            self.meter_url("port_report", meter)
        )
    }

    fn check_meter_url(&self, query: &MeterQuery) -> String {
        format!(
            "{}/admin/check_meter?meter={}",
            self.base_url,
            encode_component(query.as_str())
        )
    }

    fn relay_url(&self) -> String {
        format!("{}/api/relay_control", self.base_url)
    }

    async fn get<T: DeserializeOwned>(url: &str) -> Result<T, MeterDashError> {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(MeterDashError::transport)?;
        read_reply(resp).await
    }
}

impl MeterApi for GlooMeterApi {
    fn current_power(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<Watts, MeterDashError>> {
        let url = self.meter_url("current_power", meter);
        async move {
            let payload: CurrentPower = Self::get(&url).await?;
            Ok(payload.current_power)
        }
    }

    fn latest_reading(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<SensorReading, MeterDashError>> {
        let url = self.meter_url("latest-reading", meter);
        async move { Self::get(&url).await }
    }

    fn port_report(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<PortReport, MeterDashError>> {
        let url = self.report_url(meter, now().timestamp_millis());
        async move { Self::get(&url).await }
    }

    fn check_meter(
        &self,
        query: &MeterQuery,
    ) -> impl Future<Output = Result<MeterExistence, MeterDashError>> {
        let url = self.check_meter_url(query);
        async move { Self::get(&url).await }
    }

    fn send_relay_command(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, MeterDashError>> {
        let url = self.relay_url();
        let request = Request::post(&url).json(command);
        async move {
            let resp = request
                .map_err(MeterDashError::transport)?
                .send()
                .await
                .map_err(MeterDashError::transport)?;
            read_reply(resp).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter(value: &str) -> MeterNumber {
        MeterNumber::new(value).unwrap()
    }

    #[test]
    fn should_build_same_origin_urls() {
        let api = GlooMeterApi::default();
        assert_eq!(
            api.meter_url("current_power", &meter("MTR-1")),
            "/api/current_power/MTR-1"
        );
        assert_eq!(api.relay_url(), "/api/relay_control");
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let api = GlooMeterApi::new("http://meters.local:5000/");
        assert_eq!(
            api.meter_url("latest-reading", &meter("MTR-1")),
            "http://meters.local:5000/api/latest-reading/MTR-1"
        );
    }

    #[test]
    fn should_append_cache_buster_to_report_url() {
        let api = GlooMeterApi::default();
        assert_eq!(
            api.report_url(&meter("MTR-1"), 1_700_000_000_123),
            "/api/port_report/MTR-1?_=1700000000123"
        );
    }

    #[test]
    fn should_encode_meter_values() {
        let api = GlooMeterApi::default();
        assert_eq!(
            api.meter_url("current_power", &meter("A/B 1")),
            "/api/current_power/A%2FB%201"
        );
        let query = MeterQuery::from_input(" MTR 1&2 ").unwrap();
        assert_eq!(
            api.check_meter_url(&query),
            "/admin/check_meter?meter=MTR%201%262"
        );
    }

    #[test]
    fn should_encode_percent_before_other_characters() {
        assert_eq!(encode_component("50%+"), "50%25%2B");
    }
}
