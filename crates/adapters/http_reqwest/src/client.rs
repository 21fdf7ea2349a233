//! `reqwest`-backed implementation of the [`MeterApi`] port.

use std::future::Future;

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
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::HttpError;

/// Metering backend client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpMeterApi {
    client: Client,
    base_url: Url,
}

impl HttpMeterApi {
    /// Create a client for the backend at `base_url` (e.g. `http://127.0.0.1:5000`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] when `base_url` is not an
    /// absolute `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`HttpMeterApi::new`] with a caller-configured client.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidBaseUrl`] when `base_url` is not an
    /// absolute `http` or `https` URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, HttpError> {
        let invalid = || HttpError::InvalidBaseUrl(base_url.to_string());
        let url = Url::parse(base_url).map_err(|_| invalid())?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid());
        }
        Ok(Self {
            client,
            base_url: url,
        })
    }

    /// The backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, HttpError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| HttpError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, MeterDashError> {
        let response = request.send().await.map_err(HttpError::Request)?;
        let status = response.status();
        let body = response.bytes().await.map_err(HttpError::Request)?;
        let reply: Reply<T> =
            serde_json::from_slice(&body).map_err(|source| HttpError::Decode { status, source })?;
        reply.into_result()
    }
}

impl MeterApi for HttpMeterApi {
    fn current_power(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<Watts, MeterDashError>> {
        async move {
            let url = self.endpoint(&["api", "current_power", meter.as_str()])?;
            tracing::debug!(%url, "fetching current power");
            let payload: CurrentPower = Self::read(self.client.get(url)).await?;
            Ok(payload.current_power)
        }
    }

    fn latest_reading(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<SensorReading, MeterDashError>> {
        async move {
            let url = self.endpoint(&["api", "latest-reading", meter.as_str()])?;
            tracing::debug!(%url, "fetching latest reading");
            Self::read(self.client.get(url)).await
        }
    }

    fn port_report(
        &self,
        meter: &MeterNumber,
    ) -> impl Future<Output = Result<PortReport, MeterDashError>> {
        async move {
            let url = self.endpoint(&["api", "port_report", meter.as_str()])?;
            tracing::debug!(%url, "fetching port report");
            let request = self
                .client
                .get(url)
                .query(&[("_", now().timestamp_millis())]);
            Self::read(request).await
        }
    }

    fn check_meter(
        &self,
        query: &MeterQuery,
    ) -> impl Future<Output = Result<MeterExistence, MeterDashError>> {
        async move {
            let url = self.endpoint(&["admin", "check_meter"])?;
            tracing::debug!(%url, meter = query.as_str(), "checking meter");
            let request = self.client.get(url).query(&[("meter", query.as_str())]);
            Self::read(request).await
        }
    }

    fn send_relay_command(
        &self,
        command: &RelayCommand,
    ) -> impl Future<Output = Result<RelayAck, MeterDashError>> {
        async move {
            let url = self.endpoint(&["api", "relay_control"])?;
            tracing::debug!(%url, state = %command.state, "sending relay command");
            Self::read(self.client.post(url).json(command)).await
        }
    }
}
