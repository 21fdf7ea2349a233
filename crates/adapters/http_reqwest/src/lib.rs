//! # meterdash-adapter-http-reqwest
//!
//! Native HTTP adapter for the metering backend.
//!
//! ## Responsibilities
//! - Implement the [`MeterApi`](meterdash_app::ports::MeterApi) port with `reqwest`
//! - Build endpoint URLs from a configurable base URL (path segments and
//!   query values are percent-encoded)
//! - Decode `{ "error": ... }` replies regardless of HTTP status
//!
//! ## Dependency rule
//! Depends on `meterdash-domain` and `meterdash-app` (for the port trait).

mod client;
pub mod error;

pub use client::HttpMeterApi;
pub use error::HttpError;
