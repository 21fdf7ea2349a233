//! # meterdash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `MeterApi`: read endpoints and the relay command endpoint
//!   - `Notifier`: shows transient notifications
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PowerMonitor`: power polling with alert throttling
//!   - `ReportMonitor`: aggregate report polling
//!   - `ReadingService`: on-demand latest sensor reading
//!   - `RelayController`: guarded relay commands
//!   - `MeterLookup`: live meter existence feedback
//! - Own the polling cadence constants
//!
//! ## Dependency rule
//! Depends on `meterdash-domain` only (plus `tracing`).
//! Never imports adapter crates and never requires `Send` futures, so the same
//! services run in the browser and on a current-thread runtime.

pub mod polling;
pub mod ports;
pub mod services;
