//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod meter_lookup;
pub mod power_monitor;
pub mod reading_service;
pub mod relay_controller;
pub mod report_monitor;

#[cfg(test)]
pub(crate) mod fakes;
