//! # meterdash-domain
//!
//! Pure domain model for the prepaid meter dashboard.
//!
//! ## Responsibilities
//! - Foundational types: meter identifiers, error conventions, timestamps
//! - Define **readings** (current power, sensor samples, aggregate reports)
//! - Define the **alert policy** (zero / low power thresholds and cooldowns)
//! - Define **notifications** (text + colour, fixed display duration)
//! - Define **relay commands** and the local power precondition
//! - Define the **purchase form** rules (purpose toggle, meter lookup feedback)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod meter;
pub mod time;

pub mod alert;
pub mod notification;
pub mod power;
pub mod purchase;
pub mod reading;
pub mod relay;
pub mod reply;
pub mod report;
