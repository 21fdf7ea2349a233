//! Aggregate consumption report for a meter.

use serde::{Deserialize, Serialize};

use crate::power::Watts;

/// Payload of the port-report endpoint.
///
/// Dates are pre-formatted by the backend, which sends `"N/A"` when no
/// purchase or reading exists yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortReport {
    pub meter_number: String,
    pub latest_purchased_power: Watts,
    pub current_power: Watts,
    pub consumed_power: Watts,
    pub purchased_date: String,
    pub latest_date: String,
}

/// Which display slot a report value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    MeterNumber,
    LatestPurchasedPower,
    CurrentPower,
    ConsumedPower,
    PurchasedDate,
    LatestDate,
}

impl ReportField {
    /// Every slot in display order.
    pub const ALL: [Self; 6] = [
        Self::MeterNumber,
        Self::LatestPurchasedPower,
        Self::CurrentPower,
        Self::ConsumedPower,
        Self::PurchasedDate,
        Self::LatestDate,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MeterNumber => "Meter Number",
            Self::LatestPurchasedPower => "Latest Purchased Power",
            Self::CurrentPower => "Current Power",
            Self::ConsumedPower => "Consumed Power",
            Self::PurchasedDate => "Purchased Date",
            Self::LatestDate => "Latest Reading",
        }
    }
}

/// A rendered value for one display slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSlot {
    pub field: ReportField,
    pub text: String,
}

impl PortReport {
    /// Text for each of the six report slots, in display order.
    #[must_use]
    pub fn slots(&self) -> [ReportSlot; 6] {
        let slot = |field, text: String| ReportSlot { field, text };
        [
            slot(ReportField::MeterNumber, self.meter_number.clone()),
            slot(
                ReportField::LatestPurchasedPower,
                self.latest_purchased_power.readout(),
            ),
            slot(ReportField::CurrentPower, self.current_power.readout()),
            slot(ReportField::ConsumedPower, self.consumed_power.readout()),
            slot(ReportField::PurchasedDate, self.purchased_date.clone()),
            slot(ReportField::LatestDate, self.latest_date.clone()),
        ]
    }
}
