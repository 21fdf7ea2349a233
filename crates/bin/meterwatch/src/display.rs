//! Terminal display slots.
//!
//! Each slot remembers only its last rendered text and logs a line when the
//! text changes.

use std::cell::RefCell;

use meterdash_domain::power::Watts;
use meterdash_domain::report::{PortReport, ReportSlot};

#[derive(Debug, Default)]
pub struct TerminalDisplay {
    power: RefCell<Option<String>>,
    report: RefCell<Option<Vec<ReportSlot>>>,
}

impl TerminalDisplay {
    /// Render the current power readout. Returns whether the text changed.
    pub fn show_power(&self, power: Watts) -> bool {
        let text = power.readout();
        let mut slot = self.power.borrow_mut();
        if slot.as_deref() == Some(text.as_str()) {
            return false;
        }
        tracing::info!(current_power = %text, "current power");
        *slot = Some(text);
        true
    }

    /// Render the report slots. Returns whether any text changed.
    pub fn show_report(&self, report: &PortReport) -> bool {
        let slots = report.slots().to_vec();
        let mut current = self.report.borrow_mut();
        if current.as_ref() == Some(&slots) {
            return false;
        }
        let line = slots
            .iter()
            .map(|slot| format!("{}: {}", slot.field.label(), slot.text))
            .collect::<Vec<_>>()
            .join(" | ");
        tracing::info!("{line}");
        *current = Some(slots);
        true
    }

    /// Last rendered power readout.
    pub fn power(&self) -> Option<String> {
        self.power.borrow().clone()
    }

    /// Last rendered report slots.
    pub fn report(&self) -> Option<Vec<ReportSlot>> {
        self.report.borrow().clone()
    }
}
