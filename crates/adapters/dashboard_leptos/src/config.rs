//! Page-supplied dashboard settings.
//!
//! The server renders the meter number (and optionally the first power
//! readout) as data attributes on the mount element:
//!
//! ```html
//! <div id="meterdash" data-meter-number="MTR-001" data-current-power="12.5 W"></div>
//! ```
//!
//! Without a `#meterdash` element the attributes are read from `<body>`.

use leptos::prelude::document;
use meterdash_domain::error::ValidationError;
use meterdash_domain::meter::MeterNumber;
use meterdash_domain::power::Watts;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the element carrying the data attributes.
pub const MOUNT_ID: &str = "meterdash";

/// Settings for one dashboard page.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// The meter every poll and command targets.
    pub meter: MeterNumber,
    /// Power rendered by the server before the first poll, if any.
    pub initial_power: Option<Watts>,
}

impl DashboardConfig {
    /// Read the settings from the current document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMeterNumber`] when no meter number is
    /// present on the page.
    pub fn from_document() -> Result<Self, ValidationError> {
        let host = document()
            .get_element_by_id(MOUNT_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .or_else(|| document().body());
        let dataset = host.map(|el| el.dataset());
        let meter = dataset.as_ref().and_then(|d| d.get("meterNumber"));
        let power = dataset.as_ref().and_then(|d| d.get("currentPower"));
        Self::from_attributes(meter.as_deref(), power.as_deref())
    }

    /// Build settings from raw attribute values.
    ///
    /// An unparseable power readout counts as unknown.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMeterNumber`] when `meter` is missing
    /// or blank.
    pub fn from_attributes(
        meter: Option<&str>,
        current_power: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let meter = MeterNumber::new(meter.unwrap_or_default())?;
        Ok(Self {
            meter,
            initial_power: current_power.and_then(Watts::parse_leading),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_meter_and_initial_power() {
        let config = DashboardConfig::from_attributes(Some(" MTR-9 "), Some("12.5 W")).unwrap();
        assert_eq!(config.meter.as_str(), "MTR-9");
        assert_eq!(config.initial_power, Some(Watts::new(12.5)));
    }

    #[test]
    fn should_treat_unreadable_power_as_unknown() {
        let config = DashboardConfig::from_attributes(Some("MTR-9"), Some("Loading...")).unwrap();
        assert_eq!(config.initial_power, None);

        let config = DashboardConfig::from_attributes(Some("MTR-9"), None).unwrap();
        assert_eq!(config.initial_power, None);
    }

    #[test]
    fn should_require_meter_number() {
        assert_eq!(
            DashboardConfig::from_attributes(None, Some("3 W")),
            Err(ValidationError::EmptyMeterNumber)
        );
        assert_eq!(
            DashboardConfig::from_attributes(Some("   "), None),
            Err(ValidationError::EmptyMeterNumber)
        );
    }
}
