//! Power values in watts.
//!
//! The backend is inconsistent about encoding: `current_power` arrives as a
//! JSON number from some endpoints and as a formatted decimal string
//! (`"12.50"`) from others. [`Watts`] accepts both.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A power value in watts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Watts(f64);

impl Watts {
    /// Wrap a raw watt value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw watt value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the value is a real number. `NaN` and infinities decode from
    /// strings such as `"nan"` but never count as a known reading.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Whether the reading is exactly zero (no hysteresis).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Parse the leading numeric token of rendered text such as `"12.5 W"`.
    ///
    /// Mirrors how a host page formats the readout: the first
    /// whitespace-separated token is read up to its longest numeric prefix.
    /// Returns `None` when no number can be read or the value is not finite.
    #[must_use]
    pub fn parse_leading(text: &str) -> Option<Self> {
        let token = text.split_whitespace().next()?;
        let end = token
            .char_indices()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .filter(|&end| token[..end].parse::<f64>().is_ok())
            .last()?;
        let value: f64 = token[..end].parse().ok()?;
        value.is_finite().then_some(Self(value))
    }

    /// Text written into a display slot, e.g. `"12.5 W"`.
    #[must_use]
    pub fn readout(self) -> String {
        format!("{self} W")
    }
}

impl fmt::Display for Watts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Watts {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for Watts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(Self)
                .map_err(|err| serde::de::Error::custom(format!("invalid watt value {text:?}: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_from_number() {
        let watts: Watts = serde_json::from_str("4.5").unwrap();
        assert_eq!(watts, Watts::new(4.5));
    }

    #[test]
    fn should_deserialize_from_decimal_string() {
        let watts: Watts = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(watts, Watts::new(12.5));
    }

    #[test]
    fn should_reject_non_numeric_string() {
        assert!(serde_json::from_str::<Watts>("\"lots\"").is_err());
    }

    #[test]
    fn should_decode_nan_string_as_non_finite() {
        let watts: Watts = serde_json::from_str("\"nan\"").unwrap();
        assert!(!watts.is_finite());
        assert!(!watts.is_zero());
        assert!(Watts::new(12.5).is_finite());
    }

    #[test]
    fn should_detect_exact_zero_only() {
        assert!(Watts::new(0.0).is_zero());
        assert!(!Watts::new(0.001).is_zero());
    }

    #[test]
    fn should_parse_leading_token_of_readout() {
        assert_eq!(Watts::parse_leading("12.5 W"), Some(Watts::new(12.5)));
        assert_eq!(Watts::parse_leading("  0.00 W"), Some(Watts::new(0.0)));
        assert_eq!(Watts::parse_leading("7W"), Some(Watts::new(7.0)));
    }

    #[test]
    fn should_fail_to_parse_placeholder_text() {
        assert_eq!(Watts::parse_leading("Loading..."), None);
        assert_eq!(Watts::parse_leading(""), None);
        assert_eq!(Watts::parse_leading("NaN W"), None);
        assert_eq!(Watts::parse_leading("inf W"), None);
    }

    #[test]
    fn should_render_readout_with_unit() {
        assert_eq!(Watts::new(5.0).readout(), "5 W");
        assert_eq!(Watts::new(2.25).readout(), "2.25 W");
    }
}
