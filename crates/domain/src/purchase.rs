//! Buy-electricity form rules.
//!
//! The form lets a user buy power for their own meter or for someone else's.
//! Choosing "other" reveals a meter number field, which is checked against the
//! backend on every keystroke.

use serde::Deserialize;

/// Purpose selector value that reveals the other-meter field.
pub const OTHER_PURPOSE: &str = "other";

/// Visibility and required-ness of the other-meter field.
///
/// Derived from the selector value on every change; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OtherMeterField {
    pub visible: bool,
    pub required: bool,
}

impl OtherMeterField {
    #[must_use]
    pub fn for_purpose(value: &str) -> Self {
        let other = value == OTHER_PURPOSE;
        Self {
            visible: other,
            required: other,
        }
    }
}

/// A non-empty, trimmed meter number typed into the other-meter field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterQuery(String);

impl MeterQuery {
    /// `None` when the trimmed input is empty: no lookup should be issued.
    #[must_use]
    pub fn from_input(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Payload of the meter existence check.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MeterExistence {
    pub exists: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// Styling applied to the feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Success,
    Error,
}

impl FeedbackTone {
    /// CSS class to add.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "text-green-600",
            Self::Error => "text-red-600",
        }
    }

    /// CSS class of the opposite tone, to remove.
    #[must_use]
    pub fn opposite_class(self) -> &'static str {
        match self {
            Self::Success => Self::Error.class(),
            Self::Error => Self::Success.class(),
        }
    }
}

/// What the feedback line under the other-meter field shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MeterFeedback {
    /// Empty input; nothing shown and styling left as is.
    #[default]
    Cleared,
    Exists { username: String },
    NotFound,
    /// The lookup request itself failed.
    Failed,
}

impl MeterFeedback {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Cleared => String::new(),
            Self::Exists { username } => format!("Meter exists for user: {username}"),
            Self::NotFound => "No user found for that meter number.".to_string(),
            Self::Failed => "Error checking meter.".to_string(),
        }
    }

    /// `None` for [`MeterFeedback::Cleared`].
    #[must_use]
    pub fn tone(&self) -> Option<FeedbackTone> {
        match self {
            Self::Cleared => None,
            Self::Exists { .. } => Some(FeedbackTone::Success),
            Self::NotFound | Self::Failed => Some(FeedbackTone::Error),
        }
    }
}

impl From<MeterExistence> for MeterFeedback {
    fn from(existence: MeterExistence) -> Self {
        if existence.exists {
            Self::Exists {
                username: existence.username.unwrap_or_default(),
            }
        } else {
            Self::NotFound
        }
    }
}
