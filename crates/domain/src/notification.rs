//! Transient user notifications (toasts).

use std::fmt;
use std::time::Duration;

/// How long a notification stays visible before it removes itself.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Background colour of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastColor {
    Red,
    Orange,
    Green,
}

impl ToastColor {
    /// CSS colour keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for ToastColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// A message shown to the user for [`DISPLAY_DURATION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub color: ToastColor,
}

impl Notification {
    #[must_use]
    pub fn new(text: impl Into<String>, color: ToastColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Red notification.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, ToastColor::Red)
    }

    /// Green notification.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, ToastColor::Green)
    }
}
