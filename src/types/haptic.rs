//! Haptic intents emitted alongside every handled event
//!
//! The core never touches an actuator; it only names the feedback it wants.
//! Exactly one intent accompanies each handled event.

use serde::{Deserialize, Serialize};

/// Abstract tactile feedback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HapticIntent {
    /// Ordinary key acknowledgement
    Light,
    /// The reveal sequence is already complete; taps are being absorbed
    Heavy,
    /// Sequence just completed, or the final result was revealed
    NotificationSuccess,
    /// Equals rejected while the screen faces down
    NotificationWarning,
}

impl HapticIntent {
    /// Get the intent name (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            HapticIntent::Light => "LIGHT",
            HapticIntent::Heavy => "HEAVY",
            HapticIntent::NotificationSuccess => "NOTIFICATION_SUCCESS",
            HapticIntent::NotificationWarning => "NOTIFICATION_WARNING",
        }
    }
}

impl std::fmt::Display for HapticIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
