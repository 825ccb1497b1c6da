//! Per-event output returned by the engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{HapticIntent, ReasonCode, TrickState};

/// Result of one handled input event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Text on the calculator screen
    pub display_text: String,
    /// State after the event
    pub state: TrickState,
    /// The single haptic intent for this event
    pub haptic: HapticIntent,
    /// Why the machine did what it did
    pub reason: ReasonCode,
    /// Are all magic digits on screen?
    pub magic_ready: bool,
}

impl StepOutput {
    /// Create new output
    pub fn new(
        display_text: impl Into<String>,
        state: TrickState,
        haptic: HapticIntent,
        reason: ReasonCode,
        magic_ready: bool,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            display_text: display_text.into(),
            state,
            haptic,
            reason,
            magic_ready,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.state.color_code();
        let reset = TrickState::color_reset();
        let emoji = self.state.emoji();

        format!(
            "{}{} [{}] | state={} | haptic={} | {}{}",
            color,
            emoji,
            self.display_text,
            self.state,
            self.haptic,
            self.reason.code(),
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "display={} | state={} | haptic={} | reason={}",
            self.display_text,
            self.state,
            self.haptic,
            self.reason.code()
        )
    }
}
