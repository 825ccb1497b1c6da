//! Trick cycle state definitions

use serde::{Deserialize, Serialize};

/// The seven states of one trick cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrickState {
    /// Typing the first audience number
    InputFirstNumber,
    /// Plus pressed, waiting for the second number to start
    WaitingSecondNumber,
    /// Typing the second audience number
    InputSecondNumber,
    /// Equals pressed, A+B on screen, waiting for the second plus
    ShowFirstResult,
    /// Magic armed, waiting for the first blind tap
    WaitingMagicInput,
    /// Blind taps reveal the magic digits one by one
    MagicInput,
    /// The encoded date-time is on screen
    ShowFinalResult,
}

impl TrickState {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            TrickState::InputFirstNumber => "\x1b[90m",    // Gray
            TrickState::WaitingSecondNumber => "\x1b[33m", // Yellow
            TrickState::InputSecondNumber => "\x1b[90m",   // Gray
            TrickState::ShowFirstResult => "\x1b[36m",     // Cyan
            TrickState::WaitingMagicInput => "\x1b[35m",   // Magenta
            TrickState::MagicInput => "\x1b[35m",          // Magenta
            TrickState::ShowFinalResult => "\x1b[32m",     // Green
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for state
    pub fn emoji(&self) -> &'static str {
        match self {
            TrickState::InputFirstNumber => "🔢",
            TrickState::WaitingSecondNumber => "➕",
            TrickState::InputSecondNumber => "🧮",
            TrickState::ShowFirstResult => "✅",
            TrickState::WaitingMagicInput => "✨",
            TrickState::MagicInput => "🎩",
            TrickState::ShowFinalResult => "🔮",
        }
    }

    /// Is this one of the two reveal-phase states blind-input routing
    /// applies to?
    pub fn is_reveal_phase(&self) -> bool {
        matches!(
            self,
            TrickState::WaitingMagicInput | TrickState::MagicInput
        )
    }
}

impl std::fmt::Display for TrickState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TrickState::InputFirstNumber => "INPUT_FIRST_NUMBER",
            TrickState::WaitingSecondNumber => "WAITING_SECOND_NUMBER",
            TrickState::InputSecondNumber => "INPUT_SECOND_NUMBER",
            TrickState::ShowFirstResult => "SHOW_FIRST_RESULT",
            TrickState::WaitingMagicInput => "WAITING_MAGIC_INPUT",
            TrickState::MagicInput => "MAGIC_INPUT",
            TrickState::ShowFinalResult => "SHOW_FINAL_RESULT",
        };
        write!(f, "{}", name)
    }
}
