//! Reason codes for state changes and absorbed events
//!
//! Purely observational: every StepOutput names why the machine did what it
//! did, but no control flow depends on these.

use serde::{Deserialize, Serialize};

/// Reason codes for every transition table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R000: Absorbed events
    // =========================================================================
    /// Event defined as a no-op in the current state
    R000_EVENT_IGNORED,

    // =========================================================================
    // R1xx: Number entry
    // =========================================================================
    /// Digit appended to (or replacing) the first number
    R101_FIRST_NUMBER_TYPING,
    /// First digit of the second number, entering INPUT_SECOND_NUMBER
    R102_SECOND_NUMBER_STARTED,
    /// Digit appended to the second number
    R103_SECOND_NUMBER_TYPING,
    /// Digit after the final result: reset, then first keystroke of a new cycle
    R104_NEW_CYCLE_STARTED,

    // =========================================================================
    // R2xx: Arithmetic
    // =========================================================================
    /// Plus stored the first number
    R201_FIRST_NUMBER_STORED,
    /// Equals showed A+B
    R202_SUM_SHOWN,
    /// Magic number derived, reveal phase armed
    R203_MAGIC_ARMED,
    /// Sum exceeds the target and policy refuses; folded back to plain addition
    R204_MAGIC_REFUSED,

    // =========================================================================
    // R3xx: Reveal
    // =========================================================================
    /// One magic digit revealed
    R301_MAGIC_DIGIT_REVEALED,
    /// Last magic digit revealed, sequence ready
    R302_MAGIC_SEQUENCE_COMPLETE,
    /// Tap after completion, absorbed without change
    R303_TAP_ABSORBED,

    // =========================================================================
    // R4xx: Finale
    // =========================================================================
    /// Equals revealed the encoded date-time
    R401_FINAL_RESULT_SHOWN,
    /// Equals rejected: screen still faces down
    R402_EQUALS_HELD_FACE_DOWN,

    // =========================================================================
    // R5xx: Editing and reset
    // =========================================================================
    /// Backspace trimmed the number being typed
    R501_INPUT_TRIMMED,
    /// Backspace cleared the second number, back to WAITING_SECOND_NUMBER
    R502_SECOND_NUMBER_CLEARED,
    /// Backspace abandoned the second operand, back to the first
    R503_BACKSPACE_TO_FIRST,
    /// Backspace cancelled the armed reveal, back to SHOW_FIRST_RESULT
    R504_REVEAL_CANCELLED,
    /// Session restored to creation defaults
    R505_SESSION_RESET,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R000_EVENT_IGNORED => "R000_EVENT_IGNORED",
            Self::R101_FIRST_NUMBER_TYPING => "R101_FIRST_NUMBER_TYPING",
            Self::R102_SECOND_NUMBER_STARTED => "R102_SECOND_NUMBER_STARTED",
            Self::R103_SECOND_NUMBER_TYPING => "R103_SECOND_NUMBER_TYPING",
            Self::R104_NEW_CYCLE_STARTED => "R104_NEW_CYCLE_STARTED",
            Self::R201_FIRST_NUMBER_STORED => "R201_FIRST_NUMBER_STORED",
            Self::R202_SUM_SHOWN => "R202_SUM_SHOWN",
            Self::R203_MAGIC_ARMED => "R203_MAGIC_ARMED",
            Self::R204_MAGIC_REFUSED => "R204_MAGIC_REFUSED",
            Self::R301_MAGIC_DIGIT_REVEALED => "R301_MAGIC_DIGIT_REVEALED",
            Self::R302_MAGIC_SEQUENCE_COMPLETE => "R302_MAGIC_SEQUENCE_COMPLETE",
            Self::R303_TAP_ABSORBED => "R303_TAP_ABSORBED",
            Self::R401_FINAL_RESULT_SHOWN => "R401_FINAL_RESULT_SHOWN",
            Self::R402_EQUALS_HELD_FACE_DOWN => "R402_EQUALS_HELD_FACE_DOWN",
            Self::R501_INPUT_TRIMMED => "R501_INPUT_TRIMMED",
            Self::R502_SECOND_NUMBER_CLEARED => "R502_SECOND_NUMBER_CLEARED",
            Self::R503_BACKSPACE_TO_FIRST => "R503_BACKSPACE_TO_FIRST",
            Self::R504_REVEAL_CANCELLED => "R504_REVEAL_CANCELLED",
            Self::R505_SESSION_RESET => "R505_SESSION_RESET",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R000_EVENT_IGNORED => "Event ignored in this state",
            Self::R101_FIRST_NUMBER_TYPING => "Typing the first number",
            Self::R102_SECOND_NUMBER_STARTED => "Second number started",
            Self::R103_SECOND_NUMBER_TYPING => "Typing the second number",
            Self::R104_NEW_CYCLE_STARTED => "New cycle started",
            Self::R201_FIRST_NUMBER_STORED => "First number stored",
            Self::R202_SUM_SHOWN => "Sum shown",
            Self::R203_MAGIC_ARMED => "Magic number armed",
            Self::R204_MAGIC_REFUSED => "Magic refused, plain addition kept",
            Self::R301_MAGIC_DIGIT_REVEALED => "Magic digit revealed",
            Self::R302_MAGIC_SEQUENCE_COMPLETE => "Magic sequence complete",
            Self::R303_TAP_ABSORBED => "Tap absorbed",
            Self::R401_FINAL_RESULT_SHOWN => "Final result shown",
            Self::R402_EQUALS_HELD_FACE_DOWN => "Equals held: screen faces down",
            Self::R501_INPUT_TRIMMED => "Input trimmed",
            Self::R502_SECOND_NUMBER_CLEARED => "Second number cleared",
            Self::R503_BACKSPACE_TO_FIRST => "Back to the first number",
            Self::R504_REVEAL_CANCELLED => "Reveal cancelled",
            Self::R505_SESSION_RESET => "Session reset",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
