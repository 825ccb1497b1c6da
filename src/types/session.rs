//! The session value for one trick cycle
//!
//! The host shell constructs and owns the Session; the engine only mutates
//! it through `TrickEngine::handle`. One Session lives from the first
//! keystroke to the reset that follows a completed reveal.

use serde::{Deserialize, Serialize};

use crate::core::format::group_thousands;
use crate::types::TrickState;
use crate::EMPTY_INPUT;

/// All mutable state of one trick cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Current machine state
    pub state: TrickState,
    /// Decimal literal under construction; "0" is the canonical empty value
    pub current_input: String,
    /// What the screen shows; always recomputed from the other fields
    pub display_text: String,
    /// First audience number
    pub first_number: i64,
    /// Second audience number
    pub second_number: i64,
    /// first_number + second_number
    pub sum_result: i64,
    /// The revealed target, populated on entering SHOW_FINAL_RESULT
    pub final_result: i64,
    /// Magic digits, most significant first; derived once per cycle
    pub magic_digits: Vec<u8>,
    /// How many magic digits have been revealed so far
    pub magic_reveal_index: usize,
    /// True once every magic digit is on screen; stays true until reset
    pub magic_input_ready: bool,
    /// Last known orientation signal (external input, refreshed by the host)
    pub facing_down: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session at its creation defaults
    pub fn new() -> Self {
        Self {
            state: TrickState::InputFirstNumber,
            current_input: EMPTY_INPUT.to_string(),
            display_text: EMPTY_INPUT.to_string(),
            first_number: 0,
            second_number: 0,
            sum_result: 0,
            final_result: 0,
            magic_digits: Vec::new(),
            magic_reveal_index: 0,
            magic_input_ready: false,
            facing_down: false,
        }
    }

    /// Restore creation defaults. The orientation snapshot survives: it is
    /// an external signal, not session data.
    pub fn reset(&mut self) {
        let facing_down = self.facing_down;
        *self = Self::new();
        self.facing_down = facing_down;
    }

    /// Push the latest orientation classification from the host's sensor
    /// collaborator
    pub fn set_facing_down(&mut self, facing_down: bool) {
        self.facing_down = facing_down;
    }

    /// Blind-input mode: reveal phase while the screen faces down. While
    /// this holds the shell must route every touch through the reveal path.
    pub fn is_blind_input_mode(&self) -> bool {
        self.state.is_reveal_phase() && self.facing_down
    }

    /// Display text as a pure function of the current fields.
    ///
    /// The operand being typed is shown raw; stored numbers are grouped.
    pub fn render_display(&self) -> String {
        match self.state {
            TrickState::InputFirstNumber => self.current_input.clone(),
            TrickState::WaitingSecondNumber => {
                format!("{}+", group_thousands(self.first_number))
            }
            TrickState::InputSecondNumber => {
                format!("{}+{}", group_thousands(self.first_number), self.current_input)
            }
            TrickState::ShowFirstResult => group_thousands(self.sum_result),
            TrickState::WaitingMagicInput => {
                format!("{}+", group_thousands(self.sum_result))
            }
            TrickState::MagicInput => {
                format!("{}+{}", group_thousands(self.sum_result), self.current_input)
            }
            TrickState::ShowFinalResult => group_thousands(self.final_result),
        }
    }

    /// Re-derive display_text after a mutation
    pub(crate) fn refresh_display(&mut self) {
        self.display_text = self.render_display();
    }

    /// Parse the input under construction; unparsable or out-of-range
    /// strings resolve to 0, never an error
    pub fn parsed_input(&self) -> i64 {
        self.current_input.parse().unwrap_or(0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
