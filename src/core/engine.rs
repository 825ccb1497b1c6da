//! Trick engine: the calculator's real state machine
//!
//! One `handle` call per discrete input event. Every cell of the transition
//! table is total — unknown input resolves to a defined no-op, parse
//! failures resolve to 0, and the only "rejected" action (equals while the
//! screen faces down) is communicated through a haptic intent alone.
//!
//! The engine holds configuration only; all mutable state lives in the
//! caller's Session. The host pushes the orientation snapshot through
//! `Session::set_facing_down` and supplies the resolved wall clock with
//! each event.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{clock, magic};
use crate::types::{HapticIntent, InputEvent, ReasonCode, Session, StepOutput, TrickState};
use crate::EMPTY_INPUT;

/// What to do when target - sum comes out negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeMagicPolicy {
    /// Warn and reveal the digits of the absolute value; the reveal will
    /// not match the arithmetic on screen
    #[default]
    Proceed,
    /// Do not arm the trick; fold the sum back into a plain running
    /// addition
    Refuse,
}

/// Engine policy knobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickConfig {
    /// Advance the target to the next minute once the seconds hand passes
    /// MINUTE_ROLLOVER_SECS. One setting covers derivation and reveal, so a
    /// cycle can never mix policies.
    pub minute_rounding: bool,
    /// Negative magic number handling
    pub negative_policy: NegativeMagicPolicy,
    /// Upgrade the base haptic to Heavy once this many digits are revealed,
    /// before the sequence completes
    pub heavy_cue_after: Option<usize>,
}

impl Default for TrickConfig {
    fn default() -> Self {
        Self {
            minute_rounding: true,
            negative_policy: NegativeMagicPolicy::Proceed,
            heavy_cue_after: None,
        }
    }
}

/// The trick state machine
#[derive(Debug, Clone, Default)]
pub struct TrickEngine {
    config: TrickConfig,
}

impl TrickEngine {
    /// Create an engine with default policies
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit policies
    pub fn with_config(config: TrickConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &TrickConfig {
        &self.config
    }

    /// Handle one input event. `now` is the host-resolved wall clock; the
    /// orientation snapshot must already be pushed via
    /// `Session::set_facing_down`. Returns exactly one haptic intent per
    /// event, never zero, never more.
    pub fn handle(
        &self,
        session: &mut Session,
        event: InputEvent,
        now: NaiveDateTime,
    ) -> StepOutput {
        let base = self.base_haptic(session);
        let before = session.state;

        let (haptic, reason) = match event {
            InputEvent::Digit(d) => self.on_digit(session, d, base),
            InputEvent::BlindTap => self.on_blind_tap(session, base),
            InputEvent::Plus => self.on_plus(session, now, base),
            InputEvent::Equals => self.on_equals(session, now, base),
            InputEvent::Clear => {
                session.reset();
                (base, ReasonCode::R505_SESSION_RESET)
            }
            InputEvent::Backspace => self.on_backspace(session, base),
        };

        session.refresh_display();
        if session.state != before {
            debug!(from = %before, to = %session.state, code = reason.code(), "state change");
        }

        StepOutput::new(
            session.display_text.clone(),
            session.state,
            haptic,
            reason,
            session.magic_input_ready,
        )
    }

    /// Base intent per the haptic policy: Heavy once the sequence is
    /// complete (or past the optional mid-reveal cue), Light otherwise.
    /// Evaluated before the event mutates anything.
    fn base_haptic(&self, session: &Session) -> HapticIntent {
        if session.magic_input_ready {
            return HapticIntent::Heavy;
        }
        if session.state == TrickState::MagicInput {
            if let Some(cue) = self.config.heavy_cue_after {
                if session.magic_reveal_index >= cue {
                    return HapticIntent::Heavy;
                }
            }
        }
        HapticIntent::Light
    }

    fn on_digit(
        &self,
        session: &mut Session,
        digit: char,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        if !digit.is_ascii_digit() {
            return (base, ReasonCode::R000_EVENT_IGNORED);
        }
        match session.state {
            TrickState::InputFirstNumber => {
                if session.current_input == EMPTY_INPUT {
                    session.current_input = digit.to_string();
                } else {
                    session.current_input.push(digit);
                }
                (base, ReasonCode::R101_FIRST_NUMBER_TYPING)
            }
            TrickState::WaitingSecondNumber => {
                session.current_input = digit.to_string();
                session.state = TrickState::InputSecondNumber;
                (base, ReasonCode::R102_SECOND_NUMBER_STARTED)
            }
            TrickState::InputSecondNumber => {
                session.current_input.push(digit);
                (base, ReasonCode::R103_SECOND_NUMBER_TYPING)
            }
            TrickState::ShowFirstResult => (base, ReasonCode::R000_EVENT_IGNORED),
            TrickState::WaitingMagicInput | TrickState::MagicInput => {
                // the tapped digit's identity is discarded
                self.reveal_step(session, base)
            }
            TrickState::ShowFinalResult => {
                session.reset();
                session.current_input = digit.to_string();
                (base, ReasonCode::R104_NEW_CYCLE_STARTED)
            }
        }
    }

    fn on_blind_tap(
        &self,
        session: &mut Session,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        if session.state.is_reveal_phase() {
            self.reveal_step(session, base)
        } else {
            // a blind tap carries no key identity outside the reveal phase
            (base, ReasonCode::R000_EVENT_IGNORED)
        }
    }

    /// One blind-tap reveal step. Entering from WAITING_MAGIC_INPUT switches
    /// state and reveals the first digit in the same transition.
    fn reveal_step(
        &self,
        session: &mut Session,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        if session.state == TrickState::WaitingMagicInput {
            session.state = TrickState::MagicInput;
            session.magic_reveal_index = 0;
        }

        if session.magic_reveal_index >= session.magic_digits.len() {
            return (base, ReasonCode::R303_TAP_ABSORBED);
        }

        let next = session.magic_digits[session.magic_reveal_index];
        if session.magic_reveal_index == 0 {
            session.current_input = next.to_string();
        } else {
            session.current_input.push(char::from(b'0' + next));
        }
        session.magic_reveal_index += 1;

        if session.magic_reveal_index == session.magic_digits.len() {
            session.magic_input_ready = true;
            return (
                HapticIntent::NotificationSuccess,
                ReasonCode::R302_MAGIC_SEQUENCE_COMPLETE,
            );
        }
        (base, ReasonCode::R301_MAGIC_DIGIT_REVEALED)
    }

    fn on_plus(
        &self,
        session: &mut Session,
        now: NaiveDateTime,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        match session.state {
            TrickState::InputFirstNumber => {
                session.first_number = session.parsed_input();
                session.current_input = EMPTY_INPUT.to_string();
                session.state = TrickState::WaitingSecondNumber;
                (base, ReasonCode::R201_FIRST_NUMBER_STORED)
            }
            TrickState::InputSecondNumber => {
                session.second_number = session.parsed_input();
                session.sum_result = session.first_number + session.second_number;
                self.arm_magic(session, now, base)
            }
            TrickState::ShowFirstResult => self.arm_magic(session, now, base),
            TrickState::ShowFinalResult => {
                session.reset();
                (base, ReasonCode::R505_SESSION_RESET)
            }
            TrickState::WaitingSecondNumber
            | TrickState::WaitingMagicInput
            | TrickState::MagicInput => (base, ReasonCode::R000_EVENT_IGNORED),
        }
    }

    fn on_equals(
        &self,
        session: &mut Session,
        now: NaiveDateTime,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        match session.state {
            TrickState::InputSecondNumber => {
                session.second_number = session.parsed_input();
                session.sum_result = session.first_number + session.second_number;
                session.current_input = session.sum_result.to_string();
                session.state = TrickState::ShowFirstResult;
                (base, ReasonCode::R202_SUM_SHOWN)
            }
            TrickState::MagicInput => {
                if session.facing_down {
                    // the screen must come back up before the reveal
                    return (
                        HapticIntent::NotificationWarning,
                        ReasonCode::R402_EQUALS_HELD_FACE_DOWN,
                    );
                }
                session.final_result = self.encode_target(now);
                session.magic_input_ready = false;
                session.state = TrickState::ShowFinalResult;
                (
                    HapticIntent::NotificationSuccess,
                    ReasonCode::R401_FINAL_RESULT_SHOWN,
                )
            }
            TrickState::ShowFinalResult => {
                session.reset();
                (base, ReasonCode::R505_SESSION_RESET)
            }
            TrickState::InputFirstNumber
            | TrickState::WaitingSecondNumber
            | TrickState::ShowFirstResult
            | TrickState::WaitingMagicInput => (base, ReasonCode::R000_EVENT_IGNORED),
        }
    }

    fn on_backspace(
        &self,
        session: &mut Session,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        match session.state {
            TrickState::InputFirstNumber => {
                trim_input(&mut session.current_input);
                (base, ReasonCode::R501_INPUT_TRIMMED)
            }
            TrickState::WaitingSecondNumber => {
                session.current_input = session.first_number.to_string();
                session.state = TrickState::InputFirstNumber;
                (base, ReasonCode::R503_BACKSPACE_TO_FIRST)
            }
            TrickState::InputSecondNumber => {
                if session.current_input.len() > 1 {
                    session.current_input.pop();
                    (base, ReasonCode::R501_INPUT_TRIMMED)
                } else {
                    session.current_input = EMPTY_INPUT.to_string();
                    session.state = TrickState::WaitingSecondNumber;
                    (base, ReasonCode::R502_SECOND_NUMBER_CLEARED)
                }
            }
            TrickState::WaitingMagicInput => {
                session.current_input = session.sum_result.to_string();
                session.state = TrickState::ShowFirstResult;
                (base, ReasonCode::R504_REVEAL_CANCELLED)
            }
            TrickState::ShowFirstResult
            | TrickState::MagicInput
            | TrickState::ShowFinalResult => (base, ReasonCode::R000_EVENT_IGNORED),
        }
    }

    /// Derive the magic number and enter the reveal phase, or fold back to
    /// plain addition when the policy refuses a negative magic number
    fn arm_magic(
        &self,
        session: &mut Session,
        now: NaiveDateTime,
        base: HapticIntent,
    ) -> (HapticIntent, ReasonCode) {
        let target = self.encode_target(now);
        let magic = magic::derive(target, session.sum_result);

        if magic.value < 0 && self.config.negative_policy == NegativeMagicPolicy::Refuse {
            session.first_number = session.sum_result;
            session.second_number = 0;
            session.current_input = EMPTY_INPUT.to_string();
            session.state = TrickState::WaitingSecondNumber;
            return (base, ReasonCode::R204_MAGIC_REFUSED);
        }

        session.magic_digits = magic.digits;
        session.magic_reveal_index = 0;
        session.magic_input_ready = false;
        session.current_input = EMPTY_INPUT.to_string();
        session.state = TrickState::WaitingMagicInput;
        (base, ReasonCode::R203_MAGIC_ARMED)
    }

    fn encode_target(&self, now: NaiveDateTime) -> i64 {
        if self.config.minute_rounding {
            clock::encode_with_rounding(now)
        } else {
            clock::encode(now)
        }
    }
}

/// Drop the last typed character, flooring at the canonical "0"
fn trim_input(input: &mut String) {
    input.pop();
    if input.is_empty() {
        input.push('0');
    }
}

// =============================================================================
// TESTS
// =============================================================================
