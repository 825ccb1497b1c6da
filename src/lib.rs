//! Prestige: the magician's calculator core
//!
//! A calculator whose real job is a stage trick: the magician adds two
//! audience numbers, then the device "predicts" a number that, revealed one
//! digit per blind tap, turns out to be the current date and time. This crate
//! is the input/state-machine core: key events → TrickEngine → display text
//! plus a haptic intent. Rendering, motion sensing, and the physical actuator
//! live in the host shell.

pub mod core;
pub mod types;

// =============================================================================
// POLICY CONSTANTS
// =============================================================================

/// Seconds past the minute after which the encoded target advances to the
/// next minute (when minute rounding is enabled)
pub const MINUTE_ROLLOVER_SECS: u32 = 30;

/// Canonical empty input value; backspace never trims below this
pub const EMPTY_INPUT: &str = "0";

/// Digits per display group ("2,161,418")
pub const DISPLAY_GROUP: usize = 3;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
