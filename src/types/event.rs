//! Discrete input events consumed by the trick engine

use serde::{Deserialize, Serialize};

/// One input from the host shell.
///
/// `BlindTap` is a full-surface touch with no key identity; shells send it
/// for every touch while blind-input mode holds, so the audience cannot
/// reach the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key, '0'..='9'
    Digit(char),
    Plus,
    Equals,
    /// AC
    Clear,
    Backspace,
    /// Anonymous tap, reveal phase only
    BlindTap,
}

impl InputEvent {
    /// Map a rehearsal-shell key character to an event.
    ///
    /// Key language: `0-9 + = c b t` (clear, backspace, blind tap).
    /// Anything else is not an input event.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => Some(InputEvent::Digit(key)),
            '+' => Some(InputEvent::Plus),
            '=' => Some(InputEvent::Equals),
            'c' | 'C' => Some(InputEvent::Clear),
            'b' | 'B' => Some(InputEvent::Backspace),
            't' | 'T' => Some(InputEvent::BlindTap),
            _ => None,
        }
    }

    /// Numeric value if this is a digit event
    pub fn digit_value(&self) -> Option<u8> {
        match self {
            InputEvent::Digit(c) => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_map_to_digit_events() {
        for key in '0'..='9' {
            assert_eq!(InputEvent::from_key(key), Some(InputEvent::Digit(key)));
        }
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(InputEvent::from_key('+'), Some(InputEvent::Plus));
        assert_eq!(InputEvent::from_key('='), Some(InputEvent::Equals));
        assert_eq!(InputEvent::from_key('c'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_key('C'), Some(InputEvent::Clear));
        assert_eq!(InputEvent::from_key('b'), Some(InputEvent::Backspace));
        assert_eq!(InputEvent::from_key('t'), Some(InputEvent::BlindTap));
    }

    #[test]
    fn test_unknown_keys_are_not_events() {
        assert_eq!(InputEvent::from_key('x'), None);
        assert_eq!(InputEvent::from_key('.'), None);
        assert_eq!(InputEvent::from_key(' '), None);
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(InputEvent::Digit('7').digit_value(), Some(7));
        assert_eq!(InputEvent::Plus.digit_value(), None);
    }
}
