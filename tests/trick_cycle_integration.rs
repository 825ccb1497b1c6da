//! Integration tests for a full trick cycle
//!
//! Drives the public API the way a host shell would: key events in, display
//! text and haptic intents out.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use prestige::core::{group_thousands, NegativeMagicPolicy, TrickConfig, TrickEngine};
use prestige::types::{HapticIntent, InputEvent, ReasonCode, Session, StepOutput, TrickState};

/// 2026-02-16T14:18:00 — the reference show time, target 2161418
fn show_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 16)
        .unwrap()
        .and_hms_opt(14, 18, 0)
        .unwrap()
}

/// Feed a key script through the engine, collecting every output.
/// `f` flips the orientation signal in place.
fn run_keys(engine: &TrickEngine, session: &mut Session, keys: &str) -> Vec<StepOutput> {
    let mut outputs = Vec::new();
    for key in keys.chars() {
        if key.is_whitespace() {
            continue;
        }
        if key == 'f' {
            let flipped = !session.facing_down;
            session.set_facing_down(flipped);
            continue;
        }
        let event = InputEvent::from_key(key).expect("script key");
        outputs.push(engine.handle(session, event, show_time()));
    }
    outputs
}

/// The headline act: 4821 + 17, seven blind taps, face-up equals
#[test]
fn test_full_trick_cycle() {
    let engine = TrickEngine::new();
    let mut session = Session::new();

    // the magician types the audience numbers
    let outputs = run_keys(&engine, &mut session, "4821+17=");
    assert_eq!(outputs.last().unwrap().display_text, "4,838");
    assert_eq!(session.sum_result, 4838);

    // second plus arms the trick: 2161418 - 4838 = 2156580
    run_keys(&engine, &mut session, "+");
    assert_eq!(session.magic_digits, vec![2, 1, 5, 6, 5, 8, 0]);

    // phone goes face down; the audience taps blindly
    session.set_facing_down(true);
    let outputs = run_keys(&engine, &mut session, "ttttttt");
    assert_eq!(outputs.len(), 7);
    assert_eq!(outputs.last().unwrap().display_text, "4,838+2156580");
    assert!(outputs.last().unwrap().magic_ready);

    // face up, the finale
    session.set_facing_down(false);
    let outputs = run_keys(&engine, &mut session, "=");
    let finale = outputs.last().unwrap();
    assert_eq!(finale.display_text, "2,161,418");
    assert_eq!(finale.state, TrickState::ShowFinalResult);
    assert_eq!(finale.haptic, HapticIntent::NotificationSuccess);
}

/// Display text along the whole entry sequence
#[test]
fn test_display_progression() {
    let engine = TrickEngine::new();
    let mut session = Session::new();

    let displays: Vec<String> = run_keys(&engine, &mut session, "4821+17=+t")
        .into_iter()
        .map(|o| o.display_text)
        .collect();

    assert_eq!(
        displays,
        vec![
            "4", "48", "482", "4821", // typing the first number, raw
            "4,821+",                 // stored and grouped
            "4,821+1", "4,821+17",    // second operand, raw
            "4,838",                  // the sum
            "4,838+",                 // magic armed
            "4,838+2",                // first revealed digit
        ]
    );
}

/// The edge case the premise cannot survive: sum above the target
#[test]
fn test_negative_magic_scenario() {
    let engine = TrickEngine::new();
    let mut session = Session::new();

    // 89502 + 2072725 = 2162227; target 2161418 → magic -809
    run_keys(&engine, &mut session, "89502+2072725=+");
    assert_eq!(session.sum_result, 2162227);
    assert_eq!(session.magic_digits, vec![8, 0, 9]);

    // the reveal still runs, from the absolute value
    let outputs = run_keys(&engine, &mut session, "ttt");
    assert_eq!(outputs.last().unwrap().display_text, "2,162,227+809");
    assert!(session.magic_input_ready);
}

/// Refuse policy keeps a plain running addition instead
#[test]
fn test_negative_magic_refused() {
    let engine = TrickEngine::with_config(TrickConfig {
        negative_policy: NegativeMagicPolicy::Refuse,
        ..TrickConfig::default()
    });
    let mut session = Session::new();

    let outputs = run_keys(&engine, &mut session, "89502+2072725=+");
    let last = outputs.last().unwrap();
    assert_eq!(last.state, TrickState::WaitingSecondNumber);
    assert_eq!(last.reason, ReasonCode::R204_MAGIC_REFUSED);
    assert_eq!(last.display_text, "2,162,227+");

    let outputs = run_keys(&engine, &mut session, "73=");
    assert_eq!(outputs.last().unwrap().display_text, "2,162,300");
}

/// AC returns the identical initial snapshot from anywhere in the cycle
#[test]
fn test_clear_is_idempotent_everywhere() {
    let engine = TrickEngine::new();
    let scripts = [
        "4821",
        "4821+",
        "4821+17",
        "4821+17=",
        "4821+17=+",
        "4821+17=+ttt",
        "4821+17=+ttttttt",
        "4821+17=+ttttttt=",
    ];
    for script in scripts {
        let mut session = Session::new();
        run_keys(&engine, &mut session, script);
        run_keys(&engine, &mut session, "c");
        assert_eq!(session, Session::new(), "script {:?}", script);
        run_keys(&engine, &mut session, "c");
        assert_eq!(session, Session::new(), "script {:?} (second AC)", script);
    }
}

/// Exactly one NotificationSuccess across the whole reveal
#[test]
fn test_success_intent_exactly_once() {
    let engine = TrickEngine::new();
    let mut session = Session::new();
    run_keys(&engine, &mut session, "4821+17=+");

    let outputs = run_keys(&engine, &mut session, "tttttttttt"); // 3 extra taps
    let successes: Vec<usize> = outputs
        .iter()
        .enumerate()
        .filter(|(_, o)| o.haptic == HapticIntent::NotificationSuccess)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(successes, vec![6]);

    // absorbed taps answer Heavy
    assert!(outputs[7..]
        .iter()
        .all(|o| o.haptic == HapticIntent::Heavy));
}

/// A completed reveal flows straight into the next performance
#[test]
fn test_back_to_back_cycles() {
    let engine = TrickEngine::new();
    let mut session = Session::new();

    run_keys(&engine, &mut session, "4821+17=+ttttttt=");
    assert_eq!(session.state, TrickState::ShowFinalResult);

    // the first keystroke of the next cycle doubles as the reset
    let outputs = run_keys(&engine, &mut session, "12+34=");
    assert_eq!(outputs.last().unwrap().display_text, "46");
    assert_eq!(session.first_number, 12);
    assert_eq!(session.second_number, 34);
}

/// Backspace never takes the input below "0"
#[test]
fn test_backspace_floor() {
    let engine = TrickEngine::new();
    let mut session = Session::new();

    let outputs = run_keys(&engine, &mut session, "9bbbb");
    assert_eq!(outputs.last().unwrap().display_text, "0");
    assert_eq!(session.state, TrickState::InputFirstNumber);
}

/// The exposed formatting helper groups the way the display does
#[test]
fn test_group_thousands_helper() {
    assert_eq!(group_thousands(2161418), "2,161,418");
    assert_eq!(group_thousands(4838), "4,838");
    assert_eq!(group_thousands(0), "0");
}

/// StepOutput serializes and round-trips
#[test]
fn test_step_output_json() {
    let engine = TrickEngine::new();
    let mut session = Session::new();

    let output = engine.handle(&mut session, InputEvent::Digit('7'), show_time());
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"display_text\""));
    assert!(json.contains("\"haptic\""));

    let back: StepOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back.display_text, "7");
    assert_eq!(back.state, TrickState::InputFirstNumber);
}
