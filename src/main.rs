//! Prestige CLI - rehearsal shell for the trick engine
//!
//! Usage:
//!   prestige --keys "4821+17=+ t t t t t t t f ="   # scripted run
//!   prestige                                        # interactive rehearsal
//!   prestige --keys "..." --json                    # JSON output
//!
//! Key language: 0-9, +, =, c (AC), b (backspace), t (blind tap).
//! `f` flips the simulated orientation signal; whitespace is ignored.

use clap::Parser;
use std::io::{self, BufRead, Write};

use chrono::Local;
use prestige::core::{clock, NegativeMagicPolicy, TrickConfig, TrickEngine};
use prestige::types::{InputEvent, Session, StepOutput, TrickState};
use prestige::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "prestige",
    version = VERSION,
    about = "Prestige - a calculator that predicts the time",
    long_about = "Prestige is the rehearsal shell for the magician's calculator.\n\n\
                  The machine adds two audience numbers, then a blind-tap reveal\n\
                  spells out a 'magic' number. Pressing = face-up shows the\n\
                  prediction: the current date and time as one decimal number.\n\n\
                  Keys:\n  \
                  0-9  digit buttons\n  \
                  +    plus\n  \
                  =    equals\n  \
                  c    AC\n  \
                  b    backspace\n  \
                  t    blind tap (anonymous touch)\n  \
                  f    flip the orientation signal (face down / face up)\n\n\
                  While the reveal phase runs face-down, every key is routed as\n\
                  a blind tap - the audience cannot reach the arithmetic. Flip\n\
                  face-up with 'f' before pressing = for the finale."
)]
struct Args {
    /// Key script to run (see key language in --help)
    #[arg(short, long)]
    keys: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the magician's view (operands, digits, orientation)
    #[arg(short, long)]
    verbose: bool,

    /// Keep the encoded target on the current minute even late in it
    #[arg(long)]
    no_minute_rounding: bool,

    /// Refuse the trick when the sum exceeds the target (fold back to
    /// plain addition)
    #[arg(long)]
    refuse_negative: bool,

    /// Emit Heavy feedback once this many digits are revealed
    #[arg(long)]
    heavy_cue_after: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let engine = TrickEngine::with_config(config_from(&args));

    if let Some(keys) = args.keys.clone() {
        run_script(&engine, &keys, &args);
    } else {
        run_interactive(&engine, &args);
    }
}

/// Build the engine configuration from CLI flags
fn config_from(args: &Args) -> TrickConfig {
    TrickConfig {
        minute_rounding: !args.no_minute_rounding,
        negative_policy: if args.refuse_negative {
            NegativeMagicPolicy::Refuse
        } else {
            NegativeMagicPolicy::Proceed
        },
        heavy_cue_after: args.heavy_cue_after,
    }
}

/// Run a key script and print one line per event
fn run_script(engine: &TrickEngine, keys: &str, args: &Args) {
    let mut session = Session::new();
    for key in keys.chars() {
        process_key(engine, &mut session, key, args);
    }
}

/// Run interactive rehearsal mode - read key lines from stdin
fn run_interactive(engine: &TrickEngine, args: &Args) {
    let mut session = Session::new();

    print_header(args.no_color);
    println!("Type keys and press Enter; every character is one button press.");
    println!("Keys: 0-9 + = c b t, 'f' flips orientation. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&session, args);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nRehearsal ended.");
            break;
        }
        if line.is_empty() {
            continue;
        }

        for key in line.chars() {
            process_key(engine, &mut session, key, args);
        }
    }
}

/// Handle one script character: orientation flip, key event, or noise
fn process_key(engine: &TrickEngine, session: &mut Session, key: char, args: &Args) {
    if key.is_whitespace() {
        return;
    }
    if key == 'f' || key == 'F' {
        let flipped = !session.facing_down;
        session.set_facing_down(flipped);
        print_orientation(session, args.no_color);
        return;
    }

    let Some(event) = InputEvent::from_key(key) else {
        println!(
            "{}? unknown key '{}'{}",
            if args.no_color { "" } else { "\x1b[33m" },
            key,
            if args.no_color { "" } else { "\x1b[0m" }
        );
        return;
    };

    // blind-input routing: while the reveal phase runs face-down, every
    // touch reaches the machine as an anonymous tap
    let routed = if session.is_blind_input_mode() {
        InputEvent::BlindTap
    } else {
        event
    };

    let output = engine.handle(session, routed, Local::now().naive_local());
    print_step(session, &output, args);
}

/// Print one step result per the output flags
fn print_step(session: &Session, output: &StepOutput, args: &Args) {
    if args.json {
        match serde_json::to_string(output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("json error: {}", e),
        }
    } else if args.verbose {
        print_verbose(session, output, args.no_color);
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Print the magician's view of one step
fn print_verbose(session: &Session, output: &StepOutput, no_color: bool) {
    let color = if no_color { "" } else { output.state.color_code() };
    let reset = if no_color { "" } else { TrickState::color_reset() };

    println!("{}┌──────────────────────────────────────────┐{}", color, reset);
    println!("{}│ [{}]{}", color, output.display_text, reset);
    println!(
        "{}│ state: {} | haptic: {}{}",
        color, output.state, output.haptic, reset
    );
    println!(
        "{}│ a={} b={} sum={}{}",
        color, session.first_number, session.second_number, session.sum_result, reset
    );
    println!(
        "{}│ digits: {}/{} | ready: {} | face down: {}{}",
        color,
        session.magic_reveal_index,
        session.magic_digits.len(),
        session.magic_input_ready,
        session.facing_down,
        reset
    );
    println!("{}│ {}{}", color, output.reason, reset);
    println!("{}└──────────────────────────────────────────┘{}", color, reset);
}

/// Print the orientation flip confirmation
fn print_orientation(session: &Session, no_color: bool) {
    let label = if session.facing_down {
        "screen face DOWN"
    } else {
        "screen face UP"
    };
    let blind = if session.is_blind_input_mode() {
        " - blind-input mode"
    } else {
        ""
    };
    if no_color {
        println!("~ {}{}", label, blind);
    } else {
        println!("\x1b[90m~ {}{}\x1b[0m", label, blind);
    }
}

/// Print header
fn print_header(no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Prestige v{} - Rehearsal", VERSION);
        println!("========================================");
    } else {
        println!("\x1b[1m╔══════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║  🎩 Prestige v{} - Rehearsal      ║\x1b[0m", VERSION);
        println!("\x1b[1m╚══════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Format the interactive prompt: state emoji, screen text, seconds ticker
fn format_prompt(session: &Session, args: &Args) -> String {
    let now = Local::now().naive_local();
    let seconds = clock::seconds_suffix(now);
    let down = if session.facing_down { " ▼" } else { "" };

    if args.no_color {
        format!("[{}]{} {} > ", session.display_text, down, seconds)
    } else {
        let state = session.state;
        format!(
            "{}{} [{}]{}{} {} > ",
            state.color_code(),
            state.emoji(),
            session.display_text,
            down,
            TrickState::color_reset(),
            seconds
        )
    }
}
