//! Conlin CLI
//!
//! Usage:
//!   conlin --text "your text here"           # Single classification
//!   conlin --interactive                     # Interactive mode
//!   conlin --calc --pattern 8 --attention 1.8 --resistance 2.5 --mode creation
//!   conlin --text "text" --json              # JSON output

use chrono::{DateTime, Utc};
use clap::Parser;
use std::io::{self, BufRead, Write};

use conlin::core::{
    lookup_factor, Calculator, ModeClassifier, ATTENTION_FACTORS, PATTERN_STRENGTHS,
    REALITY_FACTORS,
};
use conlin::types::{ClassificationResult, EquationOutcome, Mode};
use conlin::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "conlin",
    version = VERSION,
    about = "Conlin - Detect Creation vs Transformation mode and compute outcomes",
    long_about = "Conlin detects which mode of the Conlin Equations is active from\n\
                  free-form text, an optional energy level, and the time of day,\n\
                  and computes outcomes from C = P^A × R or C = P^A / R.\n\n\
                  Modes:\n  \
                  --text         Single classification\n  \
                  --interactive  Classify each line from stdin\n  \
                  --calc         Apply an equation to pattern/attention/resistance\n\n\
                  Labels:\n  \
                  Creation       - Flow and expansion signals dominate\n  \
                  Transformation - Resistance and obstacle signals dominate\n  \
                  Mixed          - Both sides tie exactly"
)]
struct Args {
    /// Text to classify (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - classify each line from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Calculator mode - apply one of the equations
    #[arg(short, long)]
    calc: bool,

    /// Explicit energy level, 0-10
    #[arg(short, long)]
    energy: Option<u8>,

    /// Timestamp to classify at (RFC 3339, default: now)
    #[arg(long)]
    time: Option<String>,

    /// Pattern strength: a number or a named strength (e.g. clear_vision)
    #[arg(long)]
    pattern: Option<String>,

    /// Attention factor: a number or a named factor (e.g. flow_state)
    #[arg(long)]
    attention: Option<String>,

    /// Reality/resistance: a number or a named factor (e.g. mild_friction)
    #[arg(long)]
    resistance: Option<String>,

    /// Equation mode for --calc: creation or transformation
    #[arg(short, long)]
    mode: Option<String>,

    /// Print suggested approaches for the detected mode
    #[arg(short, long)]
    suggest: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show full signal breakdown
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if args.calc {
        run_calc(&args);
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Run single text classification
fn run_single(text: &str, args: &Args) {
    let classifier = ModeClassifier::new();

    let result = match parse_time(args.time.as_deref()) {
        Some(timestamp) => classifier.classify(text, args.energy, timestamp),
        None => classifier.classify_now(text, args.energy),
    };

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).unwrap());
    } else if args.verbose {
        print_verbose(&result, args.no_color);
    } else if args.no_color {
        println!("{}", result.to_parseable_string());
    } else {
        println!("{}", result.to_terminal_string());
    }

    if args.suggest && !args.json {
        print_suggestions(&classifier, &result, args.no_color);
    }
}

/// Run interactive mode - classify each line from stdin
fn run_interactive(args: &Args) {
    let classifier = ModeClassifier::new();
    let mut last_mode: Option<Mode> = None;
    let mut count: u64 = 0;

    print_header("Interactive Mode", args.no_color);
    println!("Type text and press Enter to classify. Type 'quit' to exit.");
    if let Some(level) = args.energy {
        println!("Energy level: {}/10 (applied to every line)", level);
    }
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(last_mode, args.no_color);
        print!("{}", prompt);
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Classifications: {}", count);
            break;
        }
        if line.is_empty() {
            continue;
        }

        let result = match classifier.classify_now(line, args.energy) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        };
        count += 1;
        last_mode = Some(result.mode);

        if args.json {
            println!("{}", serde_json::to_string(&result).unwrap());
        } else if args.verbose {
            print_verbose(&result, args.no_color);
        } else if args.no_color {
            println!("{}", result.to_parseable_string());
        } else {
            println!("{}", result.to_terminal_string());
        }

        if args.suggest && !args.json {
            print_suggestions(&classifier, &result, args.no_color);
        }
    }
}

/// Run calculator mode
fn run_calc(args: &Args) {
    let pattern = resolve_input(args.pattern.as_deref(), PATTERN_STRENGTHS, "--pattern");
    let attention = resolve_input(args.attention.as_deref(), ATTENTION_FACTORS, "--attention");
    let resistance = resolve_input(args.resistance.as_deref(), REALITY_FACTORS, "--resistance");

    let mode = match args.mode.as_deref().map(parse_mode) {
        Some(Some(mode)) => mode,
        Some(None) => {
            eprintln!("error: --mode must be 'creation' or 'transformation'");
            std::process::exit(1);
        }
        None => {
            eprintln!("error: --calc requires --mode");
            std::process::exit(1);
        }
    };

    let calc = Calculator::new();
    let outcome = match calc.calculate(pattern, attention, resistance, mode) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome).unwrap());
    } else {
        print_outcome(&outcome, args.no_color);
    }
}

/// Resolve a calculator input: a plain number or a named table entry
fn resolve_input(value: Option<&str>, table: &[(&str, f64)], flag: &str) -> f64 {
    let value = match value {
        Some(value) => value,
        None => {
            eprintln!("error: --calc requires {}", flag);
            std::process::exit(1);
        }
    };

    if let Ok(number) = value.parse::<f64>() {
        return number;
    }
    match lookup_factor(table, value) {
        Some(number) => number,
        None => {
            eprintln!("error: {} '{}' is neither a number nor a known factor", flag, value);
            std::process::exit(1);
        }
    }
}

/// Parse an equation mode name
fn parse_mode(name: &str) -> Option<Mode> {
    match name.to_lowercase().as_str() {
        "creation" | "create" | "×" | "x" => Some(Mode::Creation),
        "transformation" | "transform" | "/" => Some(Mode::Transformation),
        "mixed" => Some(Mode::Mixed),
        _ => None,
    }
}

/// Parse an explicit timestamp, exiting on malformed input
fn parse_time(time: Option<&str>) -> Option<DateTime<Utc>> {
    let time = time?;
    match DateTime::parse_from_rfc3339(time) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            eprintln!("error: --time '{}' is not RFC 3339: {}", time, e);
            std::process::exit(1);
        }
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Conlin v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m╔═════════════════════════════════════════╗\x1b[0m");
        println!("\x1b[1m║      Conlin v{} - {}      ║\x1b[0m", VERSION, mode);
        println!("\x1b[1m╚═════════════════════════════════════════╝\x1b[0m");
    }
    println!();
}

/// Format interactive prompt from the last detected mode
fn format_prompt(last_mode: Option<Mode>, no_color: bool) -> String {
    match last_mode {
        None => "> ".to_string(),
        Some(mode) if no_color => format!("[{}] > ", mode),
        Some(mode) => format!(
            "{}{} [{}]{} > ",
            mode.color_code(),
            mode.emoji(),
            mode,
            Mode::color_reset()
        ),
    }
}

/// Print suggested approaches for the detected mode
fn print_suggestions(classifier: &ModeClassifier, result: &ClassificationResult, no_color: bool) {
    let color = if no_color { "" } else { "\x1b[90m" };
    let reset = if no_color { "" } else { Mode::color_reset() };

    println!("{}  Suggested approaches:{}", color, reset);
    for suggestion in classifier.suggest(result.mode, result.confidence) {
        println!("{}    - {}{}", color, suggestion, reset);
    }
}

/// Print full signal breakdown
fn print_verbose(result: &ClassificationResult, no_color: bool) {
    let color = if no_color { "" } else { result.mode.color_code() };
    let reset = if no_color { "" } else { Mode::color_reset() };
    let analysis = &result.analysis;

    println!("{}┌──────────────────────────────────────────┐{}", color, reset);
    println!(
        "{}│ mode = {}  (confidence {:.1}%){}",
        color,
        result.mode,
        result.confidence * 100.0,
        reset
    );
    println!("{}├──────────────────────────────────────────┤{}", color, reset);
    println!("{}│ Signals:{}", color, reset);
    println!(
        "{}│   creation:       {} patterns (weight 2){}",
        color, analysis.creation_signals, reset
    );
    println!(
        "{}│   transformation: {} patterns (weight 2){}",
        color, analysis.transformation_signals, reset
    );
    println!(
        "{}│ Energy: state={} boosts: c=+{} t=+{}{}",
        color,
        analysis.energy_analysis.energy_state,
        analysis.energy_analysis.creation_boost,
        analysis.energy_analysis.transformation_boost,
        reset
    );
    println!(
        "{}│ Time: period={} boosts: c=+{} t=+{}{}",
        color,
        analysis.time_tendency.period,
        analysis.time_tendency.creation_boost,
        analysis.time_tendency.transformation_boost,
        reset
    );
    println!("{}├──────────────────────────────────────────┤{}", color, reset);
    println!(
        "{}│ Totals: creation={} transformation={}{}",
        color, analysis.raw_scores.creation, analysis.raw_scores.transformation, reset
    );
    if let Some(equation) = result.mode.equation() {
        println!("{}│ Equation: {}{}", color, equation, reset);
    }
    println!("{}└──────────────────────────────────────────┘{}", color, reset);
}

/// Print calculator outcome
fn print_outcome(outcome: &EquationOutcome, no_color: bool) {
    let color = if no_color { "" } else { outcome.mode.color_code() };
    let reset = if no_color { "" } else { Mode::color_reset() };
    let emoji = if no_color { "" } else { outcome.mode.emoji() };

    println!(
        "{}{} {} = {:.1}{}",
        color,
        emoji,
        outcome.equation,
        outcome.result,
        reset
    );
    println!("{}  {}{}", color, outcome.interpretation, reset);
    if !outcome.suggestions.is_empty() {
        println!("{}  Suggestions:{}", color, reset);
        for suggestion in &outcome.suggestions {
            println!("{}    - {}{}", color, suggestion, reset);
        }
    }
}
