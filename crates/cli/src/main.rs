//! Transcript replay tool
//!
//! Feeds transcript lines through the billing parser and prints the
//! extracted items, one parse per line. Each line is treated as the full
//! transcript of one listening session; pass `--json` for
//! machine-readable output, `--lexicon <file>` for a locale override.
//!
//!     echo "tomato 2 kg 50 rupees" | voice-billing
//!     voice-billing --json "இரண்டு கிலோ தக்காளி ஐம்பது ரூபாய்"

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;

use voice_billing_core::ParsedItem;
use voice_billing_lexicon::LexiconSet;
use voice_billing_parser::BillingParser;
use voice_billing_session::split_live;

struct Options {
    json: bool,
    lexicon_path: Option<String>,
    transcript: Option<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut options = Options {
        json: false,
        lexicon_path: None,
        transcript: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--lexicon" => {
                options.lexicon_path =
                    Some(args.next().ok_or("--lexicon requires a file path")?);
            }
            "--help" | "-h" => {
                return Err("usage: voice-billing [--json] [--lexicon <file>] [transcript]".into());
            }
            other if options.transcript.is_none() => {
                options.transcript = Some(other.to_string());
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(options)
}

fn print_items(items: &[ParsedItem], json: bool) {
    if json {
        match serde_json::to_string(items) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("failed to serialize items: {err}"),
        }
        return;
    }

    let (completed, live) = split_live(items);
    for item in completed {
        println!("  {}", describe(item));
    }
    if let Some(live) = live {
        println!("  {} (live)", describe(live));
    }
}

fn describe(item: &ParsedItem) -> String {
    let name = item.name.as_deref().unwrap_or("?");
    let quantity = item.quantity.as_deref().unwrap_or("-");
    match item.rate {
        Some(rate) => format!("{name} | {quantity} | ₹{rate:.2}/unit"),
        None => format!("{name} | {quantity} | rate pending"),
    }
}

fn run() -> Result<(), String> {
    let options = parse_args()?;

    let lexicon = match &options.lexicon_path {
        Some(path) => Arc::new(
            LexiconSet::from_yaml_file(path).map_err(|e| format!("lexicon load failed: {e}"))?,
        ),
        None => LexiconSet::shared(),
    };
    let parser = BillingParser::new(lexicon);

    if let Some(transcript) = &options.transcript {
        let items = parser.parse_continuous_input(transcript);
        print_items(&items, options.json);
        return Ok(());
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("stdin read failed: {e}"))?;
        if line.trim().is_empty() {
            continue;
        }
        tracing::debug!(transcript = %line, "parsing");
        let items = parser.parse_continuous_input(&line);
        print_items(&items, options.json);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
