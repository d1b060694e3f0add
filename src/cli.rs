use std::fs;
use std::io::{self, BufRead, Write};

use tracing::info;

use crate::api::{Credential, HttpStatsFetcher};
use crate::config::ScrapeConfig;
use crate::data::{load_players_csv, load_units_csv, LoadReport};
use crate::scrape::{run_scrape, write_unit_stats_csv, RequestPacer};
use crate::stats::extract_stat_totals;

const USAGE: &str = "usage: gearstats <fetch|extract|validate>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fetch,
    Extract,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("fetch") => Some(Command::Fetch),
        Some("extract") => Some(Command::Extract),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Fetch) => handle_fetch(args),
        Some(Command::Extract) => handle_extract(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

/// Read the session cookie from one line of `input`. The value is never echoed back.
pub fn prompt_credential<R: BufRead, W: Write>(mut input: R, mut prompt: W) -> Option<Credential> {
    let _ = write!(prompt, "Paste your blablalink.com cookie (will not be stored): ");
    let _ = prompt.flush();
    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    Credential::new(&line)
}

fn handle_fetch(args: &[String]) -> i32 {
    let config = ScrapeConfig::default().with_path_args(args.get(2..).unwrap_or_default());
    fetch_with_config(&config, io::stdin().lock(), io::stderr())
}

/// Load inputs, read the cookie from `cookie_input`, query every pair, and write
/// the output table. Returns the process exit code. Must not be called from
/// inside a tokio runtime; it drives its own.
pub fn fetch_with_config<R: BufRead, W: Write>(
    config: &ScrapeConfig,
    cookie_input: R,
    prompt: W,
) -> i32 {
    let (units, units_report) = match load_units_csv(&config.paths.units) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("failed to load units from {}: {err}", config.paths.units.display());
            return 1;
        }
    };
    let (players, players_report) = match load_players_csv(&config.paths.players) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("failed to load players from {}: {err}", config.paths.players.display());
            return 1;
        }
    };
    info!(
        units = units.len(),
        units_skipped = units_report.skipped,
        players = players.len(),
        players_skipped = players_report.skipped,
        "inputs loaded"
    );

    let Some(credential) = prompt_credential(cookie_input, prompt) else {
        eprintln!("no cookie provided");
        return 2;
    };

    let fetcher = match HttpStatsFetcher::new(&config.api, credential) {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("failed to build http client: {err}");
            return 1;
        }
    };
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start runtime: {err}");
            return 1;
        }
    };

    let pacer = RequestPacer::new(config.api.request_spacing);
    let outcome = runtime.block_on(run_scrape(&fetcher, &units, &players, &pacer));

    if let Err(err) = write_unit_stats_csv(&config.paths.output, &outcome.rows) {
        eprintln!("failed to write {}: {err}", config.paths.output.display());
        return 1;
    }
    println!(
        "Done. {} rows written to {} ({} ok, {} without data)",
        outcome.rows.len(),
        config.paths.output.display(),
        outcome.succeeded,
        outcome.failed
    );
    0
}

fn handle_extract(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: gearstats extract <response.json>");
        return 2;
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            return 1;
        }
    };
    let response: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("failed to parse {path}: {err}");
            return 1;
        }
    };

    let totals = extract_stat_totals(Some(&response));
    match serde_json::to_string_pretty(&totals.formatted()) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize totals: {err}");
            1
        }
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let config = ScrapeConfig::default().with_path_args(args.get(2..).unwrap_or_default());
    let mut failed = false;

    match load_units_csv(&config.paths.units) {
        Ok((_, report)) => print_report("units", &report),
        Err(err) => {
            eprintln!("units ({}): {err}", config.paths.units.display());
            failed = true;
        }
    }
    match load_players_csv(&config.paths.players) {
        Ok((_, report)) => print_report("players", &report),
        Err(err) => {
            eprintln!("players ({}): {err}", config.paths.players.display());
            failed = true;
        }
    }

    if failed {
        eprintln!("validation failed");
        1
    } else {
        0
    }
}

fn print_report(label: &str, report: &LoadReport) {
    println!("{label}: loaded={}, skipped={}", report.loaded, report.skipped);
}
