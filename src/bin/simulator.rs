//! Smiley Fisher Headless Catch Simulator
//!
//! Runs the session tick loop without any UI, collecting rarity and value
//! metrics for balance analysis. Uses the exact same `game_tick()` function
//! as the game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --casts N        Casts per run (default: 1000)
//!   --power P        Cast power 0-100 (default: 50)
//!   --location ID    Location id (default: pond)
//!   --seed N         RNG seed (default: 42)
//!   --runs N         Number of runs with incrementing seeds (default: 1)
//!   --policy NAME    never-downgrade | overwrite
//!   --config FILE    Engine config JSON
//!   --catalog FILE   Species/location catalog JSON
//!   --json           Print the report as JSON
//!   --quiet          Only final summary line

use anyhow::{bail, Context, Result};
use smiley_fisher::core::config::EngineConfig;
use smiley_fisher::fishing::catalog::Catalog;
use smiley_fisher::fishing::types::{CastPower, RarityPolicy};
use smiley_fisher::simulator::{run_simulation, SimConfig};

// ── CLI Configuration ────────────────────────────────────────────────

struct CliArgs {
    sim: SimConfig,
    policy: Option<RarityPolicy>,
    config_path: Option<String>,
    catalog_path: Option<String>,
    json: bool,
    quiet: bool,
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .with_context(|| format!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T> {
    value
        .parse()
        .ok()
        .with_context(|| format!("{flag} requires a number, got {value:?}"))
}

fn parse_args() -> Result<CliArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        sim: SimConfig {
            seed: Some(42),
            ..Default::default()
        },
        policy: None,
        config_path: None,
        catalog_path: None,
        json: false,
        quiet: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--casts" => {
                cli.sim.casts_per_run = parse_number(next_value(&args, &mut i, flag)?, flag)?
            }
            "--power" => {
                let power: u32 = parse_number(next_value(&args, &mut i, flag)?, flag)?;
                if power > 100 {
                    bail!("--power must be between 0 and 100, got {power}");
                }
                cli.sim.power = CastPower::new(power);
            }
            "--location" => cli.sim.location_id = next_value(&args, &mut i, flag)?.to_string(),
            "--seed" => cli.sim.seed = Some(parse_number(next_value(&args, &mut i, flag)?, flag)?),
            "--runs" => cli.sim.num_runs = parse_number(next_value(&args, &mut i, flag)?, flag)?,
            "--policy" => {
                cli.policy = Some(match next_value(&args, &mut i, flag)? {
                    "never-downgrade" => RarityPolicy::NeverDowngrade,
                    "overwrite" => RarityPolicy::Overwrite,
                    other => bail!("unknown policy {other:?}"),
                })
            }
            "--config" => cli.config_path = Some(next_value(&args, &mut i, flag)?.to_string()),
            "--catalog" => cli.catalog_path = Some(next_value(&args, &mut i, flag)?.to_string()),
            "--json" => cli.json = true,
            "--quiet" => cli.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                print_usage();
                bail!("unknown argument: {other}");
            }
        }
        i += 1;
    }
    Ok(cli)
}

fn print_usage() {
    eprintln!(
        "Smiley Fisher Headless Catch Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --casts N        Casts per run (default: 1000)\n\
         \x20 --power P        Cast power 0-100 (default: 50)\n\
         \x20 --location ID    Location id (default: pond)\n\
         \x20 --seed N         RNG seed (default: 42)\n\
         \x20 --runs N         Number of runs with incrementing seeds (default: 1)\n\
         \x20 --policy NAME    Rarity policy: never-downgrade | overwrite\n\
         \x20 --config FILE    Engine config JSON\n\
         \x20 --catalog FILE   Species/location catalog JSON\n\
         \x20 --json           Print the report as JSON\n\
         \x20 --quiet          Only final summary line\n\
         \x20 --help, -h       Show this help"
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = parse_args()?;

    if let Some(path) = &cli.config_path {
        cli.sim.engine = EngineConfig::load(path)
            .with_context(|| format!("failed to load engine config from {path}"))?;
    }
    if let Some(policy) = cli.policy {
        cli.sim.engine.rarity_policy = policy;
    }
    let catalog = match &cli.catalog_path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("failed to load catalog from {path}"))?
        }
        None => Catalog::default(),
    };
    cli.sim.verbosity = if cli.quiet { 0 } else { 1 };

    log::info!(
        "Simulating {} x {} casts at power {} in {}",
        cli.sim.num_runs,
        cli.sim.casts_per_run,
        cli.sim.power.value(),
        cli.sim.location_id
    );
    let report = run_simulation(&cli.sim, &catalog)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.quiet {
        println!("{}", report.summary_line());
    } else {
        print!("{}", report.to_text());
    }

    Ok(())
}
