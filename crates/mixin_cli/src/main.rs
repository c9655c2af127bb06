//! Mixin CLI
//!
//! Command line front end for the actions generator.
//!
//! # Commands
//!
//! - `mixin build <suite.toml> --manifest <metadata.json>` - Generate the actor's actions trait
//! - `mixin stamp <suite.toml> --manifest <metadata.json>` - Print the fingerprint
//!
//! # Environment Variables
//!
//! - `MIXIN_LOG` - Log level (default: "info")

mod build;
mod input;
mod stamp;

use anyhow::{bail, Result};
use std::env;
use std::process;

fn main() {
    // Use MIXIN_LOG env var for log level configuration, default to "info"
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_env("MIXIN_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "build" => build::run(&args[1..]),
        "stamp" => stamp::run(&args[1..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => bail!("Unknown command: {}", other),
    }
}

fn print_usage() {
    println!("Usage: mixin <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <suite.toml> --manifest <metadata.json> [--force] [--output DIR]");
    println!("        Generate the actions trait for the suite's actor");
    println!("  stamp <suite.toml> --manifest <metadata.json>");
    println!("        Print the fingerprint of the configured modules");
}
