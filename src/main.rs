//! PerfProbe CLI - CPU and memory workload ratings
//!
//! Runs the full benchmark sequence when invoked without arguments.

use clap::Parser;
use perfprobe::config::{BenchConfig, CliArgs};
use perfprobe::core::Benchmark;
use perfprobe::error::{BenchError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Initialize logging
    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.no_color {
        console::set_colors_enabled(false);
    }

    // Handle result
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let config = BenchConfig::from_cli(&args).map_err(BenchError::ConfigError)?;

    if args.verbose > 0 {
        print_config(&config);
    }

    Benchmark::new(config).run()?;
    Ok(())
}

fn print_config(config: &BenchConfig) {
    println!("=== Configuration ===");
    println!("Workers:      {}", num_cpus::get());
    println!("Iterations:   {}", config.iterations);
    println!("Memory limit: {}", config.enforce_memory_limit);
    println!();
}
