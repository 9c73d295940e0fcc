//! Action-Count Instrumentation CLI.
//!
//! Builds the example design described by a TOML configuration, runs its PE
//! jobs, and writes the architecture description and action counts into the
//! output directory.

use clap::Parser;
use std::process;

extern crate action_counts;

use action_counts::common::Result;
use action_counts::config::{Config, OutputFormat};
use action_counts::sim::{ReportWriter, Runner};
use action_counts::stats::CountSummary;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Hierarchical action-count instrumentation")]
struct Args {
    #[arg(short, long, default_value = "configs/default.toml")]
    config: String,

    /// Output directory, overriding the configuration.
    #[arg(short, long)]
    output: Option<String>,

    /// Report format, overriding the configuration.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

/// Main entry point.
///
/// # Behavior
///
/// 1. **Configuration**: Parses command-line arguments and loads the TOML configuration file.
/// 2. **Elaboration**: Builds the design tree (global buffer and PE).
/// 3. **Run**: Cleans stale reports, writes the architecture description,
///    runs every job and writes the action counts.
/// 4. **Teardown**: Prints the action count summary.
fn main() {
    init_tracing();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("\n[!] FATAL: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_file(&args.config)?;
    if let Some(dir) = args.output {
        config.output.dir = dir;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    println!("Global Configuration");
    println!("--------------------");
    println!("  Design:             {}", config.design.name);
    println!("  Output Dir:         {}", config.output.dir);
    println!("  Format:             {:?}", config.output.format);
    println!("  Append:             {}", config.output.append);
    println!(
        "  GLB:                {} ({} x {}b, {} banks)",
        config.glb.name, config.glb.depth, config.glb.width, config.glb.nbanks
    );
    println!(
        "  PE:                 {} ({}b MAC, {} stages, spad depth {})",
        config.pe.name, config.pe.bit_width, config.pe.mac_n_pipe_stage, config.pe.mem_depth
    );
    println!("  Jobs:               {}", config.jobs.len());
    println!("--------------------");

    let writer = ReportWriter::from_config(&config.output);
    let mut runner = Runner::new(&config)?;
    let report = runner.run_and_report(&writer)?;

    for (i, result) in report.results.iter().enumerate() {
        println!("[*] Job {} result: {}", i, result);
    }
    println!(
        "[*] Architecture description: {}",
        report.architecture_description.display()
    );
    println!("[*] Action counts:            {}", report.action_counts.display());

    CountSummary::collect(runner.design().root()).print();
    Ok(())
}

fn init_tracing() {
    let default_level = if cfg!(feature = "always-trace") {
        "trace"
    } else {
        "info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
