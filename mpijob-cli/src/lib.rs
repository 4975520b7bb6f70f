//! mpijob CLI Library
//!
//! Command-line front end: parses flags, resolves the benchmark profile and
//! prints the rendered MPIJob manifest.
//!
//! # Example
//!
//! ```text
//! mpijob -name osu-allreduce -np 16 -machine clusterA > job.yaml
//! ```

mod args;
mod config;

pub use args::normalize_args;
pub use config::{Mode, RenderConfig};

use anyhow::Context;
use clap::Parser;
use mpijob_core::{resolve, Benchmark, ProcessCount};
use mpijob_render::{ManifestTemplate, TEMPLATE_FILE};
use std::io::Write;
use std::path::PathBuf;

/// mpijob CLI arguments
#[derive(Parser, Debug)]
#[command(name = "mpijob")]
#[command(author, version, about = "Render an MPIJob manifest for an OSU micro-benchmark run")]
pub struct Cli {
    /// Benchmark: latency, bandwidth, osu-allreduce, osu-alltoall, hello
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub name: String,

    /// Number of MPI processes (osu-allreduce, osu-alltoall and hello only)
    #[arg(long, allow_hyphen_values = true)]
    pub np: Option<String>,

    /// Target machine, passed to the template unchanged
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub machine: String,

    /// Manifest template
    #[arg(long, default_value = TEMPLATE_FILE, allow_hyphen_values = true)]
    pub template: PathBuf,

    /// List known benchmarks and exit
    #[arg(long)]
    pub list: bool,

    /// Print the resolved profile as JSON instead of rendering
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output (on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the mpijob CLI with the process arguments.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    run_with_cli(cli)
}

/// Run the mpijob CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries nothing but the document
    let default_filter = if cli.verbose {
        "mpijob=debug"
    } else {
        "mpijob=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = RenderConfig::from_cli(&cli);
    let output = execute(&config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write to stdout")?;

    Ok(())
}

/// Produce the full stdout document for a configuration.
///
/// Nothing is written anywhere; the caller prints the result once it is
/// complete.
pub fn execute(config: &RenderConfig) -> anyhow::Result<String> {
    tracing::debug!(mode = ?config.mode(), template = %config.template_path().display(), "starting");

    match config.mode() {
        Mode::List => Ok(format_catalog()),
        Mode::DryRun => {
            let profile = resolve(&config.request())?;
            let mut json = serde_json::to_string_pretty(&profile)?;
            json.push('\n');
            Ok(json)
        }
        Mode::Render => {
            let profile = resolve(&config.request())?;
            tracing::info!(job = profile.name(), machine = profile.machine(), "rendering manifest");
            let template = ManifestTemplate::load(config.template_path())?;
            let mut manifest = template.render(&profile).with_context(|| {
                format!("Failed to render manifest for '{}'", profile.name())
            })?;
            manifest.push('\n');
            Ok(manifest)
        }
    }
}

/// Human-readable benchmark catalog
fn format_catalog() -> String {
    let mut output = String::from("Benchmarks:\n");

    for bench in Benchmark::ALL {
        let rule = bench.rule();
        let procs = match rule.procs {
            ProcessCount::Fixed(n) => format!("{} procs", n),
            ProcessCount::FromFlag => "-np".to_string(),
        };
        output.push_str(&format!(
            "  {:<15} {:<8} {}\n",
            bench.id(),
            procs,
            rule.command.command()
        ));
    }

    output
}
