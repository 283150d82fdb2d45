use std::fs::File;
use std::io::BufWriter;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use genorank::genomics::{fingerprint, write_ranking};
use genorank::{Screener, ScreeningConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "genorank",
    about = "Rank diseases by marker-gene presence in a DNA sequence"
)]
struct Cli {
    /// Input file: threshold, sequence, disease count, then one disease per line.
    #[arg(default_value = "entrada.txt")]
    input: PathBuf,
    /// Output file receiving one `<code>-><probability>%` line per disease.
    #[arg(default_value = "saida.txt")]
    output: PathBuf,
    /// Number of parallel workers (default: available parallelism).
    #[arg(long, env = "GENORANK_WORKERS")]
    workers: Option<NonZeroUsize>,
    /// Do not print the elapsed time.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("genorank=info")),
        )
        .init();

    let cli = Cli::parse();
    let started = Instant::now();

    run(&cli)?;

    if !cli.quiet {
        println!("elapsed: {:.6} seconds", started.elapsed().as_secs_f64());
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let config = match cli.workers {
        Some(workers) => ScreeningConfig::with_workers(workers),
        None => ScreeningConfig::from_available_parallelism(),
    };

    let screener = Screener::new(config).context("failed to start worker pool")?;
    debug!(workers = screener.config().workers.get(), "worker pool ready");
    let ranked = screener
        .screen_file(&cli.input)
        .with_context(|| format!("failed to screen {}", cli.input.display()))?;

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to create output file {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_ranking(&mut writer, &ranked)
        .with_context(|| format!("failed to write ranking to {}", cli.output.display()))?;

    let digest = fingerprint(&ranked)?;
    info!(
        diseases = ranked.len(),
        fingerprint = %digest,
        output = %cli.output.display(),
        "ranking written"
    );
    Ok(())
}
