//! seqsample CLI
//!
//! Filter FASTA/FASTQ reads by minimum length and randomly subsample the
//! survivors at a target percentage.
//!
//! ```bash
//! # Keep reads >= 10 kb, retain ~5% of them, reproducibly
//! seqsample -i reads.fq.gz -o sampled.fq.gz -p 5 -s 42
//! ```

use clap::Parser;
use seqsample::{render_report, run, RunConfig};
use std::path::PathBuf;
use std::process;

/// Filter FASTA/FASTQ reads by minimum length and randomly subsample reads
#[derive(Parser)]
#[command(name = "seqsample", version, about)]
struct Args {
    /// Input FASTA/FASTQ file (plain or .gz)
    #[arg(short, long)]
    input: PathBuf,

    /// Output FASTA/FASTQ file (plain or .gz)
    #[arg(short, long)]
    output: PathBuf,

    /// Sampling percentage (0-100)
    #[arg(short, long, value_parser = percent_in_range)]
    percent: f64,

    /// Minimum read length
    #[arg(short = 'l', long, default_value_t = 10_000)]
    length: usize,

    /// Random seed (0 means random)
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn percent_in_range(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("percent must be between 0 and 100, got {value}"))
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = RunConfig {
        input: args.input,
        output: args.output,
        percent: args.percent,
        min_len: args.length,
        seed: args.seed,
    };

    match run(&config) {
        Ok(summary) => {
            print!(
                "{}",
                render_report(summary.format, &summary.stats, config.percent, config.min_len)
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}
