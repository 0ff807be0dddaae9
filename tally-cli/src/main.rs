use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use tally_budget::{recommend, summarize};
use tally_core::categorize_transactions;
use tally_ingest::{ParsePolicy, parse_transactions_csv};

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Categorize a transactions CSV and print monthly budget summaries"
)]
struct Cli {
    /// Path to the transactions CSV (header: date,description,amount)
    csv: PathBuf,

    /// Warn and skip malformed rows instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Savings target as a ratio of income (0.0-1.0)
    #[arg(long)]
    target_savings: Option<f64>,

    /// Print per-category subtotals under each month
    #[arg(long)]
    breakdown: bool,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    let policy = if cli.lenient || cfg.lenient {
        ParsePolicy::Lenient
    } else {
        ParsePolicy::Strict
    };

    let target_savings = cli.target_savings.or(cfg.target_savings);
    if let Some(target) = target_savings {
        if !(0.0..=1.0).contains(&target) {
            bail!(
                "--target-savings must be between 0.0 and 1.0, got {}",
                target
            );
        }
    }

    if !cli.csv.exists() {
        bail!("CSV not found: {}", cli.csv.display());
    }

    let txns = parse_transactions_csv(&cli.csv, policy)
        .with_context(|| format!("parsing {}", cli.csv.display()))?;
    let categorized = categorize_transactions(txns);
    let summary = summarize(&categorized);

    for line in recommend(&summary, target_savings) {
        println!("{line}");
    }

    println!("\nMonthly summary (month: total, count):");
    for (month, stats) in summary.months() {
        println!("{}: {:.2}, {} transactions", month, stats.total, stats.count);
        if cli.breakdown {
            for (category, subtotal) in &stats.by_category {
                println!("  {category}: {subtotal:.2}");
            }
        }
    }

    Ok(())
}
