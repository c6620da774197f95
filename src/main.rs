//! Law verification runner.
//!
//! Runs every law group against the Identity container and reports
//! pass/fail per group. Exits nonzero if any law is violated.
//!
//! Usage:
//!   lawful [--cases <n>] [--seed <n>]

use clap::Parser;

use lawful::check::{CheckConfig, verify_all};

#[derive(Parser)]
#[command(name = "lawful")]
#[command(about = "Verify the functor, applicative, and monad laws for the Identity container")]
struct Cli {
    /// Number of generated cases per law check
    #[arg(long, default_value_t = 256)]
    cases: u32,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CheckConfig {
        cases: cli.cases,
        seed: cli.seed,
    };

    let reports = verify_all(&config);
    for report in &reports {
        match &report.outcome {
            Ok(()) => println!("{}: ok", report.group),
            Err(violation) => println!("{}: FAILED: {violation}", report.group),
        }
    }

    if reports.iter().any(|report| !report.passed()) {
        anyhow::bail!("law verification failed");
    }
    Ok(())
}
