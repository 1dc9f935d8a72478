//! Payoff Engine CLI
//!
//! Command-line interface for running payoff simulations and planning
//! calculators

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use payoff_engine::calc::amortization;
use payoff_engine::debt::{load_debts, Debt};
use payoff_engine::{compare_strategies, PayoffConfig, PayoffEngine, PayoffResult, Strategy};

#[derive(Parser)]
#[command(name = "payoff_engine", version, about = "Personal finance projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate paying off a set of debts from a CSV file
    Payoff {
        /// Path to the debts CSV (DebtID,Name,Balance,AnnualRate,MinPayment)
        #[arg(long)]
        debts: PathBuf,

        /// Pooled extra payment on top of the minimums
        #[arg(long, default_value_t = 0.0)]
        extra: f64,

        /// Prioritization strategy: avalanche or snowball
        #[arg(long, default_value = "avalanche")]
        strategy: String,

        /// Write the month-by-month trace to this CSV file
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print the full result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run avalanche and snowball side by side
    Compare {
        /// Path to the debts CSV
        #[arg(long)]
        debts: PathBuf,

        /// Pooled extra payment on top of the minimums
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
    },

    /// Print the level payment and schedule for a single loan
    Amortize {
        /// Amount borrowed
        #[arg(long)]
        principal: f64,

        /// Annual interest rate, percentage
        #[arg(long)]
        rate: f64,

        /// Term length in months
        #[arg(long)]
        months: u32,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Payoff {
            debts,
            extra,
            strategy,
            out,
            json,
        } => run_payoff(&debts, extra, &strategy, out.as_deref(), json),
        Command::Compare { debts, extra } => run_compare(&debts, extra),
        Command::Amortize {
            principal,
            rate,
            months,
        } => run_amortize(principal, rate, months),
    }
}

fn run_payoff(
    path: &Path,
    extra: f64,
    strategy: &str,
    out: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let strategy: Strategy = strategy.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let debts = load_debts(path)
        .with_context(|| format!("loading debts from {}", path.display()))?;

    let engine = PayoffEngine::new(PayoffConfig {
        extra_payment: extra,
        strategy,
        ..Default::default()
    });
    let result = engine.simulate(&debts);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_result(&result, &debts);

    if let Some(out_path) = out {
        write_trace_csv(out_path, &result)?;
        println!("\nFull trace written to: {}", out_path.display());
    }

    Ok(())
}

fn print_result(result: &PayoffResult, debts: &[Debt]) {
    println!("Strategy: {}\n", result.strategy);
    println!("{:>5} {:>14} {:>14}", "Month", "Total balance", "Interest paid");
    println!("{}", "-".repeat(36));

    for snapshot in result.snapshots.iter().take(24) {
        println!(
            "{:>5} {:>14} {:>14}",
            snapshot.month, snapshot.total_balance, snapshot.interest_paid
        );
    }
    if result.snapshots.len() > 24 {
        println!("... ({} more months)", result.snapshots.len() - 24);
    }

    println!("\nSummary:");
    println!("  Debts: {}", debts.len());
    println!("  Months to payoff: {}", result.months_to_payoff);
    println!("  Total interest paid: {}", result.total_interest_paid);
    println!("  Projected payoff date: {}", result.payoff_date);
    if result.capped() {
        println!("  Projection capped at the safety bound with balance outstanding");
    }
}

fn write_trace_csv(path: &Path, result: &PayoffResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["Month", "DebtID", "Name", "Balance", "TotalBalance", "InterestPaid"])?;
    for snapshot in &result.snapshots {
        for debt in &snapshot.debts {
            writer.write_record(&[
                snapshot.month.to_string(),
                debt.debt_id.to_string(),
                debt.name.clone(),
                debt.balance.to_string(),
                snapshot.total_balance.to_string(),
                snapshot.interest_paid.to_string(),
            ])?;
        }
    }
    writer.flush()?;

    Ok(())
}

fn run_compare(path: &Path, extra: f64) -> anyhow::Result<()> {
    let debts = load_debts(path)
        .with_context(|| format!("loading debts from {}", path.display()))?;
    let comparison = compare_strategies(&debts, extra);

    println!(
        "{:<12} {:>8} {:>16} {:>14}",
        "Strategy", "Months", "Total interest", "Payoff date"
    );
    println!("{}", "-".repeat(54));
    for result in [&comparison.avalanche, &comparison.snowball] {
        println!(
            "{:<12} {:>8} {:>16} {:>14}",
            result.strategy.as_str(),
            result.months_to_payoff,
            result.total_interest_paid,
            result.payoff_date.to_string()
        );
    }

    println!(
        "\nCheaper strategy: {} (saves {} in interest)",
        comparison.cheaper(),
        comparison.interest_saved()
    );

    Ok(())
}

fn run_amortize(principal: f64, rate: f64, months: u32) -> anyhow::Result<()> {
    let schedule = amortization::schedule(principal, rate, months);
    let loan = amortization::summary(principal, rate, months);

    println!("Payment per month: {:.2}\n", loan.payment_per_period);
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>14}",
        "Month", "Payment", "Interest", "Principal", "Balance"
    );
    println!("{}", "-".repeat(60));

    for row in schedule.iter().take(24) {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.month, row.payment, row.interest, row.principal, row.balance
        );
    }
    if schedule.len() > 24 {
        println!("... ({} more months)", schedule.len() - 24);
    }

    println!("\nTotal paid: {:.2}", loan.total_paid);
    println!("Total interest: {:.2}", loan.total_interest);

    Ok(())
}
