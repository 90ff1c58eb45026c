use anyhow::{Context, bail};
use bank::{Bank, Console, Limits};
use clap::Parser;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "bank")]
#[command(about = "Interactive console bank", long_about = None)]
#[command(version)]
struct Cli {
    /// Agency assigned to every new account
    #[arg(long, env = "BANK_AGENCY", default_value = "0001")]
    agency: String,

    /// Maximum amount of a single withdrawal
    #[arg(long, env = "BANK_WITHDRAWAL_LIMIT", default_value = "500")]
    withdrawal_limit: Decimal,

    /// Withdrawals allowed per account
    #[arg(long, env = "BANK_MAX_WITHDRAWALS", default_value_t = 3)]
    max_withdrawals: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.withdrawal_limit <= Decimal::ZERO {
        bail!("Withdrawal limit must be positive, got {}", cli.withdrawal_limit);
    }

    let bank = Bank::new(
        cli.agency,
        Limits {
            per_withdrawal: cli.withdrawal_limit,
            max_withdrawals: cli.max_withdrawals,
        },
    );
    tracing::info!(agency = bank.agency(), limits = ?bank.limits(), "Starting bank session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(bank, stdin.lock(), stdout.lock());

    console.run().context("Console I/O failed")?;

    Ok(())
}
