use anyhow::Context;
use clap::{Parser, Subcommand};
use storage::{Database, migrations};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "migrate")]
#[command(about = "Workout API schema migrations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations against a live database
    Up {
        #[arg(long, env = "DATABASE_URL")]
        database_url: String,
    },
    /// Print the SQL of every migration without connecting
    Sql,
    /// List the embedded migrations
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("migrate={},storage={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Up { database_url } => {
            let db = Database::connect(&database_url, 1)
                .await
                .context("Failed to connect to database")?;

            db.run_migrations()
                .await
                .context("Failed to run migrations")?;

            tracing::info!(
                "Database schema is at version {}",
                migrations::latest_version().unwrap_or_default()
            );
        }
        Commands::Sql => {
            print!("{}", migrations::offline_script());
        }
        Commands::List => {
            for migration in migrations::embedded() {
                println!("{} {}", migration.version, migration.description);
            }
        }
    }

    Ok(())
}
