use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod populate;

/// Management commands for the films backend.
#[derive(Parser)]
#[command(name = "films-manage")]
#[command(about = "Management commands for the films database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate the directors table from the bundled dataset
    Populate {
        /// Delete the bundled directors instead of inserting them
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("films_manage=info,films_db=info")),
        )
        .init();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = films_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    films_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    match cli.command {
        Commands::Populate { clear } => {
            let summary = populate::run(&pool, clear).await?;
            let verb = if clear { "Deleted" } else { "Inserted" };
            println!(
                "{verb} {} director(s); skipped {} invalid record(s).",
                summary.affected, summary.skipped
            );
        }
    }

    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn populate_defaults_to_insert() {
        let cli = Cli::try_parse_from(["films-manage", "populate"]).unwrap();
        assert!(matches!(cli.command, Commands::Populate { clear: false }));
    }

    #[test]
    fn populate_accepts_clear() {
        let cli = Cli::try_parse_from(["films-manage", "populate", "--clear"]).unwrap();
        assert!(matches!(cli.command, Commands::Populate { clear: true }));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["films-manage", "populate", "--force"]).is_err());
    }
}
