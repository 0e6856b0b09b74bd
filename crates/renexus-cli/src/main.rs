//! Renexus CLI entry point.
//!
//! Binary name: `ren`
//!
//! Parses CLI arguments, initializes the database and services, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use renexus_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands, GuardianCommand};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,renexus=debug",
        _ => "trace",
    };
    let otel = std::env::var("REN_OTEL").is_ok_and(|v| v == "1");
    init_tracing(filter, otel).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "ren", &mut std::io::stdout());
        return Ok(());
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // The demo provisions its own temporary data directory
    if let Commands::Demo = &cli.command {
        return cli::demo::run().await;
    }

    // Initialize application state (DB, services)
    let state = AppState::init().await?;

    match cli.command {
        Commands::Create {
            name,
            companion_name,
            age,
            location,
        } => {
            cli::companion::create_companion(&state, name, companion_name, age, location, cli.json)
                .await?;
        }

        Commands::List { sort } => {
            cli::companion::list_companions(&state, &sort, cli.json).await?;
        }

        Commands::Show { slug } => {
            cli::companion::show_companion(&state, &slug, cli.json).await?;
        }

        Commands::Chat { slug, verbose } => {
            cli::chat::loop_runner::run_chat_loop(&state, &slug, verbose).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Timeline { slug, age } => {
            cli::timeline::timeline(&state, &slug, age, cli.json).await?;
        }

        Commands::Guardian { action } => match action {
            GuardianCommand::Research { slug, yes } => {
                cli::guardian::research(&state, &slug, yes, cli.json).await?;
            }
            GuardianCommand::Report { slug } => {
                cli::guardian::report(&state, &slug, cli.json).await?;
            }
            GuardianCommand::Tips { category } => {
                cli::guardian::tips(category.as_deref(), cli.json)?;
            }
            GuardianCommand::Plan { commitment } => {
                cli::guardian::plan(&commitment, cli.json)?;
            }
        },

        Commands::Delete { slug, force } => {
            cli::companion::delete_companion(&state, &slug, force, cli.json).await?;
        }

        Commands::Demo => unreachable!("handled above"),

        Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(())
}
