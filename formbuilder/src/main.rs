use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandHandler, EditArgs};

/// Terminal form builder with live preview.
#[derive(Parser, Debug)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    edit: EditArgs,
}

#[derive(Subcommand, Debug)]
enum SubCommands {
    /// Open the builder (default).
    Edit(EditArgs),
    /// List the palette entries.
    Palette,
    /// Print the JSON Schema of the configuration file.
    ConfigSchema,
}

#[tokio::main]
async fn main() -> Result<()> {
    #[cfg(not(feature = "ui-log"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Some(SubCommands::Edit(args)) => CommandHandler::handle_edit(&args).await?,
        Some(SubCommands::Palette) => CommandHandler::handle_palette(),
        Some(SubCommands::ConfigSchema) => CommandHandler::handle_config_schema()?,
        None => CommandHandler::handle_edit(&cli.edit).await?,
    }

    Ok(())
}
