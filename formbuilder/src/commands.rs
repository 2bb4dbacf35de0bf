//! Command handlers of the `formbuilder` CLI.
//!
//! - `edit` launches the TUI builder
//! - `palette` lists the addable items
//! - `config-schema` prints the JSON Schema of the configuration file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use formkit::{AppData, BuilderConfig, config::DEFAULT_CONFIG_PATH, data::palette::PaletteItem};
use log::info;

/// Options of the builder session.
#[derive(Args, Clone, Debug, Default)]
pub struct EditArgs {
    /// Configuration file (TOML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Initial form name, overriding the configuration.
    #[arg(short, long)]
    pub title: Option<String>,
    /// Print the debug JSON of the form on exit.
    #[arg(long)]
    pub print_json: bool,
}

impl EditArgs {
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load the configuration file and apply command line overrides.
    pub async fn resolve_config(&self) -> Result<BuilderConfig> {
        let path = self.config_path();
        if self.config.is_some() && !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        let mut config = BuilderConfig::load(&path).await?;
        if let Some(title) = &self.title {
            config.form_name = title.clone();
        }
        if self.print_json {
            config.print_json = true;
        }
        Ok(config)
    }
}

/// Handler for CLI commands.
pub struct CommandHandler;

impl CommandHandler {
    /// Run an interactive builder session.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the UI
    /// state cannot be recovered.
    pub async fn handle_edit(args: &EditArgs) -> Result<()> {
        let config = args.resolve_config().await?;
        let print_json = config.print_json;

        let app = tokio::task::block_in_place(|| formkit::run(AppData::new(config)))
            .context("form builder failed")?;
        info!("builder exited, {} section(s)", app.schema.sections.len());

        if print_json {
            println!("{}", app.schema.debug_json_pretty());
        } else {
            println!(
                "{} {} ({} section(s))",
                "Form:".green().bold(),
                app.schema.form_name,
                app.schema.sections.len()
            );
        }

        if let Some(submission) = &app.last_submission {
            println!("{}", "Last preview submission:".green().bold());
            println!("{}", serde_json::to_string_pretty(submission)?);
        }
        Ok(())
    }

    /// List palette entries with their selection tags.
    pub fn handle_palette() {
        println!("{}", "Palette".bold());
        for item in PaletteItem::ALL {
            println!("  {:<14} {}", item.label(), item.tag().cyan());
        }
    }

    /// Print the configuration JSON Schema.
    pub fn handle_config_schema() -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(&BuilderConfig::json_schema())?
        );
        Ok(())
    }
}
