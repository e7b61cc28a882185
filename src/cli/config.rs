//! Config CLI commands

use clap::Subcommand;

use crate::config::{Settings, TallyPaths};
use crate::error::TallyResult;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and current settings
    Show,
    /// Write the current settings to config.json
    Init,
}

/// Handle a config command
pub fn handle_config_command(
    paths: &TallyPaths,
    settings: &Settings,
    cmd: ConfigCommands,
) -> TallyResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Date format:            {}", settings.display_date_format);
            println!("  Budget warning at:      {:.1}%", settings.budget_warning_percent);
            println!(
                "  Max transaction amount: {}",
                settings
                    .max_transaction_amount
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
        ConfigCommands::Init => {
            settings.save(paths)?;
            println!("Settings written to {}", paths.settings_file().display());
        }
    }

    Ok(())
}
