use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use leftover::config::{logging, paths::LeftoverPaths, settings::Settings};
use leftover::display::{format_summary, Locale};
use leftover::store::BudgetStore;

#[derive(Parser)]
#[command(
    name = "leftover",
    version,
    about = "Terminal budgeting widget: income minus savings minus expenses",
    long_about = "Leftover lets you jot down recurring income, savings and expenses \
                  and shows what remains. Nothing is saved: the budget lives only \
                  for the length of the session."
)]
struct Cli {
    /// Number format locale (nb-NO, en-US, de-DE)
    #[arg(long, global = true, env = "LEFTOVER_LOCALE")]
    locale: Option<String>,

    /// Currency text shown after amounts
    #[arg(long, global = true, env = "LEFTOVER_CURRENCY")]
    currency: Option<String>,

    /// Start with a sample budget
    #[arg(long, global = true)]
    demo: bool,

    /// Don't print the summary after quitting
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LeftoverPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    apply_overrides(&mut settings, &cli)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            logging::init_logging(&paths, &settings)
                .context("Failed to set up logging")?;
            info!(locale = %settings.locale, demo = cli.demo, "starting leftover");

            let store = if cli.demo {
                BudgetStore::with_demo_data()
            } else {
                BudgetStore::new()
            };

            let format = settings.amount_format();
            let snapshot = leftover::tui::run_tui(store, format.clone())?;

            if !cli.quiet {
                print!("{}", format_summary(&snapshot, &format));
            }
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote settings to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Leftover Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:          {}", settings.locale);
            println!("  Currency suffix: {}", settings.currency_suffix);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

/// Command-line values win over the settings file for this run only
fn apply_overrides(settings: &mut Settings, cli: &Cli) -> Result<()> {
    if let Some(locale) = &cli.locale {
        settings.locale = locale.parse::<Locale>()?;
    }
    if let Some(currency) = &cli.currency {
        settings.currency_suffix = currency.clone();
    }
    Ok(())
}
