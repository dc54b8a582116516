use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ice_planner::cli::{
    handle_export_command, handle_import_command, handle_link_command, handle_reset_command,
    handle_set_command, handle_share_command, handle_show_command, open_planner, ExportFormat,
};
use ice_planner::config::{paths::PlannerPaths, settings::Settings};

/// Environment variable holding the log filter
const LOG_ENV: &str = "ICE_PLANNER_LOG";

#[derive(Parser)]
#[command(
    name = "ice-planner",
    version,
    about = "Season budget planner for ice sports teams",
    long_about = "Ice Planner works out what a season of ice time costs a team: ice rental, \
                  coaching, jerseys and payment fees, in total and per player. Every change \
                  is saved and reflected in a shareable link."
)]
struct Cli {
    /// Open the planner at this link instead of the saved state
    #[arg(long, global = true, env = "ICE_PLANNER_LINK")]
    link: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show the cost breakdown
    Show,

    /// Change one input (team, logo, ice, hours, coach, jersey, players, fee, fixed)
    Set {
        /// Field name
        field: String,
        /// New value
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Reset every input to its default
    Reset,

    /// Print the shareable link
    Link,

    /// Share the budget
    Share,

    /// Export the budget
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Compact JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Load inputs from a JSON or YAML export
    Import {
        /// Path to the export file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    let paths = PlannerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Some(Commands::Config) = cli.command {
        println!("Ice Planner Configuration");
        println!("=========================");
        println!("Config directory: {}", paths.base_dir().display());
        println!("Data directory:   {}", paths.data_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Page path:       {}", settings.page_path);
        println!("  Storage key:     {}", settings.storage_key);
        return Ok(());
    }

    let mut planner = open_planner(&paths, &settings, cli.link.as_deref())?;

    match cli.command {
        Some(Commands::Tui) => ice_planner::tui::run_tui(planner, &settings)?,
        Some(Commands::Show) => handle_show_command(&planner, &settings)?,
        Some(Commands::Set { field, value }) => {
            handle_set_command(&mut planner, &settings, &field, &value)?
        }
        Some(Commands::Reset) => handle_reset_command(&mut planner, &settings)?,
        Some(Commands::Link) => handle_link_command(&planner)?,
        Some(Commands::Share) => handle_share_command(&planner)?,
        Some(Commands::Export {
            format,
            output,
            compact,
        }) => handle_export_command(&planner, format, output, !compact)?,
        Some(Commands::Import { file }) => handle_import_command(&mut planner, &file)?,
        Some(Commands::Config) => {}
        None => {
            handle_show_command(&planner, &settings)?;
            println!();
            println!("Run 'ice-planner --help' for usage information.");
            println!("Run 'ice-planner tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `ICE_PLANNER_LOG` (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
