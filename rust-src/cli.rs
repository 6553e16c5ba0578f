//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::get_data_path;
use crate::data::load_store;
use crate::error::parse_day;


/// fitpulse - daily fitness metrics and trailing-week summaries
#[derive(Parser)]
#[command(name = "fitpulse")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Metrics file(s) in JSONL format; later files override earlier days
    #[arg(long, global = true, env = "FITPULSE_DATA")]
    data: Vec<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Show the seven days ending at a date (newest first)
    Week {
        /// Last day of the window, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show metrics for a single day
    Show {
        /// Day to show, YYYY-MM-DD
        day: String,
    },

    /// List every recorded day
    List,
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let data_paths = if cli.data.is_empty() {
        vec![get_data_path()]
    } else {
        cli.data
    };
    let store = load_store(&data_paths);
    tracing::debug!(days = store.len(), "loaded metrics store");

    match command {
        Commands::Week { date } => {
            let reference_day = date.as_deref().map(parse_day).transpose()?;
            commands::week::run(&store, reference_day)
        }
        Commands::Show { day } => commands::show::run(&store, parse_day(&day)?),
        Commands::List => commands::list::run(&store),
    }
}
