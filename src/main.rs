use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prettyrc::prefs::PrefsStore;

mod cli;

#[derive(Parser)]
#[command(name = "prettyrc")]
#[command(about = "Build a Prettier configuration visually and export .prettierrc.json")]
#[command(version)]
struct Cli {
    /// Directory the generated .prettierrc.json is written to (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive configurator GUI
    Gui,

    /// Generate a configuration without the GUI
    Generate {
        /// Option assignment, e.g. --set printWidth=100 (repeatable)
        #[arg(long = "set", value_name = "ID=VALUE")]
        sets: Vec<String>,

        /// Also write .prettierrc.json into the target directory
        #[arg(long)]
        write: bool,
    },

    /// List the available options and their choices
    Options {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Generate { sets, write }) => {
            cli::generate::generate_command(&sets, write.then_some(work_dir.as_path()))?;
        }
        Some(Commands::Options { json }) => {
            cli::options::options_command(json)?;
        }
        Some(Commands::Gui) | None => {
            prettyrc::gui::run_gui(work_dir, PrefsStore::default_location())?;
        }
    }

    Ok(())
}
