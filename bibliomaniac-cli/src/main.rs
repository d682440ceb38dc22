//! Bibliomaniac CLI - Browse a book catalog and read synthesized previews

mod commands;
mod tui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Catalog asset shipped alongside the binary
const DEFAULT_DATA_PATH: &str = "assets/data/datas.json";

#[derive(Parser)]
#[command(name = "bibliomaniac")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the catalog JSON asset (falls back to $BIBLIOMANIAC_DATA)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the books on the shelf
    List {
        /// Only books matching this category tab
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display details for one book
    Show {
        /// Book identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display the author page for a book
    Author {
        /// Book identifier
        id: String,
    },

    /// List category tabs with match counts, or one category's shelf
    Categories {
        /// Category tab to list instead of the counts
        category: Option<String>,
    },

    /// Print the synthesized reading preview page by page
    Preview {
        /// Book identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open a book straight in the full-screen reader
    Read {
        /// Book identifier
        id: String,
    },
}

/// Resolve the catalog path from the flag, the environment, or the default
fn data_path(cli: &Cli) -> PathBuf {
    cli.data
        .clone()
        .or_else(|| std::env::var("BIBLIOMANIAC_DATA").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

/// Initialize tracing; interactive screens log to a file so the terminal
/// stays free for the UI
fn init_tracing(verbose: bool, interactive: bool) -> Result<()> {
    let filter = if verbose {
        "bibliomaniac_cli=debug,bibliomaniac_core=debug"
    } else {
        "bibliomaniac_cli=info"
    };

    let registry = tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(filter));

    if interactive {
        let log_path = std::env::temp_dir().join("bibliomaniac.log");
        let file = std::fs::File::create(&log_path)
            .with_context(|| format!("Failed to create log file at {}", log_path.display()))?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Arc::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Read { .. }));
    init_tracing(cli.verbose, interactive)?;

    let store = commands::load_store(&data_path(&cli)).await?;

    match cli.command {
        Some(Commands::List { category, json }) => {
            commands::list(&store, category.as_deref(), json)
        }

        Some(Commands::Show { id, json }) => commands::show(&store, &id, json),

        Some(Commands::Author { id }) => commands::author(&store, &id),

        Some(Commands::Categories { category }) => {
            commands::categories(&store, category.as_deref())
        }

        Some(Commands::Preview { id, json }) => commands::preview(&store, &id, json),

        Some(Commands::Read { id }) => tui::run_reader(store, &id),

        None => tui::run(store),
    }
}
