use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotz")]
#[command(version, about = "A pocket quote jar for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a quote
    #[command(alias = "a")]
    Add {
        /// The quote text
        text: String,
        /// Category label for the quote
        category: String,
    },

    /// Print one random quote
    #[command(alias = "s")]
    Show {
        /// Draw from this category only ("all" for everything)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List quotes
    #[command(alias = "ls")]
    List {
        /// List this category only (defaults to the saved filter)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the categories on hand
    #[command(alias = "cats")]
    Categories,

    /// Show or set the saved category filter
    Filter {
        /// Category name, or "all" to clear the filter
        category: Option<String>,
    },

    /// Import quotes from a JSON file
    Import {
        /// Path to a JSON array of {text, category} records
        file: PathBuf,
    },

    /// Export all quotes to a JSON file
    Export {
        /// Target path (defaults to quotes.json)
        file: Option<PathBuf>,
    },

    /// Fetch the remote feed and merge it into the local quotes
    Sync {
        /// Keep running and sync once per configured interval
        #[arg(long)]
        watch: bool,
    },

    /// Show version, store location and sync state
    Status,

    /// Get or set configuration values
    Config {
        /// Configuration key (feed-url, sync-interval, fetch-timeout)
        key: Option<String>,
        /// New value (omit to print the current one)
        value: Option<String>,
    },

    /// Create the data directory and seed the starter quotes
    Init,
}
