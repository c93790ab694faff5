//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodj")]
#[command(about = "Mood journal with weather and monthly trends", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Time zone for calendar dates (local, utc, or +HH:MM)
        #[arg(short, long, default_value = "local")]
        timezone: String,
    },

    /// Record how you feel
    Add {
        /// Mood (happy, calm, sad, angry, excited)
        mood: String,

        /// Journal note
        #[arg(short, long, default_value = "")]
        note: String,

        /// When it happened (now, yesterday, YYYY-MM-DD, "YYYY-MM-DD HH:MM", RFC 3339)
        #[arg(long, value_name = "WHEN")]
        at: Option<String>,

        /// Temperature in degrees Celsius
        #[arg(long, allow_hyphen_values = true, requires_all = ["condition", "city"])]
        temp: Option<f64>,

        /// Weather category (Clear, Clouds, Rain, ...)
        #[arg(long, requires_all = ["temp", "city"])]
        condition: Option<String>,

        /// City the weather was observed in
        #[arg(long, requires_all = ["temp", "condition"])]
        city: Option<String>,
    },

    /// List entries, newest first
    List {
        /// Only show this mood ("all" for every entry)
        #[arg(short, long, default_value = "all")]
        mood: String,
    },

    /// Show monthly mood distribution
    Trends,

    /// Export entries as CSV
    Export {
        /// Output file (default: ./mood_journal_export.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Show available moods
    Moods,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
