use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line per workout
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "sportlog",
    about = "Summarise fitness-tracker packages: distance, mean speed and calories"
)]
pub struct Cli {
    /// JSON file with `[["CODE", [fields...]], ...]` packages.
    ///
    /// Codes: RUN (action, duration, weight), WLK (action, duration, weight, height),
    /// SWM (action, duration, weight, length_pool, count_pool).
    /// Default: the three built-in sample packages.
    #[arg(value_name = "PACKAGES")]
    pub packages: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prefix text lines with index, code and HH:MM:SS duration
    #[arg(long)]
    pub details: bool,

    /// Log and skip packages that fail instead of stopping at the first one
    #[arg(long)]
    pub keep_going: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}
