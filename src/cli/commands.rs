use crate::api::config::BASE_URL_ENV;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reddit-analyzer",
    about = "Client for the subreddit sentiment and summary analysis service",
    version,
    author
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request a sentiment summary of a subreddit's latest posts
    Analyze {
        /// Subreddit name (without the r/ prefix)
        #[arg(value_name = "SUBREDDIT")]
        subreddit: String,

        /// Number of posts to analyze
        #[arg(short = 'n', long, default_value = "25")]
        top_n: u32,

        /// Sampling temperature for the summary model (default: 0.5)
        #[arg(short, long)]
        temperature: Option<f32>,

        /// Maximum tokens generated for the summary (default: 150)
        #[arg(short, long)]
        max_tokens: Option<u32>,

        /// Backend base URL
        #[arg(long, env = BASE_URL_ENV)]
        base_url: Option<String>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Write the raw response JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the decoded sentiment chart PNG to this file
        #[arg(long)]
        chart_out: Option<PathBuf>,
    },

    /// Display current configuration
    Config,

    /// Show information about this tool
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
