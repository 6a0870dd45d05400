use anyhow::Result;
use clap::Parser;
use reddit_analyzer::cli::commands::{Cli, Commands};
use reddit_analyzer::cli::handlers::{handle_analyze_command, handle_config_command, AnalyzeOptions};
use reddit_analyzer::cli::utils::{init_logging, print_info};

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so clap's env fallbacks see it
    let _ = dotenv::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.log_format)?;

    // Execute command
    match cli.command {
        Commands::Analyze {
            subreddit,
            top_n,
            temperature,
            max_tokens,
            base_url,
            format,
            output,
            chart_out,
        } => {
            let options = AnalyzeOptions {
                subreddit,
                top_n,
                temperature,
                max_tokens,
                base_url,
                format,
                output,
                chart_out,
                verbose: cli.verbose,
            };
            handle_analyze_command(options).await.map(|_| ())
        }

        Commands::Config => handle_config_command(),

        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}
