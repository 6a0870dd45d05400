use crate::api::{AnalysisRequest, AnalysisResponse, AnalyzerClient, ApiConfig};
use crate::cli::commands::ReportFormat;
use crate::report::chart::write_chart;
use crate::report::json::JsonReporter;
use crate::report::terminal::TerminalReporter;
use crate::report::{AnalysisReport, ReportGenerator};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Options collected from the `analyze` subcommand
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub subreddit: String,
    pub top_n: u32,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub base_url: Option<String>,
    pub format: ReportFormat,
    pub output: Option<PathBuf>,
    pub chart_out: Option<PathBuf>,
    pub verbose: bool,
}

pub async fn handle_analyze_command(options: AnalyzeOptions) -> Result<AnalysisResponse> {
    let client = match &options.base_url {
        Some(base_url) => AnalyzerClient::new(ApiConfig::new(base_url.as_str()))?,
        None => AnalyzerClient::from_env()?,
    };

    let mut request = AnalysisRequest::new(options.subreddit.as_str(), options.top_n);
    if let Some(temperature) = options.temperature {
        request = request.with_temperature(temperature);
    }
    if let Some(max_tokens) = options.max_tokens {
        request = request.with_max_tokens(max_tokens);
    }

    info!(
        "Analyzing r/{} (top {} posts) via {}",
        request.subreddit,
        request.top_n,
        client.config().endpoint()
    );

    let response = client
        .send(&request)
        .await
        .with_context(|| format!("Analysis of r/{} failed", request.subreddit))?;

    let report = AnalysisReport::new(&request, &response);

    if let Some(path) = &options.output {
        let reporter = JsonReporter::new();
        reporter
            .generate(&report, path)
            .with_context(|| format!("Failed to write response to {}", path.display()))?;
        info!("Response saved to: {} ({})", path.display(), reporter.name());
    }

    if let Some(path) = &options.chart_out {
        let written = write_chart(&response, path)
            .with_context(|| format!("Failed to write chart to {}", path.display()))?;
        if written.is_none() {
            warn!("Response contains no sentiment chart; nothing written to {}", path.display());
        }
    }

    match options.format {
        ReportFormat::Terminal => TerminalReporter::new()
            .with_verbose(options.verbose)
            .report(&report)?,
        ReportFormat::Json => JsonReporter::new().report(&report)?,
    }

    Ok(response)
}
