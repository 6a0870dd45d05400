use super::chart::decode_chart;
use super::{AnalysisReport, ReportResult};
use colored::Colorize;
use std::fmt::Write;

/// Terminal formatting constants
const TERMINAL_WIDTH: usize = 80;
const SEPARATOR_WIDTH: usize = 40;

/// Terminal report generator for console output
pub struct TerminalReporter {
    verbose: bool,
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Also print the full response body after the summary
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn report(&self, report: &AnalysisReport<'_>) -> ReportResult<()> {
        print!("{}", self.render(report)?);
        Ok(())
    }

    pub fn render(&self, report: &AnalysisReport<'_>) -> ReportResult<String> {
        let mut out = String::new();
        self.write_header(&mut out);
        self.write_request(&mut out, report);
        self.write_summary(&mut out, report);
        self.write_chart(&mut out, report);
        if self.verbose {
            self.write_raw(&mut out, report)?;
        }
        self.write_footer(&mut out);
        Ok(out)
    }

    fn write_header(&self, out: &mut String) {
        let _ = writeln!(out, "\n{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
        let _ = writeln!(out, "{}", "SUBREDDIT ANALYSIS REPORT".bright_white().bold());
        let _ = writeln!(out, "{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
    }

    fn write_request(&self, out: &mut String, report: &AnalysisReport<'_>) {
        let request = report.request;
        let _ = writeln!(out, "\n{}", "📊 Request".bright_white().bold());
        let _ = writeln!(out, "{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
        let _ = writeln!(
            out,
            "  Subreddit:       {}",
            format!("r/{}", request.subreddit).bright_cyan()
        );
        let _ = writeln!(out, "  Posts:           {}", request.top_n);
        let _ = writeln!(out, "  Temperature:     {}", request.temperature);
        let _ = writeln!(out, "  Max Tokens:      {}", request.max_tokens);
    }

    fn write_summary(&self, out: &mut String, report: &AnalysisReport<'_>) {
        let _ = writeln!(out, "\n{}", "📝 Summary".bright_white().bold());
        let _ = writeln!(out, "{}", "─".repeat(SEPARATOR_WIDTH).bright_black());

        match report.response.summary() {
            Some(summary) if !summary.trim().is_empty() => {
                for line in summary.lines() {
                    let _ = writeln!(out, "  {}", line);
                }
            }
            _ => {
                let _ = writeln!(out, "  {}", "No summary returned by the backend.".bright_yellow());
            }
        }
    }

    fn write_chart(&self, out: &mut String, report: &AnalysisReport<'_>) {
        let _ = writeln!(out, "\n{}", "🥧 Sentiment Chart".bright_white().bold());
        let _ = writeln!(out, "{}", "─".repeat(SEPARATOR_WIDTH).bright_black());

        match decode_chart(report.response) {
            Ok(Some(bytes)) => {
                let _ = writeln!(
                    out,
                    "  {} ({} bytes PNG, save it with --chart-out)",
                    "Available".bright_green(),
                    bytes.len()
                );
            }
            Ok(None) => {
                let _ = writeln!(out, "  {}", "Not available".bright_black());
            }
            Err(e) => {
                let _ = writeln!(out, "  {} {}", "Unreadable:".bright_red(), e);
            }
        }
    }

    fn write_raw(&self, out: &mut String, report: &AnalysisReport<'_>) -> ReportResult<()> {
        let _ = writeln!(out, "\n{}", "🔍 Raw Response".bright_white().bold());
        let _ = writeln!(out, "{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(report.response)?);
        Ok(())
    }

    fn write_footer(&self, out: &mut String) {
        let _ = writeln!(out, "\n{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
    }
}
