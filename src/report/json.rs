use super::{AnalysisReport, ReportGenerator, ReportResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// JSON report generator. Emits the backend response exactly as received.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, report: &AnalysisReport<'_>) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(report.response)?)
    }

    /// Print the report to stdout
    pub fn report(&self, report: &AnalysisReport<'_>) -> ReportResult<()> {
        println!("{}", self.render(report)?);
        Ok(())
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &AnalysisReport<'_>, output_path: &Path) -> ReportResult<()> {
        let json = self.render(report)?;

        // "-" means stdout
        if output_path == Path::new("-") {
            println!("{}", json);
        } else {
            let mut file = File::create(output_path)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
