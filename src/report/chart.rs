use super::ReportResult;
use crate::api::AnalysisResponse;
use base64::Engine;
use std::fs;
use std::path::Path;
use tracing::info;

/// Decode the sentiment chart carried in a response.
///
/// Returns `Ok(None)` when the backend sent no chart (absent or null field),
/// which it does when every sentiment count is zero.
pub fn decode_chart(response: &AnalysisResponse) -> ReportResult<Option<Vec<u8>>> {
    let Some(encoded) = response.sentiment_graph() else {
        return Ok(None);
    };

    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
    Ok(Some(bytes))
}

/// Write the decoded chart PNG to `path`. Returns the number of bytes
/// written, or `None` when the response has no chart.
pub fn write_chart(response: &AnalysisResponse, path: &Path) -> ReportResult<Option<usize>> {
    let Some(bytes) = decode_chart(response)? else {
        return Ok(None);
    };

    fs::write(path, &bytes)?;
    info!("Sentiment chart written to: {}", path.display());

    Ok(Some(bytes.len()))
}
