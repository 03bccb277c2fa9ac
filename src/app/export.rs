use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::{AppError, AppResult, SinkError};
use crate::metrics::Report;

pub(crate) fn report_json(report: &Report) -> AppResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|err| AppError::sink(SinkError::SerializeReport { source: err }))
}

/// Writes the pretty-printed report to `path`, replacing any existing file.
pub(crate) async fn export_json(path: &str, report: &Report) -> AppResult<()> {
    let body = report_json(report)?;
    write_file(Path::new(path), body.as_bytes())
        .await
        .map_err(|err| {
            AppError::sink(SinkError::WriteReport {
                path: path.into(),
                source: err,
            })
        })
}

pub(crate) fn print_json(report: &Report) -> AppResult<()> {
    let body = report_json(report)?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", body)
        .and_then(|()| out.flush())
        .map_err(|err| AppError::sink(SinkError::WriteSummary { source: err }))
}

async fn write_file(path: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
