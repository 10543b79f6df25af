use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;
use thiserror::Error;

use crate::metrics::{clean_text, compute_metrics, Metrics};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("Please enter some text before downloading.")]
    EmptyText,
}

/// A plain-text file ready to be written or downloaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExport {
    pub filename: String,
    pub contents: String,
}

/// Filename for a text export on the given day, e.g. `text_2024-03-05.txt`
pub fn export_filename(date: NaiveDate) -> String {
    format!("text_{}.txt", date.format("%Y-%m-%d"))
}

/// Calendar day used for export filenames; always the UTC date of `now`
pub fn export_date<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.naive_utc().date()
}

/// Build an export of `text`, refusing blank input
pub fn prepare_export(text: &str, date: NaiveDate) -> Result<TextExport, ExportError> {
    if text.trim().is_empty() {
        return Err(ExportError::EmptyText);
    }

    Ok(TextExport {
        filename: export_filename(date),
        contents: text.to_string(),
    })
}

/// Machine-readable statistics for a text
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    #[serde(flatten)]
    pub metrics: Metrics,
    pub cleaned: String,
}

impl From<&str> for MetricsReport {
    fn from(text: &str) -> Self {
        Self {
            metrics: compute_metrics(text),
            cleaned: clean_text(text),
        }
    }
}

/// Serialize the statistics of `text` as pretty JSON
pub fn to_json(text: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&MetricsReport::from(text))
}
