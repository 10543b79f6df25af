//! Word Tally Core - Platform-agnostic text statistics library
//!
//! This crate provides the text metrics, cleaning transform and
//! presentation state for the Word Tally tool. It's designed to work both
//! in native CLI and WASM environments.

pub mod actions;
pub mod app;
pub mod buffer;
pub mod export;
pub mod history;
pub mod metrics;
pub mod model;

pub use actions::{Action, Outcome};
pub use app::{App, Mode};
pub use buffer::TextBuffer;
pub use export::{export_date, export_filename, prepare_export, to_json, ExportError, MetricsReport, TextExport};
pub use history::{MetricsHistory, Snapshot, HISTORY_CAPACITY};
pub use metrics::{
    calculate_reading_time, clean_text, compute_metrics, count_characters, count_paragraphs,
    count_sentences, count_words, Metrics, WORDS_PER_MINUTE,
};
pub use model::{Palette, Settings, SettingsError, Theme, ThemeParseError};
