use std::collections::VecDeque;

use crate::metrics::Metrics;

/// Maximum number of points kept for the chart
pub const HISTORY_CAPACITY: usize = 10;

/// A single chart point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub label: String,
    pub words: usize,
    pub characters: usize,
}

/// Rolling window of recent word and character counts
#[derive(Debug, Clone)]
pub struct MetricsHistory {
    points: VecDeque<Snapshot>,
    capacity: usize,
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Append a point, evicting the oldest one when full
    pub fn record(&mut self, label: impl Into<String>, metrics: &Metrics) {
        if self.points.len() >= self.capacity {
            if let Some(evicted) = self.points.pop_front() {
                log::debug!("history full, evicting point {}", evicted.label);
            }
        }

        self.points.push_back(Snapshot {
            label: label.into(),
            words: metrics.words,
            characters: metrics.characters,
        });
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.points.iter()
    }

    /// Word counts as `(index, value)` chart coordinates
    pub fn word_series(&self) -> Vec<(f64, f64)> {
        self.series(|p| p.words)
    }

    /// Character counts as `(index, value)` chart coordinates
    pub fn character_series(&self) -> Vec<(f64, f64)> {
        self.series(|p| p.characters)
    }

    /// Largest value across both series, used for the y-axis bound
    pub fn max_value(&self) -> usize {
        self.points
            .iter()
            .map(|p| p.words.max(p.characters))
            .max()
            .unwrap_or(0)
    }

    fn series(&self, value: impl Fn(&Snapshot) -> usize) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, value(p) as f64))
            .collect()
    }
}

impl Default for MetricsHistory {
    fn default() -> Self {
        Self::new()
    }
}
