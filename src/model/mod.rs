//! Aggregation: fold classified samples into chartable per-group series.
//!
//! Two shapes, matching the two result layouts:
//!
//! - [`SweepReport`]: per `(tag, workers)` run, mean and population standard
//!   deviation over the run's samples. Both map levels are `BTreeMap`, so
//!   traces iterate in tag order and points in ascending worker order (the
//!   log-scale x axis needs monotonic worker counts).
//! - [`TimelineReport`]: per tag, the concatenated sample sequence in file
//!   scan order then line order. Timestamps are reconstructed from sample
//!   position alone; see [`time_axis`].
//!
//! Aggregation errors are fatal. A classified group with zero samples means a
//! missing or truncated run file, not a legitimate empty result.

use crate::layout::{SeriesKey, SweepKey};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Seconds between producer stats emissions. The producer logs exactly one
/// stats line per epoch, back to back, so sample position encodes elapsed
/// time without gaps.
pub const EPOCH_SECS: f64 = 5.0;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("{group} produced no samples (missing or truncated run file?)")]
    EmptyGroup { group: String },
    #[error("{group} appears in more than one run file")]
    DuplicateRun { group: String },
}

/// Population statistics over one run's samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std: f64,
}

/// Mean and population standard deviation; `None` for an empty slice.
pub fn stats(samples: &[f64]) -> Option<Stats> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples
        .iter()
        .map(|sample| {
            let d = sample - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Some(Stats {
        mean,
        std: variance.sqrt(),
    })
}

/// Worker-sweep aggregation: one run file per `(tag, workers)` key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SweepReport {
    /// tag -> workers -> stats, both levels in ascending key order.
    pub groups: BTreeMap<String, BTreeMap<u32, Stats>>,
}

impl SweepReport {
    /// Fold one run's samples in. A key seen twice or a run with no samples
    /// aborts the aggregation.
    pub fn add_run(&mut self, key: &SweepKey, samples: &[f64]) -> Result<(), AggregateError> {
        let stats = stats(samples).ok_or_else(|| AggregateError::EmptyGroup {
            group: key.to_string(),
        })?;
        let runs = self.groups.entry(key.tag.clone()).or_default();
        if runs.insert(key.workers, stats).is_some() {
            return Err(AggregateError::DuplicateRun {
                group: key.to_string(),
            });
        }
        Ok(())
    }
}

/// Timeline aggregation: any number of files per tag, concatenated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TimelineReport {
    /// tag -> samples, in file scan order then line order.
    pub series: BTreeMap<String, Vec<f64>>,
}

impl TimelineReport {
    /// Append one file's samples to its tag. An individual file may be empty
    /// as long as the tag ends up non-empty; [`TimelineReport::finish`]
    /// checks that.
    pub fn extend_series(&mut self, key: &SeriesKey, samples: &[f64]) {
        self.series
            .entry(key.tag.clone())
            .or_default()
            .extend_from_slice(samples);
    }

    /// Reject any tag whose files contributed no samples at all.
    pub fn finish(self) -> Result<Self, AggregateError> {
        if let Some(tag) = self
            .series
            .iter()
            .find_map(|(tag, samples)| samples.is_empty().then_some(tag))
        {
            return Err(AggregateError::EmptyGroup {
                group: format!("tag {tag:?}"),
            });
        }
        Ok(self)
    }
}

/// Time axis units for the timeline chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Hours,
}

/// Midpoint timestamps for `n` consecutive epochs: sample `i` sits at
/// `i * EPOCH_SECS + EPOCH_SECS / 2`, i.e. the middle of its epoch.
pub fn time_axis(n: usize, unit: TimeUnit) -> Vec<f64> {
    let divisor = match unit {
        TimeUnit::Seconds => 1.0,
        TimeUnit::Hours => 3600.0,
    };
    (0..n)
        .map(|i| (i as f64 * EPOCH_SECS + EPOCH_SECS / 2.0) / divisor)
        .collect()
}
