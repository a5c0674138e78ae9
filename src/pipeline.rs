//! The two aggregation pipelines: scan, classify, extract, aggregate.
//!
//! Single pass, single thread: each run file is read fully, folded into the
//! in-memory report, and dropped before the next one. The first malformed
//! path, line, or group aborts the run; a partial chart would be worse than
//! no chart.

use crate::Result;
use crate::extract;
use crate::layout::{SeriesKey, SweepKey};
use crate::model::{SweepReport, TimelineReport};
use crate::scan;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Glob for worker-sweep run files: `out-*/<workers>/<tag>/.../*.out`.
pub const SWEEP_GLOB: &str = "out-*/**/*.out";

/// Glob for timeline stats files: `<tag>/.../*stats.out`. Covers both
/// `host.stats.out` and plain `stats.out` names.
pub const TIMELINE_GLOB: &str = "**/*stats.out";

/// Run the worker-sweep pipeline under `root` (cwd when absent).
pub fn sweep_report(root: Option<&Path>) -> Result<SweepReport> {
    let root = root.unwrap_or(Path::new("."));

    let mut report = SweepReport::default();
    for rel in scan::scan(Some(root), SWEEP_GLOB)? {
        // The out-* component is consumed by the glob; the layout applies to
        // the path below it.
        let below: PathBuf = rel.components().skip(1).collect();
        let key = SweepKey::classify(&below)
            .with_context(|| format!("classify {}", rel.display()))?;
        let samples = read_samples(root, &rel)?;
        report
            .add_run(&key, &samples)
            .with_context(|| format!("aggregate {}", rel.display()))?;
    }
    Ok(report)
}

/// Run the timeline pipeline under `root` (cwd when absent).
pub fn timeline_report(root: Option<&Path>) -> Result<TimelineReport> {
    let root = root.unwrap_or(Path::new("."));

    let mut report = TimelineReport::default();
    for rel in scan::scan(Some(root), TIMELINE_GLOB)? {
        let key = SeriesKey::classify(&rel)
            .with_context(|| format!("classify {}", rel.display()))?;
        let samples = read_samples(root, &rel)?;
        report.extend_series(&key, &samples);
    }
    Ok(report.finish()?)
}

fn read_samples(root: &Path, rel: &Path) -> Result<Vec<f64>> {
    let text = fs::read_to_string(root.join(rel))
        .with_context(|| format!("read {}", rel.display()))?;
    extract::samples(&text)
        .collect::<std::result::Result<Vec<_>, _>>()
        .with_context(|| format!("extract samples from {}", rel.display()))
}
