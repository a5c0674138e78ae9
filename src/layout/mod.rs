//! Directory-layout contract for benchmark result trees.
//!
//! The probing tool is driven by wrapper scripts that name output files after
//! the experiment dimensions. Two layouts exist:
//!
//! - worker sweep: `out-*/<workers>/<tag>/.../*.out`, one run file per
//!   `(tag, workers)` pair. The `out-*` component is consumed by the scan
//!   glob; [`SweepKey::classify`] sees the path below it.
//! - timeline: `<tag>/.../*stats.out`, any number of files per tag.
//!
//! Classification is total over the paths the scan globs admit: a matched
//! path that does not fit its layout is an error, never skipped.

pub mod pattern;

pub use pattern::{Captures, ClassifyError, Field, PathPattern};

use std::fmt;
use std::path::Path;

const WORKERS: &str = "workers";
const TAG: &str = "tag";

/// Layout of one sweep run file, relative to its `out-*` directory.
static SWEEP: PathPattern = PathPattern::new(&[Field::UInt(WORKERS), Field::Text(TAG)]);

/// Layout of one timeline stats file, relative to the scan root.
static TIMELINE: PathPattern = PathPattern::new(&[Field::Text(TAG)]);

/// Group key of one worker-sweep run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SweepKey {
    pub tag: String,
    pub workers: u32,
}

impl SweepKey {
    /// Classify a run file path of the form `<workers>/<tag>/.../*.out`.
    pub fn classify(rel: &Path) -> Result<Self, ClassifyError> {
        let caps = SWEEP.capture(rel)?;
        Ok(Self {
            tag: caps.text(TAG).unwrap().to_string(),
            workers: caps.uint(WORKERS).unwrap(),
        })
    }
}

impl fmt::Display for SweepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag {:?} at {} workers", self.tag, self.workers)
    }
}

/// Group key of a timeline series: the tag directory the files live under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeriesKey {
    pub tag: String,
}

impl SeriesKey {
    /// Classify a stats file path of the form `<tag>/.../*stats.out`.
    pub fn classify(rel: &Path) -> Result<Self, ClassifyError> {
        let caps = TIMELINE.capture(rel)?;
        Ok(Self {
            tag: caps.text(TAG).unwrap().to_string(),
        })
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag {:?}", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sweep_key_from_run_path() {
        let key = SweepKey::classify(Path::new("16/baseline/run1.out")).unwrap();
        assert_eq!(
            key,
            SweepKey {
                tag: "baseline".to_string(),
                workers: 16,
            }
        );
    }

    #[test]
    fn sweep_key_rejects_non_integer_worker_count() {
        let err = SweepKey::classify(Path::new("abc/baseline/run1.out")).unwrap_err();
        assert!(matches!(err, ClassifyError::NotAnInteger { .. }));
    }

    #[test]
    fn series_key_is_first_segment() {
        let key = SeriesKey::classify(Path::new("drop/night2/host.stats.out")).unwrap();
        assert_eq!(key.tag, "drop");
    }

    #[test]
    fn series_key_rejects_file_at_root() {
        let err = SeriesKey::classify(Path::new("stats.out")).unwrap_err();
        assert!(matches!(err, ClassifyError::TooShallow { .. }));
    }
}
