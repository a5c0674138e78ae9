//! Typed path patterns.
//!
//! Result trees encode experiment parameters in directory names. Each layout
//! declares its leading segments (name + expected type) up front; matching a
//! path either yields typed captures or a structured error naming the
//! offending path. Segment indices never appear at call sites.

use std::collections::BTreeMap;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("path {path:?} has {found} segment(s), expected at least {expected}")]
    TooShallow {
        path: String,
        expected: usize,
        found: usize,
    },
    #[error("path {path:?}: segment {segment:?} is not a valid {field} (unsigned integer)")]
    NotAnInteger {
        path: String,
        segment: String,
        field: &'static str,
    },
    #[error("path {path:?} contains a segment that is not plain UTF-8")]
    BadSegment { path: String },
}

/// Expected type of one declared path segment.
#[derive(Debug, Clone, Copy)]
pub enum Field {
    /// Base-10 unsigned integer directory name (e.g. a worker count).
    UInt(&'static str),
    /// Free-form directory name (e.g. a configuration tag).
    Text(&'static str),
}

/// A declared layout: typed leading segments, then any depth, then the file.
#[derive(Debug, Clone, Copy)]
pub struct PathPattern {
    fields: &'static [Field],
}

impl PathPattern {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    /// Match a relative file path against the declared segments.
    ///
    /// The path needs at least one segment per declared field plus the file
    /// itself; directories between the declared segments and the file are
    /// allowed and ignored.
    pub fn capture(&self, rel: &Path) -> Result<Captures, ClassifyError> {
        let shown = || rel.display().to_string();

        let mut segments = Vec::new();
        for component in rel.components() {
            match component {
                Component::Normal(seg) => {
                    segments.push(seg.to_str().ok_or_else(|| ClassifyError::BadSegment {
                        path: shown(),
                    })?);
                }
                _ => return Err(ClassifyError::BadSegment { path: shown() }),
            }
        }

        if segments.len() < self.fields.len() + 1 {
            return Err(ClassifyError::TooShallow {
                path: shown(),
                expected: self.fields.len() + 1,
                found: segments.len(),
            });
        }

        let mut captures = Captures::default();
        for (field, segment) in self.fields.iter().zip(&segments) {
            match *field {
                Field::UInt(name) => {
                    let value =
                        segment
                            .parse::<u32>()
                            .map_err(|_| ClassifyError::NotAnInteger {
                                path: shown(),
                                segment: segment.to_string(),
                                field: name,
                            })?;
                    captures.uints.insert(name, value);
                }
                Field::Text(name) => {
                    captures.texts.insert(name, segment.to_string());
                }
            }
        }

        Ok(captures)
    }
}

/// Captured segment values, keyed by the names declared in the pattern.
#[derive(Debug, Default)]
pub struct Captures {
    uints: BTreeMap<&'static str, u32>,
    texts: BTreeMap<&'static str, String>,
}

impl Captures {
    pub fn uint(&self, name: &str) -> Option<u32> {
        self.uints.get(name).copied()
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(|s| s.as_str())
    }
}
