//! Sample extraction from producer log output.
//!
//! Every few seconds the probing tool logs one free-text stats line, e.g.:
//!
//! `2024/03/01 10:15:05 stats 5002 5001 49952 2497600 9988 499400`
//!
//! The second-to-last whitespace token of such a line is the per-epoch probe
//! rate (pps); everything else on the line, and every line without the
//! `"stats "` marker, is ignored. A marker line whose sample token is missing
//! or not numeric is an error, so format drift in the producer surfaces
//! instead of skewing the chart.

use once_cell::sync::Lazy;
use regex::Regex;
use std::iter::Enumerate;
use std::str::Lines;
use thiserror::Error;

/// Marker distinguishing stats lines from other producer output.
pub const STATS_MARKER: &str = "stats ";

/// Second-to-last whitespace token of a line.
static SAMPLE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\S+)\s+\S+\s*$").unwrap());

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("line {line_no}: no sample token on stats line {line:?}")]
    MissingToken { line_no: usize, line: String },
    #[error("line {line_no}: sample token {token:?} is not a number on {line:?}")]
    BadNumber {
        line_no: usize,
        token: String,
        line: String,
    },
}

/// Iterate the samples in one file's text, in line order.
pub fn samples(text: &str) -> Samples<'_> {
    Samples {
        lines: text.lines().enumerate(),
    }
}

pub struct Samples<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl Iterator for Samples<'_> {
    type Item = Result<f64, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            if !line.contains(STATS_MARKER) {
                continue;
            }
            let line_no = index + 1;
            let caps = match SAMPLE_TOKEN.captures(line) {
                Some(caps) => caps,
                None => {
                    return Some(Err(ExtractError::MissingToken {
                        line_no,
                        line: line.to_string(),
                    }));
                }
            };
            let token = caps.get(1).unwrap().as_str();
            return Some(token.parse::<f64>().map_err(|_| ExtractError::BadNumber {
                line_no,
                token: token.to_string(),
                line: line.to_string(),
            }));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(text: &str) -> Result<Vec<f64>, ExtractError> {
        samples(text).collect()
    }

    #[test]
    fn takes_second_to_last_token_of_marker_lines() {
        assert_eq!(collect("worker 3 stats 42.5 pps\n").unwrap(), vec![42.5]);
    }

    #[test]
    fn parses_producer_shaped_lines() {
        let text = "2024/03/01 10:15:00 starting 8 workers\n\
                    2024/03/01 10:15:05 stats 5002 5001 49952 2497600 9988 499400\n\
                    2024/03/01 10:15:10 stats 10003 5001 99913 4995650 9991 499610\n";
        assert_eq!(collect(text).unwrap(), vec![9988.0, 9991.0]);
    }

    #[test]
    fn skips_lines_without_marker() {
        let text = "boot ok\nresolved 120 targets\nshutting down\n";
        assert_eq!(collect(text).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn empty_input_yields_no_samples() {
        assert_eq!(collect("").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn non_numeric_token_is_an_error() {
        let err = collect("stats n/a pps\n").unwrap_err();
        match err {
            ExtractError::BadNumber {
                line_no, token, ..
            } => {
                assert_eq!(line_no, 1);
                assert_eq!(token, "n/a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn single_token_marker_line_is_an_error() {
        let text = "ok line one\nstats \n";
        let err = collect(text).unwrap_err();
        match err {
            ExtractError::MissingToken { line_no, line } => {
                assert_eq!(line_no, 2);
                assert_eq!(line, "stats ");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extraction_is_lazy_up_to_the_bad_line() {
        let text = "stats 1.0 pps\nstats broken pps pps\nstats 3.0 pps\n";
        let mut iter = samples(text);
        assert_eq!(iter.next().unwrap().unwrap(), 1.0);
        assert!(iter.next().unwrap().is_err());
    }
}
