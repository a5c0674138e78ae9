//! Figure model handed to the chart page.
//!
//! This is the whole contract with the display layer: per trace a label and
//! equal-length parallel x/y sequences, plus optional error-bar magnitudes
//! and the axis configuration. Traces are emitted in stable order (tag order,
//! or the order given on the command line).

use crate::model::{SweepReport, TimeUnit, TimelineReport, time_axis};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub x_title: String,
    pub y_title: String,
    pub x_log: bool,
    pub y_log: bool,
    pub traces: Vec<Trace>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_y: Option<Vec<f64>>,
}

/// One trace per tag: x = worker counts ascending, y = mean probe rate,
/// error bars = population standard deviation. Worker counts go on a log
/// axis since sweeps are typically powers of two.
pub fn sweep_figure(report: &SweepReport) -> Figure {
    let traces = report
        .groups
        .iter()
        .map(|(tag, runs)| Trace {
            name: tag.clone(),
            x: runs.keys().map(|workers| f64::from(*workers)).collect(),
            y: runs.values().map(|stats| stats.mean).collect(),
            error_y: Some(runs.values().map(|stats| stats.std).collect()),
        })
        .collect();

    Figure {
        x_title: "Number of Workers".to_string(),
        y_title: "Probes (pps)".to_string(),
        x_log: true,
        y_log: false,
        traces,
    }
}

/// One trace per tag over reconstructed elapsed time.
///
/// `tags`, when given, selects and orders the traces; a listed tag with no
/// data only warns, since trace selection is a display concern, not an input
/// contract.
pub fn timeline_figure(
    report: &TimelineReport,
    unit: TimeUnit,
    y_log: bool,
    tags: Option<&[String]>,
) -> Figure {
    let mut traces = Vec::new();
    match tags {
        Some(order) => {
            for tag in order {
                match report.series.get(tag) {
                    Some(samples) => traces.push(series_trace(tag, samples, unit)),
                    None => eprintln!("WARN: --tags lists {tag:?}, but no stats file matched it"),
                }
            }
        }
        None => {
            for (tag, samples) in &report.series {
                traces.push(series_trace(tag, samples, unit));
            }
        }
    }

    Figure {
        x_title: match unit {
            TimeUnit::Seconds => "Time (s)",
            TimeUnit::Hours => "Time (h)",
        }
        .to_string(),
        y_title: "Probes (pps)".to_string(),
        x_log: false,
        y_log,
        traces,
    }
}

fn series_trace(tag: &str, samples: &[f64], unit: TimeUnit) -> Trace {
    Trace {
        name: tag.to_string(),
        x: time_axis(samples.len(), unit),
        y: samples.to_vec(),
        error_y: None,
    }
}
