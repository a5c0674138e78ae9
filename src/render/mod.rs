//! Chart emission: figure model plus a self-contained interactive HTML page.

pub mod figure;
pub mod html;

pub use figure::{Figure, Trace, sweep_figure, timeline_figure};
pub use html::render_chart_page;
