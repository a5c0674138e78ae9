use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

mod extract;
mod layout;
mod model;
mod pipeline;
mod render;
mod scan;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "probeplot")]
#[command(about = "Chart throughput samples from probe benchmark logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart mean probe rate per worker count across out-* sweep runs.
    Sweep {
        /// Directory containing the out-* result trees (default: cwd).
        root: Option<PathBuf>,

        #[arg(short = 'o', long, default_value = "sweep.html")]
        out: PathBuf,
    },
    /// Chart probe rate over elapsed time, one trace per tag directory.
    Timeline {
        /// Directory containing the per-tag result trees (default: cwd).
        root: Option<PathBuf>,

        #[arg(short = 'o', long, default_value = "timeline.html")]
        out: PathBuf,

        /// Plot the time axis in hours instead of seconds.
        #[arg(long)]
        hours: bool,

        /// Logarithmic y axis.
        #[arg(long)]
        log_y: bool,

        /// Comma-separated trace order; unlisted tags are omitted.
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Sweep { root, out } => {
            // 1) Scan + classify + extract + aggregate.
            let report = pipeline::sweep_report(root.as_deref())?;

            // 2) Render the chart page.
            let figure = render::sweep_figure(&report);
            write_page(&figure, &out)?;
        }
        Commands::Timeline {
            root,
            out,
            hours,
            log_y,
            tags,
        } => {
            let report = pipeline::timeline_report(root.as_deref())?;

            let unit = if hours {
                model::TimeUnit::Hours
            } else {
                model::TimeUnit::Seconds
            };
            let figure = render::timeline_figure(&report, unit, log_y, tags.as_deref());
            write_page(&figure, &out)?;
        }
    }

    Ok(())
}

fn write_page(figure: &render::Figure, out: &Path) -> Result<()> {
    let html = render::render_chart_page(figure)?;
    std::fs::write(out, html)?;
    println!("Wrote {}", out.display());
    Ok(())
}
