mod sweep;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use folio_core::capability::Capabilities;
use folio_core::catalog::Catalog;
use folio_core::config::TimelineConfig;
use folio_core::timeline::TimelineEngine;
use tracing_subscriber::EnvFilter;

use crate::sweep::{Sweep, TableSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `FrameOutput` JSON object per line.
    Json,
    /// Aligned text columns.
    Table,
}

/// Sweep a select-works timeline over a range of scroll positions and print
/// the frame the card would render at each one.
#[derive(Debug, Parser)]
#[command(name = "folio-scrub", version)]
struct Args {
    /// Timeline config (JSON). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project catalog (JSON array). The home-page rotation when omitted.
    #[arg(long, conflicts_with = "works")]
    catalog: Option<PathBuf>,

    /// Use the full works-page catalog.
    #[arg(long)]
    works: bool,

    /// First position, in viewport-heights past the pin point.
    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    from: f64,

    /// Last position. Defaults to one segment past the clamped range.
    #[arg(long, allow_negative_numbers = true)]
    to: Option<f64>,

    #[arg(long, default_value_t = 0.25)]
    step: f64,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    #[arg(long)]
    reduced_motion: bool,

    #[arg(long)]
    touch: bool,

    /// Hold the pointer at `x,y` (normalised) over the card for the whole sweep.
    #[arg(long, value_parser = parse_pointer)]
    pointer: Option<(f64, f64)>,
}

fn parse_pointer(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

fn load_config(path: Option<&PathBuf>) -> Result<TimelineConfig> {
    let Some(path) = path else {
        return Ok(TimelineConfig::default());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    TimelineConfig::from_json(&data).with_context(|| format!("loading {}", path.display()))
}

fn load_catalog(args: &Args) -> Result<Catalog> {
    if args.works {
        return Ok(Catalog::all_projects());
    }
    let Some(path) = &args.catalog else {
        return Ok(Catalog::select_works());
    };
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Catalog::from_json(&data).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if !(args.step.is_finite() && args.step > 0.0) {
        bail!("--step must be a positive number");
    }

    let config = load_config(args.config.as_ref())?;
    let catalog = load_catalog(&args)?;
    tracing::info!(projects = catalog.len(), "catalog loaded");

    let mut engine = TimelineEngine::new(config, catalog)?;
    engine.set_capabilities(&Capabilities {
        reduced_motion: args.reduced_motion,
        touch_only: args.touch,
    });
    if let Some((x, y)) = args.pointer {
        engine.pointer_move(x, y);
    }

    let to = args.to.unwrap_or(engine.layout().total() + 1.0);
    let sweep = Sweep::new(args.from, to, args.step);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Json => {
            for raw in sweep {
                engine.scroll_to(raw);
                serde_json::to_writer(&mut out, &engine.tick())?;
                writeln!(out)?;
            }
        }
        Format::Table => {
            let mut sink = TableSink::default();
            for raw in sweep {
                engine.scroll_to(raw);
                sink.begin_row(raw);
                engine.tick().dispatch(&mut sink);
            }
            out.write_all(sink.finish().as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}
