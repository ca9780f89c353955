use anyhow::{bail, Result};
use bibreport::{layout, process_report, ReportKind, ReportLayout};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bibreport")]
#[command(about = "Builds monthly reports from library diary workbooks")]
#[command(group = clap::ArgGroup::new("source").required(true).args(["report", "layout"]))]
struct Args {
    /// Builtin report to build: users, registrations, visits or loans
    #[arg(short, long)]
    report: Option<String>,

    /// JSON layout file for sheets the builtin reports don't cover
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Source workbooks; each report is written next to its source
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let default_level = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) resolve the layout ───────────────────────────────────────
    let layout: ReportLayout = match (&args.report, &args.layout) {
        (Some(name), _) => match ReportKind::from_str(name) {
            Some(kind) => kind.layout(),
            None => {
                let kinds = ReportKind::ALL;
                let known: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();
                bail!(
                    "unknown report \"{}\"; expected one of: {}",
                    name,
                    known.join(", ")
                );
            }
        },
        (None, Some(path)) => layout::load_layout(path)?,
        (None, None) => bail!("either --report or --layout is required"),
    };
    info!(layout = %layout.name, files = args.files.len(), "startup");

    // ─── 3) build every report ───────────────────────────────────────
    let failures: usize = args
        .files
        .par_iter()
        .map(|path| match process_report(path, &layout) {
            Ok(report) => {
                info!("{} -> {}", path.display(), report.display());
                0
            }
            Err(err) => {
                error!("{} failed: {}", path.display(), err);
                1
            }
        })
        .sum();

    if failures > 0 {
        bail!("{} of {} files failed", failures, args.files.len());
    }
    Ok(())
}
