// src/bin/inspect.rs
//
// Dumps the first worksheet of a workbook cell by cell, with the 1-based
// row numbers and 0-based column indices layouts are written against.
// Handy when a new export needs a JSON layout.

use anyhow::{Context, Result};
use bibreport::sheet;
use calamine::Data;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "inspect")]
#[command(about = "Print the cell grid of a workbook's first worksheet")]
struct Args {
    /// Workbook to dump
    file: PathBuf,

    /// Print at most this many rows
    #[arg(short, long)]
    limit: Option<usize>,

    /// Show which row a layout keyword would select
    #[arg(short, long)]
    keyword: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_env_filter("info").init();

    let rows = sheet::read_rows(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let limit = args.limit.unwrap_or(rows.len());

    for (idx, row) in rows.iter().take(limit).enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|(_, cell)| !matches!(cell, Data::Empty))
            .map(|(col, cell)| format!("[{}] {}", col, cell))
            .collect();
        if cells.is_empty() {
            continue;
        }
        println!("{:>4}  {}", idx + 1, cells.join("  "));
    }
    println!("{} rows total", rows.len());

    if let Some(keyword) = &args.keyword {
        match sheet::scan::find_header(&rows, keyword) {
            Some(row) => println!("keyword \"{}\" first matches row {}", keyword, row),
            None => println!("keyword \"{}\" matches no row", keyword),
        }
    }
    Ok(())
}
