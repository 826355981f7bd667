//! Text rendering for the `layout-dump` binary

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gallery_common::{checked_count, Room};
use std::fmt::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Print generated wall placements
#[derive(Parser, Debug)]
#[command(name = "layout-dump")]
#[command(about = "Print wall placements for a number of artwork items")]
pub struct DumpArgs {
    /// Number of artwork items to place
    #[arg(allow_hyphen_values = true)]
    pub count: i64,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Render the placements for `args.count` items in the reference room.
///
/// A negative count fails with `gallery_common::Error::InvalidInput` before
/// anything is rendered.
pub fn render(args: &DumpArgs) -> Result<String> {
    let count = checked_count(args.count)?;

    let room = Room::REFERENCE;
    let placements = room.wall_positions(count);
    let counts = room.wall_counts(count);

    info!(count, placed = placements.len(), "Layout generated");

    let mut out = String::new();
    match args.format {
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&placements)
                .context("Failed to serialize placements")?;
            out.push('\n');
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:>3}  {:<6} {:>8} {:>8} {:>8} {:>8}",
                "#", "wall", "x", "y", "z", "ry"
            )?;
            for (i, p) in placements.iter().enumerate() {
                writeln!(
                    out,
                    "{:>3}  {:<6} {:>8.2} {:>8.2} {:>8.2} {:>8.4}",
                    i,
                    p.wall.to_string(),
                    p.position[0],
                    p.position[1],
                    p.position[2],
                    p.rotation[1]
                )?;
            }
            writeln!(
                out,
                "placed {} of {} (north {}, south {}, east {}, west {}, dropped {})",
                counts.placed(),
                count,
                counts.north,
                counts.south,
                counts.east,
                counts.west,
                counts.dropped
            )?;
        }
    }

    Ok(out)
}
