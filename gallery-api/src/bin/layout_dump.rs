//! Layout Dump Utility
//!
//! Prints the wall placements the gallery would use for a given artwork count.
//!
//! **Usage:**
//! ```bash
//! layout-dump <COUNT> [--format table|json]
//! ```

use anyhow::Result;
use clap::Parser;
use gallery_api::dump::{render, DumpArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = DumpArgs::parse();
    print!("{}", render(&args)?);
    Ok(())
}
