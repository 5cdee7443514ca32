use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use freshtab_core::{FreshtabConfig, Route};

/// A keyboard-driven new tab page for the terminal
#[derive(Parser, Debug)]
#[command(name = "freshtab", version, about)]
struct Cli {
    /// Open straight onto the results view for this query
    #[arg(long, conflicts_with = "location")]
    query: Option<String>,

    /// Open at a location such as "/search?q=cats"
    #[arg(long)]
    location: Option<String>,

    /// Config file (default: ~/.freshtab/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    freshtab_tui::trace::init(cli.debug)?;

    let config = FreshtabConfig::load(cli.config.as_deref())?;

    let initial_location = match (cli.location, cli.query) {
        (Some(location), _) => Some(location),
        (None, Some(query)) => Route::search(&query).map(|route| route.location()),
        (None, None) => None,
    };

    freshtab_tui::run(config, initial_location).await
}
