use clap::Parser;

use fleetctx_cli::{init_logging, CommonArgs, Session};
use fleetctx_search::EntitySearch;

/// Search drivers, trucks, trailers and loads in a fleet snapshot.
#[derive(Debug, Parser)]
#[command(name = "fleetctx-search")]
struct Cli {
    query: String,

    #[command(flatten)]
    common: CommonArgs,

    /// Override `search.max_results`.
    #[arg(long)]
    limit: Option<usize>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let session = Session::open(&cli.common)?;

    let mut settings = session.config.search_settings()?;
    if let Some(limit) = cli.limit {
        settings.max_results = limit.max(1);
    }
    let filter = session.filter();
    let view = session.snapshot.scoped(&filter);
    let results = EntitySearch::new(settings).search(&cli.query, &view);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No results for '{}'", cli.query);
        return Ok(());
    }
    for r in &results {
        println!("{:>4}  {:<8} {:<28} {:<24} {}", r.score, r.kind.as_str(), r.title, r.subtitle, r.path);
        println!("      {}", r.description);
    }
    Ok(())
}
