use clap::Parser;

use fleetctx_cli::{init_logging, CommonArgs, Session};

/// Show how an organization scopes the fleet snapshot.
#[derive(Debug, Parser)]
#[command(name = "fleetctx-scope")]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let session = Session::open(&cli.common)?;

    match session.org.as_deref() {
        Some(id) => {
            let chain = session.tree.ancestor_chain(id);
            if chain.is_empty() {
                println!("Organization '{}' not found, showing all data", id);
            }
            for node in chain.iter().rev() {
                println!("{:<10} {:<8} {} ({})", node.kind.as_str(), node.id, node.name, node.code);
            }
            for child in session.tree.children(id) {
                println!("  child: {} {}", child.id, child.name);
            }
        }
        None => println!("No organization selected, showing all data"),
    }

    let filter = session.filter();
    println!("Filter: {}", serde_json::to_string(&filter)?);
    println!("Data scope: {:?}", session.tree.data_scope(session.org.as_deref()));

    let view = session.snapshot.scoped(&filter);
    println!(
        "Visible: {} drivers, {} trucks, {} trailers, {} loads",
        view.drivers.len(),
        view.trucks.len(),
        view.trailers.len(),
        view.loads.len()
    );
    Ok(())
}
