//! Shared plumbing for the `fleetctx-*` binaries.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fleetctx_core::config::Config;
use fleetctx_core::{FleetSnapshot, OrgTree, ScopeFilter};

pub fn init_logging() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Options every binary accepts.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Snapshot JSON file; defaults to `data.snapshot_path` from config.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Organization in view; defaults to `scope.default_org`.
    #[arg(long)]
    pub org: Option<String>,
}

/// Config, snapshot and tree loaded for one invocation.
pub struct Session {
    pub config: Config,
    pub snapshot: FleetSnapshot,
    pub tree: OrgTree,
    pub org: Option<String>,
}

impl Session {
    pub fn open(args: &CommonArgs) -> anyhow::Result<Self> {
        let config = Config::load()?;
        let path = match &args.snapshot {
            Some(p) => p.clone(),
            None => config.snapshot_path()?,
        };
        let snapshot = FleetSnapshot::load(&path)
            .with_context(|| format!("loading snapshot {}", path.display()))?;
        let tree = snapshot.org_tree();
        let org = match args.org.clone() {
            Some(org) => Some(org),
            None => config.default_org()?,
        };
        info!(path = %path.display(), orgs = tree.len(), entities = snapshot.view().len(), "snapshot loaded");
        Ok(Self { config, snapshot, tree, org })
    }

    /// Filter for the selected organization; empty when none is selected.
    pub fn filter(&self) -> ScopeFilter {
        self.org.as_deref().map(|id| self.tree.build_filter(id)).unwrap_or_default()
    }
}
