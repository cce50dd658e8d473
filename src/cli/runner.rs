//! CLI runner - executes the discover or sync mode

use crate::catalog::{self, Catalog};
use crate::cli::commands::Cli;
use crate::config::TapConfig;
use crate::engine::{SyncConfig, SyncEngine};
use crate::error::{Result, ResultExt};
use crate::http::NikabotTransport;
use crate::output::SingerWriter;
use crate::state::StateManager;
use std::io::Write;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run against stdout
    pub async fn run(&self) -> Result<()> {
        let stdout = std::io::BufWriter::new(std::io::stdout());
        self.run_with_output(stdout).await
    }

    /// Run, writing the catalog or Singer messages to `out`
    pub async fn run_with_output<W: Write + Send>(&self, out: W) -> Result<()> {
        let config = TapConfig::from_file(&self.cli.config)?;
        let transport = NikabotTransport::new(&config)?;

        if self.cli.discover {
            return self.discover(&transport, out).await;
        }
        self.sync(&config, &transport, out).await
    }

    async fn discover<W: Write + Send>(&self, transport: &NikabotTransport, mut out: W) -> Result<()> {
        let catalog = catalog::discover(transport).await?;
        writeln!(out, "{}", catalog.to_json_pretty()?).context("Failed to write catalog")?;
        out.flush().context("Failed to write catalog")
    }

    async fn sync<W: Write + Send>(
        &self,
        config: &TapConfig,
        transport: &NikabotTransport,
        out: W,
    ) -> Result<()> {
        let catalog = self.load_catalog(transport).await?;
        let state = self.load_state()?;

        let mut writer = SingerWriter::with_state(out, state.clone());
        let stats = SyncEngine::new(transport)
            .with_config(SyncConfig::from(config))
            .sync(&catalog, &mut writer)
            .await?;

        if let Some(path) = &self.cli.state_output {
            state.save_to_file(path).await?;
            info!("Wrote state to {}", path.display());
        }

        info!(
            "Synced {} records from {} streams",
            stats.records_synced, stats.streams_synced
        );
        Ok(())
    }

    async fn load_catalog(&self, transport: &NikabotTransport) -> Result<Catalog> {
        match &self.cli.catalog {
            Some(path) => Catalog::from_file(path),
            None => {
                info!("No catalog given, syncing every discovered stream");
                catalog::discover(transport).await
            }
        }
    }

    fn load_state(&self) -> Result<StateManager> {
        match &self.cli.state {
            Some(path) => StateManager::from_file(path),
            None => Ok(StateManager::in_memory()),
        }
    }
}
