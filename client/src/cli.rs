use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "life", about = "Conway's Game of Life in the terminal")]
pub struct Args {
    /// JSON config file. Missing fields keep their defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid file to load before the first prompt.
    #[arg(long)]
    pub load: Option<String>,

    /// Milliseconds between generations in auto-run mode.
    #[arg(long)]
    pub tick_millis: Option<u64>,
}

impl Args {
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(tick_millis) = self.tick_millis {
            config.tick_millis = tick_millis;
        }

        Ok(config)
    }
}
