use std::{fs, path::Path, time::Duration};

use anyhow::{Context, bail};
use libgame::{Glyphs, KMAX, MAX_DIMENSION_LIMIT};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows and columns must stay below this, both when loading and designing.
    pub max_dimension: usize,

    /// Time between two generations in auto-run mode.
    pub tick_millis: u64,

    pub alive_glyph: char,
    pub dead_glyph: char,

    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        let glyphs = Glyphs::default();

        Self {
            max_dimension: KMAX,
            tick_millis: 2000,
            alive_glyph: glyphs.alive,
            dead_glyph: glyphs.dead,
            color: true,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config: Self =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_dimension < 2 {
            bail!("max_dimension must be at least 2");
        }

        if self.max_dimension > MAX_DIMENSION_LIMIT {
            bail!("max_dimension must be at most {MAX_DIMENSION_LIMIT}");
        }

        if self.alive_glyph == self.dead_glyph {
            bail!("alive_glyph and dead_glyph must differ");
        }

        Ok(())
    }

    pub fn glyphs(&self) -> Glyphs {
        Glyphs {
            alive: self.alive_glyph,
            dead: self.dead_glyph,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}
