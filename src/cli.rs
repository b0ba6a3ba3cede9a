use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::{GameConfig, GameState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u32>,
}

/// Parse `--config <path>` and `--seed <u32>`; `args` excludes the program name.
pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut cli = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                cli.config_path = Some(PathBuf::from(v));
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                cli.seed = Some(seed);
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(cli)
}

impl CliConfig {
    /// Load the configuration file (or defaults) and create an unstarted game.
    ///
    /// Without `--seed` the seed comes from the clock.
    pub fn build_game(&self) -> Result<GameState> {
        let config = match &self.config_path {
            Some(path) => GameConfig::load(path)
                .map_err(|e| anyhow!("config {}: {}", path.display(), e))?,
            None => GameConfig::default(),
        };
        let seed = self.seed.unwrap_or_else(clock_seed);
        Ok(GameState::with_config(&config, seed)?)
    }
}

fn clock_seed() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
