use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Difficulty, GameMode};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub thinking_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GameMode::Pvc,
            difficulty: Difficulty::Medium,
            thinking_delay_ms: 500,
            seed: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }

    pub fn load(path: &str) -> Result<Config, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: Config = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Config validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
    }
}
