//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key has a default, so an
//! empty file and no file at all behave the same:
//!
//! ```yaml
//! output: json        # text | json
//! generate:
//!   count: 10
//!   formatted: true
//!   seed: 42          # omit for entropy-seeded output
//! ```
//!
//! `BRDOC_OUTPUT` overrides `output`. Command-line flags override both.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Environment variable overriding [`CliConfig::output`].
pub const OUTPUT_ENV: &str = "BRDOC_OUTPUT";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per input.
    #[default]
    Text,
    /// One JSON object per input (JSON Lines).
    Json,
}

/// Defaults for `brdoc generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    /// How many identifiers to emit.
    pub count: usize,
    /// Emit the punctuated form instead of bare digits.
    pub formatted: bool,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 1,
            formatted: false,
            seed: None,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format for every subcommand.
    pub output: OutputFormat,
    /// Generator defaults.
    pub generate: GenerateConfig,
}

impl CliConfig {
    /// Load configuration from `path` (if given) and apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                let config = Self::from_yaml_str(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?;
                tracing::debug!(path = %path.display(), "loaded configuration file");
                config
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw)?;
        if config.generate.count == 0 {
            bail!("generate.count must be at least 1");
        }
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(raw) = lookup(OUTPUT_ENV) {
            self.output = <OutputFormat as ValueEnum>::from_str(raw.trim(), true)
                .map_err(|_| anyhow!("unsupported output format '{raw}' (expected text or json)"))
                .with_context(|| format!("invalid {OUTPUT_ENV}"))?;
            tracing::debug!(output = ?self.output, "output format overridden from environment");
        }
        Ok(())
    }
}
