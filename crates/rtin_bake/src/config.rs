//! Configuration parsing for mesh baking.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration for a bake run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BakeConfig {
	/// Error thresholds in metres, one mesh per entry.
	pub max_errors: Vec<f64>,
	/// Build the error field level by level on the rayon pool.
	pub parallel_errors: bool,
	/// Embed the backfilled height grid in the output.
	pub include_terrain: bool,
	/// Pretty-print the JSON output.
	pub pretty: bool,
}

impl Default for BakeConfig {
	fn default() -> Self {
		Self {
			max_errors: vec![20.0],
			parallel_errors: false,
			include_terrain: true,
			pretty: false,
		}
	}
}

impl BakeConfig {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config: BakeConfig =
			toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;

		config.validate()?;
		Ok(config)
	}

	/// Reject threshold lists that cannot produce a mesh payload.
	pub fn validate(&self) -> Result<()> {
		if self.max_errors.is_empty() {
			anyhow::bail!("Config must have at least one max_error threshold");
		}
		if let Some(bad) = self.max_errors.iter().find(|e| !e.is_finite()) {
			anyhow::bail!("max_error thresholds must be finite, found {}", bad);
		}
		Ok(())
	}
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
