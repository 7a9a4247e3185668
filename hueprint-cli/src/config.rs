//! Configuration loading using Figment
//!
//! Sources are merged in precedence order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global file: `<config dir>/hueprint/config.{toml,yaml,yml,json}`
//! 3. Project file: `./.hueprint.{toml,yaml,yml,json}`
//! 4. Environment variables prefixed `HUEPRINT_` (nested keys split on `__`)
//!
//! Command-line flags are applied on top by the caller.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Extensions probed for each config file location, lowest priority first.
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueprintConfig {
    /// Pattern size in pixels when neither `--size` nor `--preset` is given
    pub default_size: u32,
    /// Named pixel sizes for `--preset`
    pub presets: BTreeMap<String, u32>,
    /// Default output format
    pub format: OutputFormat,
}

impl Default for HueprintConfig {
    fn default() -> Self {
        let presets = [("xs", 16), ("sm", 24), ("md", 32), ("lg", 48), ("xl", 96)]
            .into_iter()
            .map(|(name, size)| (name.to_string(), size))
            .collect();
        Self {
            default_size: 32,
            presets,
            format: OutputFormat::Text,
        }
    }
}

impl HueprintConfig {
    /// Load from the standard global and project locations plus the environment.
    pub fn load() -> CliResult<Self> {
        let global = dirs::config_dir().map(|dir| dir.join("hueprint"));
        let project = std::env::current_dir()?;
        Self::load_from(global.as_deref(), &project)
    }

    /// Load using explicit global and project directories.
    pub fn load_from(global_dir: Option<&Path>, project_dir: &Path) -> CliResult<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(dir) = global_dir {
            figment = merge_files(figment, dir, "config");
        }
        figment = merge_files(figment, project_dir, ".hueprint");
        figment = figment.merge(Env::prefixed("HUEPRINT_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that could only produce invalid patterns.
    pub fn validate(&self) -> CliResult<()> {
        if self.default_size == 0 {
            return Err(CliError::invalid_config("default_size must be greater than zero"));
        }
        if let Some((name, _)) = self.presets.iter().find(|(_, size)| **size == 0) {
            return Err(CliError::invalid_config(format!(
                "preset '{name}' must be greater than zero"
            )));
        }
        Ok(())
    }

    /// Resolve the pattern size: explicit size, then preset, then the default.
    pub fn resolve_size(&self, size: Option<u32>, preset: Option<&str>) -> CliResult<u32> {
        if let Some(size) = size {
            return Ok(size);
        }
        match preset {
            Some(name) => self
                .presets
                .get(name)
                .copied()
                .ok_or_else(|| CliError::UnknownPreset {
                    name: name.to_string(),
                }),
            None => Ok(self.default_size),
        }
    }
}

fn merge_files(mut figment: Figment, dir: &Path, stem: &str) -> Figment {
    for ext in EXTENSIONS {
        let path: PathBuf = dir.join(format!("{stem}.{ext}"));
        if !path.is_file() {
            continue;
        }
        debug!("Loading configuration from {}", path.display());
        figment = match ext {
            "toml" => figment.merge(Toml::file(path)),
            "json" => figment.merge(Json::file(path)),
            _ => figment.merge(Yaml::file(path)),
        };
    }
    figment
}
