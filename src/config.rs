use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Where one name list is read from and written to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListPair {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl ListPair {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    fn rebase(&mut self, base: &Path) {
        if self.source.is_relative() {
            self.source = base.join(&self.source);
        }
        if self.target.is_relative() {
            self.target = base.join(&self.target);
        }
    }
}

/// The two lists a build compiles. `Default` gives the built-in pairs,
/// relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    pub girls: ListPair,
    pub boys: ListPair,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            girls: ListPair::new("girls.csv", "girls.txt"),
            boys: ListPair::new("boys.csv", "boys.txt"),
        }
    }
}

impl BuildConfig {
    /// Reads a YAML config. Relative paths inside it resolve against the
    /// directory holding the file; omitted lists keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: BuildConfig = serde_yaml_bw::from_str(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.girls.rebase(base);
        config.boys.rebase(base);
        Ok(config)
    }
}
