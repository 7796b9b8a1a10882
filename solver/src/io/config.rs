//! Solver configuration stored in `solver.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Solver configuration (TOML).
///
/// The file is optional and intended to be edited by humans. Missing fields
/// default to sensible values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SolverConfig {
    /// Directory holding `day<NN>.txt` input files.
    pub inputs_dir: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            inputs_dir: "inputs".to_string(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if self.inputs_dir.trim().is_empty() {
            return Err(anyhow!("inputs_dir must be non-empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SolverConfig::default()`.
pub fn load_config(path: &Path) -> Result<SolverConfig> {
    if !path.exists() {
        let cfg = SolverConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SolverConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SolverConfig::default());
    }

    #[test]
    fn load_reads_inputs_dir() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("solver.toml");
        fs::write(&path, "inputs_dir = \"puzzles\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.inputs_dir, "puzzles");
    }

    #[test]
    fn empty_inputs_dir_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("solver.toml");
        fs::write(&path, "inputs_dir = \"\"\n").expect("write");
        assert!(load_config(&path).is_err());
    }
}
