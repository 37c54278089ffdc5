// src/config/workshop.rs
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WorkshopError;

// --- env defaults & names ---
pub const DEFAULT_WORKSHOP_CONFIG_PATH: &str = "config/workshop.toml";

pub const ENV_WORKSHOP_CONFIG_PATH: &str = "WORKSHOP_CONFIG_PATH";
pub const ENV_WORKSHOP_WINDOW_SIZE: &str = "WORKSHOP_WINDOW_SIZE";
pub const ENV_WORKSHOP_DATA_DIR: &str = "WORKSHOP_DATA_DIR";

pub const MIN_WINDOW_SIZE: usize = 10;
pub const MAX_WINDOW_SIZE: usize = 100;
pub const WINDOW_SIZE_STEP: usize = 10;
pub const DEFAULT_WINDOW_SIZE: usize = 50;

/// Window length for the windowed type-token ratio.
/// Always within 10..=100 and a multiple of 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct WindowSize(usize);

impl WindowSize {
    pub fn new(size: usize) -> Result<Self, WorkshopError> {
        let in_range = (MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&size);
        if in_range && size % WINDOW_SIZE_STEP == 0 {
            Ok(Self(size))
        } else {
            Err(WorkshopError::InvalidWindowSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self(DEFAULT_WINDOW_SIZE)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = WorkshopError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WindowSize> for usize {
    fn from(w: WindowSize) -> Self {
        w.0
    }
}

fn default_top_n() -> usize {
    10
}
fn default_longest_words() -> usize {
    5
}
fn default_longest_sentences() -> usize {
    2
}

/// Per-request analysis knobs. Only `window_size` is exposed to the dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub window_size: WindowSize,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_longest_words")]
    pub longest_words: usize,
    #[serde(default = "default_longest_sentences")]
    pub longest_sentences: usize,
    /// Keep punctuation tokens (".", ",", "—") in counts and ratios.
    #[serde(default)]
    pub count_punctuation: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: WindowSize::default(),
            top_n: default_top_n(),
            longest_words: default_longest_words(),
            longest_sentences: default_longest_sentences(),
            count_punctuation: false,
        }
    }
}

impl AnalysisConfig {
    /// Copy with a different window size (the only per-request override).
    pub fn with_window_size(&self, window_size: WindowSize) -> Self {
        Self {
            window_size,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceConfig {
    /// Directory holding `abbreviations.txt` and, optionally, a custom
    /// `sentiment_lexicon.json`.
    /// When unset, the embedded language data is used.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkshopConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub resources: ResourceConfig,
}

impl WorkshopConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let cfg: WorkshopConfig =
            toml::from_str(toml_str).map_err(|e| anyhow!("invalid workshop config: {e}"))?;
        Ok(cfg)
    }

    /// Load from an explicit path.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading workshop config from {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load using env var + fallbacks, then apply env overrides:
    /// 1) $WORKSHOP_CONFIG_PATH (must exist)
    /// 2) config/workshop.toml
    /// 3) built-in defaults
    pub fn load_default() -> anyhow::Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_WORKSHOP_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!(
                    "{ENV_WORKSHOP_CONFIG_PATH} points to non-existent path {}",
                    pb.display()
                ));
            }
            Self::load_from_file(&pb)?
        } else {
            let default_path = PathBuf::from(DEFAULT_WORKSHOP_CONFIG_PATH);
            if default_path.exists() {
                Self::load_from_file(&default_path)?
            } else {
                Self::default()
            }
        };

        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Some(size) = parse_window_env(std::env::var(ENV_WORKSHOP_WINDOW_SIZE).ok())? {
            self.analysis.window_size = size;
        }
        if let Ok(dir) = std::env::var(ENV_WORKSHOP_DATA_DIR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                self.resources.data_dir = Some(PathBuf::from(dir));
            }
        }
        Ok(())
    }
}

// parse optional window size env; present-but-invalid is an error
fn parse_window_env(raw: Option<String>) -> anyhow::Result<Option<WindowSize>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{ENV_WORKSHOP_WINDOW_SIZE} is not a number: {raw:?}"))?;
    Ok(Some(WindowSize::new(n)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn window_size_bounds_and_step() {
        assert!(WindowSize::new(10).is_ok());
        assert!(WindowSize::new(100).is_ok());
        assert_eq!(WindowSize::new(0), Err(WorkshopError::InvalidWindowSize(0)));
        assert_eq!(
            WindowSize::new(110),
            Err(WorkshopError::InvalidWindowSize(110))
        );
        assert_eq!(WindowSize::new(25), Err(WorkshopError::InvalidWindowSize(25)));
        assert_eq!(WindowSize::default().get(), 50);
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let cfg = WorkshopConfig::from_toml_str("[analysis]\nwindow_size = 30\n").unwrap();
        assert_eq!(cfg.analysis.window_size.get(), 30);
        assert_eq!(cfg.analysis.top_n, 10);
        assert_eq!(cfg.analysis.longest_words, 5);
        assert_eq!(cfg.analysis.longest_sentences, 2);
        assert!(!cfg.analysis.count_punctuation);
        assert!(cfg.resources.data_dir.is_none());
    }

    #[test]
    fn toml_rejects_bad_window_size() {
        assert!(WorkshopConfig::from_toml_str("[analysis]\nwindow_size = 35\n").is_err());
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();
        env::remove_var(ENV_WORKSHOP_CONFIG_PATH);
        env::remove_var(ENV_WORKSHOP_WINDOW_SIZE);
        env::remove_var(ENV_WORKSHOP_DATA_DIR);

        // No files in the temp CWD -> defaults
        let cfg = WorkshopConfig::load_default().unwrap();
        assert_eq!(cfg, WorkshopConfig::default());

        // Explicit path wins; window override applies on top
        let p = tmp.path().join("custom.toml");
        fs::write(&p, "[analysis]\ntop_n = 3\nwindow_size = 20\n").unwrap();
        env::set_var(ENV_WORKSHOP_CONFIG_PATH, p.display().to_string());
        env::set_var(ENV_WORKSHOP_WINDOW_SIZE, "70");
        let cfg = WorkshopConfig::load_default().unwrap();
        assert_eq!(cfg.analysis.top_n, 3);
        assert_eq!(cfg.analysis.window_size.get(), 70);

        env::set_var(ENV_WORKSHOP_WINDOW_SIZE, "75");
        assert!(WorkshopConfig::load_default().is_err());

        env::remove_var(ENV_WORKSHOP_WINDOW_SIZE);
        env::set_var(ENV_WORKSHOP_CONFIG_PATH, tmp.path().join("nope.toml"));
        assert!(WorkshopConfig::load_default().is_err());

        env::remove_var(ENV_WORKSHOP_CONFIG_PATH);
        env::set_current_dir(&old).unwrap();
    }
}
