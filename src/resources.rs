//! # Language Resources
//! Process-wide language data needed before any request is analysed:
//! the abbreviation list used by the sentence splitter and, optionally, a
//! custom valence lexicon that replaces the built-in VADER lexicon.
//!
//! Loading happens at most once per `Resources` value (`OnceLock`); every
//! later call returns the cached outcome, success or failure. A failed load
//! is reported as `WorkshopError::ResourceUnavailable` and callers degrade to
//! empty sequences instead of aborting.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::config::ResourceConfig;
use crate::error::WorkshopError;

pub const ABBREVIATIONS_FILE: &str = "abbreviations.txt";
pub const LEXICON_FILE: &str = "sentiment_lexicon.json";

static EMBEDDED_ABBREVIATIONS: &str = include_str!("../data/abbreviations.txt");

/// Loaded, read-only language data shared by the tokenizer and the oracle.
#[derive(Debug, Default)]
pub struct LanguageData {
    /// Lowercase abbreviations without their final period ("mr", "e.g").
    pub abbreviations: HashSet<String>,
    /// Custom word -> valence map, roughly in [-4, 4]. `None` means the
    /// built-in VADER lexicon is used.
    pub lexicon: Option<HashMap<String, f64>>,
}

impl LanguageData {
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(&word.to_lowercase())
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.lexicon.as_ref()?.get(word).copied()
    }
}

/// Where language data comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceSource {
    Embedded,
    Directory(PathBuf),
    /// Always fails to load; used to simulate a bare runtime.
    Missing(String),
}

#[derive(Debug)]
pub struct Resources {
    source: ResourceSource,
    loaded: OnceLock<Result<Arc<LanguageData>, WorkshopError>>,
}

impl Resources {
    pub fn new(source: ResourceSource) -> Self {
        Self {
            source,
            loaded: OnceLock::new(),
        }
    }

    pub fn from_config(cfg: &ResourceConfig) -> Self {
        match &cfg.data_dir {
            Some(dir) => Self::new(ResourceSource::Directory(dir.clone())),
            None => Self::new(ResourceSource::Embedded),
        }
    }

    /// Embedded data, already loaded.
    pub fn ready_embedded() -> Self {
        let r = Self::new(ResourceSource::Embedded);
        let _ = r.ensure_loaded();
        r
    }

    /// Resources that report `ResourceUnavailable` on every access.
    pub fn missing(reason: impl Into<String>) -> Self {
        let r = Self::new(ResourceSource::Missing(reason.into()));
        let _ = r.ensure_loaded();
        r
    }

    pub fn source(&self) -> &ResourceSource {
        &self.source
    }

    /// Load once; subsequent calls return the cached result.
    pub fn ensure_loaded(&self) -> Result<Arc<LanguageData>, WorkshopError> {
        self.loaded
            .get_or_init(|| {
                let out = load(&self.source).map(Arc::new);
                match &out {
                    Ok(data) => info!(
                        target: "resources",
                        source = ?self.source,
                        abbreviations = data.abbreviations.len(),
                        custom_lexicon = data.lexicon.as_ref().map_or(0, |l| l.len()),
                        "language resources ready"
                    ),
                    Err(e) => warn!(target: "resources", source = ?self.source, error = %e, "language resources unavailable"),
                }
                out
            })
            .clone()
    }

    /// True once a load attempt has succeeded. Never triggers a load.
    pub fn is_ready(&self) -> bool {
        matches!(self.loaded.get(), Some(Ok(_)))
    }
}

fn load(source: &ResourceSource) -> Result<LanguageData, WorkshopError> {
    match source {
        ResourceSource::Embedded => Ok(LanguageData {
            abbreviations: parse_abbreviations(EMBEDDED_ABBREVIATIONS),
            lexicon: None,
        }),
        ResourceSource::Directory(dir) => load_dir(dir),
        ResourceSource::Missing(reason) => {
            Err(WorkshopError::unavailable("language data", reason.clone()))
        }
    }
}

fn load_dir(dir: &Path) -> Result<LanguageData, WorkshopError> {
    let read = |name: &str| {
        let p = dir.join(name);
        fs::read_to_string(&p)
            .map_err(|e| WorkshopError::unavailable(name, format!("{}: {e}", p.display())))
    };
    let abbreviations = parse_abbreviations(&read(ABBREVIATIONS_FILE)?);
    // the lexicon file is optional; without it the oracle falls back to VADER
    let lexicon = if dir.join(LEXICON_FILE).exists() {
        Some(parse_lexicon(&read(LEXICON_FILE)?)?)
    } else {
        None
    };
    Ok(LanguageData {
        abbreviations,
        lexicon,
    })
}

fn parse_abbreviations(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(|l| l.trim_end_matches('.').to_lowercase())
        .collect()
}

fn parse_lexicon(raw: &str) -> Result<HashMap<String, f64>, WorkshopError> {
    let map: HashMap<String, f64> = serde_json::from_str(raw)
        .map_err(|e| WorkshopError::unavailable(LEXICON_FILE, format!("malformed lexicon: {e}")))?;
    Ok(map
        .into_iter()
        .map(|(k, v)| (k.to_lowercase(), v))
        .collect())
}
