//! Configuration for the tagger: background symbol and tagset names.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::NumtagError;

/// Default rendering of the "no category" label.
pub const DEFAULT_BACKGROUND: &str = "O";

/// Part-of-speech tag names the rules key on.
///
/// Defaults follow the Penn Treebank tagset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tagset {
    /// Cardinal number tag. Also assigned to digit-only tokens by the pre-tagger.
    pub numeric: String,
    pub comma: String,
    /// Coordinating conjunction.
    pub conjunction: String,
    /// Common, plural and proper noun tags.
    pub nouns: Vec<String>,
    pub adjective: String,
    pub preposition: String,
}

impl Default for Tagset {
    fn default() -> Self {
        Self {
            numeric: "CD".to_string(),
            comma: ",".to_string(),
            conjunction: "CC".to_string(),
            nouns: vec!["NN".to_string(), "NNS".to_string(), "NNP".to_string()],
            adjective: "JJ".to_string(),
            preposition: "IN".to_string(),
        }
    }
}

/// Coarse class of a part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosClass {
    Numeric,
    Comma,
    Conjunction,
    Noun,
    Adjective,
    Preposition,
    Other,
}

impl Tagset {
    pub fn classify(&self, tag: &str) -> PosClass {
        if tag == self.numeric {
            PosClass::Numeric
        } else if tag == self.comma {
            PosClass::Comma
        } else if tag == self.conjunction {
            PosClass::Conjunction
        } else if self.nouns.iter().any(|n| n == tag) {
            PosClass::Noun
        } else if tag == self.adjective {
            PosClass::Adjective
        } else if tag == self.preposition {
            PosClass::Preposition
        } else {
            PosClass::Other
        }
    }

    pub fn validate(&self) -> Result<(), NumtagError> {
        let named = [
            ("numeric", &self.numeric),
            ("comma", &self.comma),
            ("conjunction", &self.conjunction),
            ("adjective", &self.adjective),
            ("preposition", &self.preposition),
        ];
        for (field, tag) in named {
            if tag.is_empty() {
                return Err(NumtagError::Config(format!(
                    "tagset.{} must not be empty",
                    field
                )));
            }
        }
        if self.nouns.iter().any(|n| n.is_empty()) {
            return Err(NumtagError::Config(
                "tagset.nouns must not contain empty tags".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Label written for tokens with no category.
    pub background: String,
    pub tagset: Tagset,
    /// File this config was loaded from, if any.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND.to_string(),
            tagset: Tagset::default(),
            source_path: None,
        }
    }
}

impl Config {
    /// Load from `path` when given, otherwise use defaults. Env overrides apply either way.
    pub fn load(path: Option<&Path>) -> Result<Self, NumtagError> {
        let config = match path {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides();
        config.tagset.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    /// Format is chosen by extension: TOML, YAML, otherwise JSON.
    pub fn load_from_path(path: &Path) -> Result<Self, NumtagError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            NumtagError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents)
                .map_err(|e| NumtagError::Config(format!("Failed to parse TOML config: {}", e)))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| NumtagError::Config(format!("Failed to parse YAML config: {}", e)))?,
            _ => serde_json::from_str(&contents)
                .map_err(|e| NumtagError::Config(format!("Failed to parse JSON config: {}", e)))?,
        };

        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_env_overrides(mut self) -> Self {
        // NUMTAG_BACKGROUND - label for untagged tokens
        if let Ok(background) = env::var("NUMTAG_BACKGROUND") {
            if !background.is_empty() {
                self.background = background;
            }
        }
        self
    }

    pub fn to_toml(&self) -> Result<String, NumtagError> {
        toml::to_string_pretty(self).map_err(|e| NumtagError::Config(e.to_string()))
    }
}
