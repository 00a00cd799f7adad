use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".spellsuggest.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,

    #[serde(default = "default_word_column")]
    pub word_column: String,

    #[serde(default = "default_count_column")]
    pub count_column: String,

    /// Words seen fewer times than this are left out of the dictionary.
    #[serde(default)]
    pub min_frequency: u64,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("unigram_freq.csv")
}

fn default_word_column() -> String {
    "word".to_string()
}

fn default_count_column() -> String {
    "count".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            word_column: default_word_column(),
            count_column: default_count_column(),
            min_frequency: 0,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(dictionary: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(dictionary) = dictionary {
            config.dictionary = dictionary;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| crate::error::Error::config(e.to_string()))
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.dictionary != default_dictionary() {
            self.dictionary = other.dictionary;
        }
        if other.word_column != default_word_column() {
            self.word_column = other.word_column;
        }
        if other.count_column != default_count_column() {
            self.count_column = other.count_column;
        }
        if other.min_frequency != 0 {
            self.min_frequency = other.min_frequency;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellsuggest").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
