//! CSV frequency dictionary loading.
//!
//! The expected layout is a header row followed by one word per row:
//! ```csv
//! word,count
//! the,23135851162
//! of,13151942776
//! ```
//! Extra columns are ignored; the word and count columns are located by name.
//! Words are lowercased, and rows repeating a word (in any casing) add their
//! counts together.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::config::Config;
use crate::corrector::frequency::FrequencyTable;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    word_column: String,
    count_column: String,
    min_frequency: u64,
}

impl Default for DictionaryLoader {
    fn default() -> Self {
        Self {
            word_column: "word".to_string(),
            count_column: "count".to_string(),
            min_frequency: 0,
        }
    }
}

impl DictionaryLoader {
    pub fn from_config(config: &Config) -> Self {
        Self {
            word_column: config.word_column.clone(),
            count_column: config.count_column.clone(),
            min_frequency: config.min_frequency,
        }
    }

    pub fn with_columns(mut self, word_column: &str, count_column: &str) -> Self {
        self.word_column = word_column.to_string();
        self.count_column = count_column.to_string();
        self
    }

    pub fn with_min_frequency(mut self, min_frequency: u64) -> Self {
        self.min_frequency = min_frequency;
        self
    }

    /// Load a frequency table from a CSV file.
    pub fn load(&self, path: &Path) -> Result<FrequencyTable> {
        let file = File::open(path).map_err(|e| {
            Error::data_unavailable(format!("{} could not be opened: {}", path.display(), e))
        })?;

        let table = self
            .load_from_reader(file)
            .map_err(|e| match e {
                Error::DataUnavailable(msg) => {
                    Error::data_unavailable(format!("{}: {}", path.display(), msg))
                }
                other => other,
            })?;

        info!(
            path = %path.display(),
            words = table.len(),
            total = table.total_frequency(),
            "dictionary loaded"
        );
        Ok(table)
    }

    /// Load a frequency table from any CSV source.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<FrequencyTable> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::data_unavailable(format!("failed to read CSV header: {e}")))?
            .clone();

        let word_idx = column_index(&headers, &self.word_column)?;
        let count_idx = column_index(&headers, &self.count_column)?;
        debug!(word_idx, count_idx, "resolved dictionary columns");

        let mut pairs = Vec::new();
        for (row, record) in reader.records().enumerate() {
            // Header is line 1.
            let line = row + 2;
            let record = record
                .map_err(|e| Error::data_unavailable(format!("line {line}: {e}")))?;

            let word = record.get(word_idx).unwrap_or("");
            let count = record.get(count_idx).unwrap_or("");
            let count: u64 = count.parse().map_err(|_| {
                Error::data_unavailable(format!("line {line}: invalid count '{count}' for '{word}'"))
            })?;

            pairs.push((word.to_string(), count));
        }

        debug!(rows = pairs.len(), "read dictionary rows");
        FrequencyTable::from_pairs(pairs)?.retain_min_frequency(self.min_frequency)
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::data_unavailable(format!("missing '{name}' column")))
}
