//! Word frequency table used to rank candidate corrections.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// An immutable mapping from lowercase word to occurrence count.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    words: HashMap<String, u64>,
    total_count: u64,
}

impl FrequencyTable {
    /// Build a table from `(word, count)` pairs.
    ///
    /// Keys are trimmed and lowercased; keys that collide after lowercasing
    /// have their counts summed. Fails with [`Error::DataUnavailable`] if no
    /// entries remain.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut words: HashMap<String, u64> = HashMap::new();

        for (word, count) in pairs {
            let normalized = word.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            let entry = words.entry(normalized).or_insert(0);
            *entry = entry.saturating_add(count);
        }

        if words.is_empty() {
            return Err(Error::data_unavailable("frequency table is empty"));
        }

        let total_count = words.values().fold(0u64, |acc, &c| acc.saturating_add(c));

        Ok(Self { words, total_count })
    }

    /// Drop entries whose count is below `min_frequency`.
    ///
    /// Fails if nothing is left, so a table never becomes empty.
    pub fn retain_min_frequency(mut self, min_frequency: u64) -> Result<Self> {
        if min_frequency == 0 {
            return Ok(self);
        }

        self.words.retain(|_, &mut count| count >= min_frequency);
        if self.words.is_empty() {
            return Err(Error::data_unavailable(format!(
                "no words with frequency >= {min_frequency}"
            )));
        }
        self.total_count = self
            .words
            .values()
            .fold(0u64, |acc, &c| acc.saturating_add(c));

        Ok(self)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.frequency_of(word).is_some()
    }

    pub fn frequency_of(&self, word: &str) -> Option<u64> {
        match self.words.get(word) {
            Some(&count) => Some(count),
            None if word.chars().any(char::is_uppercase) => {
                self.words.get(&word.to_lowercase()).copied()
            }
            None => None,
        }
    }

    /// Keep only the candidates present in the table.
    pub fn known<I, S>(&self, candidates: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        candidates
            .into_iter()
            .filter(|c| self.contains(c.as_ref()))
            .map(|c| c.as_ref().to_lowercase())
            .collect()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed table; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Sum of all counts.
    pub fn total_frequency(&self) -> u64 {
        self.total_count
    }

    /// The `limit` most frequent words, highest first. Equal counts are
    /// ordered alphabetically.
    pub fn most_frequent(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .words
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(limit);
        entries
    }
}
