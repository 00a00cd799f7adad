pub mod edits;
pub mod frequency;

use std::cmp::Ordering;
use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

use edits::generate_edits;
use frequency::FrequencyTable;

/// Suggestion for a single query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub word: String,
    pub suggestion: Option<String>,
}

impl Correction {
    /// The suggestion, or the original word when none was found.
    pub fn resolved(&self) -> &str {
        self.suggestion.as_deref().unwrap_or(&self.word)
    }

    /// Whether the resolved word differs from the query.
    pub fn is_changed(&self) -> bool {
        self.suggestion
            .as_deref()
            .is_some_and(|s| s != self.word)
    }
}

pub struct Corrector {
    table: FrequencyTable,
}

impl Corrector {
    pub fn new(table: FrequencyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Find the most probable spelling of `word` within two edits.
    ///
    /// Returns the lowercased word itself when it is known, otherwise the
    /// most frequent known word at edit distance 1, then at edit distance 2.
    /// Equal frequencies resolve to the alphabetically first word.
    /// `None` means no known word is within reach.
    pub fn find_correction(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();

        if self.table.contains(&word) {
            return Some(word);
        }

        let first = generate_edits(&word);
        let known = self.table.known(&first);
        trace!(word = %word, candidates = first.len(), known = known.len(), "depth 1");
        if let Some(best) = self.most_frequent(known) {
            debug!(word = %word, suggestion = %best, distance = 1, "correction found");
            return Some(best);
        }

        // Second-level edits are filtered as they are produced instead of
        // collecting their union first.
        let mut known = HashSet::new();
        for candidate in &first {
            known.extend(
                generate_edits(candidate)
                    .into_iter()
                    .filter(|c| self.table.contains(c)),
            );
        }
        trace!(word = %word, known = known.len(), "depth 2");

        let best = self.most_frequent(known);
        match &best {
            Some(best) => debug!(word = %word, suggestion = %best, distance = 2, "correction found"),
            None => debug!(word = %word, "no correction found"),
        }
        best
    }

    /// Correct every word of a batch, preserving input order.
    pub fn correct_all<S>(&self, words: &[S]) -> Vec<Correction>
    where
        S: AsRef<str> + Sync,
    {
        words
            .par_iter()
            .map(|word| Correction {
                word: word.as_ref().to_string(),
                suggestion: self.find_correction(word.as_ref()),
            })
            .collect()
    }

    fn most_frequent(&self, candidates: HashSet<String>) -> Option<String> {
        candidates.into_iter().max_by(|a, b| self.rank(a, b))
    }

    /// Higher frequency ranks higher; on equal frequency the word that sorts
    /// first ranks higher.
    fn rank(&self, a: &str, b: &str) -> Ordering {
        self.table
            .frequency_of(a)
            .cmp(&self.table.frequency_of(b))
            .then_with(|| b.cmp(a))
    }
}
