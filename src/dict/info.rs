use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::corrector::frequency::FrequencyTable;

#[derive(Debug, Clone, Serialize)]
pub struct DictionaryInfo {
    pub path: PathBuf,
    pub word_count: usize,
    pub total_frequency: u64,
    pub size_bytes: Option<u64>,
    pub top_words: Vec<(String, u64)>,
}

impl DictionaryInfo {
    pub fn from_table(path: &Path, table: &FrequencyTable, top: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            word_count: table.len(),
            total_frequency: table.total_frequency(),
            size_bytes: std::fs::metadata(path).ok().map(|m| m.len()),
            top_words: table
                .most_frequent(top)
                .into_iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect(),
        }
    }
}

pub fn show_info(info: &DictionaryInfo, colored: bool) {
    if colored {
        println!("{}", "Dictionary".bold());
    } else {
        println!("Dictionary");
    }
    println!("  Path: {}", info.path.display());
    if let Some(size) = info.size_bytes {
        println!("  Size: {} KB", size / 1024);
    }
    println!("  Words: {}", info.word_count);
    println!("  Total frequency: {}", info.total_frequency);

    if info.top_words.is_empty() {
        return;
    }

    println!();
    if colored {
        println!("{}", format!("Top {} words:", info.top_words.len()).bold());
    } else {
        println!("Top {} words:", info.top_words.len());
    }

    let width = info.top_words.iter().map(|(w, _)| w.len()).max().unwrap_or(0);
    for (rank, (word, count)) in info.top_words.iter().enumerate() {
        if colored {
            println!(
                "  {:>3}. {} {}",
                rank + 1,
                format!("{:<width$}", word, width = width).cyan(),
                count.to_string().dimmed()
            );
        } else {
            println!("  {:>3}. {:<width$} {}", rank + 1, word, count, width = width);
        }
    }
}
