use crate::corrector::Correction;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Wall-clock time spent correcting a batch of words.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub elapsed: Duration,
    pub words: usize,
}

impl Timing {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn words_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.words as f64 / secs
        } else {
            0.0
        }
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Time : {:.6}ms {:.1} words per second",
            self.elapsed_ms(),
            self.words_per_second()
        )
    }
}

#[derive(Debug, Serialize)]
struct JsonCorrection<'a> {
    word: &'a str,
    suggestion: Option<&'a str>,
    resolved: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonTiming {
    elapsed_ms: f64,
    words_per_second: f64,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    total_words: usize,
    corrected: usize,
    results: Vec<JsonCorrection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<JsonTiming>,
}

pub fn print_corrections(
    results: &[Correction],
    timing: Option<Timing>,
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_corrections(results, timing, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json_corrections(results, timing),
    }
}

fn print_text_corrections(results: &[Correction], timing: Option<Timing>, colored_output: bool) {
    for correction in results {
        println!("{}", format_correction(correction, colored_output));
    }

    if let Some(timing) = timing {
        if colored_output {
            println!("{}", timing.to_string().dimmed());
        } else {
            println!("{}", timing);
        }
    }
}

/// One `<word> <suggestion>` line. Words without a suggestion are echoed.
pub fn format_correction(correction: &Correction, colored: bool) -> String {
    let resolved = correction.resolved();
    if !colored {
        return format!("{} {}", correction.word, resolved);
    }

    let resolved = match &correction.suggestion {
        None => resolved.red().to_string(),
        Some(_) if correction.is_changed() => resolved.green().bold().to_string(),
        Some(_) => resolved.normal().to_string(),
    };
    format!("{} {}", correction.word, resolved)
}

fn print_json_corrections(results: &[Correction], timing: Option<Timing>) -> Result<()> {
    let output = JsonOutput {
        total_words: results.len(),
        corrected: results.iter().filter(|c| c.is_changed()).count(),
        results: results
            .iter()
            .map(|c| JsonCorrection {
                word: &c.word,
                suggestion: c.suggestion.as_deref(),
                resolved: c.resolved(),
            })
            .collect(),
        timing: timing.map(|t| JsonTiming {
            elapsed_ms: t.elapsed_ms(),
            words_per_second: t.words_per_second(),
        }),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
