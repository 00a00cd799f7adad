use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellsuggest::cli::output::{OutputFormat, Timing};
use spellsuggest::dict::{info, DictionaryInfo, DictionaryLoader};
use spellsuggest::{cli, Config, Corrector, FrequencyTable};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "spellsuggest")]
#[command(version, about = "Suggest the correct spelling of words", long_about = None)]
struct Cli {
    /// Words to spell check
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Word frequency CSV file
    #[arg(short, long, env = "SPELLSUGGEST_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Do not print the timing line
    #[arg(long)]
    no_timing: bool,

    /// Log dictionary loading and correction details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary inspection
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// Show dictionary statistics
    Info {
        /// Number of most frequent words to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellsuggest", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.dictionary.clone())?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config, !cli.no_color);
    }

    if cli.words.is_empty() {
        anyhow::bail!("No words specified. Use --help for usage information.");
    }

    let corrector = Corrector::new(load_table(&config)?);

    let start = Instant::now();
    let results = corrector.correct_all(&cli.words);
    let timing = Timing {
        elapsed: start.elapsed(),
        words: cli.words.len(),
    };

    cli::output::print_corrections(
        &results,
        (!cli.no_timing).then_some(timing),
        !cli.no_color,
        &cli.format,
    )
}

fn load_table(config: &Config) -> Result<FrequencyTable> {
    DictionaryLoader::from_config(config)
        .load(&config.dictionary)
        .with_context(|| format!("Failed to load dictionary: {}", config.dictionary.display()))
}

fn handle_command(command: Commands, config: &Config, colored: bool) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::Info { top } => {
                let corrector = Corrector::new(load_table(config)?);
                let info = DictionaryInfo::from_table(&config.dictionary, corrector.table(), top);
                info::show_info(&info, colored);
            }
        },
    }
    Ok(())
}
