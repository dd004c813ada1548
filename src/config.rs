//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(
    name = "word-ladder",
    version,
    about = "Find the shortest word ladder between two words"
)]
pub struct Config {
    /// Dictionary file
    #[arg(long, env = "WORD_LADDER_WORDS", default_value = "Words.txt")]
    pub words: PathBuf,

    /// Layout of the dictionary file
    #[arg(long, value_enum, default_value = "text")]
    pub dictionary_format: DictionaryFormat,

    /// Build the graph from a [Vertex]/[Edges] file instead of a dictionary
    #[arg(long, conflicts_with = "dictionary_format")]
    pub graph: Option<PathBuf>,

    /// Print every edge before searching
    #[arg(long)]
    pub print_graph: bool,

    /// More log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// First word; prompted for when omitted
    pub start: Option<String>,

    /// Second word; prompted for when omitted
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DictionaryFormat {
    /// One word per line
    Text,
    /// CSV with a `word` column
    Csv,
}

impl Config {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
