use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use word_ladder::config::{Config, DictionaryFormat};
use word_ladder::data_cleaning::{normalize, read_words_csv, read_words_file};
use word_ladder::graph_file::read_graph_file;
use word_ladder::render::{adjacency_listing, describe_result};
use word_ladder::{build_graph, shortest_path, Graph, LadderError, Result};

fn main() {
    let config = Config::parse();
    init_logging(config.log_level());

    if let Err(e) = run(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(level: tracing::Level) {
    // RUST_LOG, when set, overrides -v
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_graph(config: &Config) -> Result<Graph> {
    if let Some(path) = &config.graph {
        return read_graph_file(path);
    }
    let words = match config.dictionary_format {
        DictionaryFormat::Text => read_words_file(&config.words)?,
        DictionaryFormat::Csv => read_words_csv(&config.words)?,
    };
    Ok(build_graph(&words))
}

fn run(config: &Config) -> Result<()> {
    let graph = load_graph(config)?;

    if config.print_graph {
        println!("{}", adjacency_listing(&graph));
    }

    println!("Shortest path");
    println!("-------------------");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let start = word_or_prompt(config.start.as_deref(), "first word", &mut input, &mut output)?;
    let goal = word_or_prompt(config.goal.as_deref(), "second word", &mut input, &mut output)?;

    let path = shortest_path(&graph, &start, &goal);
    info!(%start, %goal, hops = ?path.as_ref().map(|p| p.len() - 1), "search finished");

    if path.is_some() {
        println!("\nShortest path:");
    }
    println!("{}", describe_result(&start, &goal, path.as_deref()));
    Ok(())
}

/// Uses the word given on the command line, or asks for `field` on stdin.
fn word_or_prompt<R: BufRead, W: Write>(
    given: Option<&str>,
    field: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if let Some(word) = given {
        return Ok(normalize(word));
    }

    let mut label = field.chars();
    let prompt = match label.next() {
        Some(first) => format!("{}{}: ", first.to_uppercase(), label.as_str()), // "First word: "
        None => String::new(),
    };
    write!(output, "{prompt}")
        .and_then(|()| output.flush())
        .map_err(|e| LadderError::io("<stdout>", e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| LadderError::io("<stdin>", e))?;
    if read == 0 {
        return Err(LadderError::MissingInput(field.to_string())); // stdin closed
    }
    Ok(normalize(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_word_from_arguments_is_normalized() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let word = word_or_prompt(Some(" CAT "), "first word", &mut input, &mut output).unwrap();
        assert_eq!(word, "cat");
        assert!(output.is_empty()); // no prompt shown
    }

    #[test]
    fn test_word_from_prompt() {
        let mut input = Cursor::new("  Dog\nignored\n");
        let mut output = Vec::new();
        let word = word_or_prompt(None, "second word", &mut input, &mut output).unwrap();
        assert_eq!(word, "dog");
        assert_eq!(String::from_utf8(output).unwrap(), "Second word: ");
    }

    #[test]
    fn test_prompt_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = word_or_prompt(None, "first word", &mut input, &mut output).unwrap_err();
        assert!(matches!(err, LadderError::MissingInput(ref what) if what == "first word"));
        assert_eq!(String::from_utf8(output).unwrap(), "First word: ");
    }

    #[test]
    fn test_load_graph_from_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("Words.txt");
        std::fs::write(&words, "cat\ncot\ndot\n").unwrap();

        let config = Config::try_parse_from(["word-ladder", "--words", words.to_str().unwrap()]).unwrap();
        let graph = load_graph(&config).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_load_graph_from_graph_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("graph.txt");
        std::fs::write(&file, "[Vertex]\na,b\n[Edges]\na:b\n").unwrap();

        let config = Config::try_parse_from(["word-ladder", "--graph", file.to_str().unwrap()]).unwrap();
        let graph = load_graph(&config).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }
}
