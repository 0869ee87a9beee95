use anyhow::{Context, Error};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use wordpiece::{TrainerConfig, WordPieceTrainer};

/// Build a WordPiece vocabulary from text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text to train on.
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the training text from a file instead.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Target vocabulary size; overrides the config file. Zero is honored.
    #[arg(long)]
    pub vocab_size: Option<usize>,

    /// Optional TOML trainer config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the vocabulary as a JSON array.
    #[arg(long, default_value = "false")]
    pub json: bool,
}

/// Training text from `--input` or the positional argument; clap guarantees exactly one.
fn read_text(args: &Args) -> Result<String, Error> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        None => args.text.clone().context("No training text given"),
    }
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TrainerConfig::load(path)?,
        None => TrainerConfig::default(),
    };
    if let Some(vocab_size) = args.vocab_size {
        config = config.with_vocab_size(vocab_size);
    }

    let text = read_text(&args)?;
    let results = WordPieceTrainer::new(&text, config).train();

    if args.json {
        println!("{}", serde_json::to_string(&results.vocab)?);
    } else {
        println!("{:?}", results.vocab);
    }
    Ok(())
}
