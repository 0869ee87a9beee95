use crate::corpus::{count_words, WordCounts};
use crate::scoring::{best_pair, score_pairs};
use crate::segmentation::Segmentations;
use crate::symbol::{Pair, Symbol};
use crate::vocab::Vocabulary;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Target vocabulary size used when none is configured.
pub const DEFAULT_VOCAB_SIZE: usize = 40;

/// Options for [`WordPieceTrainer`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerConfig {
    /// Stop once the vocabulary holds this many symbols.
    ///
    /// Zero is honored: the starting vocabulary is returned unchanged.
    pub vocab_size: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            vocab_size: DEFAULT_VOCAB_SIZE,
        }
    }
}

impl TrainerConfig {
    pub fn with_vocab_size(self, vocab_size: usize) -> Self {
        Self { vocab_size }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse trainer config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
    }
}

/// One accepted merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub pair: Pair,
    pub score: f64,
    /// The symbol appended to the vocabulary.
    pub symbol: Symbol,
}

/// Output of [`WordPieceTrainer::train`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainResults {
    /// Final vocabulary, descending code-point order. May contain duplicates.
    pub vocab: Vec<Symbol>,
    /// Accepted merges in the order they were made.
    pub merges: Vec<Merge>,
    /// True when training stopped because no pair was left to merge.
    pub exhausted: bool,
}

impl TrainResults {
    pub fn reached_size(&self) -> usize {
        self.vocab.len()
    }
}

/// State of a single WordPiece training run.
pub struct WordPieceTrainer {
    config: TrainerConfig,
    word_counts: WordCounts,
    segmentations: Segmentations,
    vocab: Vocabulary,
    merges: Vec<Merge>,
}

impl WordPieceTrainer {
    pub fn new(text: &str, config: TrainerConfig) -> Self {
        let word_counts = count_words(text);
        let vocab = Vocabulary::from_word_counts(&word_counts);
        let segmentations = Segmentations::from_word_counts(&word_counts);
        log::debug!(
            "Counted {} distinct words, {} starting symbols",
            word_counts.len(),
            vocab.len()
        );
        Self {
            config,
            word_counts,
            segmentations,
            vocab,
            merges: Vec::new(),
        }
    }

    pub fn word_counts(&self) -> &WordCounts {
        &self.word_counts
    }

    pub fn segmentations(&self) -> &Segmentations {
        &self.segmentations
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn merges(&self) -> &[Merge] {
        &self.merges
    }

    /// Score all pairs, merge the best one everywhere and append it to the vocabulary.
    ///
    /// Returns `None` when no word has two or more symbols left.
    pub fn step(&mut self) -> Option<Merge> {
        let scores = score_pairs(&self.segmentations, &self.word_counts);
        let ((left, right), score) = best_pair(&scores)?;
        let symbol = self.segmentations.merge_pair(left, right);
        self.vocab.push(symbol.clone());

        let merge = Merge {
            pair: (left.clone(), right.clone()),
            score,
            symbol,
        };
        log::debug!(
            "Merged ({}, {}) -> {} with score {:.6}, vocab size {}",
            left,
            right,
            merge.symbol,
            score,
            self.vocab.len()
        );
        self.merges.push(merge.clone());
        Some(merge)
    }

    /// Merge until the target size is reached or nothing is left to merge.
    pub fn train(mut self) -> TrainResults {
        let vocab_size = self.config.vocab_size;
        log::info!(
            "Starting WordPiece training: {} starting symbols, target vocab size {}",
            self.vocab.len(),
            vocab_size
        );

        let mut exhausted = false;
        while self.vocab.len() < vocab_size {
            if self.step().is_none() {
                log::warn!(
                    "vocab_size {} is too high, maximum vocab size is: {}",
                    vocab_size,
                    self.vocab.len()
                );
                exhausted = true;
                break;
            }
        }

        log::info!(
            "WordPiece training completed: {} merges, vocab size {}",
            self.merges.len(),
            self.vocab.len()
        );
        TrainResults {
            vocab: self.vocab.into_sorted_desc(),
            merges: self.merges,
            exhausted,
        }
    }
}

/// Train a WordPiece vocabulary on `text` and return it in descending order.
pub fn wordpiece(text: &str, vocab_size: usize) -> Vec<Symbol> {
    let config = TrainerConfig::default().with_vocab_size(vocab_size);
    WordPieceTrainer::new(text, config).train().vocab
}
