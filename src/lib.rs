//! WordPiece vocabulary training.
//!
//! Starting from single characters (continuations marked with `##`), the
//! trainer repeatedly merges the adjacent pair with the highest
//! `freq(pair) / (freq(left) * freq(right))` score until the vocabulary
//! reaches the requested size or no pair is left.
//!
//! ```rust
//! let vocab = wordpiece::wordpiece("ab ab ab", 5);
//! assert_eq!(vocab, vec!["ab", "a", "##b"]);
//! ```
pub mod corpus;
pub mod scoring;
pub mod segmentation;
pub mod symbol;
pub mod trainer;
pub mod vocab;

pub use corpus::{count_words, WordCounts};
pub use scoring::{best_pair, score_pairs, PairScores};
pub use segmentation::Segmentations;
pub use symbol::{Pair, Symbol, CONTINUATION_PREFIX};
pub use trainer::{
    wordpiece, Merge, TrainResults, TrainerConfig, WordPieceTrainer, DEFAULT_VOCAB_SIZE,
};
pub use vocab::Vocabulary;
