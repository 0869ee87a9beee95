//! Pair scoring and merge selection.

use crate::corpus::WordCounts;
use crate::segmentation::Segmentations;
use crate::symbol::{Pair, Symbol};
use indexmap::IndexMap;

/// Pair -> score, in the order pairs were first seen during the scoring pass.
pub type PairScores = IndexMap<Pair, f64>;

/// Score every adjacent pair in the current segmentations.
///
/// `score(l, r) = freq(l, r) / (freq(l) * freq(r))`, where symbol frequencies
/// are accumulated once per pair occurrence (and once for single-symbol words),
/// each weighted by the word's count.
pub fn score_pairs(segmentations: &Segmentations, counts: &WordCounts) -> PairScores {
    let mut symbol_freqs: IndexMap<&str, u64> = IndexMap::new();
    let mut pair_freqs: IndexMap<(&str, &str), u64> = IndexMap::new();

    for (word, &freq) in counts {
        let Some(symbols) = segmentations.get(word) else {
            continue;
        };
        if let [only] = symbols {
            *symbol_freqs.entry(only.as_str()).or_insert(0) += freq;
            continue;
        }
        for w in symbols.windows(2) {
            let (left, right) = (w[0].as_str(), w[1].as_str());
            *symbol_freqs.entry(left).or_insert(0) += freq;
            *symbol_freqs.entry(right).or_insert(0) += freq;
            *pair_freqs.entry((left, right)).or_insert(0) += freq;
        }
    }

    pair_freqs
        .into_iter()
        .map(|((left, right), pair_freq)| {
            let denom = symbol_freqs[left] as f64 * symbol_freqs[right] as f64;
            let score = pair_freq as f64 / denom;
            ((Symbol::from(left), Symbol::from(right)), score)
        })
        .collect()
}

/// Highest scoring pair; on ties the earliest pair in `scores` wins.
pub fn best_pair(scores: &PairScores) -> Option<(&Pair, f64)> {
    let mut best: Option<(&Pair, f64)> = None;
    for (pair, &score) in scores {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((pair, score)),
        }
    }
    best
}
