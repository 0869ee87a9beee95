use crate::corpus::WordCounts;
use crate::symbol::{char_symbol, Symbol};
use indexmap::IndexSet;

/// Ordered list of symbols learned so far.
///
/// Merged symbols are appended without a membership check, so the list may
/// hold the same symbol more than once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    symbols: Vec<Symbol>,
}

impl Vocabulary {
    /// Starting vocabulary: every character symbol in the corpus, sorted ascending.
    pub fn from_word_counts(counts: &WordCounts) -> Self {
        let mut seen: IndexSet<Symbol> = IndexSet::new();
        for word in counts.keys() {
            for (i, c) in word.chars().enumerate() {
                seen.insert(char_symbol(i, c));
            }
        }
        let mut symbols: Vec<Symbol> = seen.into_iter().collect();
        symbols.sort();
        Self { symbols }
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consume the vocabulary, returning it sorted in descending code-point order.
    pub fn into_sorted_desc(self) -> Vec<Symbol> {
        let mut symbols = self.symbols;
        symbols.sort_by(|a, b| b.cmp(a));
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::count_words;

    #[test]
    fn test_initial_vocab() {
        let vocab = Vocabulary::from_word_counts(&count_words("ab ab ab"));
        assert_eq!(vocab.symbols(), &["##b", "a"]);
    }

    #[test]
    fn test_initial_vocab_is_unique_and_sorted() {
        let vocab = Vocabulary::from_word_counts(&count_words("hug pug pun bun hugs"));
        assert_eq!(
            vocab.symbols(),
            &["##g", "##n", "##s", "##u", "b", "h", "p"]
        );
    }

    #[test]
    fn test_into_sorted_desc_keeps_duplicates() {
        let mut vocab = Vocabulary::from_word_counts(&count_words("ab"));
        vocab.push("ab".to_string());
        vocab.push("ab".to_string());
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.into_sorted_desc(), vec!["ab", "ab", "a", "##b"]);
    }

    #[test]
    fn test_empty_vocab() {
        let vocab = Vocabulary::from_word_counts(&count_words(""));
        assert!(vocab.is_empty());
        assert!(vocab.into_sorted_desc().is_empty());
    }
}
