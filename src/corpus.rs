use indexmap::IndexMap;

/// Word -> number of occurrences, in first-seen order.
pub type WordCounts = IndexMap<String, u64>;

/// Split text on whitespace runs and count each word.
///
/// Words are compared byte for byte; no case folding or punctuation handling.
pub fn count_words(text: &str) -> WordCounts {
    let mut counts = WordCounts::new();
    for word in text.split_whitespace() {
        *counts.entry(word.to_string()).or_insert(0) += 1;
    }
    counts
}
