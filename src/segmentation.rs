use crate::corpus::WordCounts;
use crate::symbol::{char_symbol, merge_symbols, strip_continuation, Symbol};
use indexmap::IndexMap;

/// Per-word decomposition into symbols, in the same word order as the counts.
#[derive(Debug, Clone, Default)]
pub struct Segmentations {
    parts: IndexMap<String, Vec<Symbol>>,
}

impl Segmentations {
    /// Character-level segmentation of every word.
    pub fn from_word_counts(counts: &WordCounts) -> Self {
        let parts = counts
            .keys()
            .map(|word| {
                let symbols = word
                    .chars()
                    .enumerate()
                    .map(|(i, c)| char_symbol(i, c))
                    .collect();
                (word.clone(), symbols)
            })
            .collect();
        Self { parts }
    }

    pub fn get(&self, word: &str) -> Option<&[Symbol]> {
        self.parts.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Concatenate a word's symbols with continuation markers removed.
    ///
    /// The first symbol is always bare and is taken verbatim, even when the
    /// word itself starts with `##`.
    pub fn reconstruct(&self, word: &str) -> Option<String> {
        let (first, rest) = self.parts.get(word)?.split_first()?;
        let mut rebuilt = first.clone();
        for symbol in rest {
            rebuilt.push_str(strip_continuation(symbol));
        }
        Some(rebuilt)
    }

    /// Replace every occurrence of `left right` with their merged symbol.
    ///
    /// Each word is scanned once, left to right, over the sequence as it is
    /// being rewritten: after a merge at `i` the next comparison is between
    /// positions `i + 1` and `i + 2` of the shortened sequence, so `[x, ##x, ##x, ##x]`
    /// merging `(##x, ##x)` becomes `[x, ##xx, ##x]`.
    ///
    /// Returns the merged symbol.
    pub fn merge_pair(&mut self, left: &str, right: &str) -> Symbol {
        let merged = merge_symbols(left, right);
        for symbols in self.parts.values_mut() {
            if symbols.len() < 2 {
                continue;
            }
            let mut i = 0;
            while i + 1 < symbols.len() {
                if symbols[i] == left && symbols[i + 1] == right {
                    symbols[i] = merged.clone();
                    symbols.remove(i + 1);
                }
                i += 1;
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::count_words;

    fn segs(text: &str) -> Segmentations {
        Segmentations::from_word_counts(&count_words(text))
    }

    #[test]
    fn test_initial_segmentation() {
        let s = segs("hug hugs");
        assert_eq!(s.len(), 2);
        assert_eq!(s.get("hugs").unwrap(), &["h", "##u", "##g", "##s"]);
        assert_eq!(s.reconstruct("hugs").as_deref(), Some("hugs"));
        assert!(s.get("pug").is_none());
    }

    #[test]
    fn test_merge_pair() {
        let mut s = segs("hug hugs pug");
        let merged = s.merge_pair("##u", "##g");
        assert_eq!(merged, "##ug");
        assert_eq!(s.get("hug").unwrap(), &["h", "##ug"]);
        assert_eq!(s.get("hugs").unwrap(), &["h", "##ug", "##s"]);
        assert_eq!(s.get("pug").unwrap(), &["p", "##ug"]);

        s.merge_pair("h", "##ug");
        assert_eq!(s.get("hug").unwrap(), &["hug"]);
        assert_eq!(s.get("hugs").unwrap(), &["hug", "##s"]);
        for word in ["hug", "hugs", "pug"] {
            assert_eq!(s.reconstruct(word).as_deref(), Some(word));
        }
    }

    #[test]
    fn test_merge_overlapping_run() {
        let mut s = segs("xxxx xxxxx");
        s.merge_pair("##x", "##x");
        assert_eq!(s.get("xxxx").unwrap(), &["x", "##xx", "##x"]);
        assert_eq!(s.get("xxxxx").unwrap(), &["x", "##xx", "##xx"]);
    }

    #[test]
    fn test_merge_repeated_pair_in_word() {
        let mut s = segs("habab");
        s.merge_pair("##a", "##b");
        assert_eq!(s.get("habab").unwrap(), &["h", "##ab", "##ab"]);
        assert_eq!(s.reconstruct("habab").as_deref(), Some("habab"));
    }

    #[test]
    fn test_reconstruct_words_starting_with_marker() {
        let mut s = segs("## ##b");
        assert_eq!(s.get("##").unwrap(), &["#", "###"]);
        assert_eq!(s.get("##b").unwrap(), &["#", "###", "##b"]);

        s.merge_pair("#", "###");
        assert_eq!(s.get("##").unwrap(), &["##"]);
        assert_eq!(s.get("##b").unwrap(), &["##", "##b"]);
        assert_eq!(s.reconstruct("##").as_deref(), Some("##"));
        assert_eq!(s.reconstruct("##b").as_deref(), Some("##b"));

        s.merge_pair("##", "##b");
        assert_eq!(s.get("##b").unwrap(), &["##b"]);
        assert_eq!(s.reconstruct("##b").as_deref(), Some("##b"));
    }

    #[test]
    fn test_merge_skips_single_symbol_words() {
        let mut s = segs("a ab");
        s.merge_pair("a", "##b");
        assert_eq!(s.get("a").unwrap(), &["a"]);
        assert_eq!(s.get("ab").unwrap(), &["ab"]);
    }
}
