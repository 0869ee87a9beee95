/// Prefix marking a symbol that continues a word rather than starting it.
pub const CONTINUATION_PREFIX: &str = "##";

/// A vocabulary unit, either a bare word-initial fragment or a `##`-marked continuation.
pub type Symbol = String;

/// An ordered pair of symbols observed next to each other in a segmentation.
pub type Pair = (Symbol, Symbol);

/// Symbol for the character at position `index` of a word.
pub fn char_symbol(index: usize, c: char) -> Symbol {
    if index == 0 {
        c.to_string()
    } else {
        format!("{CONTINUATION_PREFIX}{c}")
    }
}

/// The text a symbol stands for once its continuation marker is removed.
pub fn strip_continuation(symbol: &str) -> &str {
    symbol.strip_prefix(CONTINUATION_PREFIX).unwrap_or(symbol)
}

/// Fuse two adjacent symbols. The right marker is dropped, the left is kept.
pub fn merge_symbols(left: &str, right: &str) -> Symbol {
    let mut merged = String::with_capacity(left.len() + right.len());
    merged.push_str(left);
    merged.push_str(strip_continuation(right));
    merged
}
