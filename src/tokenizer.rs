//! Text tokenization.
//!
//! The tokenizer defines the keys of the inverted index, so its output is
//! normative: change it and every persisted index built before the change is
//! garbage. It is three substitution passes and a whitespace split:
//!
//! 1. Lowercase, then pad every non-word character with spaces (word
//!    characters are `[A-Za-z0-9_]`; everything else, whitespace and
//!    non-ASCII included, is a separator and survives as its own token).
//! 2. Re-join apostrophes that sat inside a word, so `isn't` and `o'brian`
//!    come back as single tokens.
//! 3. Collapse three spaced-out periods into one `...` ellipsis token.
//!
//! Punctuation is NOT removed. `"For now, we are here."` tokenizes to
//! `["for", "now", ",", "we", "are", "here", "."]`.

use regex::Regex;
use std::sync::LazyLock;

/// Pass 1: split off every character outside `[A-Za-z0-9_]`.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^A-Za-z0-9_])").expect("non-word pattern"));

/// Pass 2: `word ' word` back to `word'word`. Only single spaces qualify,
/// which is exactly what pass 1 inserts around an in-word apostrophe.
static IN_WORD_APOSTROPHE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)\s(')\s([A-Za-z0-9_]+)").expect("apostrophe pattern")
});

/// Pass 3: three periods separated by whitespace become one ellipsis token.
static ELLIPSIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\s+\.\s+\.").expect("ellipsis pattern"));

/// Process raw text into a sequence of lowercase tokens.
///
/// Pure and deterministic: the same input always yields the same tokens, in
/// input order, duplicates preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let padded = NON_WORD.replace_all(&lowered, " ${1} ");
    let rejoined = IN_WORD_APOSTROPHE.replace_all(&padded, "${1}${2}${3}");
    let collapsed = ELLIPSIS.replace_all(&rejoined, " ...");
    collapsed.split_whitespace().map(str::to_string).collect()
}
