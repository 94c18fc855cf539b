#[cfg(test)]
#[path = "../tests/unit/normalize_test.rs"]
mod normalize_test;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds a place name into a canonical lookup key: trimmed, lowercased, with diacritics
/// dropped via canonical decomposition. Applied to queries and to every dataset field
/// they are compared against.
pub fn fold_key(text: &str) -> String {
    text.trim().nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase).collect()
}
