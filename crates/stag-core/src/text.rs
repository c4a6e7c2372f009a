//! Text normalisation and whole-word phrase matching.
//!
//! Player input and authored names are compared case-insensitively and
//! word-by-word, never as raw substrings, so a trigger such as `cut`
//! does not fire inside `cute`.

/// Collapses runs of whitespace to single spaces, trims, and lowercases.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits text into lowercase words with surrounding punctuation removed.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| matches!(c, ',' | '.' | '!' | '?' | ';' | ':')))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Returns `true` if every word of `phrase` appears contiguously, in order,
/// in `tokens`. A blank phrase never matches.
#[must_use]
pub fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words = tokenize(phrase);
    if words.is_empty() || words.len() > tokens.len() {
        return false;
    }
    tokens.windows(words.len()).any(|window| window == words.as_slice())
}

/// Case-insensitive name equality, ignoring surrounding whitespace.
#[must_use]
pub fn names_match(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize("  Chop   the\tTREE  "), "chop the tree");
    }

    #[test]
    fn test_tokenize_strips_trailing_punctuation() {
        assert_eq!(
            tokenize("Chop tree, with axe!"),
            vec!["chop", "tree", "with", "axe"]
        );
    }

    #[test]
    fn test_contains_phrase_matches_whole_words_only() {
        let tokens = tokenize("what a cute elf");
        assert!(!contains_phrase(&tokens, "cut"));
        assert!(contains_phrase(&tokens, "cute"));
    }

    #[test]
    fn test_contains_phrase_matches_multi_word_phrase_in_order() {
        let tokens = tokenize("please cut down the tree");
        assert!(contains_phrase(&tokens, "cut down"));
        assert!(!contains_phrase(&tokens, "down cut"));
        assert!(!contains_phrase(&tokens, "cut tree"));
    }

    #[test]
    fn test_contains_phrase_rejects_blank_phrase() {
        let tokens = tokenize("look");
        assert!(!contains_phrase(&tokens, "   "));
    }

    #[test]
    fn test_names_match_is_case_insensitive() {
        assert!(names_match("Axe", " axe"));
        assert!(!names_match("axe", "axes"));
    }
}
