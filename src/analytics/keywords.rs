use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::tagger::{PartOfSpeechTagger, WordClass};

/// Tokens of two characters or fewer carry no grouping signal.
const MIN_TOKEN_CHARS: usize = 3;

/// Word tokens after lowercasing; everything between them is punctuation
/// or whitespace and is discarded.
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("Invalid token pattern"));

/// Extracts the significant terms of a piece of diagnosis text.
pub struct KeywordExtractor<T> {
    tagger: T,
}

impl<T: PartOfSpeechTagger> KeywordExtractor<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Significant terms of `text`: nouns and verbs longer than two
    /// characters, deduplicated, in ascending lexicographic order.
    ///
    /// Deterministic for a given tagger. Never fails; malformed or empty
    /// text simply yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let keywords: BTreeSet<&str> = WORD_TOKEN
            .find_iter(&lowered)
            .map(|token| token.as_str())
            .filter(|token| {
                matches!(self.tagger.tag(token), WordClass::Noun | WordClass::Verb)
            })
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .collect();

        keywords.into_iter().map(str::to_string).collect()
    }
}
