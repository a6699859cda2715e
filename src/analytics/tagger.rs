use std::collections::HashSet;

/// Lexical class of a single word token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    Noun,
    Verb,
    Other,
}

/// Part-of-speech classification as an injected capability.
///
/// Real linguistic models live outside this crate. Implementations only
/// answer for one lowercase token at a time.
pub trait PartOfSpeechTagger: Send + Sync {
    fn tag(&self, token: &str) -> WordClass;
}

/// Tagger for environments without a linguistic model.
///
/// Classifies every token `Other`, so extraction degenerately yields an
/// empty set. Callers must tolerate that.
#[derive(Debug, Default)]
pub struct PassthroughTagger;

impl PartOfSpeechTagger for PassthroughTagger {
    fn tag(&self, _token: &str) -> WordClass {
        WordClass::Other
    }
}

/// Tagger backed by caller-supplied word lists.
///
/// A lookup, not a model; enough for demos and deterministic tests.
/// Entries are lowercased at construction to match extractor tokens.
#[derive(Debug, Default)]
pub struct LexiconTagger {
    nouns: HashSet<String>,
    verbs: HashSet<String>,
}

impl LexiconTagger {
    pub fn new(nouns: &[&str], verbs: &[&str]) -> Self {
        Self {
            nouns: nouns.iter().map(|word| word.to_lowercase()).collect(),
            verbs: verbs.iter().map(|word| word.to_lowercase()).collect(),
        }
    }
}

impl PartOfSpeechTagger for LexiconTagger {
    fn tag(&self, token: &str) -> WordClass {
        if self.nouns.contains(token) {
            WordClass::Noun
        } else if self.verbs.contains(token) {
            WordClass::Verb
        } else {
            WordClass::Other
        }
    }
}
