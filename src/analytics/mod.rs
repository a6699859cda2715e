//! Keyword analytics over diagnosis text.
//!
//! Pure, synchronous computation: no locking, no failure modes. The only
//! external capability is part-of-speech tagging, injected through
//! [`PartOfSpeechTagger`].

pub mod grouping;
pub mod keywords;
pub mod tagger;

pub use grouping::*;
pub use keywords::*;
pub use tagger::*;
