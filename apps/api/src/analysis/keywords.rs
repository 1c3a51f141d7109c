//! Keyword sets: naive whitespace tokenization and set overlap.
//!
//! Tokens are lower-cased and split on whitespace only. Punctuation stays
//! attached: "developer," and "developer" are different tokens. No stemming.
//!
//! Sets are `BTreeSet`s, so every iteration (and therefore every truncation
//! of a result list) is in lexicographic order.

use std::collections::BTreeSet;

/// Ignored in job descriptions only. Resume tokens are never filtered.
pub const STOPWORDS: [&str; 11] = [
    "a", "an", "the", "in", "on", "for", "with", "is", "of", "to", "and",
];

/// Normalized word tokens of one text. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    tokens: BTreeSet<String>,
}

impl KeywordSet {
    /// Lower-cases `text` and splits it on whitespace.
    pub fn from_text(text: &str) -> Self {
        let tokens = text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// Job-description keywords: the text's tokens minus `STOPWORDS`.
    pub fn job_keywords(text: &str) -> Self {
        let mut set = Self::from_text(text);
        set.tokens.retain(|token| !STOPWORDS.contains(&token.as_str()));
        set
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Splits these keywords into those present in `other` and those absent.
    pub fn overlap(&self, other: &KeywordSet) -> KeywordOverlap {
        let (matching, missing): (BTreeSet<String>, BTreeSet<String>) = self
            .tokens
            .iter()
            .cloned()
            .partition(|token| other.contains(token));
        KeywordOverlap {
            matching: KeywordSet { tokens: matching },
            missing: KeywordSet { tokens: missing },
        }
    }

    /// The first `n` tokens in lexicographic order.
    pub fn first(&self, n: usize) -> Vec<String> {
        self.iter().take(n).map(str::to_string).collect()
    }
}

/// Full (untruncated) intersection and difference of two keyword sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordOverlap {
    pub matching: KeywordSet,
    pub missing: KeywordSet,
}
