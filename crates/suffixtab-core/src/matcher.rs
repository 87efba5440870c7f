//! Suffix lists and suffix matching over document text.

use serde::Serialize;

use crate::lemmatize::Lemmatizer;
use crate::normalize::base_word;

/// Ordered suffixes; order drives row order in every output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuffixList(Vec<String>);

impl SuffixList {
    /// Build a list from suffixes in order. Duplicates are kept.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(suffixes.into_iter().map(Into::into).collect())
    }

    /// Split each paragraph on whitespace and concatenate the tokens.
    pub fn from_paragraphs<S: AsRef<str>>(paragraphs: &[S]) -> Self {
        Self(
            paragraphs
                .iter()
                .flat_map(|p| p.as_ref().split_whitespace())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Suffixes in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate suffixes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of suffixes, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Suffixes `word` ends with, in list order.
    pub fn matching<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .map(String::as_str)
            .filter(move |suffix| word.ends_with(suffix))
    }
}

impl<'a> IntoIterator for &'a SuffixList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Words matched in a document, plus how many tokens were scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Base words in document order, once per matching suffix.
    pub words: Vec<String>,
    /// Whitespace-separated tokens seen.
    pub tokens: usize,
}

/// Normalize every token and keep those ending with a suffix.
///
/// A word is pushed once for every suffix it ends with, so a list holding
/// both "ing" and "ng" records "running" twice per occurrence. Matching is
/// a literal, case-sensitive test on the normalized word.
#[tracing::instrument(skip_all, fields(paragraphs = paragraphs.len(), suffixes = suffixes.len()))]
pub fn match_paragraphs<S: AsRef<str>>(
    paragraphs: &[S],
    suffixes: &SuffixList,
    lemmatizer: &dyn Lemmatizer,
) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();
    for paragraph in paragraphs {
        for token in paragraph.as_ref().split_whitespace() {
            outcome.tokens += 1;
            let word = base_word(token, lemmatizer);
            let hits = suffixes.matching(&word).count();
            outcome
                .words
                .extend(std::iter::repeat_n(word.as_str(), hits).map(str::to_string));
        }
    }
    tracing::debug!(
        tokens = outcome.tokens,
        matches = outcome.words.len(),
        "suffix matching complete"
    );
    outcome
}
