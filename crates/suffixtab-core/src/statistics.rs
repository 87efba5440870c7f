//! Per-suffix, per-class occurrence counts.

use std::collections::HashMap;

use serde::Serialize;

use crate::classify::{Classification, WordClass};
use crate::matcher::SuffixList;

/// Occurrence counts for one suffix, one per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    /// Noun occurrences.
    pub noun: usize,
    /// Verb occurrences.
    pub verb: usize,
    /// Adjective occurrences.
    pub adjective: usize,
    /// Adverb occurrences.
    pub adverb: usize,
    /// Occurrences of words in no open class.
    pub unknown: usize,
}

impl ClassCounts {
    /// Count for `class`.
    pub const fn get(&self, class: WordClass) -> usize {
        match class {
            WordClass::Noun => self.noun,
            WordClass::Verb => self.verb,
            WordClass::Adjective => self.adjective,
            WordClass::Adverb => self.adverb,
            WordClass::Unknown => self.unknown,
        }
    }

    fn slot(&mut self, class: WordClass) -> &mut usize {
        match class {
            WordClass::Noun => &mut self.noun,
            WordClass::Verb => &mut self.verb,
            WordClass::Adjective => &mut self.adjective,
            WordClass::Adverb => &mut self.adverb,
            WordClass::Unknown => &mut self.unknown,
        }
    }

    /// Sum across classes.
    pub const fn total(&self) -> usize {
        self.noun + self.verb + self.adjective + self.adverb + self.unknown
    }
}

/// Counts per suffix, in order of first appearance in the suffix list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Statistics {
    entries: Vec<(String, ClassCounts)>,
}

impl Statistics {
    /// `(suffix, counts)` pairs in order.
    pub fn entries(&self) -> &[(String, ClassCounts)] {
        &self.entries
    }

    /// Counts for `suffix`, if it was in the suffix list.
    pub fn get(&self, suffix: &str) -> Option<&ClassCounts> {
        self.entries
            .iter()
            .find(|(s, _)| s == suffix)
            .map(|(_, counts)| counts)
    }

    /// Number of distinct suffixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no suffixes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count word-list entries per suffix and class.
///
/// Unlike the table, repeats in `words` are counted. A word is counted
/// under the class that holds it; words missing from `classification`
/// are not counted. A suffix listed more than once keeps a single entry
/// at its first position.
#[tracing::instrument(skip_all, fields(words = words.len(), suffixes = suffixes.len()))]
pub fn calculate_statistics<S: AsRef<str>>(
    words: &[S],
    suffixes: &SuffixList,
    classification: &Classification,
) -> Statistics {
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for word in words {
        *occurrences.entry(word.as_ref()).or_default() += 1;
    }

    let mut entries: Vec<(String, ClassCounts)> = Vec::with_capacity(suffixes.len());
    for suffix in suffixes {
        if entries.iter().any(|(s, _)| s == suffix) {
            continue;
        }
        let mut counts = ClassCounts::default();
        for (class, bucket) in classification.iter() {
            *counts.slot(class) = bucket
                .iter()
                .filter(|word| word.ends_with(suffix.as_str()))
                .map(|word| occurrences.get(word.as_str()).copied().unwrap_or(0))
                .sum();
        }
        entries.push((suffix.clone(), counts));
    }
    Statistics { entries }
}
