//! Part-of-speech classes and the classification map.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::tagger::{CoarseTag, PosTagger};

/// The five classes reported in the outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WordClass {
    /// `NOUN`.
    Noun,
    /// `VERB`.
    Verb,
    /// `ADJ`.
    Adjective,
    /// `ADV`.
    Adverb,
    /// Every other tag.
    Unknown,
}

impl WordClass {
    /// All classes in column order.
    pub const ALL: [Self; 5] = [
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Unknown,
    ];

    /// Column header for this class.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Noun => "Noun",
            Self::Verb => "Verb",
            Self::Adjective => "Adjective",
            Self::Adverb => "Adverb",
            Self::Unknown => "Unknown",
        }
    }

    /// Map a coarse tag onto a class. Only the four open classes survive;
    /// proper nouns and auxiliaries land in `Unknown`.
    pub const fn from_tag(tag: CoarseTag) -> Self {
        match tag {
            CoarseTag::Noun => Self::Noun,
            CoarseTag::Verb => Self::Verb,
            CoarseTag::Adj => Self::Adjective,
            CoarseTag::Adv => Self::Adverb,
            _ => Self::Unknown,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique words per class.
///
/// Iterates classes in [`WordClass::ALL`] order and words in lexicographic
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: [BTreeSet<String>; 5],
}

impl Classification {
    /// Empty map with all five classes present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `word` into `class`. Returns `false` if it was already there.
    pub fn insert(&mut self, class: WordClass, word: impl Into<String>) -> bool {
        self.buckets[class.index()].insert(word.into())
    }

    /// Words classified under `class`.
    pub fn words(&self, class: WordClass) -> &BTreeSet<String> {
        &self.buckets[class.index()]
    }

    /// Whether `word` is in `class`.
    pub fn contains(&self, class: WordClass, word: &str) -> bool {
        self.buckets[class.index()].contains(word)
    }

    /// The class holding `word`, if any.
    pub fn class_of(&self, word: &str) -> Option<WordClass> {
        WordClass::ALL
            .into_iter()
            .find(|class| self.contains(*class, word))
    }

    /// `(class, words)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (WordClass, &BTreeSet<String>)> {
        WordClass::ALL
            .into_iter()
            .map(move |class| (class, self.words(class)))
    }

    /// Number of unique words in each class, in column order.
    pub fn counts(&self) -> [usize; 5] {
        self.buckets.each_ref().map(BTreeSet::len)
    }

    /// Whether no word has been classified.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(BTreeSet::is_empty)
    }
}

/// Tag each distinct word once and bucket it by class.
///
/// Words are tagged bare, without the sentence they came from.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn classify_words<S: AsRef<str>>(words: &[S], tagger: &dyn PosTagger) -> Classification {
    let mut classification = Classification::new();
    let mut seen = BTreeSet::new();
    for word in words {
        let word = word.as_ref();
        if !seen.insert(word) {
            continue;
        }
        let tag = tagger.tag(word);
        let class = WordClass::from_tag(tag);
        tracing::trace!(word, tag = tag.as_str(), class = class.label(), "classified");
        classification.insert(class, word);
    }
    tracing::debug!(counts = ?classification.counts(), "classification complete");
    classification
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Tagger answering from a fixed table, `NOUN` otherwise.
    pub(crate) struct FakeTagger(pub HashMap<&'static str, CoarseTag>);

    impl FakeTagger {
        pub(crate) fn new(entries: &[(&'static str, CoarseTag)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl PosTagger for FakeTagger {
        fn tag(&self, word: &str) -> CoarseTag {
            self.0.get(word).copied().unwrap_or(CoarseTag::Noun)
        }
    }

    #[test]
    fn tags_map_to_classes() {
        assert_eq!(WordClass::from_tag(CoarseTag::Noun), WordClass::Noun);
        assert_eq!(WordClass::from_tag(CoarseTag::Verb), WordClass::Verb);
        assert_eq!(WordClass::from_tag(CoarseTag::Adj), WordClass::Adjective);
        assert_eq!(WordClass::from_tag(CoarseTag::Adv), WordClass::Adverb);
        assert_eq!(WordClass::from_tag(CoarseTag::Propn), WordClass::Unknown);
        assert_eq!(WordClass::from_tag(CoarseTag::Aux), WordClass::Unknown);
    }

    #[test]
    fn classify_deduplicates() {
        let tagger = FakeTagger::new(&[("running", CoarseTag::Verb), ("quickly", CoarseTag::Adv)]);
        let words = ["running", "quickly", "running", "nation"];
        let classification = classify_words(&words, &tagger);

        assert_eq!(classification.counts(), [1, 1, 0, 1, 0]);
        assert!(classification.contains(WordClass::Verb, "running"));
        assert_eq!(classification.class_of("nation"), Some(WordClass::Noun));
        assert_eq!(classification.class_of("absent"), None);
    }

    #[test]
    fn classification_is_idempotent() {
        let tagger = crate::tagger::LexiconTagger::new();
        let words = ["running", "happiness", "quickly", "careless", "the"];
        let first = classify_words(&words, &tagger);
        let second = classify_words(&words, &tagger);
        assert_eq!(first, second);
        for word in words {
            assert_eq!(first.class_of(word), second.class_of(word));
        }
    }

    #[test]
    fn iteration_follows_column_order() {
        let classification = classify_words::<&str>(&[], &FakeTagger::new(&[]));
        assert!(classification.is_empty());
        let labels: Vec<_> = classification.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(labels, ["Noun", "Verb", "Adjective", "Adverb", "Unknown"]);
    }
}
