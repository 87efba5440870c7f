//! Dictionary-form reduction for the base-word normalizer.
//!
//! Three backends sit behind the [`Lemmatizer`] trait:
//!
//! - [`MorphyLemmatizer`] - WordNet morphy restricted to nouns. With a
//!   WordNet `dict` directory it asks [`wordnet_morphy::Morphy`] for the
//!   candidates that exist in the noun index and returns the shortest.
//!   Without one it leaves words the built-in lexicon knows alone and
//!   applies the built-in irregular plurals and an ordered list of guarded
//!   rules to the rest.
//! - [`SnowballLemmatizer`] - the English Snowball (Porter2) stemmer.
//! - [`IdentityLemmatizer`] - no reduction.
//!
//! # Example
//! ```
//! use suffixtab_core::lemmatize::{Lemmatizer, MorphyLemmatizer};
//!
//! let morphy = MorphyLemmatizer::builtin();
//! assert_eq!(morphy.lemmatize("churches"), "church");
//! assert_eq!(morphy.lemmatize("children"), "child");
//! assert_eq!(morphy.lemmatize("always"), "always");
//! ```

use camino::Utf8Path;
use rust_stemmers::{Algorithm, Stemmer};
use wordnet_db::{LoadMode, WordNet};
use wordnet_morphy::Morphy;
use wordnet_types::Pos;

use crate::config::LemmatizerKind;
use crate::dictionaries::closed_class::closed_class_tag;
use crate::dictionaries::irregular_verbs::is_irregular_verb_form;
use crate::dictionaries::noun_exceptions::{NOUN_EXCEPTIONS, SINGULAR_S_NOUNS};
use crate::dictionaries::open_class::{ADJECTIVES, ADVERBS, NOUNS};
use crate::error::LexiconError;

/// Reduces a lower-cased word to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    /// Return the dictionary form of `word`, or `word` itself when no
    /// reduction applies. Never fails.
    fn lemmatize(&self, word: &str) -> String;

    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Rules used when no vocabulary can confirm a candidate.
///
/// Tried in order; the first that applies wins. Every rule needs at least
/// two characters of stem left in front of the suffix.
const HEURISTIC_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zzes", "z"),
    ("s", ""),
];

/// Endings a plain "-s" strip must leave alone without a vocabulary.
const KEEP_FINAL_S: &[&str] = &["ss", "us", "is"];

enum Dictionary {
    Builtin,
    WordNet { wordnet: WordNet, morphy: Morphy },
}

/// WordNet morphy for nouns.
pub struct MorphyLemmatizer {
    dictionary: Dictionary,
}

impl std::fmt::Debug for MorphyLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphyLemmatizer")
            .field("wordnet", &self.has_wordnet())
            .finish()
    }
}

impl MorphyLemmatizer {
    /// Morphy with the built-in lexicon and irregular plurals.
    pub const fn builtin() -> Self {
        Self {
            dictionary: Dictionary::Builtin,
        }
    }

    /// Morphy backed by a WordNet `dict` directory.
    ///
    /// The `data.*` and `index.*` files are required; `noun.exc` is optional.
    #[tracing::instrument(skip_all, fields(dir = %dict_dir))]
    pub fn load(dict_dir: &Utf8Path) -> Result<Self, LexiconError> {
        if !dict_dir.join("index.noun").is_file() {
            return Err(LexiconError::NotWordNet {
                dir: dict_dir.to_path_buf(),
            });
        }
        let load_error = |err: anyhow::Error| LexiconError::WordNet {
            dir: dict_dir.to_path_buf(),
            message: format!("{err:#}"),
        };
        let wordnet =
            WordNet::load_with_mode(dict_dir.as_std_path(), LoadMode::Owned).map_err(load_error)?;
        let morphy = Morphy::load(dict_dir.as_std_path()).map_err(load_error)?;

        tracing::debug!(lemmas = wordnet.lemma_count(), "loaded WordNet dictionary");
        Ok(Self {
            dictionary: Dictionary::WordNet { wordnet, morphy },
        })
    }

    /// Whether candidates are checked against a WordNet dictionary.
    pub const fn has_wordnet(&self) -> bool {
        matches!(self.dictionary, Dictionary::WordNet { .. })
    }

    /// Shortest morphy candidate found in the noun index. Built-in
    /// irregular plurals cover surface forms `noun.exc` lacks.
    fn lemmatize_checked(word: &str, wordnet: &WordNet, morphy: &Morphy) -> String {
        let exists = |pos: Pos, lemma: &str| wordnet.lemma_exists(pos, lemma);
        morphy
            .lemmas_for(Pos::Noun, word, exists)
            .into_iter()
            .map(|candidate| candidate.lemma)
            // min_by_key keeps the first of equally short candidates
            .min_by_key(|lemma| lemma.chars().count())
            .map(std::borrow::Cow::into_owned)
            .or_else(|| {
                NOUN_EXCEPTIONS
                    .get(word)
                    .filter(|lemma| exists(Pos::Noun, lemma))
                    .map(|lemma| (*lemma).to_string())
            })
            .unwrap_or_else(|| word.to_string())
    }

    fn lemmatize_heuristic(word: &str) -> String {
        if let Some(lemma) = NOUN_EXCEPTIONS.get(word) {
            return (*lemma).to_string();
        }
        if is_known_word(word) {
            return word.to_string();
        }

        for (suffix, replacement) in HEURISTIC_RULES {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.chars().count() < 2 {
                continue;
            }
            if *suffix == "s"
                && (word.chars().count() <= 3 || KEEP_FINAL_S.iter().any(|k| word.ends_with(k)))
            {
                return word.to_string();
            }
            return format!("{stem}{replacement}");
        }

        word.to_string()
    }
}

/// Words the built-in lexicon already lists in the form given.
fn is_known_word(word: &str) -> bool {
    SINGULAR_S_NOUNS.contains(word)
        || NOUNS.contains(word)
        || ADJECTIVES.contains(word)
        || ADVERBS.contains(word)
        || closed_class_tag(word).is_some()
        || is_irregular_verb_form(word)
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        match &self.dictionary {
            Dictionary::WordNet { wordnet, morphy } => {
                Self::lemmatize_checked(word, wordnet, morphy)
            }
            Dictionary::Builtin => Self::lemmatize_heuristic(word),
        }
    }

    fn name(&self) -> &'static str {
        "morphy"
    }
}

/// English Snowball stemmer.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    /// Create an English stemmer.
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SnowballLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballLemmatizer").finish_non_exhaustive()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

/// Leaves words unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

/// Build the lemmatizer selected by configuration.
///
/// `wordnet_dir` only affects [`LemmatizerKind::Morphy`].
pub fn build_lemmatizer(
    kind: LemmatizerKind,
    wordnet_dir: Option<&Utf8Path>,
) -> Result<Box<dyn Lemmatizer>, LexiconError> {
    Ok(match kind {
        LemmatizerKind::Morphy => match wordnet_dir {
            Some(dir) => Box::new(MorphyLemmatizer::load(dir)?),
            None => Box::new(MorphyLemmatizer::builtin()),
        },
        LemmatizerKind::Snowball => Box::new(SnowballLemmatizer::new()),
        LemmatizerKind::None => Box::new(IdentityLemmatizer),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Write a WordNet `dict` directory whose noun index holds `nouns`.
    pub(crate) fn wordnet_dir(
        tmp: &TempDir,
        nouns: &[&str],
        noun_exc: Option<&str>,
    ) -> camino::Utf8PathBuf {
        const LICENSE: &str = "  1 This software and database is being provided\n";
        for name in [
            "data.noun",
            "data.verb",
            "data.adj",
            "data.adv",
            "index.verb",
            "index.adj",
            "index.adv",
        ] {
            fs::write(tmp.path().join(name), LICENSE).unwrap();
        }
        let mut index = String::from(LICENSE);
        for (offset, noun) in nouns.iter().enumerate() {
            index.push_str(&format!("{noun} n 1 0 1 0 {:08}\n", offset + 1));
        }
        fs::write(tmp.path().join("index.noun"), index).unwrap();
        if let Some(exc) = noun_exc {
            fs::write(tmp.path().join("noun.exc"), exc).unwrap();
        }
        camino::Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn heuristic_strips_regular_plurals() {
        let morphy = MorphyLemmatizer::builtin();
        assert_eq!(morphy.lemmatize("dogs"), "dog");
        assert_eq!(morphy.lemmatize("cities"), "city");
        assert_eq!(morphy.lemmatize("boxes"), "box");
        assert_eq!(morphy.lemmatize("classes"), "class");
        assert_eq!(morphy.lemmatize("wishes"), "wish");
        assert_eq!(morphy.lemmatize("quizzes"), "quiz");
        assert_eq!(morphy.lemmatize("works"), "work");
    }

    #[test]
    fn heuristic_guards_final_s() {
        let morphy = MorphyLemmatizer::builtin();
        assert_eq!(morphy.lemmatize("kindness"), "kindness");
        assert_eq!(morphy.lemmatize("famous"), "famous");
        assert_eq!(morphy.lemmatize("analysis"), "analysis");
        assert_eq!(morphy.lemmatize("its"), "its");
        // "-ies" needs two stem letters; "dies" falls through to "-s"
        assert_eq!(morphy.lemmatize("dies"), "die");
    }

    #[test]
    fn heuristic_keeps_known_words() {
        let morphy = MorphyLemmatizer::builtin();
        for word in [
            "always", "perhaps", "sometimes", "sideways", "whereas", "does", "news", "series",
            "species", "physics", "mathematics", "was", "this",
        ] {
            assert_eq!(morphy.lemmatize(word), word);
        }
    }

    #[test]
    fn heuristic_keeps_non_plurals() {
        let morphy = MorphyLemmatizer::builtin();
        assert_eq!(morphy.lemmatize("running"), "running");
        assert_eq!(morphy.lemmatize("sleeping"), "sleeping");
        assert_eq!(morphy.lemmatize(""), "");
    }

    #[test]
    fn exceptions_win_over_rules() {
        let morphy = MorphyLemmatizer::builtin();
        assert_eq!(morphy.lemmatize("children"), "child");
        assert_eq!(morphy.lemmatize("men"), "man");
        assert_eq!(morphy.lemmatize("leaves"), "leaf");
        assert_eq!(morphy.lemmatize("crises"), "crisis");
    }

    #[test]
    fn wordnet_filters_candidates() {
        let tmp = TempDir::new().unwrap();
        let dir = wordnet_dir(&tmp, &["horse", "bus", "running", "leaf"], None);
        let morphy = MorphyLemmatizer::load(&dir).unwrap();
        assert!(morphy.has_wordnet());
        // "horses" -> "horse" (exists) vs "hors" (does not)
        assert_eq!(morphy.lemmatize("horses"), "horse");
        // "buses" -> "bus" via ses->s; "buse" does not exist
        assert_eq!(morphy.lemmatize("buses"), "bus");
        assert_eq!(morphy.lemmatize("running"), "running");
        // no noun.exc: the built-in irregular plural still applies
        assert_eq!(morphy.lemmatize("leaves"), "leaf");
        // nothing exists: word comes back unchanged
        assert_eq!(morphy.lemmatize("zorblats"), "zorblats");
    }

    #[test]
    fn wordnet_prefers_shortest_candidate() {
        let tmp = TempDir::new().unwrap();
        let dir = wordnet_dir(&tmp, &["glasses", "glass"], None);
        let morphy = MorphyLemmatizer::load(&dir).unwrap();
        assert_eq!(morphy.lemmatize("glasses"), "glass");
    }

    #[test]
    fn wordnet_reads_exceptions() {
        let tmp = TempDir::new().unwrap();
        let dir = wordnet_dir(&tmp, &["goose", "wug"], Some("wugs wug\n"));
        let morphy = MorphyLemmatizer::load(&dir).unwrap();
        assert_eq!(morphy.lemmatize("geese"), "goose");
        assert_eq!(morphy.lemmatize("wugs"), "wug");
        // "this" is from the license header, not a lemma
        assert_eq!(morphy.lemmatize("this"), "this");
    }

    #[test]
    fn load_rejects_non_wordnet_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = camino::Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let err = MorphyLemmatizer::load(&dir).unwrap_err();
        assert!(matches!(err, LexiconError::NotWordNet { .. }));
    }

    #[test]
    fn load_reports_incomplete_wordnet_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = wordnet_dir(&tmp, &["goose"], None);
        fs::remove_file(tmp.path().join("data.adv")).unwrap();
        let err = MorphyLemmatizer::load(&dir).unwrap_err();
        assert!(matches!(err, LexiconError::WordNet { .. }));
        assert!(err.to_string().contains("data.adv"));
    }

    #[test]
    fn snowball_stems() {
        let snowball = SnowballLemmatizer::new();
        assert_eq!(snowball.lemmatize("running"), "run");
        assert_eq!(snowball.lemmatize("happiness"), "happi");
    }

    #[test]
    fn build_selects_backend() {
        assert_eq!(
            build_lemmatizer(LemmatizerKind::Morphy, None).unwrap().name(),
            "morphy"
        );
        assert_eq!(
            build_lemmatizer(LemmatizerKind::Snowball, None).unwrap().name(),
            "snowball"
        );
        let identity = build_lemmatizer(LemmatizerKind::None, None).unwrap();
        assert_eq!(identity.lemmatize("dogs"), "dogs");
    }
}
