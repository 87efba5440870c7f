//! Part-of-speech tagging of bare words.
//!
//! [`PosTagger`] assigns a coarse Universal Dependencies tag to a single
//! word with no sentence context. [`LexiconTagger`] is the shipped
//! implementation: a cascade of word lists and suffix rules, optionally
//! overridden by a user lexicon.

use std::collections::HashMap;
use std::str::FromStr;

use camino::Utf8Path;
use serde::Serialize;

use crate::dictionaries::closed_class::closed_class_tag;
use crate::dictionaries::irregular_verbs::{is_adjective_exception, is_irregular_verb_form};
use crate::dictionaries::open_class::{ADJECTIVES, ADVERBS, NOUNS, VERBS};
use crate::error::LexiconError;

/// Coarse Universal Dependencies part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoarseTag {
    /// Adjective.
    Adj,
    /// Adposition.
    Adp,
    /// Adverb.
    Adv,
    /// Auxiliary verb.
    Aux,
    /// Coordinating conjunction.
    Cconj,
    /// Determiner.
    Det,
    /// Interjection.
    Intj,
    /// Common noun.
    Noun,
    /// Numeral.
    Num,
    /// Particle.
    Part,
    /// Pronoun.
    Pron,
    /// Proper noun.
    Propn,
    /// Punctuation.
    Punct,
    /// Subordinating conjunction.
    Sconj,
    /// Symbol.
    Sym,
    /// Main verb.
    Verb,
    /// Anything else.
    X,
}

impl CoarseTag {
    /// The tag as written in Universal Dependencies (`NOUN`, `ADJ`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }
}

impl std::fmt::Display for CoarseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl std::fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown part-of-speech tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for CoarseTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_uppercase().as_str() {
            "ADJ" => Self::Adj,
            "ADP" => Self::Adp,
            "ADV" => Self::Adv,
            "AUX" => Self::Aux,
            "CCONJ" | "CONJ" => Self::Cconj,
            "DET" => Self::Det,
            "INTJ" => Self::Intj,
            "NOUN" => Self::Noun,
            "NUM" => Self::Num,
            "PART" => Self::Part,
            "PRON" => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM" => Self::Sym,
            "VERB" => Self::Verb,
            "X" => Self::X,
            _ => return Err(UnknownTag(s.to_string())),
        })
    }
}

/// Tags a single word, out of context.
pub trait PosTagger: Send + Sync {
    /// Tag `word`. Must be deterministic for a given tagger.
    fn tag(&self, word: &str) -> CoarseTag;
}

/// Suffix rules: `(suffix, tag, minimum stem length)`, longest suffix first.
///
/// The stem is what remains of the word in front of the suffix; short stems
/// keep "red" from reading as a past tense and "sing" as a participle.
const SUFFIX_RULES: &[(&str, CoarseTag, usize)] = &[
    ("ically", CoarseTag::Adv, 2),
    ("fully", CoarseTag::Adv, 2),
    ("ation", CoarseTag::Noun, 2),
    ("ition", CoarseTag::Noun, 2),
    ("ement", CoarseTag::Noun, 2),
    ("ness", CoarseTag::Noun, 2),
    ("ment", CoarseTag::Noun, 3),
    ("ship", CoarseTag::Noun, 3),
    ("hood", CoarseTag::Noun, 3),
    ("ance", CoarseTag::Noun, 3),
    ("ence", CoarseTag::Noun, 3),
    ("less", CoarseTag::Adj, 2),
    ("able", CoarseTag::Adj, 2),
    ("ible", CoarseTag::Adj, 2),
    ("ical", CoarseTag::Adj, 2),
    ("ward", CoarseTag::Adv, 2),
    ("wise", CoarseTag::Adv, 3),
    ("tion", CoarseTag::Noun, 2),
    ("sion", CoarseTag::Noun, 2),
    ("ious", CoarseTag::Adj, 2),
    ("eous", CoarseTag::Adj, 2),
    ("ize", CoarseTag::Verb, 2),
    ("ise", CoarseTag::Verb, 3),
    ("ify", CoarseTag::Verb, 2),
    ("ate", CoarseTag::Verb, 3),
    ("ing", CoarseTag::Verb, 2),
    ("ity", CoarseTag::Noun, 2),
    ("ism", CoarseTag::Noun, 2),
    ("ist", CoarseTag::Noun, 2),
    ("dom", CoarseTag::Noun, 3),
    ("ure", CoarseTag::Noun, 3),
    ("age", CoarseTag::Noun, 3),
    ("ery", CoarseTag::Noun, 3),
    ("ful", CoarseTag::Adj, 2),
    ("ous", CoarseTag::Adj, 2),
    ("ive", CoarseTag::Adj, 2),
    ("ish", CoarseTag::Adj, 3),
    ("ant", CoarseTag::Adj, 3),
    ("ent", CoarseTag::Adj, 3),
    ("est", CoarseTag::Adj, 3),
    ("ier", CoarseTag::Adj, 2),
    ("ic", CoarseTag::Adj, 3),
    ("al", CoarseTag::Adj, 3),
    ("ly", CoarseTag::Adv, 3),
    ("ed", CoarseTag::Verb, 3),
    ("en", CoarseTag::Verb, 3),
    ("er", CoarseTag::Noun, 2),
    ("or", CoarseTag::Noun, 2),
    ("ee", CoarseTag::Noun, 2),
    ("cy", CoarseTag::Noun, 2),
    ("y", CoarseTag::Adj, 3),
];

/// Word-list and suffix-rule tagger.
///
/// Resolution order for a lower-cased word:
/// 1. user lexicon overrides
/// 2. non-alphabetic tokens (`NUM`, `PUNCT`, `SYM`)
/// 3. closed-class function words
/// 4. participle-shaped adjectives, then listed nouns, adverbs, adjectives
/// 5. irregular and frequent regular verbs
/// 6. suffix rules
/// 7. `NOUN`
#[derive(Debug, Clone, Default)]
pub struct LexiconTagger {
    overrides: HashMap<String, CoarseTag>,
}

impl LexiconTagger {
    /// Tagger with only the built-in word lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tagger with explicit overrides taking precedence over built-in rules.
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, CoarseTag)>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(word, tag)| (word.to_lowercase(), tag))
                .collect(),
        }
    }

    /// Load overrides from a lexicon file.
    ///
    /// One `word TAG` pair per line, whitespace separated. Blank lines and
    /// lines starting with `#` are ignored. Later lines win.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_lexicon_file(path: &Utf8Path) -> Result<Self, LexiconError> {
        let contents =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| LexiconError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut overrides: Vec<(String, CoarseTag)> = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse_error = |message: String| LexiconError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                message,
            };
            let mut parts = line.split_whitespace();
            let (Some(word), Some(tag), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(parse_error(format!("expected `word TAG`, got `{line}`")));
            };
            let tag = tag
                .parse::<CoarseTag>()
                .map_err(|e: UnknownTag| parse_error(e.to_string()))?;
            overrides.push((word.to_string(), tag));
        }

        tracing::debug!(entries = overrides.len(), "loaded tagger lexicon");
        Ok(Self::with_overrides(overrides))
    }

    /// Number of lexicon overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, word: &str) -> CoarseTag {
        let word = word.to_lowercase();
        let word = word.as_str();

        if let Some(tag) = self.overrides.get(word) {
            return *tag;
        }

        if !word.chars().any(char::is_alphabetic) {
            return if word.is_empty() {
                CoarseTag::X
            } else if word.chars().any(|c| c.is_ascii_digit()) {
                CoarseTag::Num
            } else if word.chars().all(|c| c.is_ascii_punctuation()) {
                CoarseTag::Punct
            } else {
                CoarseTag::Sym
            };
        }

        if let Some(tag) = closed_class_tag(word) {
            return tag;
        }
        if is_adjective_exception(word) {
            return CoarseTag::Adj;
        }
        if NOUNS.contains(word) {
            return CoarseTag::Noun;
        }
        if ADVERBS.contains(word) {
            return CoarseTag::Adv;
        }
        if ADJECTIVES.contains(word) {
            return CoarseTag::Adj;
        }
        if is_irregular_verb_form(word) || VERBS.contains(word) {
            return CoarseTag::Verb;
        }

        suffix_tag(word).unwrap_or(CoarseTag::Noun)
    }
}

/// First suffix rule that applies to `word`.
fn suffix_tag(word: &str) -> Option<CoarseTag> {
    let len = word.chars().count();
    SUFFIX_RULES.iter().find_map(|(suffix, tag, min_stem)| {
        (word.ends_with(suffix) && len >= suffix.chars().count() + min_stem).then_some(*tag)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tag(word: &str) -> CoarseTag {
        LexiconTagger::new().tag(word)
    }

    #[test]
    fn suffix_rules_cover_open_classes() {
        assert_eq!(tag("happiness"), CoarseTag::Noun);
        assert_eq!(tag("education"), CoarseTag::Noun);
        assert_eq!(tag("careless"), CoarseTag::Adj);
        assert_eq!(tag("quickly"), CoarseTag::Adv);
        assert_eq!(tag("organize"), CoarseTag::Verb);
        assert_eq!(tag("sleeping"), CoarseTag::Verb);
        assert_eq!(tag("walked"), CoarseTag::Verb);
        assert_eq!(tag("painter"), CoarseTag::Noun);
    }

    #[test]
    fn word_lists_beat_suffix_rules() {
        assert_eq!(tag("family"), CoarseTag::Noun);
        assert_eq!(tag("friendly"), CoarseTag::Adj);
        assert_eq!(tag("often"), CoarseTag::Adv);
        assert_eq!(tag("king"), CoarseTag::Noun);
        assert_eq!(tag("tired"), CoarseTag::Adj);
        assert_eq!(tag("written"), CoarseTag::Verb);
        assert_eq!(tag("running"), CoarseTag::Verb);
    }

    #[test]
    fn short_stems_fall_through() {
        // "red" is listed; "bed" is a noun; "sing" is a verb form, not a participle
        assert_eq!(tag("red"), CoarseTag::Adj);
        assert_eq!(tag("bed"), CoarseTag::Noun);
        assert_eq!(tag("sing"), CoarseTag::Verb);
        // unknown short word falls back to noun
        assert_eq!(tag("zed"), CoarseTag::Noun);
    }

    #[test]
    fn function_words_and_symbols() {
        assert_eq!(tag("the"), CoarseTag::Det);
        assert_eq!(tag("because"), CoarseTag::Sconj);
        assert_eq!(tag("1999"), CoarseTag::Num);
        assert_eq!(tag("--"), CoarseTag::Punct);
        assert_eq!(tag("€"), CoarseTag::Sym);
        assert_eq!(tag(""), CoarseTag::X);
    }

    #[test]
    fn tagging_is_case_insensitive_and_idempotent() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag("Kindness"), tagger.tag("kindness"));
        for word in ["running", "quickly", "nation", "blue"] {
            assert_eq!(tagger.tag(word), tagger.tag(word));
        }
    }

    #[test]
    fn overrides_take_precedence() {
        let tagger =
            LexiconTagger::with_overrides([("Running".to_string(), CoarseTag::Noun)]);
        assert_eq!(tagger.tag("running"), CoarseTag::Noun);
        assert_eq!(tagger.override_count(), 1);
    }

    #[test]
    fn lexicon_file_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.txt");
        fs::write(&path, "# custom tags\nbuilding NOUN\n\nquickly adj\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let tagger = LexiconTagger::from_lexicon_file(&path).unwrap();
        assert_eq!(tagger.tag("quickly"), CoarseTag::Adj);
        assert_eq!(tagger.override_count(), 2);
    }

    #[test]
    fn lexicon_file_reports_bad_lines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lexicon.txt");
        fs::write(&path, "fine NOUN\nbroken\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let err = LexiconTagger::from_lexicon_file(&path).unwrap_err();
        assert!(matches!(err, LexiconError::Parse { line: 2, .. }));

        fs::write(&path, "word NOTATAG\n").unwrap();
        let err = LexiconTagger::from_lexicon_file(&path).unwrap_err();
        assert!(err.to_string().contains("NOTATAG"));
    }

    #[test]
    fn tag_names_parse() {
        assert_eq!("noun".parse::<CoarseTag>(), Ok(CoarseTag::Noun));
        assert_eq!("PROPN".parse::<CoarseTag>(), Ok(CoarseTag::Propn));
        assert!("VB".parse::<CoarseTag>().is_err());
        assert_eq!(CoarseTag::Sconj.to_string(), "SCONJ");
    }
}
