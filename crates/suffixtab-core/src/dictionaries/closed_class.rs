//! Closed-class English words and their coarse tags.
//!
//! Function words never carry productive suffixes, but short suffixes
//! ("-s", "-er", "-ly") still reach them, so the tagger must know them
//! before suffix rules run.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tagger::CoarseTag;

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "whoever", "whomever", "anybody", "anyone", "anything", "everybody", "everyone",
    "everything", "nobody", "nothing", "somebody", "someone", "something", "oneself",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "all", "both", "another", "such", "what", "which", "whatever",
    "whichever",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "upon", "about",
    "above", "across", "after", "against", "along", "amid", "among", "around", "before",
    "behind", "below", "beneath", "beside", "besides", "between", "beyond", "despite", "down",
    "during", "except", "inside", "near", "off", "outside", "over", "past", "per", "since",
    "through", "throughout", "toward", "towards", "under", "underneath", "unlike", "until",
    "via", "within", "without",
];

const COORDINATING: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

const SUBORDINATING: &[&str] = &[
    "because", "although", "though", "unless", "whereas", "whether", "while", "whilst", "if",
    "once", "than", "lest",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can",
    "could", "ought",
];

const PARTICLES: &[&str] = &["not", "n't", "'s", "to"];

const INTERJECTIONS: &[&str] = &[
    "oh", "ah", "alas", "hello", "hey", "hi", "wow", "ouch", "oops", "hmm", "yes", "yeah", "no",
    "okay", "ok", "please", "bye", "hurray", "hooray",
];

const NUMERALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion",
];

/// Closed-class words keyed to their coarse tag.
///
/// Lists are inserted in order; a word that appears in several lists
/// ("to", "no", "do") keeps the tag of the first list it appears in.
pub static CLOSED_CLASS: LazyLock<HashMap<&'static str, CoarseTag>> = LazyLock::new(|| {
    let groups: [(&[&str], CoarseTag); 9] = [
        (PRONOUNS, CoarseTag::Pron),
        (DETERMINERS, CoarseTag::Det),
        (ADPOSITIONS, CoarseTag::Adp),
        (COORDINATING, CoarseTag::Cconj),
        (SUBORDINATING, CoarseTag::Sconj),
        (AUXILIARIES, CoarseTag::Aux),
        (PARTICLES, CoarseTag::Part),
        (INTERJECTIONS, CoarseTag::Intj),
        (NUMERALS, CoarseTag::Num),
    ];

    let mut map = HashMap::new();
    for (words, tag) in groups {
        for word in words {
            map.entry(*word).or_insert(tag);
        }
    }
    map
});

/// Look up the tag of a closed-class word.
pub fn closed_class_tag(word: &str) -> Option<CoarseTag> {
    CLOSED_CLASS.get(word).copied()
}
