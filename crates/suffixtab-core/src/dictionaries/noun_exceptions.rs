//! Irregular noun plurals for morphy lemmatization.
//!
//! A built-in subset of WordNet's `noun.exc`; a configured WordNet
//! directory extends it with the full exception list.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Irregular plural → singular.
pub static NOUN_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("people", "person"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("oxen", "ox"),
        ("dice", "die"),
        ("brethren", "brother"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("data", "datum"),
        ("media", "medium"),
        ("bacteria", "bacterium"),
        ("curricula", "curriculum"),
        ("memoranda", "memorandum"),
        ("strata", "stratum"),
        ("analyses", "analysis"),
        ("bases", "basis"),
        ("crises", "crisis"),
        ("diagnoses", "diagnosis"),
        ("hypotheses", "hypothesis"),
        ("oases", "oasis"),
        ("parentheses", "parenthesis"),
        ("syntheses", "synthesis"),
        ("theses", "thesis"),
        ("alumni", "alumnus"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("nuclei", "nucleus"),
        ("radii", "radius"),
        ("stimuli", "stimulus"),
        ("syllabi", "syllabus"),
        ("appendices", "appendix"),
        ("indices", "index"),
        ("matrices", "matrix"),
        ("vertices", "vertex"),
        ("formulae", "formula"),
        ("larvae", "larva"),
        ("vertebrae", "vertebra"),
        ("calves", "calf"),
        ("elves", "elf"),
        ("halves", "half"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("loaves", "loaf"),
        ("scarves", "scarf"),
        ("selves", "self"),
        ("sheaves", "sheaf"),
        ("shelves", "shelf"),
        ("thieves", "thief"),
        ("wives", "wife"),
        ("wolves", "wolf"),
        ("wharves", "wharf"),
        ("hooves", "hoof"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("heroes", "hero"),
        ("echoes", "echo"),
        ("vetoes", "veto"),
    ]
    .into_iter()
    .collect()
});

/// Singular nouns ending in "-s" or "-ies" that no plural rule may touch.
pub static SINGULAR_S_NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "news", "series", "means", "gallows", "barracks", "shambles", "headquarters", "crossroads",
        "whereabouts", "physics", "mathematics", "economics", "politics", "ethics", "statistics",
        "linguistics", "athletics", "gymnastics", "electronics", "genetics", "logistics",
        "acoustics", "optics", "mechanics", "semantics", "phonetics", "aesthetics", "graphics",
        "tactics", "measles", "mumps", "diabetes", "rabies", "herpes", "billiards", "innings",
        "thanks", "clothes", "scissors", "trousers", "lens", "bias", "atlas", "canvas", "alias",
        "gas", "chaos", "cosmos", "pathos", "ethos", "kudos", "thermos", "bus", "iris", "species",
        "apparatus", "status", "virus", "campus", "bonus", "census", "corpus", "genus",
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irregular_plurals() {
        assert_eq!(NOUN_EXCEPTIONS.get("children"), Some(&"child"));
        assert_eq!(NOUN_EXCEPTIONS.get("wolves"), Some(&"wolf"));
        assert!(!NOUN_EXCEPTIONS.contains_key("dogs"));
    }

    #[test]
    fn singular_s_nouns_are_not_plurals() {
        for word in SINGULAR_S_NOUNS.iter() {
            assert!(word.ends_with('s'), "{word} does not end in s");
            assert!(!NOUN_EXCEPTIONS.contains_key(word), "{word} listed as a plural");
        }
    }
}
