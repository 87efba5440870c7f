//! Open-class words whose part of speech their ending would get wrong.
//!
//! "Often" has no "-ly", "early" is an adjective, "family" is a noun, and
//! "king" is not a participle. These lists are consulted after the
//! closed-class table and before the suffix rules.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Adverbs, including "-ly" words that are not derived from adjectives.
pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "again", "almost", "already", "also", "always", "anyway", "anywhere", "away", "back",
        "else", "elsewhere", "enough", "ever", "everywhere", "far", "forever", "here", "however",
        "indeed", "instead", "just", "later", "maybe", "meanwhile", "moreover", "much", "never",
        "nevertheless", "now", "nowhere", "often", "perhaps", "quite", "rather", "seldom",
        "so", "sometimes", "somewhat", "somewhere", "soon", "still", "then", "there",
        "therefore", "thus", "today", "together", "tomorrow", "tonight", "too", "very", "well",
        "when", "where", "why", "how", "yesterday", "otherwise", "hence", "furthermore",
        "nonetheless", "afterwards", "ahead", "abroad", "apart", "aside", "downstairs",
        "upstairs", "indoors", "outdoors", "forward", "backward", "homeward", "likewise",
        "sideways", "nowadays", "backwards", "forwards",
        "anyways", "overseas",
    ]
    .into_iter()
    .collect()
});

/// Adjectives without a tell-tale adjective suffix, plus "-ly" adjectives.
pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "good", "bad", "new", "old", "big", "small", "large", "little", "long", "short", "high",
        "low", "young", "great", "right", "wrong", "true", "false", "full", "empty", "hot",
        "cold", "warm", "cool", "dark", "light", "hard", "soft", "easy", "happy", "sad", "rich",
        "poor", "strong", "weak", "quick", "slow", "fast", "late", "early", "free", "clear",
        "clean", "dirty", "deep", "wide", "narrow", "thick", "thin", "heavy", "fine", "sure",
        "real", "whole", "main", "same", "different", "open", "close", "ready", "busy", "pretty",
        "ugly", "quiet", "loud", "calm", "brave", "proud", "wise", "strange", "simple", "common",
        "certain", "complete", "several", "own", "friendly", "lovely", "lonely", "lively",
        "likely", "costly", "deadly", "elderly", "holy", "silly", "daily",
        "weekly", "monthly", "yearly", "kindly", "orderly", "manly", "womanly", "worldly",
        "red", "blue", "green", "yellow", "black", "white", "brown", "grey", "gray", "pink",
        "purple", "orange",
    ]
    .into_iter()
    .collect()
});

/// Nouns whose ending suggests another class ("-ly", "-ing", "-ed", "-ate").
pub static NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "family", "ally", "belly", "bully", "jelly", "rally", "lily", "fly", "folly", "anomaly",
        "assembly", "monopoly", "melancholy", "supply", "reply", "italy", "king", "thing",
        "ring", "spring", "string", "wing", "ceiling", "evening", "morning", "building",
        "meeting", "feeling", "wedding", "pudding", "clothing", "nothing", "sibling",
        "duckling", "darling", "bed", "shed", "sled", "seed", "need", "reed", "speed", "steed",
        "weed", "creed", "greed", "breed", "hundred", "kindred", "sacred", "climate", "senate",
        "estate", "palate", "debate", "candidate", "certificate", "chocolate", "plate",
        "state", "date", "fate", "gate", "rate", "mate", "kitten", "garden", "heaven", "oxygen",
        "citizen", "chicken", "children", "women", "men", "linen", "pollen", "token", "burden",
        "dozen", "warden", "mountain", "person", "reason", "season", "lesson", "water",
        "letter", "matter", "number", "paper", "power", "answer", "order", "summer", "winter",
        "mother", "father", "brother", "sister", "daughter", "weather", "corner", "member",
        "center", "centre", "chapter", "flower", "tower", "hour",
    ]
    .into_iter()
    .collect()
});

/// Frequent regular verbs in their base form.
pub static VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ask", "call", "try", "use", "work", "seem", "help", "talk", "turn", "start", "move",
        "like", "live", "believe", "happen", "provide", "include", "continue", "learn",
        "change", "follow", "stop", "create", "allow", "add", "open", "walk", "offer",
        "remember", "love", "consider", "appear", "wait", "serve", "die", "expect", "stay",
        "reach", "kill", "remain", "suggest", "raise", "pass", "require", "report", "decide",
        "pull", "return", "explain", "hope", "develop", "carry", "receive", "agree",
        "support", "hit", "produce", "cover", "join", "reduce", "establish", "enjoy",
        "prepare", "argue", "achieve", "seek", "improve", "discover", "describe", "obtain",
        "contain", "attack", "fill", "apply", "avoid", "imagine", "tend", "treat", "visit",
        "want", "need", "look", "watch", "listen", "play", "jump", "climb", "cry", "laugh",
        "smile", "kiss", "dance", "cook", "clean", "wash", "paint", "plant", "push", "close",
        "arrive", "enter", "leave", "fix", "save", "share", "study", "teach",
    ]
    .into_iter()
    .collect()
});
