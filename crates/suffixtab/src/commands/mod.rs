//! Command implementations.

use camino::Utf8PathBuf;
use clap::Args;
use suffixtab_core::config::{Config, LemmatizerKind};

pub mod classify;
pub mod info;
pub mod run;

/// Flags selecting the lemmatizer and tagger, shared by `run` and `classify`.
#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzerArgs {
    /// Lemmatizer applied to each word (overrides config)
    #[arg(long, value_enum)]
    pub lemmatizer: Option<LemmatizerKind>,

    /// WordNet dict directory for the morphy lemmatizer
    #[arg(long, value_name = "DIR")]
    pub wordnet_dir: Option<Utf8PathBuf>,

    /// Tagger lexicon file with one `word TAG` pair per line
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<Utf8PathBuf>,
}

impl AnalyzerArgs {
    /// Layer these flags over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(kind) = self.lemmatizer {
            config.lemmatizer = kind;
        }
        if let Some(ref dir) = self.wordnet_dir {
            config.wordnet_dir = Some(dir.clone());
        }
        if let Some(ref path) = self.lexicon {
            config.lexicon = Some(path.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = Config {
            lexicon: Some(Utf8PathBuf::from("from-config.txt")),
            ..Config::default()
        };
        let args = AnalyzerArgs {
            lemmatizer: Some(LemmatizerKind::None),
            wordnet_dir: Some(Utf8PathBuf::from("/usr/share/wordnet")),
            lexicon: None,
        };
        args.apply(&mut config);
        assert_eq!(config.lemmatizer, LemmatizerKind::None);
        assert_eq!(
            config.wordnet_dir.as_deref(),
            Some(camino::Utf8Path::new("/usr/share/wordnet"))
        );
        assert_eq!(
            config.lexicon.as_deref(),
            Some(camino::Utf8Path::new("from-config.txt"))
        );
    }
}
