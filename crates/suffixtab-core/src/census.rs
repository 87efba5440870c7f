//! The end-to-end census: read, match, classify, tabulate, count, write.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::classify::{Classification, WordClass, classify_words};
use crate::config::Config;
use crate::docx::{read_paragraphs, read_suffix_list};
use crate::error::{CensusResult, LexiconError};
use crate::lemmatize::{Lemmatizer, build_lemmatizer};
use crate::matcher::match_paragraphs;
use crate::normalize::base_word;
use crate::statistics::{ClassCounts, calculate_statistics};
use crate::table::build_table;
use crate::tagger::{CoarseTag, LexiconTagger, PosTagger};
use crate::workbook::{write_statistics, write_table};

/// The NLP services a census runs with.
///
/// Built once and passed by reference; nothing here is global.
pub struct Analyzer {
    lemmatizer: Box<dyn Lemmatizer>,
    tagger: Box<dyn PosTagger>,
}

impl Analyzer {
    /// Pair a lemmatizer with a tagger.
    pub fn new(lemmatizer: Box<dyn Lemmatizer>, tagger: Box<dyn PosTagger>) -> Self {
        Self { lemmatizer, tagger }
    }

    /// Build the lemmatizer and tagger named by `config`, loading any
    /// WordNet directory or lexicon file it points at.
    #[tracing::instrument(skip_all, fields(lemmatizer = %config.lemmatizer))]
    pub fn from_config(config: &Config) -> Result<Self, LexiconError> {
        let lemmatizer = build_lemmatizer(config.lemmatizer, config.wordnet_dir.as_deref())?;
        let tagger = match &config.lexicon {
            Some(path) => LexiconTagger::from_lexicon_file(path)?,
            None => LexiconTagger::new(),
        };
        tracing::debug!(
            lemmatizer = lemmatizer.name(),
            overrides = tagger.override_count(),
            "analyzer ready"
        );
        Ok(Self::new(lemmatizer, Box::new(tagger)))
    }

    /// The lemmatizer in use.
    pub fn lemmatizer(&self) -> &dyn Lemmatizer {
        self.lemmatizer.as_ref()
    }

    /// The tagger in use.
    pub fn tagger(&self) -> &dyn PosTagger {
        self.tagger.as_ref()
    }

    /// Normalize, tag and classify a single raw token.
    pub fn inspect(&self, token: &str) -> WordReport {
        let base = base_word(token, self.lemmatizer());
        let tag = self.tagger.tag(&base);
        WordReport {
            token: token.to_string(),
            class: WordClass::from_tag(tag),
            base,
            tag,
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish_non_exhaustive()
    }
}

/// How one token was normalized and classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    /// The token as given.
    pub token: String,
    /// Its base word.
    pub base: String,
    /// The coarse tag of the base word.
    pub tag: CoarseTag,
    /// The class the tag maps to.
    pub class: WordClass,
}

/// Input and output locations of a census.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensusPaths {
    /// Document scanned for matches.
    pub document: Utf8PathBuf,
    /// Document holding the suffix list.
    pub suffixes: Utf8PathBuf,
    /// Destination of the word table.
    pub result: Utf8PathBuf,
    /// Destination of the counts.
    pub statistics: Utf8PathBuf,
}

impl CensusPaths {
    /// Paths configured in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            document: config.document_path.clone(),
            suffixes: config.suffix_list_path.clone(),
            result: config.result_path.clone(),
            statistics: config.statistics_path.clone(),
        }
    }

    /// Resolve relative paths against `base`.
    pub fn relative_to(self, base: &Utf8Path) -> Self {
        let resolve = |path: Utf8PathBuf| {
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        };
        Self {
            document: resolve(self.document),
            suffixes: resolve(self.suffixes),
            result: resolve(self.result),
            statistics: resolve(self.statistics),
        }
    }
}

/// Pipeline steps, reported as they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading the suffix list document.
    ReadSuffixes,
    /// Reading the target document.
    ReadDocument,
    /// Normalizing tokens and matching suffixes.
    Match,
    /// Tagging matched words.
    Classify,
    /// Building the word table.
    Tabulate,
    /// Counting occurrences.
    Count,
    /// Saving the word table.
    WriteResult,
    /// Saving the counts.
    WriteStatistics,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ReadSuffixes => "reading suffix list",
            Self::ReadDocument => "reading document",
            Self::Match => "matching suffixes",
            Self::Classify => "classifying words",
            Self::Tabulate => "building table",
            Self::Count => "counting occurrences",
            Self::WriteResult => "writing result",
            Self::WriteStatistics => "writing statistics",
        })
    }
}

/// Summary of a completed census.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CensusReport {
    /// Where inputs came from and outputs went.
    pub paths: CensusPaths,
    /// Lemmatizer backend name.
    pub lemmatizer: &'static str,
    /// Suffixes read, duplicates included.
    pub suffixes: usize,
    /// Paragraphs in the target document.
    pub paragraphs: usize,
    /// Tokens scanned.
    pub tokens: usize,
    /// Word-list entries, one per token and matching suffix.
    pub matches: usize,
    /// Distinct matched words per class.
    pub unique_words: ClassCounts,
}

fn unique_words(classification: &Classification) -> ClassCounts {
    let [noun, verb, adjective, adverb, unknown] = classification.counts();
    ClassCounts {
        noun,
        verb,
        adjective,
        adverb,
        unknown,
    }
}

/// Run the whole census and write both workbooks.
///
/// `max_bytes` limits each input document. `on_stage` is called as each
/// step begins. Stops at the first error; the workbooks are only written
/// once every earlier step has succeeded.
#[tracing::instrument(skip_all, fields(document = %paths.document, suffixes = %paths.suffixes))]
pub fn run_census(
    analyzer: &Analyzer,
    paths: &CensusPaths,
    max_bytes: Option<usize>,
    mut on_stage: impl FnMut(Stage),
) -> CensusResult<CensusReport> {
    on_stage(Stage::ReadSuffixes);
    let suffixes = read_suffix_list(&paths.suffixes, max_bytes)?;

    on_stage(Stage::ReadDocument);
    let paragraphs = read_paragraphs(&paths.document, max_bytes)?;

    on_stage(Stage::Match);
    let matched = match_paragraphs(&paragraphs, &suffixes, analyzer.lemmatizer());

    on_stage(Stage::Classify);
    let classification = classify_words(&matched.words, analyzer.tagger());

    on_stage(Stage::Tabulate);
    let table = build_table(&suffixes, &classification);

    on_stage(Stage::Count);
    let statistics = calculate_statistics(&matched.words, &suffixes, &classification);

    on_stage(Stage::WriteResult);
    write_table(&table, &paths.result)?;

    on_stage(Stage::WriteStatistics);
    write_statistics(&statistics, &paths.statistics)?;

    let report = CensusReport {
        paths: paths.clone(),
        lemmatizer: analyzer.lemmatizer().name(),
        suffixes: suffixes.len(),
        paragraphs: paragraphs.len(),
        tokens: matched.tokens,
        matches: matched.words.len(),
        unique_words: unique_words(&classification),
    };
    tracing::info!(
        suffixes = report.suffixes,
        tokens = report.tokens,
        matches = report.matches,
        "census complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::tests::FakeTagger;
    use crate::docx::tests::{paragraphs_xml, write_docx};
    use crate::error::{CensusError, DocumentError};
    use crate::lemmatize::{IdentityLemmatizer, MorphyLemmatizer};
    use crate::workbook::tests::read_part;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> CensusPaths {
        let base = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        CensusPaths {
            document: "mau.docx".into(),
            suffixes: "suffix.docx".into(),
            result: "result.xlsx".into(),
            statistics: "statistics.xlsx".into(),
        }
        .relative_to(&base)
    }

    fn fake_analyzer() -> Analyzer {
        Analyzer::new(
            Box::new(MorphyLemmatizer::builtin()),
            Box::new(FakeTagger::new(&[
                ("running", CoarseTag::Verb),
                ("sleeping", CoarseTag::Verb),
                ("quickly", CoarseTag::Adv),
            ])),
        )
    }

    #[test]
    fn runs_full_pipeline() {
        let dir = TempDir::new().unwrap();
        write_docx(&dir, "suffix.docx", &paragraphs_xml(&["ing ly"]));
        write_docx(
            &dir,
            "mau.docx",
            &paragraphs_xml(&["Running is fun, Sleeping too.", "Running quickly!"]),
        );
        let paths = paths(&dir);

        let mut stages = Vec::new();
        let report = run_census(&fake_analyzer(), &paths, None, |stage| stages.push(stage)).unwrap();

        assert_eq!(report.suffixes, 2);
        assert_eq!(report.paragraphs, 2);
        assert_eq!(report.tokens, 7);
        assert_eq!(report.matches, 4);
        assert_eq!(report.unique_words.verb, 2);
        assert_eq!(report.unique_words.adverb, 1);
        assert_eq!(report.lemmatizer, "morphy");
        assert_eq!(
            stages,
            [
                Stage::ReadSuffixes,
                Stage::ReadDocument,
                Stage::Match,
                Stage::Classify,
                Stage::Tabulate,
                Stage::Count,
                Stage::WriteResult,
                Stage::WriteStatistics,
            ]
        );

        let strings = read_part(&paths.result, "xl/sharedStrings.xml");
        assert!(strings.contains("running, sleeping"));
        assert!(strings.contains("quickly"));

        let sheet = read_part(&paths.statistics, "xl/worksheets/sheet1.xml");
        assert!(sheet.contains("<v>3</v>"), "running twice plus sleeping once");
    }

    #[test]
    fn missing_suffix_list_writes_nothing() {
        let dir = TempDir::new().unwrap();
        write_docx(&dir, "mau.docx", &paragraphs_xml(&["Running"]));
        let paths = paths(&dir);

        let err = run_census(&fake_analyzer(), &paths, None, |_| {}).unwrap_err();
        assert!(matches!(
            err,
            CensusError::Document(DocumentError::Open { .. })
        ));
        assert!(err.to_string().contains("suffix.docx"));
        assert!(!paths.result.exists());
        assert!(!paths.statistics.exists());
    }

    #[test]
    fn oversized_document_fails_before_writing() {
        let dir = TempDir::new().unwrap();
        write_docx(&dir, "suffix.docx", &paragraphs_xml(&["ing"]));
        write_docx(&dir, "mau.docx", &paragraphs_xml(&["Running"; 200]));
        let paths = paths(&dir);
        let suffix_size = std::fs::metadata(&paths.suffixes).unwrap().len();
        let limit = usize::try_from(suffix_size).unwrap() + 64;

        let err = run_census(&fake_analyzer(), &paths, Some(limit), |_| {}).unwrap_err();
        assert!(matches!(
            err,
            CensusError::Document(DocumentError::TooLarge { .. })
        ));
        assert!(!paths.result.exists());
    }

    #[test]
    fn empty_suffix_list_writes_header_only_outputs() {
        let dir = TempDir::new().unwrap();
        write_docx(&dir, "suffix.docx", "");
        write_docx(&dir, "mau.docx", &paragraphs_xml(&["Running quickly"]));
        let paths = paths(&dir);

        let report = run_census(&fake_analyzer(), &paths, None, |_| {}).unwrap();
        assert_eq!(report.suffixes, 0);
        assert_eq!(report.matches, 0);
        assert_eq!(report.tokens, 2);
        assert!(paths.result.exists());
        assert!(paths.statistics.exists());
    }

    #[test]
    fn inspect_reports_base_tag_and_class() {
        let analyzer = Analyzer::new(Box::new(IdentityLemmatizer), Box::new(LexiconTagger::new()));
        let report = analyzer.inspect("Quickly,");
        assert_eq!(report.base, "quickly");
        assert_eq!(report.tag, CoarseTag::Adv);
        assert_eq!(report.class, WordClass::Adverb);

        let report = analyzer.inspect("the");
        assert_eq!(report.class, WordClass::Unknown);
    }

    #[test]
    fn from_config_honours_lemmatizer_and_lexicon() {
        let dir = TempDir::new().unwrap();
        let lexicon = dir.path().join("lexicon.txt");
        std::fs::write(&lexicon, "# overrides\nrunning ADJ\n").unwrap();

        let config = Config {
            lemmatizer: crate::config::LemmatizerKind::Snowball,
            lexicon: Some(Utf8PathBuf::try_from(lexicon).unwrap()),
            ..Config::default()
        };
        let analyzer = Analyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.lemmatizer().name(), "snowball");
        assert_eq!(analyzer.tagger().tag("running"), CoarseTag::Adj);
    }

    #[test]
    fn from_config_reports_missing_wordnet() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            wordnet_dir: Some(Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()),
            ..Config::default()
        };
        let err = Analyzer::from_config(&config).unwrap_err();
        assert!(matches!(err, LexiconError::NotWordNet { .. }));
    }

    #[test]
    fn from_config_loads_wordnet() {
        let dir = TempDir::new().unwrap();
        let wordnet = crate::lemmatize::tests::wordnet_dir(&dir, &["church", "news"], None);
        let config = Config {
            wordnet_dir: Some(wordnet),
            ..Config::default()
        };
        let analyzer = Analyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.inspect("Churches,").base, "church");
        assert_eq!(analyzer.inspect("news").base, "news");
    }

    #[test]
    fn report_serializes_for_json_output() {
        let dir = TempDir::new().unwrap();
        write_docx(&dir, "suffix.docx", &paragraphs_xml(&["ly"]));
        write_docx(&dir, "mau.docx", &paragraphs_xml(&["quickly"]));
        let report = run_census(&fake_analyzer(), &paths(&dir), None, |_| {}).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["matches"], 1);
        assert_eq!(json["unique_words"]["adverb"], 1);
        assert!(json["paths"]["result"].as_str().unwrap().ends_with("result.xlsx"));
    }

    #[test]
    fn stages_display_as_status_text() {
        assert_eq!(Stage::ReadSuffixes.to_string(), "reading suffix list");
        assert_eq!(Stage::WriteStatistics.to_string(), "writing statistics");
    }
}
