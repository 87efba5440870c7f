//! Core library for suffixtab.
//!
//! suffixtab scans a Word document for words ending with any of a list of
//! suffixes, classifies each match by part of speech, and writes a suffix x
//! part-of-speech word table plus occurrence counts to spreadsheets.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//! - [`docx`] - Paragraph extraction from `.docx` files
//! - [`normalize`] - Base-word normalization
//! - [`lemmatize`] - Dictionary-form reduction backends
//! - [`tagger`] - Out-of-context part-of-speech tagging
//! - [`matcher`] - Suffix lists and suffix matching
//! - [`classify`] - Part-of-speech classes and the classification map
//! - [`table`] - The suffix x class word table
//! - [`statistics`] - Per-suffix, per-class occurrence counts
//! - [`workbook`] - `.xlsx` output
//! - [`census`] - The end-to-end pipeline
//!
//! # Quick Start
//!
//! ```no_run
//! use suffixtab_core::{Analyzer, CensusPaths, ConfigLoader, run_census};
//!
//! let (config, _sources) = ConfigLoader::new()
//!     .with_user_config(true)
//!     .load()
//!     .expect("Failed to load configuration");
//!
//! let analyzer = Analyzer::from_config(&config).expect("Failed to load lexicons");
//! let paths = CensusPaths::from_config(&config);
//! let report = run_census(&analyzer, &paths, config.input_limit(), |_| {})
//!     .expect("Census failed");
//!
//! println!("{} matches", report.matches);
//! ```
#![deny(unsafe_code)]

pub mod census;
pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod docx;
pub mod error;
pub mod lemmatize;
pub mod matcher;
pub mod normalize;
pub mod statistics;
pub mod table;
pub mod tagger;
pub mod workbook;

/// Default maximum input document size: 32 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 32 * 1024 * 1024;

pub use census::{Analyzer, CensusPaths, CensusReport, Stage, WordReport, run_census};
pub use classify::{Classification, WordClass, classify_words};
pub use config::{Config, ConfigLoader, LemmatizerKind, LogLevel};
pub use error::{
    CensusError, CensusResult, ConfigError, ConfigResult, DocumentError, LexiconError,
    WorkbookError,
};
pub use lemmatize::Lemmatizer;
pub use matcher::{SuffixList, match_paragraphs};
pub use normalize::base_word;
pub use statistics::{ClassCounts, Statistics, calculate_statistics};
pub use table::{Table, build_table};
pub use tagger::{CoarseTag, LexiconTagger, PosTagger};
