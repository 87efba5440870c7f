//! Dictionaries for lemmatization and tagging.
//!
//! Provides curated word sets used by the morphy lemmatizer and the
//! lexicon tagger.

pub mod closed_class;
pub mod irregular_verbs;
pub mod noun_exceptions;
pub mod open_class;
