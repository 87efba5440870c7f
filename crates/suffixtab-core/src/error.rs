//! Error types for suffixtab-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while reading a `.docx` document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be opened or inspected.
    #[error("failed to open document {path}: {source}")]
    Open {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file exceeds the configured input limit.
    #[error("document too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Document path.
        path: Utf8PathBuf,
        /// Size on disk.
        size: u64,
        /// Configured limit.
        limit: usize,
    },

    /// The file is not a readable zip archive, or a part could not be read.
    #[error("failed to read archive {path}: {source}")]
    Archive {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying zip error.
        source: zip::result::ZipError,
    },

    /// The archive has no main document part.
    #[error("{path} has no {part} part; is it a Word document?")]
    MissingPart {
        /// Document path.
        path: Utf8PathBuf,
        /// Name of the missing archive entry.
        part: &'static str,
    },

    /// The main document part is not well-formed XML.
    #[error("malformed XML in {path}: {message}")]
    Xml {
        /// Document path.
        path: Utf8PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Errors raised while loading lemmatizer or tagger resources.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A resource file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Resource path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line in a lexicon file could not be parsed.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Resource path.
        path: Utf8PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A WordNet directory lacks the noun index.
    #[error("{dir} does not look like a WordNet dict directory (missing index.noun)")]
    NotWordNet {
        /// Directory that was searched.
        dir: Utf8PathBuf,
    },

    /// A WordNet directory could not be loaded.
    #[error("failed to load WordNet from {dir}: {message}")]
    WordNet {
        /// Dictionary directory.
        dir: Utf8PathBuf,
        /// Loader error chain.
        message: String,
    },
}

/// Errors raised while writing a spreadsheet.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// The workbook could not be built or saved.
    #[error("failed to write workbook {path}: {source}")]
    Write {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying writer error.
        source: rust_xlsxwriter::XlsxError,
    },

    /// The grid does not fit in a worksheet.
    #[error("grid for {path} exceeds worksheet limits ({rows} rows, {columns} columns)")]
    TooLarge {
        /// Destination path.
        path: Utf8PathBuf,
        /// Row count of the grid.
        rows: usize,
        /// Widest row of the grid.
        columns: usize,
    },
}

/// Errors that can occur during a census run.
#[derive(Error, Debug)]
pub enum CensusError {
    /// Reading an input document failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Loading NLP resources failed.
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// Writing an output workbook failed.
    #[error(transparent)]
    Workbook(#[from] WorkbookError),
}

/// Result type alias using [`CensusError`].
pub type CensusResult<T> = Result<T, CensusError>;
