//! Layered settings for a census run.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. `config.<ext>` in the user config directory (`~/.config/suffixtab/`)
//! 3. `.suffixtab.<ext>` then `suffixtab.<ext>` in the closest directory at
//!    or above the search root that has any; the walk ends at the first
//!    directory holding `.git`
//! 4. files given with [`ConfigLoader::with_file`], in order
//! 5. `SUFFIXTAB_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`; files in one directory merge
//! in that order.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use suffixtab_core::config::ConfigLoader;
//!
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(Utf8Path::new("corpus/essays"))
//!     .load()?;
//! println!("scanning {} ({:?})", config.document_path, sources.primary_file());
//! # Ok::<(), suffixtab_core::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Default document scanned for suffix matches.
pub const DEFAULT_DOCUMENT_PATH: &str = "mau.docx";
/// Default document holding the suffix list.
pub const DEFAULT_SUFFIX_LIST_PATH: &str = "suffix.docx";
/// Default destination of the suffix x class word table.
pub const DEFAULT_RESULT_PATH: &str = "result.xlsx";
/// Default destination of the suffix x class counts.
pub const DEFAULT_STATISTICS_PATH: &str = "statistics.xlsx";

/// Dictionary-form reduction applied by the base-word normalizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LemmatizerKind {
    /// WordNet morphy noun lemmatization (children -> child, boxes -> box).
    #[default]
    Morphy,
    /// English Snowball stemmer (running -> run, happily -> happili).
    Snowball,
    /// Leave words as they are after punctuation stripping.
    None,
}

impl LemmatizerKind {
    /// Returns the lemmatizer name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morphy => "morphy",
            Self::Snowball => "snowball",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for LemmatizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configuration for suffixtab.
///
/// This struct is deserialized from config files found during discovery
/// (TOML, YAML, or JSON). Relative paths resolve against the working
/// directory of the run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Word document whose body text is scanned.
    pub document_path: Utf8PathBuf,
    /// Word document listing the suffixes, whitespace separated.
    pub suffix_list_path: Utf8PathBuf,
    /// Spreadsheet receiving the suffix x part-of-speech word table.
    pub result_path: Utf8PathBuf,
    /// Spreadsheet receiving the suffix x part-of-speech occurrence counts.
    pub statistics_path: Utf8PathBuf,
    /// Lemmatizer used by the base-word normalizer.
    pub lemmatizer: LemmatizerKind,
    /// WordNet `dict` directory backing the morphy lemmatizer.
    ///
    /// When unset, morphy falls back to its built-in irregular plurals and
    /// heuristic suffix rules.
    pub wordnet_dir: Option<Utf8PathBuf>,
    /// Tagger lexicon with `word TAG` lines that override built-in tagging.
    pub lexicon: Option<Utf8PathBuf>,
    /// Maximum input document size in bytes (default: 32 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    /// Default: `false`.
    pub disable_input_limit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            document_path: Utf8PathBuf::from(DEFAULT_DOCUMENT_PATH),
            suffix_list_path: Utf8PathBuf::from(DEFAULT_SUFFIX_LIST_PATH),
            result_path: Utf8PathBuf::from(DEFAULT_RESULT_PATH),
            statistics_path: Utf8PathBuf::from(DEFAULT_STATISTICS_PATH),
            lemmatizer: LemmatizerKind::default(),
            wordnet_dir: None,
            lexicon: None,
            max_input_bytes: None,
            disable_input_limit: false,
        }
    }
}

impl Config {
    /// Effective input size limit, or `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            self.max_input_bytes
                .or(Some(crate::DEFAULT_MAX_INPUT_BYTES))
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Config files that contributed to a [`Config`], for `info` output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files from the closest directory, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The user config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed explicitly, such as `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win: the last explicit file, else the last
    /// project file, else the user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or(self.project_files.last())
            .or(self.user_file.as_ref())
            .map(Utf8PathBuf::as_path)
    }
}

const APP_NAME: &str = "suffixtab";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
/// Directory entry that ends the upward project search.
const PROJECT_BOUNDARY: &str = ".git";
/// Environment prefix; `SUFFIXTAB_LOG_PATH` belongs to the CLI logger.
const ENV_PREFIX: &str = "SUFFIXTAB_";

/// Collects config sources and merges them into a [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user config and nothing else.
    pub const fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            files: Vec::new(),
        }
    }

    /// Search for project config files starting at `dir`.
    pub fn with_project_search(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Merge `path` above discovered files. A missing file is an error.
    pub fn with_file(mut self, path: impl AsRef<Utf8Path>) -> Self {
        self.files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and extract the result.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: self.user_config.then(user_config_file).flatten(),
            project_files: self
                .search_root
                .as_deref()
                .map(project_config_files)
                .unwrap_or_default(),
            explicit_files: self.files,
        };

        let files = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files);
        let figment = files
            .fold(Figment::from(Serialized::defaults(Config::default())), merge_file)
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .ignore(&["LOG_PATH"])
                    .lowercase(true),
            );

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            files = sources.project_files.len() + sources.explicit_files.len(),
            lemmatizer = config.lemmatizer.as_str(),
            document = %config.document_path,
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Config files in the closest directory at or above `start` that has any.
fn project_config_files(start: &Utf8Path) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = [".", ""]
            .into_iter()
            .flat_map(|dot| EXTENSIONS.map(|ext| dir.join(format!("{dot}{APP_NAME}.{ext}"))))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        // A config beside the boundary still counts; nothing above it does.
        if dir.join(PROJECT_BOUNDARY).exists() {
            break;
        }
    }
    Vec::new()
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dirs = project_dirs()?;
    let dir = Utf8Path::from_path(dirs.config_dir())?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8PathBuf) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Platform data directory for suffixtab, the default parent of the log
/// directory.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(dirs.data_local_dir().to_path_buf()).ok()
}
