//! Run command: the full suffix census.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use suffixtab_core::census::{Analyzer, CensusPaths, CensusReport, run_census};
use suffixtab_core::classify::WordClass;
use suffixtab_core::config::Config;
use tracing::{debug, instrument};

use super::AnalyzerArgs;

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Document scanned for suffix matches (overrides config)
    #[arg(long, value_name = "DOCX")]
    pub document: Option<Utf8PathBuf>,

    /// Document listing the suffixes (overrides config)
    #[arg(long, value_name = "DOCX")]
    pub suffixes: Option<Utf8PathBuf>,

    /// Destination of the word table (overrides config)
    #[arg(long, value_name = "XLSX")]
    pub result: Option<Utf8PathBuf>,

    /// Destination of the occurrence counts (overrides config)
    #[arg(long, value_name = "XLSX")]
    pub statistics: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub analyzer: AnalyzerArgs,
}

impl RunArgs {
    fn apply(&self, config: &mut Config) {
        let overrides = [
            (&self.document, &mut config.document_path),
            (&self.suffixes, &mut config.suffix_list_path),
            (&self.result, &mut config.result_path),
            (&self.statistics, &mut config.statistics_path),
        ];
        for (flag, field) in overrides {
            if let Some(path) = flag {
                field.clone_from(path);
            }
        }
        self.analyzer.apply(config);
    }
}

fn spinner(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// Read both documents, then write the word table and the statistics.
#[instrument(name = "cmd_run", skip_all)]
pub fn cmd_run(
    args: RunArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let mut config = config.clone();
    args.apply(&mut config);
    debug!(
        document = %config.document_path,
        suffixes = %config.suffix_list_path,
        lemmatizer = %config.lemmatizer,
        "executing run command"
    );

    let analyzer = Analyzer::from_config(&config).context("failed to load lexicon resources")?;
    let paths = CensusPaths::from_config(&config);

    let progress = spinner(quiet || global_json);
    let outcome = run_census(&analyzer, &paths, config.input_limit(), |stage| {
        progress.set_message(stage.to_string());
    });
    progress.finish_and_clear();
    let report = outcome.context("census failed")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, quiet);
    }
    Ok(())
}

fn print_report(report: &CensusReport, quiet: bool) {
    if !quiet {
        println!(
            "{} {} tokens, {} matches against {} suffixes",
            "Scanned".bold(),
            report.tokens,
            report.matches,
            report.suffixes,
        );
        let classes: Vec<String> = WordClass::ALL
            .iter()
            .map(|class| format!("{} {}", class.label().dimmed(), report.unique_words.get(*class)))
            .collect();
        println!("{}", classes.join(", "));
    }
    println!("Result written to {}", report.paths.result);
    println!("Statistics written to {}", report.paths.statistics);
}
