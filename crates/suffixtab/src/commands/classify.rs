//! Classify command: inspect normalization and tagging of single words.

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use suffixtab_core::census::{Analyzer, WordReport};
use suffixtab_core::classify::WordClass;
use suffixtab_core::config::Config;
use tracing::{debug, instrument};

use super::AnalyzerArgs;

/// Arguments for the `classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Words to normalize and classify
    #[arg(required = true, value_name = "WORD")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub analyzer: AnalyzerArgs,
}

/// Print each word's base form, coarse tag and class.
#[instrument(name = "cmd_classify", skip_all, fields(words = args.words.len()))]
pub fn cmd_classify(args: ClassifyArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let mut config = config.clone();
    args.analyzer.apply(&mut config);
    debug!(lemmatizer = %config.lemmatizer, "executing classify command");

    let analyzer = Analyzer::from_config(&config).context("failed to load lexicon resources")?;
    let reports: Vec<WordReport> = args.words.iter().map(|w| analyzer.inspect(w)).collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let width = reports.iter().map(|r| r.token.len()).max().unwrap_or(0);
    for report in &reports {
        let class = match report.class {
            WordClass::Unknown => report.class.label().yellow().to_string(),
            _ => report.class.label().green().to_string(),
        };
        println!(
            "{:<width$}  {} {}  {} {class}",
            report.token,
            "->".dimmed(),
            report.base.bold(),
            report.tag.as_str().dimmed(),
        );
    }
    Ok(())
}
