use anyhow::Result;
use tracing::debug;

use crate::cli::{BuildArgs, CompileArgs};
use crate::compile::compile_name_list;
use crate::config::{BuildConfig, ListPair};
use crate::logging;
use crate::names::NameList;
use crate::report::{ListSummary, build_report, summarize, write_report};

/// Compiles the girls list, then the boys list, and prints the names they
/// share to stdout. The first error stops the run.
pub fn build(args: &BuildArgs) -> Result<()> {
    logging::init(args.verbose);

    let config = match args.config.as_deref() {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    debug!(?config, "resolved build config");

    let (unisex, summaries) = build_lists(&config)?;
    println!("{unisex}");

    let report = build_report(summaries, unisex);
    if let Some(path) = args.report.as_deref() {
        write_report(path, &report)?;
    }
    if args.verbose {
        eprintln!("{}", summarize(&report));
    }

    Ok(())
}

/// Runs both lists in order and returns their intersection with a summary
/// per list.
pub fn build_lists(config: &BuildConfig) -> Result<(NameList, Vec<ListSummary>)> {
    let (girls, girls_summary) = compile_pair("girls", &config.girls)?;
    let (boys, boys_summary) = compile_pair("boys", &config.boys)?;

    Ok((girls.intersection(&boys), vec![girls_summary, boys_summary]))
}

fn compile_pair(label: &str, pair: &ListPair) -> Result<(NameList, ListSummary)> {
    let compiled = compile_name_list(&pair.source, &pair.target)?;
    let summary = ListSummary {
        label: label.to_string(),
        source: pair.source.clone(),
        target: pair.target.clone(),
        names: compiled.names.len(),
        stats: compiled.stats,
    };
    Ok((compiled.names, summary))
}

pub fn compile(args: &CompileArgs) -> Result<()> {
    logging::init(args.verbose);

    let compiled = compile_name_list(&args.source, &args.target)?;
    println!(
        "Wrote {} names to {}",
        compiled.names.len(),
        args.target.display()
    );

    Ok(())
}
