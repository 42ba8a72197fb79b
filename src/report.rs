use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::names::{ExtractStats, NameList};

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub version: u8,
    pub generated_at: String,
    pub lists: Vec<ListSummary>,
    pub unisex: NameList,
}

#[derive(Debug, Serialize, Clone)]
pub struct ListSummary {
    pub label: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub names: usize,
    pub stats: ExtractStats,
}

pub fn build_report(lists: Vec<ListSummary>, unisex: NameList) -> BuildReport {
    BuildReport {
        version: 1,
        generated_at: now_rfc3339(),
        lists,
        unisex,
    }
}

pub fn write_report(path: &Path, report: &BuildReport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_vec_pretty(report)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    let mut file =
        fs::File::create(path).with_context(|| format!("failed to write {}", path.display()))?;
    file.write_all(&json)
        .and_then(|()| file.write_all(b"\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}

pub fn summarize(report: &BuildReport) -> String {
    let mut output = String::new();
    output.push_str("Lists:\n");
    for list in &report.lists {
        output.push_str(&format!(
            "  - {}: {} names from {} ({} of {} cells rejected) -> {}\n",
            list.label,
            list.names,
            list.source.display(),
            list.stats.rejected,
            list.stats.cells,
            list.target.display()
        ));
    }
    output.push_str(&format!("Unisex names: {}\n", report.unisex.len()));

    output.trim_end().to_string()
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
