use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::names::{ExtractStats, NameList, extract_names};
use crate::table::read_table;

#[derive(Debug, Clone)]
pub struct CompiledList {
    pub names: NameList,
    pub stats: ExtractStats,
}

/// Reads `source`, writes its sorted, deduplicated, lower-cased names to
/// `target` one per line, and returns them.
pub fn compile_name_list(source: &Path, target: &Path) -> Result<CompiledList> {
    let table = read_table(source)?;
    let (names, stats) = extract_names(&table);
    drop(table);

    debug!(
        source = %source.display(),
        rows = stats.rows,
        cells = stats.cells,
        accepted = stats.accepted,
        rejected = stats.rejected,
        "extracted names"
    );

    write_name_list(target, &names)?;
    info!(output = %target.display(), names = names.len(), "wrote name list");

    Ok(CompiledList { names, stats })
}

pub fn write_name_list(target: &Path, names: &NameList) -> Result<()> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut file = fs::File::create(target)
        .with_context(|| format!("failed to create {}", target.display()))?;
    file.write_all(names.to_lines().as_bytes())
        .with_context(|| format!("failed to write {}", target.display()))?;

    Ok(())
}
