use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;
use walkdir::WalkDir;

/// Rows of trimmed cells, in file order.
pub type Table = Vec<Vec<String>>;

const SOURCE_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Splits comma-separated text into rows of trimmed cells. Quoting is not
/// understood: a `"` is just another character in the cell.
pub fn parse_rows(text: &str) -> Table {
    text.lines()
        .map(|line| {
            line.split(',')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

/// Reads a single file, or every `.csv`/`.txt` file under a directory in
/// sorted path order, into one table. Symlinks are followed; any entry the
/// walk cannot read fails the whole source.
pub fn read_table(source: &Path) -> Result<Table> {
    let mut table = Table::new();
    for path in source_files(source)? {
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let rows = parse_rows(&contents);
        debug!(path = %path.display(), rows = rows.len(), "read source file");
        table.extend(rows);
    }
    Ok(table)
}

pub fn source_files(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.with_context(|| format!("failed to read {}", source.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let extension = path.extension().and_then(|ext| ext.to_str());
        if extension.is_none_or(|ext| {
            !SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        }) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    if files.is_empty() {
        bail!("no .csv or .txt files found in {}", source.display());
    }
    files.sort();
    Ok(files)
}
