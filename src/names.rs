use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Deduplicated names, iterated in ascending code-point order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameList(BTreeSet<String>);

impl NameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Names present in both lists.
    pub fn intersection(&self, other: &NameList) -> NameList {
        NameList(self.0.intersection(&other.0).cloned().collect())
    }

    /// One name per line, newline-terminated. An empty list renders as "".
    pub fn to_lines(&self) -> String {
        let mut output = String::new();
        for name in &self.0 {
            output.push_str(name);
            output.push('\n');
        }
        output
    }
}

impl FromIterator<String> for NameList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        NameList(iter.into_iter().collect())
    }
}

/// Renders as `{a, b}`, or `{}` when empty.
impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, name) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("}")
    }
}

/// A token is a name when it is non-empty and every character is alphabetic.
pub fn is_name(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Returns the lower-cased name, or `None` when the cell is rejected. The
/// lower-cased form must still be a name: `İ` lowers to `i` plus a combining
/// dot, so `İpek` is rejected.
pub fn normalize(cell: &str) -> Option<String> {
    let token = cell.trim();
    if !is_name(token) {
        return None;
    }
    let lowered = token.to_lowercase();
    is_name(&lowered).then_some(lowered)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    pub rows: usize,
    pub cells: usize,
    pub accepted: usize,
    pub rejected: usize,
}

/// Flattens every cell of every row into a name list.
pub fn extract_names<R, C>(rows: R) -> (NameList, ExtractStats)
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut stats = ExtractStats::default();
    let mut names = BTreeSet::new();
    for row in rows {
        stats.rows += 1;
        for cell in row {
            stats.cells += 1;
            match normalize(cell.as_ref()) {
                Some(name) => {
                    stats.accepted += 1;
                    names.insert(name);
                }
                None => stats.rejected += 1,
            }
        }
    }
    (NameList(names), stats)
}
