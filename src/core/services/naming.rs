//! Naming conventions for staged files and CSV columns
//!
//! Standardized names are lowercase ASCII with `_` separators and always
//! start with a letter.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{ImportError, NamingOptions};

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Prefix for standardized file stems that don't start with a letter
pub const FILE_PREFIX: &str = "file";

/// Prefix for standardized column names that don't start with a letter
pub const COLUMN_PREFIX: &str = "col";

/// Standardize a name: lowercase, non-alphanumerics to `_`, trimmed
///
/// Returns `None` when nothing alphanumeric is left.
///
/// ```
/// use datastage::core::services::standardize;
///
/// assert_eq!(standardize("First Name", "col").as_deref(), Some("first_name"));
/// assert_eq!(standardize("2nd Address", "col").as_deref(), Some("col_2nd_address"));
/// ```
#[must_use]
pub fn standardize(name: &str, prefix: &str) -> Option<String> {
    let lowered = name.trim().to_lowercase();
    let replaced = NON_ALNUM.replace_all(&lowered, "_");
    let cleaned = replaced.trim_matches('_');

    let first = cleaned.chars().next()?;
    if first.is_ascii_alphabetic() {
        Some(cleaned.to_string())
    } else {
        Some(format!("{prefix}_{cleaned}"))
    }
}

/// Standardize CSV column names, suffixing duplicates with `_1`, `_2`, ...
///
/// Suffixes skip names already taken, so the result never repeats.
#[must_use]
pub fn standardize_columns(names: &[String]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    names
        .iter()
        .map(|name| {
            let base = standardize(name, COLUMN_PREFIX).unwrap_or_else(|| COLUMN_PREFIX.to_string());
            let mut candidate = base.clone();
            if used.contains(&candidate) {
                let suffix = next_suffix.entry(base.clone()).or_insert(1);
                loop {
                    candidate = format!("{base}_{suffix}");
                    *suffix += 1;
                    if !used.contains(&candidate) {
                        break;
                    }
                }
            }
            used.insert(candidate.clone());
            candidate
        })
        .collect()
}

/// Compute the staged file name for `source` under a naming convention
///
/// # Errors
///
/// Returns `ImportError::InvalidName` if the name is empty, contains a path
/// separator, or standardizes to nothing.
pub fn staged_file_name(source: &Path, naming: &NamingOptions) -> Result<String, ImportError> {
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ImportError::InvalidName(source.display().to_string()))?;

    let base = match &naming.rename {
        Some(name) => plain_name(name)?.to_string(),
        None => source_name,
    };

    let base_path = Path::new(&base);
    let mut stem = base_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| ImportError::InvalidName(base.clone()))?;
    let mut extension = base_path
        .extension()
        .or_else(|| source.extension())
        .map(|e| e.to_string_lossy().into_owned());

    if naming.standardize {
        stem = standardize(&stem, FILE_PREFIX).ok_or_else(|| ImportError::InvalidName(base.clone()))?;
        extension = extension.map(|e| e.to_lowercase());
    }

    if let Some(date) = naming.stamp {
        stem = format!("{stem}_{}", date.format("%Y%m%d"));
    }

    Ok(match extension {
        Some(ext) if !ext.is_empty() => format!("{stem}.{ext}"),
        _ => stem,
    })
}

fn plain_name(name: &str) -> Result<&str, ImportError> {
    let trimmed = name.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\')
    {
        return Err(ImportError::InvalidName(name.to_string()));
    }
    Ok(trimmed)
}
