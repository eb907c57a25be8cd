//! Suggestion Catalog for assist_core
//!
//! Ranks a fixed catalog of example commands against partial input for
//! autocomplete. Matching is a case-insensitive substring test, catalog
//! order is preserved, and results are truncated to a caller-given limit.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Filter `catalog` to entries relevant to `partial`.
///
/// An empty or whitespace-only `partial` returns the first `limit` entries
/// in catalog order. Otherwise entries whose lowercased text contains the
/// lowercased `partial` are returned, catalog order preserved, at most
/// `limit` of them.
pub fn suggest<'a>(partial: &str, catalog: &'a [String], limit: usize) -> Vec<&'a str> {
    let partial = partial.trim().to_lowercase();

    if partial.is_empty() {
        return catalog.iter().take(limit).map(String::as_str).collect();
    }

    catalog
        .iter()
        .filter(|entry| entry.to_lowercase().contains(&partial))
        .take(limit)
        .map(String::as_str)
        .collect()
}

/// A catalog of example commands offered as autocomplete hints
///
/// Loaded once at startup and never mutated by interpretation calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestionCatalog {
    entries: Vec<String>,
}

impl SuggestionCatalog {
    /// Create a catalog seeded with the built-in example commands
    pub fn new() -> Self {
        Self {
            entries: default_catalog(),
        }
    }

    /// Create a catalog from explicit entries
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Replace the entries with the contents of a YAML file
    ///
    /// The file holds a plain YAML sequence of command strings.
    pub fn load_from_yaml<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, CatalogError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::Io(path.as_ref().display().to_string(), e))?;
        let entries: Vec<String> =
            serde_yaml::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if entries.is_empty() {
            return Err(CatalogError::Empty(path.as_ref().display().to_string()));
        }

        let count = entries.len();
        self.entries = entries;
        Ok(count)
    }

    /// Append entries from every YAML file in a directory
    pub fn load_from_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize, CatalogError> {
        let mut total = 0;

        let read = fs::read_dir(dir.as_ref())
            .map_err(|e| CatalogError::Io(dir.as_ref().display().to_string(), e))?;

        for entry in read.flatten() {
            let path = entry.path();
            if path
                .extension()
                .map(|e| e == "yaml" || e == "yml")
                .unwrap_or(false)
            {
                let content = match fs::read_to_string(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("Warning: Failed to read {:?}: {}", path, e);
                        continue;
                    }
                };
                match serde_yaml::from_str::<Vec<String>>(&content) {
                    Ok(mut more) => {
                        total += more.len();
                        self.entries.append(&mut more);
                    }
                    Err(e) => eprintln!("Warning: Failed to parse {:?}: {}", path, e),
                }
            }
        }

        Ok(total)
    }

    /// Suggestions for a partial command
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<&str> {
        suggest(partial, &self.entries, limit)
    }

    /// All catalog entries in order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog loading errors
#[derive(Debug)]
pub enum CatalogError {
    Io(String, std::io::Error),
    Parse(String),
    Empty(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(path, e) => write!(f, "Failed to read catalog {}: {}", path, e),
            CatalogError::Parse(msg) => write!(f, "Invalid catalog YAML: {}", msg),
            CatalogError::Empty(path) => write!(f, "Catalog {} contains no entries", path),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The built-in example commands
pub fn default_catalog() -> Vec<String> {
    [
        "Add a task to buy groceries tomorrow",
        "Remind me to call mom at 6pm",
        "What's the weather like today?",
        "Show me the latest technology news",
        "What time is my next meeting?",
        "Add a task to finish the project by Friday",
        "Remind me to take medicine at 9am",
        "How do I create a reminder?",
        "What can you do?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
