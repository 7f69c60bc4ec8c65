//! INI document parsing.
//!
//! Responsibilities:
//! - Parse INI text into a section -> key -> string mapping.
//! - Report syntax problems with 1-based line numbers.
//!
//! Does NOT handle:
//! - Type coercion of values (see `loader::sections`).
//! - File reading or text decoding (see `loader::builder`).
//!
//! Invariants:
//! - Section names are case-sensitive and unique within a document.
//! - Keys are folded to lowercase for storage and lookup; duplicate keys
//!   within a section are a parse error.
//! - Values keep their exact text after surrounding whitespace is trimmed;
//!   `=` characters after the first belong to the value.
//! - Full-line comments (`;` or `#`) and blank lines are skipped. Inline
//!   comments are not recognized.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors produced while parsing INI text.
#[derive(Debug, Error)]
pub enum IniError {
    #[error("line {line}: key/value pair before any [section] header")]
    KeyOutsideSection { line: usize },

    #[error("line {line}: malformed section header")]
    MalformedHeader { line: usize },

    #[error("line {line}: expected KEY=VALUE")]
    MissingDelimiter { line: usize },

    #[error("line {line}: empty key")]
    EmptyKey { line: usize },

    #[error("line {line}: duplicate section [{section}]")]
    DuplicateSection { line: usize, section: String },

    #[error("line {line}: duplicate key '{key}' in section [{section}]")]
    DuplicateKey {
        line: usize,
        section: String,
        key: String,
    },
}

/// A single parsed `[section]` holding its key/value entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    entries: BTreeMap<String, String>,
}

impl IniSection {
    /// Look up a value by key. Lookup is case-insensitive because keys are
    /// folded to lowercase at parse time.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Iterate over the (lowercased) keys of this section.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A parsed INI document: an ordered map of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: BTreeMap<String, IniSection>,
}

impl IniDocument {
    /// Parse INI text into a document.
    pub fn parse(text: &str) -> Result<Self, IniError> {
        let mut sections: BTreeMap<String, IniSection> = BTreeMap::new();
        let mut current: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(IniError::MalformedHeader { line });
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(IniError::MalformedHeader { line });
                }
                if sections.contains_key(name) {
                    return Err(IniError::DuplicateSection {
                        line,
                        section: name.to_string(),
                    });
                }
                sections.insert(name.to_string(), IniSection::default());
                current = Some(name.to_string());
                continue;
            }

            let Some((raw_key, raw_value)) = trimmed.split_once('=') else {
                return Err(IniError::MissingDelimiter { line });
            };
            let key = raw_key.trim().to_lowercase();
            if key.is_empty() {
                return Err(IniError::EmptyKey { line });
            }
            let Some(section) = current.as_deref().and_then(|name| sections.get_mut(name)) else {
                return Err(IniError::KeyOutsideSection { line });
            };
            if section.entries.contains_key(&key) {
                return Err(IniError::DuplicateKey {
                    line,
                    section: current.clone().unwrap_or_default(),
                    key,
                });
            }
            section.entries.insert(key, raw_value.trim().to_string());
        }

        Ok(Self { sections })
    }

    /// Look up a section by its exact (case-sensitive) name.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    /// Iterate over section names.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}
