//! Parsed configuration documents.
//!
//! A thin view over a TOML table that answers the questions the loader asks:
//! does a dotted key exist, is it a group, and what are an array's elements as
//! strings.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use toml::{Table, Value};

/// Failure to produce a [`Document`].
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// A parsed configuration file.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Table,
}

/// One node of a [`Document`]: a group, an array or a scalar.
#[derive(Debug, Clone, Copy)]
pub struct Setting<'a> {
    value: &'a Value,
}

impl Document {
    /// Reads and parses the file at `path`.
    ///
    /// Content that is not valid UTF-8 is a syntax error on the line holding
    /// the first invalid byte, not a read failure.
    pub fn read_file(path: &Path) -> Result<Self, DocumentError> {
        let bytes = fs::read(path)?;
        let contents = String::from_utf8(bytes).map_err(|e| {
            let valid = e.utf8_error().valid_up_to();
            let line = e.as_bytes()[..valid].iter().filter(|&&b| b == b'\n').count() + 1;
            DocumentError::Syntax {
                line,
                message: format!("invalid UTF-8 at byte {}", valid),
            }
        })?;
        Self::parse_str(&contents)
    }

    /// Parses a document from text.
    pub fn parse_str(contents: &str) -> Result<Self, DocumentError> {
        match toml::from_str::<Table>(contents) {
            Ok(root) => Ok(Self { root }),
            Err(e) => Err(DocumentError::Syntax {
                line: e
                    .span()
                    .map(|span| line_of_offset(contents, span.start))
                    .unwrap_or(0),
                message: e.message().trim().to_string(),
            }),
        }
    }

    /// Whether a dotted key path (e.g. `default.switches`) is present.
    pub fn exists(&self, key_path: &str) -> bool {
        self.lookup(key_path).is_some()
    }

    /// Looks up a dotted key path.
    pub fn lookup(&self, key_path: &str) -> Option<Setting<'_>> {
        let mut keys = key_path.split('.');
        let mut value = self.root.get(keys.next()?)?;
        for key in keys {
            value = value.as_table()?.get(key)?;
        }
        Some(Setting { value })
    }
}

impl<'a> Setting<'a> {
    /// Whether this setting is a group of named settings.
    pub fn is_group(&self) -> bool {
        self.value.is_table()
    }

    pub fn is_array(&self) -> bool {
        self.value.is_array()
    }

    /// Number of elements for arrays and groups, zero for scalars.
    pub fn len(&self) -> usize {
        match self.value {
            Value::Array(items) => items.len(),
            Value::Table(table) => table.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a direct child named `key` exists in this group.
    pub fn exists(&self, key: &str) -> bool {
        self.value.as_table().is_some_and(|table| table.contains_key(key))
    }

    /// The element at `index` as a string, if it is one.
    ///
    /// Arrays are indexed directly and groups by the order their keys appear
    /// in the file. Scalars have no elements.
    pub fn string_at(&self, index: usize) -> Option<&'a str> {
        let element = match self.value {
            Value::Array(items) => items.get(index)?,
            Value::Table(table) => table.values().nth(index)?,
            _ => return None,
        };
        element.as_str()
    }

    /// TOML type name of this setting, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.value.type_str()
    }
}

/// 1-based line number containing the byte at `offset`.
fn line_of_offset(contents: &str, offset: usize) -> usize {
    let end = offset.min(contents.len());
    contents.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
