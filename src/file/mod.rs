//! File I/O for nested mapping documents.
//!
//! This module provides functionality to load YAML or JSON documents from disk
//! or stdin, and save them back with atomic write operations, optional
//! backups and transparent gzip compression.

pub mod loader;
pub mod saver;

use crate::document::node::Value;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Determines the format from a file name.
    ///
    /// A trailing `.gz` is ignored, `.json` selects JSON and everything else
    /// is read as YAML.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestkit::file::Format;
    ///
    /// assert_eq!(Format::from_path("data.json"), Format::Json);
    /// assert_eq!(Format::from_path("data.json.gz"), Format::Json);
    /// assert_eq!(Format::from_path("data.yml"), Format::Yaml);
    /// assert_eq!(Format::from_path("data"), Format::Yaml);
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

        if base.ends_with(".json") {
            Format::Json
        } else {
            Format::Yaml
        }
    }
}

/// Returns true if the file name asks for gzip compression.
pub fn is_gzip_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

/// A loaded document together with how it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Value,
    pub format: Format,
    pub compressed: bool,
}

impl Document {
    pub fn new(root: Value, format: Format) -> Self {
        Self {
            root,
            format,
            compressed: false,
        }
    }
}
