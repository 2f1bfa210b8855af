//! Document loading functionality.
//!
//! This module provides functions to load YAML and JSON documents from files
//! or stdin, parsing them into nested `Value` trees.

use super::{is_gzip_path, Document, Format};
use crate::document::node::Value;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parses document text in the given format.
///
/// # Examples
///
/// ```
/// use nestkit::file::loader::parse_document;
/// use nestkit::file::Format;
/// use nestkit::document::node::Value;
///
/// let value = parse_document("{\"a\": {\"b\": 1}}", Format::Json).unwrap();
/// assert_eq!(value.get_path("a.b", Value::Null).unwrap(), Value::from(1));
/// ```
pub fn parse_document(content: &str, format: Format) -> Result<Value> {
    match format {
        Format::Json => serde_json::from_str(content).context("Failed to parse JSON"),
        Format::Yaml => {
            // An empty YAML stream is an empty document, not an error
            if content.trim().is_empty() {
                return Ok(Value::map());
            }
            serde_yaml::from_str(content).context("Failed to parse YAML")
        }
    }
}

/// Loads and parses a document from the filesystem.
///
/// The format is taken from the file name (see [`Format::from_path`]), and
/// files ending in `.gz` are decompressed first.
///
/// # Examples
///
/// ```no_run
/// use nestkit::file::loader::load_document;
///
/// let document = load_document("config.yaml").unwrap();
/// assert!(document.root.is_map());
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist
/// - The file cannot be read (permissions, etc.)
/// - The file is not valid gzip when it claims to be
/// - The file contents are not valid YAML or JSON
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path_ref = path.as_ref();
    let compressed = is_gzip_path(path_ref);
    let format = Format::from_path(path_ref);

    let content = if compressed {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    tracing::debug!(
        path = %path_ref.display(),
        ?format,
        compressed,
        bytes = content.len(),
        "loading document"
    );

    let root = parse_document(&content, format)
        .with_context(|| format!("Failed to load {}", path_ref.display()))?;

    Ok(Document {
        root,
        format,
        compressed,
    })
}

/// Loads and parses a document from standard input.
///
/// Gzipped input is recognized by its magic bytes. Input starting with `{`
/// or `[` is read as JSON, anything else as YAML.
///
/// # Examples
///
/// ```no_run
/// use nestkit::file::loader::load_from_stdin;
///
/// // Usage: echo 'a: 1' | nestkit - get a
/// let document = load_from_stdin().unwrap();
/// ```
pub fn load_from_stdin() -> Result<Document> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_from_bytes(buffer)
}

/// Decodes raw input the way [`load_from_stdin`] does.
pub fn load_from_bytes(buffer: Vec<u8>) -> Result<Document> {
    // Check for gzip magic bytes (0x1f 0x8b)
    let compressed = buffer.starts_with(&[0x1f, 0x8b]);
    let content = if compressed {
        decompress_gzip_bytes(&buffer)?
    } else {
        String::from_utf8(buffer).context("Invalid UTF-8 in input")?
    };

    let format = sniff_format(&content);
    tracing::debug!(?format, compressed, bytes = content.len(), "loading document from stdin");

    Ok(Document {
        root: parse_document(&content, format)?,
        format,
        compressed,
    })
}

fn sniff_format(content: &str) -> Format {
    match content.trim_start().chars().next() {
        Some('{') | Some('[') => Format::Json,
        _ => Format::Yaml,
    }
}

/// Reads and decompresses a gzipped file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is not valid gzip format (corrupted)
/// - The decompressed content is not valid UTF-8
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped file")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped file - file may be corrupted")?;
    Ok(content)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
