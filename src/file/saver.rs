//! Document saving functionality.
//!
//! This module renders `Value` trees as YAML or JSON and saves them to files
//! with atomic write operations and optional backup creation.

use super::{is_gzip_path, Document, Format};
use crate::config::Config;
use crate::document::node::Value;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders a value as text in the given format.
///
/// JSON output is pretty-printed with `indent_size` spaces per level; YAML
/// output uses the serializer's own layout. Both end with a newline.
///
/// # Examples
///
/// ```
/// use nestkit::document::node::Value;
/// use nestkit::file::saver::render;
/// use nestkit::file::Format;
///
/// let value: Value = [("a", 1)].into_iter().collect();
/// assert_eq!(render(&value, Format::Json, 2).unwrap(), "{\n  \"a\": 1\n}\n");
/// assert_eq!(render(&value, Format::Yaml, 2).unwrap(), "a: 1\n");
/// ```
pub fn render(value: &Value, format: Format, indent_size: usize) -> Result<String> {
    let mut text = match format {
        Format::Json => {
            use serde::Serialize;

            let indent = " ".repeat(indent_size);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut buffer = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            value
                .serialize(&mut serializer)
                .context("Failed to serialize JSON")?;
            String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")?
        }
        Format::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML")?,
    };

    if !text.ends_with('\n') {
        text.push('\n');
    }

    Ok(text)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, &backup_path).context("Failed to create backup")?;
    tracing::debug!(backup = %backup_path.display(), "created backup");
    Ok(())
}

/// Saves a document to a file with optional backup creation.
///
/// The document is rendered in its own format and written atomically (temp
/// file then rename). It is gzip-compressed when the target name ends in
/// `.gz` or the document was loaded compressed.
///
/// # Examples
///
/// ```no_run
/// use nestkit::config::Config;
/// use nestkit::document::node::Value;
/// use nestkit::file::saver::save_document;
/// use nestkit::file::{Document, Format};
///
/// let document = Document::new(Value::map(), Format::Yaml);
/// save_document("output.yaml", &document, &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Serialization fails
/// - Writing to the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_document<P: AsRef<Path>>(path: P, document: &Document, config: &Config) -> Result<()> {
    let path = path.as_ref();
    let compress = document.compressed || is_gzip_path(path);

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    let text = render(&document.root, document.format, config.indent_size)?;
    write_file_atomic(path, text.as_bytes(), compress)?;

    tracing::info!(path = %path.display(), format = ?document.format, compress, "saved document");
    Ok(())
}

/// Returns the temporary path a save to `path` goes through: the full file
/// name with `.tmp` appended, so `doc.yaml` and `doc.json` never share one.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Writes data to a file atomically, optionally compressing with gzip.
///
/// This function writes to a temporary file first, then atomically renames
/// it to the target path. This ensures the target file is never left in a
/// partially written state, and the temporary file is removed if any step
/// fails.
fn write_file_atomic<P: AsRef<Path>>(path: P, data: &[u8], compress: bool) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let result = write_temp_file(&temp_path, data, compress)
        .and_then(|()| fs::rename(&temp_path, path).context("Failed to rename temp file"));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn write_temp_file(temp_path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    if compress {
        let file = fs::File::create(temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(temp_path, data).context("Failed to write temp file")?;
    }

    Ok(())
}
