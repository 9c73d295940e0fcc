//! Report Output.
//!
//! Writes report documents into an output directory as YAML or JSON. The
//! directory is prepared explicitly by the caller: `prepare` removes reports
//! left over from an earlier run so that append mode starts from a clean file.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::common::Result;
use crate::config::{OutputConfig, OutputFormat};
use crate::report::Document;

/// File stem of the architecture description.
pub const ARCHITECTURE_DESCRIPTION: &str = "architecture_description";

/// File stem of the action-count report.
pub const ACTION_COUNTS: &str = "action_counts";

/// Serializes a document in the requested format.
pub fn render(doc: &Document, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(doc)?,
        OutputFormat::Json => serde_json::to_string_pretty(doc)?,
    };
    Ok(text)
}

/// Writes reports into one output directory.
pub struct ReportWriter {
    dir: PathBuf,
    format: OutputFormat,
    append: bool,
}

impl ReportWriter {
    /// Creates a writer.
    ///
    /// # Arguments
    ///
    /// * `dir` - Output directory, created by [`ReportWriter::prepare`].
    /// * `format` - Serialization format of every report.
    /// * `append` - Append each document to an existing file instead of
    ///   overwriting it.
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat, append: bool) -> Self {
        Self {
            dir: dir.into(),
            format,
            append,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.dir, config.format, config.append)
    }

    /// Full path of the report with the given file stem.
    pub fn path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", stem, self.format.extension()))
    }

    /// Creates the output directory and deletes stale reports of either format.
    ///
    /// # Returns
    ///
    /// The paths that were removed.
    pub fn prepare(&self) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)?;

        let mut removed = Vec::new();
        for stem in [ARCHITECTURE_DESCRIPTION, ACTION_COUNTS] {
            for format in [OutputFormat::Yaml, OutputFormat::Json] {
                let path = self.dir.join(format!("{}.{}", stem, format.extension()));
                if path.is_file() {
                    fs::remove_file(&path)?;
                    info!(path = %path.display(), "removed stale report");
                    removed.push(path);
                }
            }
        }
        Ok(removed)
    }

    /// Writes the architecture description and returns its path.
    pub fn write_architecture(&self, doc: &Document) -> Result<PathBuf> {
        self.write(ARCHITECTURE_DESCRIPTION, doc)
    }

    /// Writes the action-count report and returns its path.
    pub fn write_action_counts(&self, doc: &Document) -> Result<PathBuf> {
        self.write(ACTION_COUNTS, doc)
    }

    fn write(&self, stem: &str, doc: &Document) -> Result<PathBuf> {
        let path = self.path(stem);
        let mut text = render(doc, self.format)?;
        if !text.ends_with('\n') {
            text.push('\n');
        }
        // Appended YAML documents need explicit separators to stay parseable.
        if self.append && self.format == OutputFormat::Yaml {
            text.insert_str(0, "---\n");
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(self.append)
            .truncate(!self.append)
            .open(&path)?;
        file.write_all(text.as_bytes())?;

        info!(
            path = %path.display(),
            bytes = text.len(),
            append = self.append,
            "wrote report"
        );
        Ok(path)
    }
}
