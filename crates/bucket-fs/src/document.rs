//! Format-agnostic structured document loading and saving

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

/// Serialization format of a structured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a file extension.
    ///
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    /// Human-readable format name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Json => "JSON",
        }
    }
}

/// Reads and writes structured documents.
///
/// A `DocumentStore` is passed explicitly to whoever needs to persist
/// documents; there is no process-wide reader/writer state.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// Parse `content` as a `format` document. `path` is only used for errors.
    pub fn parse<T: DeserializeOwned>(
        &self,
        format: DocumentFormat,
        content: &str,
        path: &Path,
    ) -> Result<T> {
        let parsed = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::DocumentParse {
            path: path.to_path_buf(),
            format: format.as_str().into(),
            message,
        })
    }

    /// Render `value` as a `format` document. `path` is only used for errors.
    pub fn render<T: Serialize>(
        &self,
        format: DocumentFormat,
        value: &T,
        path: &Path,
    ) -> Result<String> {
        let rendered = match format {
            DocumentFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::to_string_pretty(value).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| Error::DocumentSerialize {
            path: path.to_path_buf(),
            format: format.as_str().into(),
            message,
        })
    }

    /// Load a document, detecting the format from the file extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        self.load_as(path, DocumentFormat::from_path(path)?)
    }

    /// Load a document with an explicit format.
    pub fn load_as<T: DeserializeOwned>(&self, path: &Path, format: DocumentFormat) -> Result<T> {
        let content = io::read_text(path)?;
        self.parse(format, &content, path)
    }

    /// Save a document atomically, replacing any existing file.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        self.save_as(path, value, DocumentFormat::from_path(path)?)
    }

    /// Save a document atomically with an explicit format.
    pub fn save_as<T: Serialize>(&self, path: &Path, value: &T, format: DocumentFormat) -> Result<()> {
        let content = self.render(format, value, path)?;
        io::write_atomic(path, content.as_bytes())
    }

    /// Create a new document. Fails with [`Error::AlreadyExists`] instead of
    /// overwriting.
    pub fn create<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;
        let content = self.render(format, value, path)?;
        io::write_new(path, content.as_bytes())
    }
}
