//! Filesystem-backed store for pre-authored HTML form templates.
//!
//! Templates are flat `*.html` files in a single directory, produced by a
//! PDF-to-HTML conversion step outside this tool. The store only lists and
//! reads; nothing here writes.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Templates directory not found: {0}")]
    DirMissing(PathBuf),
    #[error("Template not found: {0}")]
    NotFound(String),
    #[error("Invalid template name: {0}")]
    InvalidName(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only view over the templates directory.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List template file names (`*.html` directly in the directory), sorted.
    pub fn list(&self) -> Result<Vec<String>, TemplateError> {
        if !self.dir.is_dir() {
            return Err(TemplateError::DirMissing(self.dir.clone()));
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.to_ascii_lowercase().ends_with(".html") {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }

    /// Read a template's HTML content by file name.
    pub fn read(&self, name: &str) -> Result<String, TemplateError> {
        validate_name(name)?;

        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(TemplateError::NotFound(name.to_string()));
        }

        Ok(std::fs::read_to_string(path)?)
    }

    /// Whether a template with this name exists (name must still be valid).
    pub fn exists(&self, name: &str) -> Result<bool, TemplateError> {
        validate_name(name)?;
        Ok(self.dir.join(name).is_file())
    }
}

/// Template names come from URL path segments; only accept a bare `.html`
/// file name. Separators and `..` would escape the templates directory.
fn validate_name(name: &str) -> Result<(), TemplateError> {
    let invalid = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || !name.to_ascii_lowercase().ends_with(".html");

    if invalid {
        return Err(TemplateError::InvalidName(name.to_string()));
    }
    Ok(())
}
