use std::fs;
use std::path::{Path, PathBuf};

use crate::editing::DocumentModel;
use crate::editing::export::SerializedDocument;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Document not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed document file {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load a serialized document file and rebuild its model
pub fn load_document(path: &Path) -> Result<DocumentModel, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    let serialized: SerializedDocument =
        serde_json::from_str(&content).map_err(|source| IoError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DocumentModel::from_serialized(&serialized))
}

/// Write a model's serialized form to a document file
pub fn save_document(path: &Path, model: &DocumentModel) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&model.export())?;
    fs::write(path, content)?;
    Ok(())
}
