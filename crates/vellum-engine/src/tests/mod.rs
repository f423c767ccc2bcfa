use std::path::PathBuf;
use tempfile::TempDir;

use crate::editing::{Alignment, BlockDraft, BlockKind, DocumentModel};

/// Create a temporary directory for document files
pub fn create_scratch_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Path for a document file inside a scratch directory
pub fn scratch_path(dir: &TempDir, filename: &str) -> PathBuf {
    dir.path().join(filename)
}

/// A small three-block model used across test modules
pub fn sample_model() -> DocumentModel {
    let mut model = DocumentModel::new();
    let mut txn = model.begin();

    let mut heading = BlockDraft::new(BlockKind::Heading);
    heading.id = "intro".to_string();
    txn.adopt(heading);

    let mut paragraph = BlockDraft::new(BlockKind::Paragraph);
    paragraph.alignment = Alignment::Justify;
    paragraph.inset = 1;
    txn.adopt(paragraph);

    let mut item = BlockDraft::new(BlockKind::ListItem);
    item.inset = 2;
    txn.adopt(item);

    txn.commit();
    model
}
