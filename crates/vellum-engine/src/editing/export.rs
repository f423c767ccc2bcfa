//! Serialization projection for block nodes.
//!
//! A node's exported record merges the base element fields (`type`, schema
//! `version`) with the node's own attributes. All attribute keys are always
//! present, defaults included, so downstream deserialization never sees a
//! missing field.

use serde::{Deserialize, Serialize};

use crate::editing::draft::BlockDraft;
use crate::editing::node::{Alignment, BlockKind, BlockNode};
use crate::editing::store::DocumentModel;

/// Schema version stamped on every exported record.
pub const SCHEMA_VERSION: u32 = 1;

/// Fields every serialized tree element carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedElement {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub version: u32,
}

/// The serialized record of a block node: base element fields spread
/// together with `id`, `alignment` and `inset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedBlock {
    #[serde(flatten)]
    pub element: SerializedElement,
    pub id: String,
    pub alignment: Alignment,
    pub inset: u32,
}

/// A whole model as an ordered list of block records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedDocument {
    pub version: u32,
    pub blocks: Vec<SerializedBlock>,
}

impl BlockNode {
    /// Project this revision into its serialized record.
    pub fn export(&self) -> SerializedBlock {
        SerializedBlock {
            element: SerializedElement {
                kind: self.kind(),
                version: SCHEMA_VERSION,
            },
            id: self.id().to_string(),
            alignment: self.alignment(),
            inset: self.inset(),
        }
    }

    /// Rebuild a node from its serialized record.
    pub fn from_serialized(record: &SerializedBlock) -> Self {
        BlockNode::from_parts(
            record.element.kind,
            record.id.clone(),
            record.alignment,
            record.inset,
        )
    }
}

impl DocumentModel {
    /// Export the latest committed revision of every live node, in document
    /// order.
    pub fn export(&self) -> SerializedDocument {
        SerializedDocument {
            version: SCHEMA_VERSION,
            blocks: self.blocks().map(|(_, node)| node.export()).collect(),
        }
    }

    /// Rebuild a model from a serialized document.
    ///
    /// Nodes are adopted in record order and committed as a single update;
    /// the resulting model starts its own version history.
    pub fn from_serialized(doc: &SerializedDocument) -> Self {
        let mut model = DocumentModel::new();
        let mut txn = model.begin();
        for record in &doc.blocks {
            let mut draft = BlockDraft::new(record.element.kind);
            draft.id = record.id.clone();
            draft.alignment = record.alignment;
            draft.inset = record.inset;
            txn.adopt(draft);
        }
        txn.commit();
        model
    }
}

/// Format a model as a readable string for snapshot testing.
pub fn format_document(model: &DocumentModel) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (_, node) in model.blocks() {
        writeln!(
            out,
            "{} id={:?} alignment={:?} inset={}",
            node.kind().as_str(),
            node.id(),
            node.alignment().as_str(),
            node.inset()
        )
        .unwrap();
    }
    out
}
