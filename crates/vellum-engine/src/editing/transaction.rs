use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use thiserror::Error;

use crate::editing::draft::{BlockDraft, copy_common_properties};
use crate::editing::node::{BlockKind, BlockNode, NodeKey};
use crate::editing::store::DocumentModel;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown node key {0:?}")]
    UnknownKey(NodeKey),
}

/// Result of committing an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Keys whose latest revision changed: written, adopted or removed.
    pub changed: Vec<NodeKey>,
    /// Model version after the commit.
    pub version: u64,
}

/// An in-progress update transaction.
///
/// All mutation flows through here. `writable` hands out the transaction's
/// own copy-on-write revision of a node; `adopt` seals a draft; `remove`
/// detaches a node. Nothing is visible to readers of the model until
/// `commit`, which applies every staged change atomically and bumps the
/// version once. Dropping the transaction instead discards all of it.
pub struct Update<'a> {
    model: &'a mut DocumentModel,
    /// Pending revisions, keyed by node. Covers both copy-on-write copies of
    /// committed nodes and drafts adopted this transaction.
    pending: HashMap<NodeKey, BlockNode>,
    /// Keys adopted this transaction, in adoption order.
    adopted: Vec<NodeKey>,
    /// Committed keys staged for removal.
    removed: HashSet<NodeKey>,
    /// Conversion slots: old key -> the key taking its document position.
    replaced: HashMap<NodeKey, NodeKey>,
}

impl<'a> Update<'a> {
    pub(crate) fn new(model: &'a mut DocumentModel) -> Self {
        Self {
            model,
            pending: HashMap::new(),
            adopted: Vec::new(),
            removed: HashSet::new(),
            replaced: HashMap::new(),
        }
    }

    /// The writable revision for `key`.
    ///
    /// The first touch clones the latest committed revision into the pending
    /// set; later touches return that same pending revision. Writes land in
    /// the model only at commit.
    pub fn writable(&mut self, key: NodeKey) -> Result<&mut BlockNode, ModelError> {
        if self.removed.contains(&key) {
            return Err(ModelError::UnknownKey(key));
        }
        match self.pending.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let node = self
                    .model
                    .latest(key)
                    .cloned()
                    .ok_or(ModelError::UnknownKey(key))?;
                Ok(entry.insert(node))
            }
        }
    }

    /// The latest revision visible inside this transaction.
    ///
    /// Prefers the transaction's own pending writes (read-your-writes), then
    /// falls back to committed state.
    pub fn latest(&self, key: NodeKey) -> Option<&BlockNode> {
        if self.removed.contains(&key) {
            return None;
        }
        if let Some(node) = self.pending.get(&key) {
            return Some(node);
        }
        self.model.latest(key)
    }

    /// Seal a draft into the model under a fresh key.
    ///
    /// The node becomes visible to readers at commit; until then it only
    /// exists inside this transaction.
    pub fn adopt(&mut self, draft: BlockDraft) -> NodeKey {
        let key = self.model.allocate_key();
        self.adopted.push(key);
        self.pending.insert(key, draft.into_node());
        key
    }

    /// Detach a node at commit. Its revision history is dropped with it.
    pub fn remove(&mut self, key: NodeKey) -> Result<(), ModelError> {
        if let Some(pos) = self.adopted.iter().position(|k| *k == key) {
            // Adopted this transaction: it was never published, so just forget it.
            self.adopted.remove(pos);
            self.pending.remove(&key);
            self.replaced.retain(|_, replacement| *replacement != key);
            return Ok(());
        }
        if self.removed.contains(&key) || !self.model.contains(key) {
            return Err(ModelError::UnknownKey(key));
        }
        self.pending.remove(&key);
        self.removed.insert(key);
        Ok(())
    }

    /// Convert a node to another kind.
    ///
    /// Builds a draft of the new kind, copies the common properties from the
    /// source's latest visible revision, seals the draft and removes the
    /// source. The replacement takes the source's document position; its
    /// revision history starts fresh.
    pub fn convert(&mut self, key: NodeKey, kind: BlockKind) -> Result<NodeKey, ModelError> {
        let source = self
            .latest(key)
            .cloned()
            .ok_or(ModelError::UnknownKey(key))?;

        let mut draft = BlockDraft::new(kind);
        copy_common_properties(&source, &mut draft);

        let new_key = self.adopt(draft);
        let was_committed = self.model.contains(key);
        self.remove(key)?;
        if was_committed {
            self.replaced.insert(key, new_key);
        }
        Ok(new_key)
    }

    /// Apply every staged change atomically.
    ///
    /// Returns the set of changed keys and the resulting model version. The
    /// version is bumped only when something actually changed.
    pub fn commit(self) -> Commit {
        let Update {
            model,
            mut pending,
            adopted,
            removed,
            replaced,
        } = self;

        let mut changed = Vec::new();

        // Writes to existing nodes, in document order.
        let existing = model.order.clone();
        for key in existing {
            if removed.contains(&key) {
                continue;
            }
            if let Some(node) = pending.remove(&key) {
                model.revisions.entry(key).or_default().push(Arc::new(node));
                changed.push(key);
            }
        }

        // Adopted nodes become visible now, under a single initial revision.
        for key in &adopted {
            if let Some(node) = pending.remove(key) {
                model.revisions.insert(*key, vec![Arc::new(node)]);
                changed.push(*key);
            }
        }

        // Removals drop the whole revision list.
        for key in &removed {
            if model.revisions.remove(key).is_some() {
                changed.push(*key);
            }
        }

        // Rebuild document order: conversions keep their slot, removals drop
        // out, fresh adoptions append.
        let old_order = std::mem::take(&mut model.order);
        let mut order = Vec::with_capacity(old_order.len() + adopted.len());
        for key in old_order {
            if let Some(replacement) = replaced.get(&key) {
                order.push(*replacement);
            } else if !removed.contains(&key) {
                order.push(key);
            }
        }
        let replacements: HashSet<NodeKey> = replaced.values().copied().collect();
        for key in adopted {
            if !replacements.contains(&key) {
                order.push(key);
            }
        }
        model.order = order;

        if !changed.is_empty() {
            model.version += 1;
        }
        Commit {
            changed,
            version: model.version,
        }
    }
}
