use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::editing::node::{BlockNode, NodeKey};
use crate::editing::transaction::{Commit, Update};

/// Versioned store of block nodes.
///
/// Each key resolves through an index into a table of immutable revisions:
/// reads return the most recent committed revision, writes (inside an
/// [`Update`]) allocate a new revision and rebind the key. A published
/// revision is never mutated in place, so prior revisions remain valid for
/// history consumers.
///
/// The store also tracks document order for its nodes; tree shape beyond
/// that (parent/child links, reconciliation) belongs to the surrounding
/// engine.
#[derive(Debug, Default)]
pub struct DocumentModel {
    /// Committed revisions per key, oldest first. Lists are never empty.
    pub(crate) revisions: HashMap<NodeKey, Vec<Arc<BlockNode>>>,
    /// Live keys in document order.
    pub(crate) order: Vec<NodeKey>,
    /// Next key to allocate. Keys are never reused within a model.
    pub(crate) next_key: u64,
    /// Version counter incremented on each committed update with changes.
    pub(crate) version: u64,
}

impl DocumentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an update transaction borrowing the model mutably.
    ///
    /// Dropping the returned [`Update`] without calling `commit` discards all
    /// staged changes.
    pub fn begin(&mut self) -> Update<'_> {
        Update::new(self)
    }

    /// Run `f` inside a transaction and commit the result.
    pub fn update(&mut self, f: impl FnOnce(&mut Update<'_>)) -> Commit {
        let mut txn = self.begin();
        f(&mut txn);
        txn.commit()
    }

    /// The latest committed revision for `key`, if the node is live.
    pub fn latest(&self, key: NodeKey) -> Option<&BlockNode> {
        self.revisions
            .get(&key)
            .and_then(|revs| revs.last())
            .map(Arc::as_ref)
    }

    /// All committed revisions for `key`, oldest first.
    ///
    /// Empty for unknown or removed keys. This is the raw material for an
    /// undo/history layer; the model itself only guarantees the snapshots
    /// stay immutable.
    pub fn revisions(&self, key: NodeKey) -> impl Iterator<Item = &BlockNode> + '_ {
        self.revisions
            .get(&key)
            .into_iter()
            .flatten()
            .map(Arc::as_ref)
    }

    /// Number of committed revisions for `key`.
    pub fn revision_count(&self, key: NodeKey) -> usize {
        self.revisions.get(&key).map_or(0, Vec::len)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.revisions.contains_key(&key)
    }

    /// Live keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.order.iter().copied()
    }

    /// Latest revision of every live node, in document order.
    pub fn blocks(&self) -> impl Iterator<Item = (NodeKey, &BlockNode)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.latest(*key).map(|node| (*key, node)))
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The current model version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Mint identifiers for blocks whose id is empty.
    ///
    /// Blocks that already carry an id are left untouched. Runs as a regular
    /// update, so the pre-mint revisions stay in history.
    pub fn assign_missing_ids(&mut self) -> Commit {
        let missing: Vec<NodeKey> = self
            .blocks()
            .filter(|(_, node)| node.id().is_empty())
            .map(|(key, _)| key)
            .collect();

        let mut txn = self.begin();
        for key in missing {
            if let Ok(node) = txn.writable(key) {
                node.set_id(Uuid::new_v4().to_string());
            }
        }
        txn.commit()
    }

    pub(crate) fn allocate_key(&mut self) -> NodeKey {
        let key = NodeKey(self.next_key);
        self.next_key += 1;
        key
    }
}
