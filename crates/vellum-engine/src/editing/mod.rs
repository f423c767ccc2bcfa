/*!
 * # Editing Core Module
 *
 * This module implements the block attribute model at the heart of vellum:
 * per-node identity and layout metadata for the elements of a document tree,
 * stored as immutable revisions behind an update transaction.
 *
 * ## Architecture Overview
 *
 * ### 1. Versioned Snapshot Store
 * - `DocumentModel` maps each `NodeKey` to a list of immutable revisions
 * - Reads resolve the **latest committed revision**, never a stale snapshot
 * - Writes allocate a new revision and rebind the key; a published revision
 *   is never mutated in place
 * - Prior revisions stay available through `DocumentModel::revisions`
 *
 * ### 2. Update Transactions
 * - `Update` is the only path to a **writable revision**: the first
 *   `writable()` touch clones the latest committed revision into the
 *   transaction's pending set (copy-on-write)
 * - Pending writes are invisible to outside readers until `commit()`
 * - Committing applies all staged writes atomically and bumps the model
 *   version once
 *
 * ### 3. Construct-then-Seal Drafts
 * - `BlockDraft` allows raw field assignment while a node is still
 *   unpublished; `Update::adopt` seals it into the store
 * - `copy_common_properties` transfers `id`, `alignment` and `inset` between
 *   nodes by value, and only ever targets a draft
 * - Node-kind conversion (`Update::convert`) is built from exactly these two
 *   primitives
 *
 * ### 4. Serialization Projection
 * - `BlockNode::export` merges the base element record with the node's own
 *   attributes into a `SerializedBlock`; all attribute keys are always
 *   present so downstream deserialization never sees missing fields
 * - `DocumentModel::export` / `DocumentModel::from_serialized` round-trip a
 *   whole model through `SerializedDocument`
 *
 * ## Usage Pattern
 *
 * ```rust
 * use vellum_engine::editing::{Alignment, BlockDraft, BlockKind, DocumentModel};
 *
 * let mut model = DocumentModel::new();
 *
 * // Create a block through a draft and seal it.
 * let mut txn = model.begin();
 * let key = txn.adopt(BlockDraft::new(BlockKind::Paragraph));
 * txn.commit();
 *
 * // Edit it through a writable revision.
 * let mut txn = model.begin();
 * let node = txn.writable(key).unwrap();
 * node.set_alignment(Alignment::Center);
 * node.set_inset(1);
 * let commit = txn.commit();
 * assert_eq!(commit.version, model.version());
 *
 * // Reads resolve the latest committed revision.
 * assert_eq!(model.latest(key).unwrap().inset(), 1);
 * ```
 */

// Module exports
pub mod draft;
pub mod export;
pub mod node;
pub mod store;
pub mod transaction;

// Public API re-exports
pub use draft::{BlockDraft, copy_common_properties};
pub use export::{SerializedBlock, SerializedDocument, SerializedElement, format_document};
pub use node::{Alignment, BlockKind, BlockNode, NodeKey};
pub use store::DocumentModel;
pub use transaction::{Commit, ModelError, Update};
