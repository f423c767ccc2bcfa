use crate::editing::node::{Alignment, BlockKind, BlockNode};

/// A block node under construction, not yet visible to readers.
///
/// Drafts are the one place raw field assignment is allowed: the instance is
/// unpublished by construction, so writes here cannot bypass the writable
/// revision discipline of a committed node. Sealing happens through
/// [`Update::adopt`](crate::editing::Update::adopt), which makes the node
/// visible at commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockDraft {
    pub kind: BlockKind,
    pub id: String,
    pub alignment: Alignment,
    pub inset: u32,
}

impl BlockDraft {
    /// Start a draft of the given kind with default attributes.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub(crate) fn into_node(self) -> BlockNode {
        BlockNode::from_parts(self.kind, self.id, self.alignment, self.inset)
    }
}

/// Copy `id`, `alignment` and `inset` from a node to a draft, by value.
///
/// The draft target keeps this a structural copy between sibling instances:
/// the source stays untouched, and later edits to either side do not leak
/// into the other. Used when constructing a replacement node outside the
/// normal write path, e.g. during node-kind conversion.
pub fn copy_common_properties(from: &BlockNode, to: &mut BlockDraft) {
    to.id = from.id().to_string();
    to.alignment = from.alignment();
    to.inset = from.inset();
}
