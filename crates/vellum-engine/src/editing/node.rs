use serde::{Deserialize, Serialize};

/// Stable identifier for a block node that survives edits.
///
/// Keys are allocated by [`DocumentModel`](crate::editing::DocumentModel) and
/// never reused within a model.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct NodeKey(pub u64);

/// Horizontal alignment of a block's content.
///
/// `Inherit` is the unset default and serializes as an empty string, so the
/// exported record always carries the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    #[serde(rename = "")]
    Inherit,
    Start,
    Center,
    End,
    Justify,
}

impl Alignment {
    /// The serialized form of this alignment (`""` for `Inherit`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Inherit => "",
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
            Alignment::Justify => "justify",
        }
    }
}

/// The structural kind of a block node.
///
/// This is the base element data merged into the serialized record as its
/// `type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    Heading,
    Quote,
    ListItem,
    CodeBlock,
}

impl BlockKind {
    /// The serialized form of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Quote => "quote",
            BlockKind::ListItem => "list_item",
            BlockKind::CodeBlock => "code_block",
        }
    }
}

/// One revision of a block node's attributes.
///
/// A freshly constructed node is valid without explicit initialization: the
/// id is empty, the alignment is `Inherit` and the inset is `0`.
///
/// Committed revisions are immutable; the only `&mut BlockNode` reachable by
/// client code is the writable revision handed out by
/// [`Update::writable`](crate::editing::Update::writable), so the
/// copy-on-write discipline is enforced by the borrow checker rather than a
/// runtime check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockNode {
    kind: BlockKind,
    id: String,
    alignment: Alignment,
    inset: u32,
}

impl BlockNode {
    /// Create a node of the given kind with default attributes.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub(crate) fn from_parts(kind: BlockKind, id: String, alignment: Alignment, inset: u32) -> Self {
        Self {
            kind,
            id,
            alignment,
            inset,
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// The node's external identifier, used for cross-references such as
    /// anchors. Empty until one is assigned; uniqueness is the caller's
    /// concern.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The node's indentation level.
    pub fn inset(&self) -> u32 {
        self.inset
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn set_inset(&mut self, inset: u32) {
        self.inset = inset;
    }
}
