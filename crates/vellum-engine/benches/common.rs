// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn build_model(blocks: usize) -> vellum_engine::editing::DocumentModel {
    use vellum_engine::editing::{Alignment, BlockDraft, BlockKind, DocumentModel};

    let mut model = DocumentModel::new();
    let mut txn = model.begin();
    for i in 0..blocks {
        let kind = match i % 4 {
            0 => BlockKind::Heading,
            1 => BlockKind::Paragraph,
            2 => BlockKind::ListItem,
            _ => BlockKind::Quote,
        };
        let mut draft = BlockDraft::new(kind);
        draft.id = format!("block-{i}");
        draft.inset = (i % 5) as u32;
        if i % 3 == 0 {
            draft.alignment = Alignment::Center;
        }
        txn.adopt(draft);
    }
    txn.commit();
    model
}
