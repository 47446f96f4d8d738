//! Id generation for surfaces and nodes

/// What an id is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Document,
    Page,
    Table,
    Image,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Document => "document",
            IdKind::Page => "page",
            IdKind::Table => "table",
            IdKind::Image => "image",
        }
    }
}

/// Source of ids for generated document elements
///
/// Inject a deterministic implementation to get structurally identical
/// output from repeated conversions.
pub trait IdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String;
}

/// Per-kind counters: `page-1`, `page-2`, `table-1`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    counters: [u64; 4],
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        let slot = match kind {
            IdKind::Document => 0,
            IdKind::Page => 1,
            IdKind::Table => 2,
            IdKind::Image => 3,
        };
        self.counters[slot] += 1;
        format!("{}-{}", kind.prefix(), self.counters[slot])
    }
}
