use serde::{Deserialize, Serialize};

/// One heading of an article, as listed in its table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    /// Heading level (1 = top-level section).
    pub level: u32,
    /// The numbering label, e.g. "2.1".
    pub number: String,
    /// The heading text.
    pub title: String,
    /// The fragment identifier linking to this heading.
    pub anchor_id: String,
}

impl SectionDescriptor {
    pub fn new(
        level: u32,
        number: impl Into<String>,
        title: impl Into<String>,
        anchor_id: impl Into<String>,
    ) -> Self {
        Self {
            level,
            number: number.into(),
            title: title.into(),
            anchor_id: anchor_id.into(),
        }
    }
}

/// A node of the nested table of contents.
///
/// A node without a section is a nesting level that was opened by a level
/// jump but has no heading of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocNode {
    pub section: Option<SectionDescriptor>,
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn section(section: SectionDescriptor) -> Self {
        Self {
            section: Some(section),
            children: Vec::new(),
        }
    }

    pub fn gap() -> Self {
        Self::default()
    }

    pub fn is_gap(&self) -> bool {
        self.section.is_none()
    }
}

/// The top-level container of a nested table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TocTree {
    pub roots: Vec<TocNode>,
}

impl TocTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Walks the tree depth-first and yields every section with its depth
    /// (1 for top-level nodes). Gap nodes are skipped.
    pub fn sections(&self) -> Sections<'_> {
        Sections {
            stack: self.roots.iter().rev().map(|node| (1, node)).collect(),
        }
    }
}

/// Depth-first iterator over the sections of a [`TocTree`].
#[derive(Debug)]
pub struct Sections<'a> {
    stack: Vec<(u32, &'a TocNode)>,
}

impl<'a> Iterator for Sections<'a> {
    type Item = (u32, &'a SectionDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, node)) = self.stack.pop() {
            self.stack
                .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
            if let Some(section) = &node.section {
                return Some((depth, section));
            }
        }
        None
    }
}
