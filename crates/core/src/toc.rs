//! Builds the nested table of contents from a flat list of headings.
//!
//! The builder walks the headings in document order with a depth cursor
//! starting at 1, opening or closing one nesting level at a time until the
//! cursor matches the heading's level. Level jumps of any size are allowed in
//! both directions; a level opened without a heading of its own becomes a gap
//! node.

use wikitoc_types::{SectionDescriptor, TocNode, TocTree};

/// Deepest nesting the builder opens, one per HTML heading rank.
pub const MAX_TOC_DEPTH: u32 = 6;

/// Nests `sections` by their levels.
///
/// Empty input gives an empty tree. Levels below 1 are treated as 1 and
/// levels above [`MAX_TOC_DEPTH`] as `MAX_TOC_DEPTH`.
pub fn build_toc(sections: &[SectionDescriptor]) -> TocTree {
    // open[d - 1] collects the nodes of the list open at depth d
    let mut open: Vec<Vec<TocNode>> = vec![Vec::new()];

    for section in sections {
        let level = section.level.clamp(1, MAX_TOC_DEPTH) as usize;
        while open.len() < level {
            open_level(&mut open);
        }
        while open.len() > level {
            close_level(&mut open);
        }
        if let Some(list) = open.last_mut() {
            list.push(TocNode::section(section.clone()));
        }
    }

    while open.len() > 1 {
        close_level(&mut open);
    }

    TocTree {
        roots: open.pop().unwrap_or_default(),
    }
}

fn open_level(open: &mut Vec<Vec<TocNode>>) {
    if let Some(list) = open.last_mut() {
        if list.is_empty() {
            list.push(TocNode::gap());
        }
    }
    open.push(Vec::new());
}

fn close_level(open: &mut Vec<Vec<TocNode>>) {
    let Some(children) = open.pop() else {
        return;
    };
    // open_level guarantees the enclosing list has a last node
    if let Some(parent) = open.last_mut().and_then(|list| list.last_mut()) {
        parent.children.extend(children);
    }
}
