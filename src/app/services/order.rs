use std::cmp::Ordering;

use crate::app::domain::document::{OpenDocument, TabContent, TabGroup};
use crate::app::domain::settings::SortOrder;

use super::collate;

/// Total order over document snapshots: every pinned document sorts after
/// every unpinned one, pinned pairs keep their input order (the stable sort
/// sees them as equal), and unpinned pairs compare by collation key of the
/// configured sort key. Pure; no I/O.
pub fn compare_documents(a: &OpenDocument, b: &OpenDocument, order: SortOrder) -> Ordering {
    match (a.pinned, b.pinned) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => collate::compare(sort_key(a, order), sort_key(b, order)),
    }
}

fn sort_key(doc: &OpenDocument, order: SortOrder) -> &str {
    match order {
        SortOrder::Alphabetical => doc.file_name(),
        SortOrder::FullPath => &doc.path,
    }
}

/// Flatten `groups` into one snapshot sequence, keeping only text-document
/// tabs and preserving per-group relative order, then stable-sort it into
/// the desired order. Returns a fresh vector; inputs are never mutated.
pub fn sorted_documents(groups: &[TabGroup], order: SortOrder) -> Vec<OpenDocument> {
    let mut documents: Vec<OpenDocument> = groups
        .iter()
        .flat_map(|group| {
            group.tabs.iter().filter_map(move |tab| match &tab.content {
                TabContent::Text { path } => Some(OpenDocument {
                    path: path.clone(),
                    pinned: tab.pinned,
                    group: group.id,
                }),
                _ => None,
            })
        })
        .collect();
    documents.sort_by(|a, b| compare_documents(a, b, order));
    documents
}
