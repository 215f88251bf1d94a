use pdf_writer::{Finish, Name, Pdf, Ref, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// The document outline: a flat list of bookmarks, one per listing in a
/// multi-property report
#[derive(Default, Debug)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, title: String) {
        self.entries.push(OutlineEntry { page_index, title });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the outline tree, returning the root reference for the catalog.
    /// Page references must already have been generated.
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) -> Option<Ref> {
        if self.entries.is_empty() {
            return None;
        }

        let outlines_id = refs.gen(RefType::Outlines);
        let item_ids: Vec<Ref> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(item_ids[0]);
        outline.last(item_ids[item_ids.len() - 1]);
        outline.count(item_ids.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(page_ref) = refs.get(RefType::Page(entry.page_index)) else {
                continue;
            };

            let mut item = writer.outline_item(item_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if let Some(next) = item_ids.get(i + 1) {
                item.next(*next);
            }
            let mut dest = item.insert(Name(b"Dest")).array();
            dest.item(page_ref);
            dest.item(Name(b"Fit"));
            dest.finish();
            item.finish();
        }

        Some(outlines_id)
    }
}
