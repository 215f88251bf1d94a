use crate::{
    font::Font,
    image::Image,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    PdfError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the ordered set of pages of a report, plus the fonts and images those
/// pages draw with. It is built up page by page and only turned into PDF bytes by a
/// call to [Document::write] once every page, footer included, is finished.
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
    pub outline: Outline,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its 0-based index
    pub fn add_page(&mut self, page: Page) -> usize {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        self.page_order.len() - 1
    }

    /// The number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The page at the given 0-based index
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    /// The page at the given 0-based index, for drawing on
    pub fn page_mut(&mut self, page_index: usize) -> Option<&mut Page> {
        let id = *self.page_order.get(page_index)?;
        self.pages.get_mut(id)
    }

    /// Iterate pages in document order
    pub fn iter_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can refer to it by the returned Id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// The font behind an Id handed out by [Document::add_font]
    pub fn font(&self, id: Id<Font>) -> Font {
        self.fonts.get(id).copied().unwrap_or(Font::Helvetica)
    }

    /// Add an image to the document structure. Images are stored "globally" within
    /// the document, such that any page can draw (and re-draw) it by the returned Id.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Add a bookmark in the document outline pointing to the page with the given index.
    pub fn add_bookmark<S: ToString>(&mut self, title: S, page_index: usize) {
        self.outline.add_bookmark(page_index, title.to_string());
    }

    /// Render the document into a byte vector
    pub fn to_bytes(self) -> Result<Vec<u8>, PdfError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Write the entire document to the writer. The whole document is rendered in
    /// memory first, as pdf-writer requires.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PdfError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
            outline,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are keyed by position in the document so that bookmarks can
        // reference pages by index
        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer)?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(PdfError::PageMissing(page_index))?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        let outlines_id = outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = outlines_id {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::A4;

    #[test]
    fn pages_keep_insertion_order() {
        let mut doc = Document::default();
        assert_eq!(doc.add_page(Page::new(A4, None)), 0);
        assert_eq!(doc.add_page(Page::new(A4, None)), 1);
        assert_eq!(doc.page_count(), 2);
        assert!(doc.page(1).is_some());
        assert!(doc.page(2).is_none());
        assert_eq!(doc.iter_pages().count(), 2);
    }

    #[test]
    fn writes_a_pdf() {
        let mut doc = Document::default();
        doc.add_font(Font::Helvetica);
        doc.add_page(Page::new(A4, None));
        doc.add_bookmark("Primera", 0);
        let bytes = doc.to_bytes().expect("can write");
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Helvetica"));
        assert!(text.contains("/WinAnsiEncoding"));
        assert!(text.contains("/Outlines"));
    }
}
