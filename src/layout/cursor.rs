use crate::document::Document;
use crate::layout::Margins;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::units::Pt;
use tracing::trace;

/// Page size and margins shared by every page of a report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> PageGeometry {
        PageGeometry { size, margins }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    /// Width between the left and right margins
    pub fn printable_width(&self) -> Pt {
        self.width() - self.margins.horizontal()
    }

    /// Height between the top and bottom margins
    pub fn printable_height(&self) -> Pt {
        self.height() - self.margins.top - self.margins.bottom
    }

    /// The lowest offset (from the top edge) content may reach
    pub fn bottom_limit(&self) -> Pt {
        self.height() - self.margins.bottom
    }

    /// Horizontal centre of the page
    pub fn centre_x(&self) -> Pt {
        self.width() / 2.0
    }

    pub fn blank_page(&self) -> Page {
        Page::new(self.size, Some(self.margins))
    }
}

/// What [PageCursor::reserve] had to do to make room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    /// The block fits below the current offset on the current page
    Fits,
    /// The current page was full; the block goes at the top of this new page
    NewPage(usize),
}

/// Tracks where the next block goes: which page, and how far down it (measured from
/// the top edge of the page). Every layout step takes the cursor explicitly and moves
/// it; there is no other layout state.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    geometry: PageGeometry,
    padding: Pt,
    page_index: usize,
    y: Pt,
}

impl PageCursor {
    /// Append a fresh page to the document and start at its top margin.
    /// `padding` is the gap [PageCursor::advance] leaves after every block.
    pub fn begin(document: &mut Document, geometry: PageGeometry, padding: Pt) -> PageCursor {
        let page_index = document.add_page(geometry.blank_page());
        PageCursor {
            geometry,
            padding,
            page_index,
            y: geometry.margins.top,
        }
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Index of the page currently being written
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Current offset from the top edge of the page
    pub fn y(&self) -> Pt {
        self.y
    }

    pub fn padding(&self) -> Pt {
        self.padding
    }

    /// Space left above the bottom margin
    pub fn remaining(&self) -> Pt {
        self.geometry.bottom_limit() - self.y
    }

    /// Whether `height` more points fit on the current page
    pub fn fits(&self, height: Pt) -> bool {
        self.y + height <= self.geometry.bottom_limit()
    }

    /// Whether nothing has been written on the current page yet
    pub fn at_top(&self) -> bool {
        self.y <= self.geometry.margins.top
    }

    /// Make sure a block of `height` can be drawn at the current offset. If it would
    /// cross the bottom margin a new page is started and the cursor moves to its top
    /// margin. A block that doesn't even fit on an empty page is left where it is:
    /// breaking again would only produce blank pages.
    pub fn reserve(&mut self, document: &mut Document, height: Pt) -> Reservation {
        if self.fits(height) || self.at_top() {
            return Reservation::Fits;
        }
        trace!(
            page = self.page_index,
            y = self.y.0,
            height = height.0,
            "page full"
        );
        Reservation::NewPage(self.new_page(document))
    }

    /// Move down past a block of `height`, plus the inter-block padding
    pub fn advance(&mut self, height: Pt) {
        self.y += height + self.padding;
    }

    /// Move down exactly `height`, e.g. between lines of one paragraph
    pub fn advance_exact(&mut self, height: Pt) {
        self.y += height;
    }

    /// Unconditionally start a new page, returning its index
    pub fn new_page(&mut self, document: &mut Document) -> usize {
        self.page_index = document.add_page(self.geometry.blank_page());
        self.y = self.geometry.margins.top;
        self.page_index
    }
}
