//! Layout: turning listings into positioned draw commands on pages.
//!
//! Everything here measures vertical positions from the *top* edge of the page,
//! the way a report reads, and converts to PDF's bottom-up space only when a draw
//! command is added to a page. The [PageCursor] is the single piece of layout
//! state; every layout function takes it explicitly and leaves it below whatever
//! it drew.
//!
//! # Example
//!
//! ```
//! use inmobidata_report::{colours, Document, Font, Mm, Pt};
//! use inmobidata_report::layout::{
//!     layout_section, Margins, PageCursor, PageGeometry, SectionBody, SectionStyle, TextStyle,
//! };
//! use inmobidata_report::pagesize::A4;
//!
//! let mut doc = Document::default();
//! let regular = doc.add_font(Font::Helvetica);
//! let bold = doc.add_font(Font::HelveticaBold);
//!
//! let geometry = PageGeometry::new(A4, Margins::all(Mm(10.0)));
//! let mut cursor = PageCursor::begin(&mut doc, geometry, Mm(5.0).into());
//! let style = SectionStyle {
//!     heading: TextStyle::new(bold, Pt(12.0), colours::BRAND_BLUE),
//!     body: TextStyle::new(regular, Pt(12.0), colours::BLACK),
//!     indent: Mm(5.0).into(),
//!     continuation_suffix: None,
//! };
//!
//! layout_section(
//!     &mut doc,
//!     &mut cursor,
//!     Some("Descripción:"),
//!     SectionBody::Text("Casa amplia con jardín."),
//!     &style,
//! );
//! assert_eq!(doc.page_count(), 1);
//! ```

mod cursor;
mod gallery;
mod margins;
mod section;
mod text;

pub use cursor::*;
pub use gallery::*;
pub use margins::*;
pub use section::*;
pub use text::*;
