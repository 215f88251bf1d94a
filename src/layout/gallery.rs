//! Photo galleries: a grid of equally wide, aspect-preserving images that breaks
//! across pages a whole row at a time.

use crate::document::Document;
use crate::image::Image;
use crate::layout::{draw_line, Align, PageCursor, PageGeometry, Reservation, TextStyle};
use crate::loader::ImageLoader;
use crate::page::ImageLayout;
use crate::rect::Rect;
use crate::units::{Mm, Pt};
use id_arena::Id;
use std::collections::HashMap;
use tracing::{debug, warn};

/// How a gallery is laid out
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryOptions {
    /// Images per row, at least 1
    pub columns: usize,
    /// Tallest an image may be drawn; taller images are squashed to this height
    pub max_image_height: Pt,
    /// Gap between columns, and between rows
    pub padding: Pt,
    /// Printed at the top of a page when the gallery breaks onto it
    pub continuation: Option<Continuation>,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        GalleryOptions {
            columns: 2,
            max_image_height: Mm(70.0).into(),
            padding: Mm(5.0).into(),
            continuation: None,
        }
    }
}

/// A heading repeated on continuation pages
#[derive(Debug, Clone, PartialEq)]
pub struct Continuation {
    pub text: String,
    pub style: TextStyle,
}

/// Where one gallery image ended up, measured from the top-left of its page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedImage {
    pub page_index: usize,
    pub image_id: Id<Image>,
    pub x: Pt,
    pub top: Pt,
    pub width: Pt,
    pub height: Pt,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GalleryOutcome {
    pub placed: Vec<PlacedImage>,
    /// Images that could not be loaded and were left out of the grid
    pub skipped: usize,
}

/// Images already embedded in a document, by URL, so a photo shared between
/// listings is fetched and written once. Failed URLs are remembered too and not
/// retried within the same document.
#[derive(Debug, Default)]
pub struct EmbeddedImages {
    by_url: HashMap<String, Option<Embedded>>,
}

/// An image in the document's arena, with the natural size it was decoded at
#[derive(Debug, Clone, Copy)]
struct Embedded {
    id: Id<Image>,
    width: f32,
    height: f32,
}

impl EmbeddedImages {
    pub fn new() -> EmbeddedImages {
        EmbeddedImages::default()
    }

    async fn get_or_load<L: ImageLoader>(
        &mut self,
        document: &mut Document,
        loader: &L,
        url: &str,
    ) -> Option<Embedded> {
        if let Some(cached) = self.by_url.get(url) {
            return *cached;
        }

        let loaded = match loader.load(url).await {
            Ok(image) => {
                let (width, height) = (image.width, image.height);
                Some(Embedded {
                    id: document.add_image(image),
                    width,
                    height,
                })
            }
            Err(e) => {
                warn!("skipping gallery image: {e}");
                None
            }
        };
        self.by_url.insert(url.to_string(), loaded);
        loaded
    }
}

/// Width of one gallery column: the printable width shared between `columns`
/// columns with `padding` between neighbours
pub fn column_width(geometry: &PageGeometry, columns: usize, padding: Pt) -> Pt {
    let columns = columns.max(1);
    let gutters = padding * (columns - 1) as f32;
    (geometry.printable_width() - gutters) / columns as f32
}

/// Height of an image drawn `width` wide, keeping its aspect ratio but never
/// taller than `max_height`
pub fn fit_height(natural_width: f32, natural_height: f32, width: Pt, max_height: Pt) -> Pt {
    if natural_width <= 0.0 || natural_height <= 0.0 {
        return max_height;
    }
    (width * (natural_height / natural_width)).min(max_height)
}

/// Lay `urls` out as a grid starting at the cursor.
///
/// Images are loaded one after another in order. One that fails to load is logged
/// and skipped without taking up a cell. Before each row starts, room for a full
/// `max_image_height` row is reserved so a row is never split across pages. When
/// done, the cursor sits one `padding` below the last row; if nothing was placed the
/// cursor has not moved.
pub async fn layout_gallery<L: ImageLoader>(
    document: &mut Document,
    cursor: &mut PageCursor,
    images: &mut EmbeddedImages,
    loader: &L,
    urls: &[String],
    options: &GalleryOptions,
) -> GalleryOutcome {
    let mut outcome = GalleryOutcome::default();
    if urls.is_empty() {
        return outcome;
    }

    let geometry = *cursor.geometry();
    let columns = options.columns.max(1);
    let width = column_width(&geometry, columns, options.padding);
    let max_height = options.max_image_height.min(geometry.printable_height());

    let mut column = 0;
    let mut row_top = cursor.y();
    let mut row_height = Pt(0.0);

    for url in urls {
        let Some(embedded) = images.get_or_load(document, loader, url).await else {
            outcome.skipped += 1;
            continue;
        };
        let height = fit_height(embedded.width, embedded.height, width, max_height);

        if column == 0 {
            if let Reservation::NewPage(page_index) = cursor.reserve(document, max_height) {
                debug!(page_index, "gallery continues on a new page");
                if let Some(continuation) = &options.continuation {
                    draw_continuation(document, cursor, continuation, max_height);
                }
            }
            row_top = cursor.y();
            row_height = Pt(0.0);
        }

        let image_id = embedded.id;
        let x = geometry.margins.left + (width + options.padding) * column as f32;
        let page_index = cursor.page_index();
        if let Some(page) = document.page_mut(page_index) {
            page.add_image(ImageLayout {
                image_id,
                position: Rect::from_top(x, row_top, width, height, geometry.height()),
            });
        }
        outcome.placed.push(PlacedImage {
            page_index,
            image_id,
            x,
            top: row_top,
            width,
            height,
        });

        row_height = row_height.max(height);
        column += 1;
        if column == columns {
            cursor.advance_exact(row_height + options.padding);
            column = 0;
        }
    }

    // partially filled last row
    if column > 0 {
        cursor.advance_exact(row_height + options.padding);
    }

    outcome
}

fn draw_continuation(
    document: &mut Document,
    cursor: &mut PageCursor,
    continuation: &Continuation,
    row_height: Pt,
) {
    let font = document.font(continuation.style.font);
    let line_height = font.line_height(continuation.style.size);
    draw_line(
        document,
        cursor.page_index(),
        &continuation.text,
        continuation.style,
        cursor.geometry().margins.left,
        cursor.y(),
        Align::Left,
    );
    cursor.advance(line_height);
    // the heading itself may have eaten the room the row needed
    cursor.reserve(document, row_height);
}
