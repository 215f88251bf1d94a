//! Titled blocks of text that flow down the page through the cursor, breaking onto
//! new pages a line at a time.

use crate::colour::Colour;
use crate::document::Document;
use crate::layout::{draw_line, wrap_text, Align, PageCursor, Reservation, TextStyle};
use crate::page::LineLayout;
use crate::units::Pt;

const RULE_WIDTH: Pt = Pt(0.5);

/// A label and its value, drawn as `label: value`
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new<L: ToString, V: ToString>(label: L, value: V) -> Field {
        Field {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// What goes under a section heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionBody<'a> {
    /// Free text, word-wrapped to the printable width
    Text(&'a str),
    /// One indented bullet per entry
    Items(&'a [String]),
    /// One `label: value` line per field
    Fields(&'a [Field]),
    /// Pre-formatted lines, each wrapped on its own
    Lines(&'a [String]),
}

/// How sections are drawn
#[derive(Debug, Clone, PartialEq)]
pub struct SectionStyle {
    pub heading: TextStyle,
    pub body: TextStyle,
    /// How far bullets are inset from the left margin
    pub indent: Pt,
    /// Appended to the heading when it is repeated on a continuation page.
    /// `None` means the heading isn't repeated.
    pub continuation_suffix: Option<String>,
}

/// One wrapped line of a section body, with its inset from the left margin
#[derive(Debug, Clone, PartialEq)]
struct BodyLine {
    text: String,
    inset: Pt,
}

/// Draw a section: a heading followed by its body.
///
/// The heading is kept on the same page as the first body line. Every body line
/// reserves its own height, so long bodies spill over as many pages as they need.
/// A section with nothing in its body is not drawn at all. Returns the number of
/// body lines drawn.
pub fn layout_section(
    document: &mut Document,
    cursor: &mut PageCursor,
    heading: Option<&str>,
    body: SectionBody<'_>,
    style: &SectionStyle,
) -> usize {
    let lines = body_lines(document, cursor, body, style);
    if lines.is_empty() {
        return 0;
    }

    let body_height = document.font(style.body.font).line_height(style.body.size);
    let heading_height = document
        .font(style.heading.font)
        .line_height(style.heading.size);

    if let Some(heading) = heading {
        cursor.reserve(document, heading_height + body_height);
        draw_heading(document, cursor, heading, style);
    }

    let left = cursor.geometry().margins.left;
    for line in &lines {
        if let Reservation::NewPage(_) = cursor.reserve(document, body_height) {
            if let (Some(heading), Some(suffix)) = (heading, &style.continuation_suffix) {
                draw_heading(document, cursor, &format!("{heading}{suffix}"), style);
            }
        }
        draw_line(
            document,
            cursor.page_index(),
            &line.text,
            style.body,
            left + line.inset,
            cursor.y(),
            Align::Left,
        );
        cursor.advance_exact(body_height);
    }
    cursor.advance(Pt(0.0));

    lines.len()
}

/// Draw `text` word-wrapped to the printable width, each line aligned within the
/// margins, then leave the usual block padding below it. Used for titles and other
/// free-standing lines.
pub fn layout_paragraph(
    document: &mut Document,
    cursor: &mut PageCursor,
    text: &str,
    style: TextStyle,
    align: Align,
) {
    let geometry = *cursor.geometry();
    let font = document.font(style.font);
    let line_height = font.line_height(style.size);
    let x = match align {
        Align::Left => geometry.margins.left,
        Align::Centre => geometry.margins.left + geometry.printable_width() / 2.0,
        Align::Right => geometry.width() - geometry.margins.right,
    };

    for line in wrap_text(text, &font, style.size, geometry.printable_width()) {
        cursor.reserve(document, line_height);
        draw_line(
            document,
            cursor.page_index(),
            &line,
            style,
            x,
            cursor.y(),
            align,
        );
        cursor.advance_exact(line_height);
    }
    cursor.advance(Pt(0.0));
}

/// Draw a hairline across the printable width at the cursor
pub fn layout_rule(document: &mut Document, cursor: &mut PageCursor, colour: Colour) {
    let geometry = *cursor.geometry();
    cursor.reserve(document, RULE_WIDTH);
    if let Some(page) = document.page_mut(cursor.page_index()) {
        let y = page.height() - cursor.y();
        page.add_line(LineLayout {
            from: (geometry.margins.left, y),
            to: (geometry.width() - geometry.margins.right, y),
            width: RULE_WIDTH,
            colour,
        });
    }
    cursor.advance(RULE_WIDTH);
}

fn draw_heading(
    document: &mut Document,
    cursor: &mut PageCursor,
    heading: &str,
    style: &SectionStyle,
) {
    let height = document
        .font(style.heading.font)
        .line_height(style.heading.size);
    draw_line(
        document,
        cursor.page_index(),
        heading,
        style.heading,
        cursor.geometry().margins.left,
        cursor.y(),
        Align::Left,
    );
    cursor.advance_exact(height);
}

fn body_lines(
    document: &Document,
    cursor: &PageCursor,
    body: SectionBody<'_>,
    style: &SectionStyle,
) -> Vec<BodyLine> {
    let font = document.font(style.body.font);
    let size = style.body.size;
    let width = cursor.geometry().printable_width();
    let flush = |text: String| BodyLine {
        text,
        inset: Pt(0.0),
    };

    match body {
        SectionBody::Text(text) if text.trim().is_empty() => Vec::new(),
        SectionBody::Text(text) => wrap_text(text, &font, size, width)
            .into_iter()
            .map(flush)
            .collect(),
        SectionBody::Items(items) => {
            const BULLET: &str = "• ";
            let hang = font.width_of_text(BULLET, size);
            let mut lines = Vec::new();
            for item in items.iter().filter(|i| !i.trim().is_empty()) {
                let wrapped = wrap_text(item, &font, size, width - style.indent - hang);
                for (i, text) in wrapped.into_iter().enumerate() {
                    lines.push(if i == 0 {
                        BodyLine {
                            text: format!("{BULLET}{text}"),
                            inset: style.indent,
                        }
                    } else {
                        BodyLine {
                            text,
                            inset: style.indent + hang,
                        }
                    });
                }
            }
            lines
        }
        SectionBody::Fields(fields) => fields
            .iter()
            .flat_map(|f| wrap_text(&format!("{}: {}", f.label, f.value), &font, size, width))
            .map(flush)
            .collect(),
        SectionBody::Lines(lines) => lines
            .iter()
            .flat_map(|l| wrap_text(l, &font, size, width))
            .map(flush)
            .collect(),
    }
}
