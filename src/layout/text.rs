use crate::colour::Colour;
use crate::document::Document;
use crate::font::Font;
use crate::page::*;
use crate::units::Pt;
use id_arena::Id;

const TABSIZE: usize = 4;

/// Horizontal anchoring of a line of text relative to its x coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    /// x is the left edge of the text
    Left,
    /// x is the middle of the text
    Centre,
    /// x is the right edge of the text
    Right,
}

/// A font, size and colour to draw text with
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: Id<Font>,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: Id<Font>, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { font, size, colour }
    }

    pub fn with_colour(self, colour: Colour) -> TextStyle {
        TextStyle { colour, ..self }
    }

    pub fn with_size(self, size: Pt) -> TextStyle {
        TextStyle { size, ..self }
    }
}

/// Calculates the vertical offset from the top of a line of text down to the font's
/// baseline. PDF text coordinates specify the baseline, the layout engine thinks in
/// terms of the top of each line.
pub fn baseline_offset(font: &Font, size: Pt) -> Pt {
    font.ascent(size)
}

/// Draw a single line of text whose top edge sits `top` points below the top of
/// `page_index`. Nothing is wrapped; callers wrap first with [wrap_text].
pub fn draw_line(
    document: &mut Document,
    page_index: usize,
    text: &str,
    style: TextStyle,
    x: Pt,
    top: Pt,
    align: Align,
) {
    if text.is_empty() {
        return;
    }
    let font = document.font(style.font);
    let width = font.width_of_text(text, style.size);
    let baseline = top + baseline_offset(&font, style.size);
    let x = match align {
        Align::Left => x,
        Align::Centre => x - width / 2.0,
        Align::Right => x - width,
    };

    if let Some(page) = document.page_mut(page_index) {
        let y = page.height() - baseline;
        page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords: (x, y),
        });
    }
}

/// Word-wraps `text` into lines no wider than `max_width`.
///
/// Lines break at whitespace; a single word wider than the line is split between
/// characters so nothing ever overflows the box. Explicit newlines start a new line
/// (blank lines are kept as empty strings) and tabs count as four spaces.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");
    let space = font.width_of_text(" ", size);

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = Pt(0.0);

        for word in paragraph.split_whitespace() {
            let word_width = font.width_of_text(word, size);

            if !line.is_empty() && line_width + space + word_width <= max_width {
                line.push(' ');
                line.push_str(word);
                line_width += space + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = Pt(0.0);
            }

            if word_width <= max_width {
                line.push_str(word);
                line_width = word_width;
                continue;
            }

            // no break point - force character breaks
            for ch in word.chars() {
                let mut buf = [0u8; 4];
                let ch_width = font.width_of_text(ch.encode_utf8(&mut buf), size);
                if !line.is_empty() && line_width + ch_width > max_width {
                    lines.push(std::mem::take(&mut line));
                    line_width = Pt(0.0);
                }
                line.push(ch);
                line_width += ch_width;
            }
        }

        lines.push(line);
    }

    // a trailing newline shouldn't produce a trailing blank line
    while lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_on_one_line() {
        let lines = wrap_text("Casa en venta", &Font::Helvetica, Pt(12.0), Pt(500.0));
        assert_eq!(lines, vec!["Casa en venta".to_string()]);
    }

    #[test]
    fn wrapped_lines_fit_the_box() {
        let text = lipsum::lipsum(120);
        let max = Pt(200.0);
        let lines = wrap_text(&text, &Font::Helvetica, Pt(12.0), max);
        assert!(lines.len() > 5);
        for line in &lines {
            assert!(Font::Helvetica.width_of_text(line, Pt(12.0)) <= max, "{line}");
            assert!(!line.starts_with(' '));
        }
        // nothing is lost
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn overlong_words_break_between_characters() {
        let word = "x".repeat(200);
        let max = Pt(100.0);
        let lines = wrap_text(&word, &Font::Helvetica, Pt(12.0), max);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(Font::Helvetica.width_of_text(line, Pt(12.0)) <= max);
        }
    }

    #[test]
    fn newlines_start_new_lines() {
        let lines = wrap_text("uno\n\ndos\n", &Font::Helvetica, Pt(12.0), Pt(500.0));
        assert_eq!(lines, vec!["uno", "", "dos"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let lines = wrap_text("", &Font::Helvetica, Pt(12.0), Pt(500.0));
        assert_eq!(lines, vec![String::new()]);
    }
}
