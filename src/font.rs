use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// One of the standard PDF fonts. Standard fonts are built into every PDF reader so
/// nothing is embedded; the width tables below are the Adobe metrics for the
/// WinAnsi code points, which covers Spanish listing text (accents, ñ, ¿, ¡, ², •).
///
/// Fonts are stored "globally" within the document and referred to by their
/// [Id] from text spans.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

/// Adobe metrics, Helvetica, code points 32..=126
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Adobe metrics, Helvetica-Bold, code points 32..=126
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

const ASCENDER: f32 = 718.0;
const DESCENDER: f32 = -207.0;
const UNITS_PER_EM: f32 = 1000.0;

impl Font {
    /// The PostScript name readers know the font by
    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (ASCENDER / UNITS_PER_EM)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (DESCENDER / UNITS_PER_EM)
    }

    /// The vertical distance between two consecutive baselines at the given size
    pub fn line_height(&self, size: Pt) -> Pt {
        size * 1.15
    }

    /// Advance width of a single character, in thousandths of an em
    fn advance(&self, ch: char) -> u16 {
        let table = match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        let bold = matches!(self, Font::HelveticaBold);

        let ch = fold_accent(ch);
        if (' '..='~').contains(&ch) {
            return table[ch as usize - 32];
        }

        match ch {
            // accented i's are drawn on the dotless i, which is wider than 'i'
            'ì' | 'í' | 'î' | 'ï' => 278,
            'Æ' => 1000,
            'æ' => 889,
            'ß' => 611,
            'Þ' => 667,
            'ð' => 611 - if bold { 0 } else { 55 },
            '•' => 350,
            '…' | '—' | '‰' => 1000,
            '–' | '€' | '«' | '»' | '¢' | '£' | '§' => 556,
            '¿' => 611,
            '¡' | '²' | '³' | '¹' => 333,
            '°' => 400,
            '·' | '\u{a0}' => 278,
            '×' | '±' | '¬' => 584,
            '©' | '®' => 737,
            '‘' | '’' | '‚' => 222 + if bold { 56 } else { 0 },
            '“' | '”' | '„' => 333 + if bold { 167 } else { 0 },
            'ª' => 370,
            'º' => 365,
            'µ' => 556 + if bold { 55 } else { 0 },
            '¼' | '½' | '¾' => 834,
            _ => 556,
        }
    }

    /// Calculate the width of a given string of text at the given font size. Characters
    /// that cannot be encoded are measured as the `?` they will be drawn as.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let thousandths: u32 = text
            .chars()
            .filter(|ch| *ch != '\n')
            .map(|ch| {
                if winansi(ch).is_some() {
                    self.advance(ch) as u32
                } else {
                    self.advance('?') as u32
                }
            })
            .sum();
        size * (thousandths as f32 / UNITS_PER_EM)
    }

    /// Encode text into the single-byte codes the font's WinAnsi encoding expects
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .filter(|ch| *ch != '\n')
            .map(|ch| winansi(ch).unwrap_or(b'?'))
            .collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_font().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Letters with diacritics share the advance of their base letter in Helvetica
fn fold_accent(ch: char) -> char {
    match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Š' => 'S',
        'Ž' => 'Z',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'þ' => 'p',
        'š' => 's',
        'ž' => 'z',
        _ => ch,
    }
}

/// Map a character onto its WinAnsiEncoding code, if it has one
pub fn winansi(ch: char) -> Option<u8> {
    match ch as u32 {
        0x20..=0x7e | 0xa0..=0xff => Some(ch as u32 as u8),
        _ => match ch {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8a),
            '‹' => Some(0x8b),
            'Œ' => Some(0x8c),
            'Ž' => Some(0x8e),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9a),
            '›' => Some(0x9b),
            'œ' => Some(0x9c),
            'ž' => Some(0x9e),
            'Ÿ' => Some(0x9f),
            '\t' => Some(b' '),
            _ => None,
        },
    }
}
