use crate::units::Pt;

/// Page margins. The cursor never writes above the top margin or below the bottom
/// margin, and the gallery and text blocks are sized to fit between the left and
/// right margins. They are also applied to [`Page`](crate::Page)s to determine the
/// `ArtBox` of each page in the generated PDF
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Left plus right
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }
}
