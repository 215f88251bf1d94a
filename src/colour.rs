/// A colour, expressed in the RGB or Gray colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }
}

impl From<[u8; 3]> for Colour {
    fn from(c: [u8; 3]) -> Self {
        let [r, g, b] = c;
        Colour::new_rgb_bytes(r, g, b)
    }
}

/// The report palette
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    /// Headings, prices and the brand line
    pub const BRAND_BLUE: Colour = Colour::new_rgb_bytes(33, 150, 243);
    /// Publisher block
    pub const MUTED: Colour = Colour::new_grey_bytes(100);
    /// Footers
    pub const FAINT: Colour = Colour::new_grey_bytes(150);
    /// Separator rules
    pub const RULE: Colour = Colour::new_grey_bytes(210);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_channels_scale_to_unit_range() {
        assert_eq!(
            Colour::from([255, 0, 51]),
            Colour::RGB {
                r: 1.0,
                g: 0.0,
                b: 0.2
            }
        );
        assert_eq!(Colour::new_grey_bytes(0), colours::BLACK);
    }
}
