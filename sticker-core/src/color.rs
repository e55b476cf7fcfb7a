use crate::surface::Color;

/// The fixed sheet palette. Every fill color a box can take is one of
/// these; each variant carries its exact RGB value and a contrast class
/// for the label text drawn over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxColor {
    // Mixed palette (top-left quadrant)
    Red,
    Blue,
    Yellow,
    NeonGreen,
    Black,
    White,
    Azure,
    Magenta,
    // Greens (bottom-left quadrant)
    Green,
    LimeGreen,
    LightGreen,
    // Warm (top-right quadrant)
    Gold,
    PureYellow,
    Orange,
    // Blues (bottom-right quadrant)
    PureBlue,
    DodgerBlue,
    LightSkyBlue,
}

impl BoxColor {
    pub fn fill(self) -> Color {
        match self {
            BoxColor::Red => Color::rgb(0xFF, 0x00, 0x00),
            BoxColor::Blue => Color::rgb(0x08, 0x00, 0xFF),
            BoxColor::Yellow => Color::rgb(0xF3, 0xF7, 0x04),
            BoxColor::NeonGreen => Color::rgb(0x11, 0xFF, 0x00),
            BoxColor::Black => Color::rgb(0x00, 0x00, 0x00),
            BoxColor::White => Color::rgb(0xFF, 0xFF, 0xFF),
            BoxColor::Azure => Color::rgb(0x00, 0x95, 0xFF),
            BoxColor::Magenta => Color::rgb(0xFF, 0x00, 0xEE),
            BoxColor::Green => Color::rgb(0x00, 0x80, 0x00),
            BoxColor::LimeGreen => Color::rgb(0x32, 0xCD, 0x32),
            BoxColor::LightGreen => Color::rgb(0x90, 0xEE, 0x90),
            BoxColor::Gold => Color::rgb(0xFF, 0xD7, 0x00),
            BoxColor::PureYellow => Color::rgb(0xFF, 0xFF, 0x00),
            BoxColor::Orange => Color::rgb(0xFF, 0xA5, 0x00),
            BoxColor::PureBlue => Color::rgb(0x00, 0x00, 0xFF),
            BoxColor::DodgerBlue => Color::rgb(0x1E, 0x90, 0xFF),
            BoxColor::LightSkyBlue => Color::rgb(0x87, 0xCE, 0xFA),
        }
    }

    /// Label color with enough contrast against the fill. Only four fills
    /// take white text; everything else defaults to black.
    pub fn text(self) -> Color {
        match self {
            BoxColor::Red | BoxColor::Blue | BoxColor::Black | BoxColor::Magenta => Color::WHITE,
            _ => Color::BLACK,
        }
    }
}

const MIXED: [BoxColor; 8] = [
    BoxColor::Red,
    BoxColor::Blue,
    BoxColor::Yellow,
    BoxColor::NeonGreen,
    BoxColor::Black,
    BoxColor::White,
    BoxColor::Azure,
    BoxColor::Magenta,
];
const GREENS: [BoxColor; 3] = [BoxColor::Green, BoxColor::LimeGreen, BoxColor::LightGreen];
const WARM: [BoxColor; 3] = [BoxColor::Gold, BoxColor::PureYellow, BoxColor::Orange];
const BLUES: [BoxColor; 3] = [
    BoxColor::PureBlue,
    BoxColor::DodgerBlue,
    BoxColor::LightSkyBlue,
];

/// One of the four fixed regions of the outer 2x2 table. Order matches the
/// label-window positions: a page's labels fill quadrants in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::TopRight,
        Quadrant::BottomRight,
    ];

    /// The quadrant's fixed palette, cycled by inner-grid row index.
    pub fn palette(self) -> &'static [BoxColor] {
        match self {
            Quadrant::TopLeft => &MIXED,
            Quadrant::BottomLeft => &GREENS,
            Quadrant::TopRight => &WARM,
            Quadrant::BottomRight => &BLUES,
        }
    }
}
