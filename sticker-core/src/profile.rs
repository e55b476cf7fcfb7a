use crate::order::SizeCategory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Fixed geometry for one size category. Pure data, re-derived per page.
/// All lengths are in page pixels of the background print asset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeProfile {
    pub orientation: Orientation,
    /// Inset of the border rectangle from the page edges.
    pub border_padding: f64,
    /// Base inset used by the outer-table size formulas.
    pub table_padding: f64,
    pub inner_rows: usize,
    pub inner_cols: usize,
    pub box_width: f64,
    pub box_height: f64,
    pub box_margin: f64,
}

impl SizeCategory {
    /// Resolve the category's geometry profile. The constants are the
    /// business rules of the sheet format; unknown categories share the 48
    /// profile. Categories 108, 32 and 24 print landscape.
    pub fn profile(self) -> SizeProfile {
        match self {
            SizeCategory::S108 => SizeProfile {
                orientation: Orientation::Landscape,
                border_padding: 100.0,
                table_padding: 210.0,
                inner_rows: 18,
                inner_cols: 6,
                box_width: 389.8,
                box_height: 70.9,
                box_margin: 30.0,
            },
            SizeCategory::S32 => SizeProfile {
                orientation: Orientation::Landscape,
                border_padding: 0.0,
                table_padding: 290.0,
                inner_rows: 8,
                inner_cols: 4,
                box_width: 590.5,
                box_height: 177.2,
                box_margin: 30.0,
            },
            SizeCategory::S24 => SizeProfile {
                orientation: Orientation::Landscape,
                border_padding: 80.0,
                table_padding: 210.0,
                inner_rows: 6,
                inner_cols: 4,
                box_width: 590.5,
                box_height: 236.2,
                box_margin: 30.0,
            },
            SizeCategory::S48 | SizeCategory::Other => SizeProfile {
                orientation: Orientation::Portrait,
                border_padding: 230.0,
                table_padding: 210.0,
                inner_rows: 16,
                inner_cols: 3,
                box_width: 472.4,
                box_height: 118.11,
                box_margin: 30.0,
            },
        }
    }

    /// Outer 2x2 table size inside a border rectangle of `rect_w` x
    /// `rect_h`. Three categories override the base `2.0 / 2.5 * padding`
    /// subtraction with their own tuned multipliers; these are literal
    /// special cases of the sheet format, kept as written.
    pub fn outer_table_size(self, rect_w: f64, rect_h: f64) -> (f64, f64) {
        let pad = self.profile().table_padding;
        match self {
            SizeCategory::S108 => (rect_w - 2.0 * pad, rect_h - 50.0),
            SizeCategory::S32 => (rect_w - 2.5 * pad, rect_h - 2.0 * pad),
            SizeCategory::S24 => (rect_w - 2.7 * pad, rect_h - 2.5 * pad),
            SizeCategory::S48 | SizeCategory::Other => (rect_w - 2.0 * pad, rect_h - 2.5 * pad),
        }
    }
}
