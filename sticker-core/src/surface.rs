/// Basic two dimensional point used for geometry operations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

/// Axis-aligned rectangle, top-left anchored, y-down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// True if `other` lies entirely inside `self` (edges may touch).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Opaque RGB color as handed to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Vertical anchor for drawn text. `Middle` centers the em box on the
/// given y; `Alphabetic` puts the baseline on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

/// Drawing capability consumed by the layout engine. The engine issues only
/// these primitives and is agnostic to the rasterization backend; `Image`
/// is the backend's background-asset handle.
pub trait Surface {
    type Image;

    /// Width of `text` when rendered at `font_px`.
    fn measure_text_width(&self, text: &str, font_px: f64) -> f64;

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color);

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color);

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Composite `image` into `dest`, rotated by `rotation_deg` about the
    /// destination rectangle's center.
    fn draw_image(&mut self, image: &Self::Image, dest: Rect, rotation_deg: f64);

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
        font_px: f64,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_containment_allows_shared_edges() {
        let outer = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(outer.contains(&Rect::new(10.0, 10.0, 100.0, 50.0)));
        assert!(outer.contains(&Rect::new(20.0, 15.0, 30.0, 30.0)));
        assert!(!outer.contains(&Rect::new(20.0, 15.0, 95.0, 30.0)));
        assert!(!outer.contains(&Rect::new(5.0, 15.0, 30.0, 30.0)));
    }
}
