use tiny_skia::{Path, PathBuilder};
use ttf_parser::{Face, OutlineBuilder};

/// A parsed font face used for both text measurement and glyph rendering.
/// Widths are sums of horizontal glyph advances scaled by
/// `font_px / units_per_em`, which matches what the rendered outlines
/// occupy.
pub struct Font<'a> {
    face: Face<'a>,
}

impl<'a> Font<'a> {
    pub fn parse(data: &'a [u8]) -> Option<Self> {
        Face::parse(data, 0).ok().map(|face| Font { face })
    }

    fn scale(&self, px: f64) -> f64 {
        px / f64::from(self.face.units_per_em())
    }

    /// Width of `text` at `px`. Characters without a glyph advance nothing.
    pub fn measure(&self, text: &str, px: f64) -> f64 {
        let mut advance = 0.0;
        for ch in text.chars() {
            let adv = self
                .face
                .glyph_index(ch)
                .and_then(|g| self.face.glyph_hor_advance(g))
                .unwrap_or(0);
            advance += f64::from(adv);
        }
        advance * self.scale(px)
    }

    /// Offset from a middle-of-em anchor down to the baseline, matching a
    /// canvas "middle" text baseline.
    pub fn middle_baseline_offset(&self, px: f64) -> f64 {
        f64::from(self.face.ascender() + self.face.descender()) / 2.0 * self.scale(px)
    }

    /// Outline `text` as one path, baseline starting at `(x, y)` in y-down
    /// page space. `None` when nothing produced an outline (e.g. spaces).
    pub fn outline(&self, text: &str, px: f64, x: f64, y: f64) -> Option<Path> {
        let scale = self.scale(px);
        let mut pen_x = x;
        let mut pb = PathBuilder::new();
        for ch in text.chars() {
            if let Some(glyph) = self.face.glyph_index(ch) {
                let mut sink = GlyphSink {
                    pb: &mut pb,
                    scale: scale as f32,
                    dx: pen_x as f32,
                    dy: y as f32,
                };
                self.face.outline_glyph(glyph, &mut sink);
                pen_x += f64::from(self.face.glyph_hor_advance(glyph).unwrap_or(0)) * scale;
            }
        }
        pb.finish()
    }
}

/// Feeds glyph outlines into a tiny-skia path builder, flipping from the
/// font's y-up coordinates into page space.
struct GlyphSink<'a> {
    pb: &'a mut PathBuilder,
    scale: f32,
    dx: f32,
    dy: f32,
}

impl GlyphSink<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.dx + x * self.scale, self.dy - y * self.scale)
    }
}

impl OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.pb.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.pb.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> Font<'static> {
        Font::parse(fonts::FONT_BYTES).expect("embedded font parses")
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(font().measure("", 40.0), 0.0);
    }

    #[test]
    fn measurement_scales_linearly_with_size() {
        let f = font();
        let at_40 = f.measure("Sticker", 40.0);
        let at_80 = f.measure("Sticker", 80.0);
        assert!(at_40 > 0.0);
        assert!((at_80 - 2.0 * at_40).abs() < 1e-6);
    }

    #[test]
    fn longer_text_measures_wider() {
        let f = font();
        assert!(f.measure("abcabc", 40.0) > f.measure("abc", 40.0));
    }

    #[test]
    fn outline_produces_a_path_for_visible_text() {
        let f = font();
        assert!(f.outline("Cat", 50.0, 0.0, 100.0).is_some());
        // A lone space advances but outlines nothing.
        assert!(f.outline(" ", 50.0, 0.0, 100.0).is_none());
    }
}
