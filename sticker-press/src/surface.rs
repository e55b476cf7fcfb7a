use sticker_core::{Color, Point, Rect, Surface, TextAlign, TextBaseline};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use crate::text::Font;

/// Cubic Bezier approximation factor for a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Drawing surface backed by a `tiny_skia::Pixmap`. One instance is one
/// page; the composed pixmap is taken out with [`PixmapSurface::into_pixmap`].
pub struct PixmapSurface<'f> {
    pixmap: Pixmap,
    font: &'f Font<'f>,
}

impl<'f> PixmapSurface<'f> {
    pub fn new(pixmap: Pixmap, font: &'f Font<'f>) -> Self {
        PixmapSurface { pixmap, font }
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn fill(&mut self, path: &Path, color: Color) {
        self.pixmap.fill_path(
            path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke(&mut self, path: &Path, width: f64, color: Color) {
        let stroke = Stroke {
            width: width as f32,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint_for(color), &stroke, Transform::identity(), None);
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 0xFF);
    paint.anti_alias = true;
    paint
}

/// Clockwise rounded rectangle with cubic corners, radius clamped to the
/// half extents.
fn rounded_rect_path(rect: Rect, radius: f64) -> Option<Path> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return None;
    }
    let r = radius.min(rect.w / 2.0).min(rect.h / 2.0).max(0.0);
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to((left + r) as f32, top as f32);
    pb.line_to((right - r) as f32, top as f32);
    pb.cubic_to(
        (right - r + k) as f32,
        top as f32,
        right as f32,
        (top + r - k) as f32,
        right as f32,
        (top + r) as f32,
    );
    pb.line_to(right as f32, (bottom - r) as f32);
    pb.cubic_to(
        right as f32,
        (bottom - r + k) as f32,
        (right - r + k) as f32,
        bottom as f32,
        (right - r) as f32,
        bottom as f32,
    );
    pb.line_to((left + r) as f32, bottom as f32);
    pb.cubic_to(
        (left + r - k) as f32,
        bottom as f32,
        left as f32,
        (bottom - r + k) as f32,
        left as f32,
        (bottom - r) as f32,
    );
    pb.line_to(left as f32, (top + r) as f32);
    pb.cubic_to(
        left as f32,
        (top + r - k) as f32,
        (left + r - k) as f32,
        top as f32,
        (left + r) as f32,
        top as f32,
    );
    pb.close();
    pb.finish()
}

fn rect_path(rect: Rect) -> Option<Path> {
    tiny_skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
        .map(PathBuilder::from_rect)
}

impl Surface for PixmapSurface<'_> {
    type Image = Pixmap;

    fn measure_text_width(&self, text: &str, font_px: f64) -> f64 {
        if font_px <= 0.0 {
            return 0.0;
        }
        self.font.measure(text, font_px)
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            self.fill(&path, color);
        }
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, width: f64, color: Color) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            self.stroke(&path, width, color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Color) {
        if let Some(path) = rect_path(rect) {
            self.stroke(&path, width, color);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            self.stroke(&path, width, color);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        let mut pb = PathBuilder::new();
        pb.push_circle(center.x as f32, center.y as f32, radius as f32);
        if let Some(path) = pb.finish() {
            self.fill(&path, color);
        }
    }

    fn draw_image(&mut self, image: &Pixmap, dest: Rect, rotation_deg: f64) {
        if image.width() == 0 || image.height() == 0 {
            return;
        }
        let sx = (dest.w / f64::from(image.width())) as f32;
        let sy = (dest.h / f64::from(image.height())) as f32;
        let mut transform =
            Transform::from_scale(sx, sy).post_translate(dest.x as f32, dest.y as f32);
        if rotation_deg != 0.0 {
            let cx = (dest.x + dest.w / 2.0) as f32;
            let cy = (dest.y + dest.h / 2.0) as f32;
            transform = transform.post_concat(Transform::from_rotate_at(rotation_deg as f32, cx, cy));
        }
        self.pixmap
            .draw_pixmap(0, 0, image.as_ref(), &PixmapPaint::default(), transform, None);
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color,
        font_px: f64,
    ) {
        // Size 0 is the fitter's degenerate result: draw nothing.
        if font_px <= 0.0 || text.is_empty() {
            return;
        }
        let start_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.font.measure(text, font_px) / 2.0,
        };
        let baseline_y = match baseline {
            TextBaseline::Alphabetic => y,
            TextBaseline::Middle => y + self.font.middle_baseline_offset(font_px),
        };
        if let Some(path) = self.font.outline(text, font_px, start_x, baseline_y) {
            self.fill(&path, color);
        }
    }
}
