use crate::color::{BoxColor, Quadrant};
use crate::order::{OrderGroup, SizeCategory};
use crate::profile::{Orientation, SizeProfile};
use crate::surface::{Color, Point, Rect, Surface, TextAlign, TextBaseline};

/// Radius of the corner registration circles used for print alignment.
pub const REGISTRATION_MARK_RADIUS: f64 = 80.0;
/// Corner radius shared by every sticker box.
pub const BOX_CORNER_RADIUS: f64 = 30.0;

const BORDER_STROKE_WIDTH: f64 = 5.0;
const TABLE_STROKE_WIDTH: f64 = 1.0;
const BOX_STROKE_WIDTH: f64 = 1.0;
/// Each quadrant's grid origin sits this far inside its table cell.
const QUADRANT_INSET: f64 = 10.0;
/// Horizontal slack subtracted from the box width before fitting text.
const TEXT_FIT_INSET: f64 = 50.0;
const STANDARD_MAX_FONT: u32 = 70;
const WORKSHEET_MAX_FONT: u32 = 50;
const WORKSHEET_TEXT_MARGIN: f64 = 20.0;
const WORKSHEET_PROMPT_FONT: f64 = 40.0;
const WORKSHEET_CLASS_PROMPT: &str = "Class    : _________________";
const WORKSHEET_SUBJECT_PROMPT: &str = "Subject : _________________";
const SUMMARY_FONT: f64 = 20.0;

/// Page dimensions for a category over a background of natural size
/// `(w, h)`: the natural size, swapped when the category prints landscape.
pub fn page_size(category: SizeCategory, background_size: (f64, f64)) -> (f64, f64) {
    let (w, h) = background_size;
    match category.profile().orientation {
        Orientation::Portrait => (w, h),
        Orientation::Landscape => (h, w),
    }
}

/// Largest integer font size in `[0, max_px]` at which `text` measures no
/// wider than `avail_width`, found by decrementing from the maximum. 0 is a
/// valid degenerate result (backends draw nothing at size 0); the text is
/// shrunk, never truncated.
pub fn fit_text<S: Surface + ?Sized>(surface: &S, text: &str, avail_width: f64, max_px: u32) -> u32 {
    (1..=max_px)
        .rev()
        .find(|&px| surface.measure_text_width(text, f64::from(px)) <= avail_width)
        .unwrap_or(0)
}

/// Draw one rounded, filled, outlined sticker box with its fitted label.
fn draw_box<S: Surface>(
    surface: &mut S,
    x: f64,
    y: f64,
    fill: BoxColor,
    label: &str,
    profile: &SizeProfile,
    category: SizeCategory,
) {
    let rect = Rect::new(x, y, profile.box_width, profile.box_height);
    surface.fill_rounded_rect(rect, BOX_CORNER_RADIUS, fill.fill());
    surface.stroke_rounded_rect(rect, BOX_CORNER_RADIUS, BOX_STROKE_WIDTH, Color::BLACK);

    let avail = profile.box_width - TEXT_FIT_INSET;
    let text_color = fill.text();
    if category == SizeCategory::S24 {
        // Worksheet variant: left-aligned label on the top quarter line,
        // then two fixed-size class/subject prompts below it.
        let px = fit_text(surface, label, avail, WORKSHEET_MAX_FONT);
        surface.draw_text(
            label,
            x + WORKSHEET_TEXT_MARGIN,
            y + profile.box_height / 4.0,
            TextAlign::Left,
            TextBaseline::Middle,
            text_color,
            f64::from(px),
        );
        surface.draw_text(
            WORKSHEET_CLASS_PROMPT,
            x + WORKSHEET_TEXT_MARGIN,
            y + profile.box_height / 2.0,
            TextAlign::Left,
            TextBaseline::Middle,
            text_color,
            WORKSHEET_PROMPT_FONT,
        );
        surface.draw_text(
            WORKSHEET_SUBJECT_PROMPT,
            x + WORKSHEET_TEXT_MARGIN,
            y + 3.0 * profile.box_height / 4.0,
            TextAlign::Left,
            TextBaseline::Middle,
            text_color,
            WORKSHEET_PROMPT_FONT,
        );
    } else {
        let px = fit_text(surface, label, avail, STANDARD_MAX_FONT);
        surface.draw_text(
            label,
            x + profile.box_width / 2.0,
            y + profile.box_height / 2.0,
            TextAlign::Center,
            TextBaseline::Middle,
            text_color,
            f64::from(px),
        );
    }
}

/// Fill one quadrant with its inner grid. Cells advance row-major on a
/// pitch of box size + margin, offset by half a margin; the fill color
/// cycles the quadrant palette by row, so a whole row shares one color.
fn draw_quadrant_grid<S: Surface>(
    surface: &mut S,
    origin: Point,
    label: &str,
    palette: &[BoxColor],
    profile: &SizeProfile,
    category: SizeCategory,
) {
    let pitch_x = profile.box_width + profile.box_margin;
    let pitch_y = profile.box_height + profile.box_margin;
    for row in 0..profile.inner_rows {
        let fill = palette[row % palette.len()];
        for col in 0..profile.inner_cols {
            let x = origin.x + col as f64 * pitch_x + profile.box_margin / 2.0;
            let y = origin.y + row as f64 * pitch_y + profile.box_margin / 2.0;
            draw_box(surface, x, y, fill, label, profile, category);
        }
    }
}

/// Compose one page for `group` onto `surface`: background (rotated for
/// landscape categories), summary header, registration marks, border,
/// outer 2x2 table, and one inner grid per labeled quadrant.
///
/// `labels` is this page's window of up to four sticker labels, mapped by
/// position to the quadrants in [`Quadrant::ALL`] order; quadrants beyond
/// the window are left empty. `surface` must already have the dimensions
/// given by [`page_size`] for the group's category and
/// `background_size` (the asset's natural width and height). `page_no` is
/// the 1-based page number stamped into the summary header.
///
/// Pure with respect to its inputs: identical group, labels, background and
/// page number produce an identical operation sequence.
pub fn compose_page<S: Surface>(
    surface: &mut S,
    group: &OrderGroup,
    labels: &[String],
    page_no: usize,
    background: &S::Image,
    background_size: (f64, f64),
) {
    let profile = group.size.profile();
    let (page_w, page_h) = page_size(group.size, background_size);
    let (bg_w, bg_h) = background_size;

    match profile.orientation {
        Orientation::Portrait => {
            surface.draw_image(background, Rect::new(0.0, 0.0, bg_w, bg_h), 0.0);
        }
        Orientation::Landscape => {
            // Natural-size destination centered on the swapped page, spun a
            // quarter turn about its center.
            let dest = Rect::new((page_w - bg_w) / 2.0, (page_h - bg_h) / 2.0, bg_w, bg_h);
            surface.draw_image(background, dest, 90.0);
        }
    }

    let summary = format!(
        "Data Image {} / Buyer Name = {} / Type = {} / Size = {} / Order Number = {}",
        page_no, group.buyer_name, group.kind, group.size, group.order_number
    );
    surface.draw_text(
        &summary,
        50.0,
        50.0,
        TextAlign::Left,
        TextBaseline::Alphabetic,
        Color::BLACK,
        SUMMARY_FONT,
    );

    let r = REGISTRATION_MARK_RADIUS;
    for (cx, cy) in [
        (2.0 * r, 2.0 * r),
        (page_w - 2.0 * r, 2.0 * r),
        (2.0 * r, page_h - 2.0 * r),
        (page_w - 2.0 * r, page_h - 2.0 * r),
    ] {
        surface.fill_circle(Point { x: cx, y: cy }, r, Color::BLACK);
    }

    let pad = profile.border_padding;
    let border = Rect::new(pad, pad, page_w - 2.0 * pad, page_h - 2.0 * pad);
    surface.stroke_rect(border, BORDER_STROKE_WIDTH, Color::BLACK);

    let (table_w, table_h) = group.size.outer_table_size(border.w, border.h);
    let table = Rect::new(
        border.x + (border.w - table_w) / 2.0,
        border.y + (border.h - table_h) / 2.0,
        table_w,
        table_h,
    );
    let cell_w = table_w / 2.0;
    let cell_h = table_h / 2.0;
    surface.stroke_line(
        Point { x: table.x, y: table.y + cell_h },
        Point { x: table.right(), y: table.y + cell_h },
        TABLE_STROKE_WIDTH,
        Color::BLACK,
    );
    surface.stroke_line(
        Point { x: table.x + cell_w, y: table.y },
        Point { x: table.x + cell_w, y: table.bottom() },
        TABLE_STROKE_WIDTH,
        Color::BLACK,
    );
    surface.stroke_rect(table, TABLE_STROKE_WIDTH, Color::BLACK);

    // One label per quadrant; a short window leaves trailing quadrants empty.
    for (quadrant, label) in Quadrant::ALL.iter().zip(labels.iter()) {
        let (qx, qy) = match quadrant {
            Quadrant::TopLeft => (table.x, table.y),
            Quadrant::BottomLeft => (table.x, table.y + cell_h),
            Quadrant::TopRight => (table.x + cell_w, table.y),
            Quadrant::BottomRight => (table.x + cell_w, table.y + cell_h),
        };
        let origin = Point {
            x: qx + QUADRANT_INSET,
            y: qy + QUADRANT_INSET,
        };
        draw_quadrant_grid(
            surface,
            origin,
            label,
            quadrant.palette(),
            &profile,
            group.size,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Measures like a monospace face half as wide as tall; draws nothing.
    struct MeasureStub;

    impl Surface for MeasureStub {
        type Image = ();

        fn measure_text_width(&self, text: &str, font_px: f64) -> f64 {
            text.chars().count() as f64 * font_px * 0.5
        }

        fn fill_rounded_rect(&mut self, _: Rect, _: f64, _: Color) {}
        fn stroke_rounded_rect(&mut self, _: Rect, _: f64, _: f64, _: Color) {}
        fn stroke_rect(&mut self, _: Rect, _: f64, _: Color) {}
        fn stroke_line(&mut self, _: Point, _: Point, _: f64, _: Color) {}
        fn fill_circle(&mut self, _: Point, _: f64, _: Color) {}
        fn draw_image(&mut self, _: &(), _: Rect, _: f64) {}
        fn draw_text(&mut self, _: &str, _: f64, _: f64, _: TextAlign, _: TextBaseline, _: Color, _: f64) {}
    }

    #[test]
    fn fit_returns_largest_size_that_fits() {
        let s = MeasureStub;
        // "Cat" at px measures 1.5*px; 1.5*70 = 105 <= 422.4, fits at max.
        assert_eq!(fit_text(&s, "Cat", 422.4, 70), 70);
        // Ten chars measure 5*px; largest px with 5*px <= 200 is 40.
        assert_eq!(fit_text(&s, "abcdefghij", 200.0, 70), 40);
    }

    #[test]
    fn fit_never_exceeds_maximum() {
        let s = MeasureStub;
        assert_eq!(fit_text(&s, "x", 1000.0, 50), 50);
        assert_eq!(fit_text(&s, "", 0.0, 70), 70);
    }

    #[test]
    fn fit_degenerates_to_zero_when_nothing_fits() {
        let s = MeasureStub;
        // One char at px=1 measures 0.5 > 0.2, so even size 1 overflows.
        assert_eq!(fit_text(&s, "overflowing label", 0.2, 70), 0);
    }

    #[test]
    fn fit_is_monotonic_in_available_width() {
        let s = MeasureStub;
        let mut last = 0;
        for w in [10.0, 50.0, 100.0, 200.0, 400.0] {
            let px = fit_text(&s, "Sticker Name", w, 70);
            assert!(px >= last);
            last = px;
        }
    }

    #[test]
    fn page_size_swaps_for_landscape_categories() {
        let natural = (3900.0, 5760.0);
        assert_eq!(page_size(SizeCategory::S48, natural), (3900.0, 5760.0));
        assert_eq!(page_size(SizeCategory::Other, natural), (3900.0, 5760.0));
        assert_eq!(page_size(SizeCategory::S108, natural), (5760.0, 3900.0));
        assert_eq!(page_size(SizeCategory::S32, natural), (5760.0, 3900.0));
        assert_eq!(page_size(SizeCategory::S24, natural), (5760.0, 3900.0));
    }
}
