//! Rasterizing press: turns order rows plus a background scan into
//! print-ready sheet pixmaps, and writes them out as deterministic PNGs.

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use sticker_core::{OrderRow, compose_page, group_orders, page_size};
use tiny_skia::Pixmap;

pub mod surface;
pub mod text;

pub use surface::PixmapSurface;
pub use text::Font;

#[derive(Debug, thiserror::Error)]
pub enum PressError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid orders json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("background image: {0}")]
    Background(String),
    #[error("font data did not parse")]
    Font,
    #[error("cannot allocate a {0}x{1} page")]
    PageAlloc(u32, u32),
    #[error("png encoding: {0}")]
    Encode(#[from] png::EncodingError),
}

/// One composed sheet, ready to encode.
pub struct RenderedPage {
    pub order_number: String,
    pub size: String,
    pub page_no: usize,
    pub pixmap: Pixmap,
}

/// Render every page for `rows`: rows are grouped by order number, each
/// group is split into windows of up to four labels, and each window
/// becomes one page. Page numbers are global and 1-based, in output order.
pub fn render_pages(
    rows: &[OrderRow],
    background: &Pixmap,
    font: &Font<'_>,
) -> Result<Vec<RenderedPage>, PressError> {
    let background_size = (f64::from(background.width()), f64::from(background.height()));
    let mut pages = Vec::new();
    let mut page_no = 0usize;
    for group in group_orders(rows) {
        for labels in group.label_pages() {
            page_no += 1;
            let (page_w, page_h) = page_size(group.size, background_size);
            let (w, h) = (page_w.round() as u32, page_h.round() as u32);
            let pixmap = Pixmap::new(w, h).ok_or(PressError::PageAlloc(w, h))?;
            let mut surface = PixmapSurface::new(pixmap, font);
            compose_page(
                &mut surface,
                &group,
                labels,
                page_no,
                background,
                background_size,
            );
            pages.push(RenderedPage {
                order_number: group.order_number.clone(),
                size: group.size.to_string(),
                page_no,
                pixmap: surface.into_pixmap(),
            });
        }
    }
    Ok(pages)
}

pub fn encode_png_deterministic(pixmap: &Pixmap, path: &str) -> Result<(), PressError> {
    let file = std::fs::File::create(path)?;
    let mut enc = Encoder::new(file, pixmap.width(), pixmap.height());
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    enc.set_filter(FilterType::NoFilter);
    enc.set_compression(Compression::Default);
    let mut writer = enc.write_header()?;
    writer.write_image_data(pixmap.data())?;
    Ok(())
}
