use std::collections::BTreeMap;
use std::env;
use std::fs;

use sticker_press::{Font, PressError, encode_png_deterministic, render_pages};
use tiny_skia::Pixmap;

fn main() -> Result<(), PressError> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: sticker-press <orders.json> <background.png> <out-dir> [font.ttf]");
        std::process::exit(2);
    }
    let orders_path = &args[1];
    let background_path = &args[2];
    let out_dir = &args[3];
    let font_path = args.get(4);

    let txt = fs::read_to_string(orders_path)?;
    let rows: Vec<sticker_core::OrderRow> = serde_json::from_str(&txt)?;

    let background =
        Pixmap::decode_png(&fs::read(background_path)?).map_err(|e| PressError::Background(e.to_string()))?;

    let font_data = match font_path {
        Some(p) => fs::read(p)?,
        None => fonts::FONT_BYTES.to_vec(),
    };
    let font = Font::parse(&font_data).ok_or(PressError::Font)?;

    let pages = render_pages(&rows, &background, &font)?;

    fs::create_dir_all(out_dir)?;
    let mut by_size: BTreeMap<String, usize> = BTreeMap::new();
    for page in &pages {
        let path = format!("{}/sheet-{:03}-{}.png", out_dir, page.page_no, page.order_number);
        encode_png_deterministic(&page.pixmap, &path)?;
        *by_size.entry(page.size.clone()).or_insert(0) += 1;
    }

    println!("wrote {} page(s) to {}", pages.len(), out_dir);
    for (size, count) in &by_size {
        println!("  size {size}: {count} page(s)");
    }
    Ok(())
}
