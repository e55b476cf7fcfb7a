/// Font embedded at build time. `build.rs` resolves a real face from the
/// `FONT_TTF` env var, a known system path, or a pinned download.
pub static FONT_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/embedded-font.bin"));
