use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use zip::ZipArchive;

// Fonts checked before falling back to a download. Any face covering
// Latin glyphs is enough for sticker labels.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/usr/share/fonts/gnu-free/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

fn main() {
    // Output font path
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let target_font = out_dir.join("embedded-font.bin");

    // If already exists (incremental build), skip
    if target_font.exists() {
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    // Allow overriding via env: FONT_TTF
    if let Ok(path) = env::var("FONT_TTF") {
        let src = PathBuf::from(path);
        if let Err(e) = fs::copy(&src, &target_font) {
            eprintln!("warning: failed to copy FONT_TTF: {e}");
        } else {
            println!("cargo:rerun-if-env-changed=FONT_TTF");
            return;
        }
    }

    // Try a system font so offline builds still embed a real face.
    for candidate in SYSTEM_FONTS {
        let src = PathBuf::from(candidate);
        if src.exists() && fs::copy(&src, &target_font).is_ok() {
            println!("cargo:rerun-if-changed=build.rs");
            return;
        }
    }

    // Last resort: download the pinned Source Han Sans zip and extract the
    // Regular OTF. We require a real font for deterministic text rendering.
    let zip_url = "https://github.com/adobe-fonts/source-han-sans/releases/download/2.005R/09_SourceHanSansSC.zip";
    let zip_path = out_dir.join("SourceHanSansSC.zip");
    let mut ok = false;
    let status = Command::new("curl")
        .args(["-L", "-f", "-o", zip_path.to_str().unwrap(), zip_url])
        .status();
    if let Ok(st) = status
        && st.success()
    {
        ok = true;
    }
    if !ok {
        let status = Command::new("wget")
            .args(["-O", zip_path.to_str().unwrap(), zip_url])
            .status();
        if let Ok(st) = status
            && st.success()
        {
            ok = true;
        }
    }
    if !ok {
        panic!(
            "No usable font found. Provide FONT_TTF env var, install a system font, or allow downloading {}.",
            zip_url
        );
    }

    // Extract desired OTF from zip
    let mut data = Vec::new();
    {
        let mut f = fs::File::open(&zip_path).expect("zip open failed");
        f.read_to_end(&mut data).expect("zip read failed");
    }
    let reader = std::io::Cursor::new(data);
    let mut zip = ZipArchive::new(reader).expect("zip parse failed");
    let mut extracted = false;
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).unwrap();
        let name = file.name().to_string();
        if name.ends_with("SourceHanSansSC-Regular.otf") {
            let mut buf = Vec::new();
            std::io::copy(&mut file, &mut buf).expect("extract copy failed");
            fs::write(&target_font, &buf).expect("write otf failed");
            extracted = true;
            break;
        }
    }
    if !extracted {
        panic!("Regular OTF not found in zip: expected SourceHanSansSC-Regular.otf");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
