use png::{BitDepth, ColorType, Encoder};

// Shared PNG encoder: RGBA -> PNG bytes (deterministic for same input).
// Export is its own failure domain; an encoding error never invalidates
// the composed surface it came from.
pub fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        {
            let mut writer = enc.write_header()?;
            writer.write_image_data(rgba)?;
        }
        // enc drops here, releasing the &mut buf borrow
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_pixels_encode_to_same_bytes() {
        let rgba: Vec<u8> = (0..4 * 4 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let a = encode_rgba_to_png_bytes(4, 4, &rgba).unwrap();
        let b = encode_rgba_to_png_bytes(4, 4, &rgba).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn wrong_buffer_length_is_an_error() {
        assert!(encode_rgba_to_png_bytes(4, 4, &[0u8; 3]).is_err());
    }
}
