//! Pixel buffer -> hex text.

use std::io::Write;

use super::header::format_header;
use super::line::format_pixel;
use crate::pixels::PixelBuffer;

/// Write the header and one line per pixel, row-major.
pub fn write_hex<W: Write>(out: &mut W, image: &PixelBuffer, image_name: &str) -> std::io::Result<()> {
    let mode = image.mode();
    out.write_all(format_header(image_name, image.width(), image.height(), mode).as_bytes())?;
    for px in image.pixels() {
        out.write_all(format_pixel(px, mode).as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Encode into an in-memory string.
pub fn encode_to_string(image: &PixelBuffer, image_name: &str) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_hex(&mut buf, image, image_name);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::ChannelMode;

    #[test]
    fn test_encode_gray_body() {
        let img = PixelBuffer::from_raw(2, 1, ChannelMode::Gray, vec![0x00, 0xFE]).unwrap();
        let text = encode_to_string(&img, "g.png");
        assert!(text.ends_with("\n\n00\nFE\n"));
    }

    #[test]
    fn test_encode_line_count_matches_pixels() {
        let img = PixelBuffer::try_new(3, 5, ChannelMode::Bgr).unwrap();
        let text = encode_to_string(&img, "x");
        let body: Vec<&str> = text.split("\n\n").nth(1).unwrap().lines().collect();
        assert_eq!(body.len(), 15);
        assert!(body.iter().all(|l| *l == "000000"));
    }
}
