//! End-to-end tests for the hex format: encoder, decoder and the file tools.
//!
//! Covers:
//! - Pixel and header round-trips (square and non-square, BGR and gray)
//! - Malformed-line robustness
//! - The square dimension fallback (known to be lossy)
//! - Bounds safety for surplus lines

use hexpix::convert::{decode_file, encode_file};
use hexpix::hexfile::{decode_str, encode_to_string, HexHeader};
use hexpix::image_io::{load_image, save_image};
use hexpix::{ChannelMode, DimensionOverride, PixelBuffer};
use std::fs;
use tempfile::TempDir;

/// Deterministic test pattern so every pixel is distinct.
fn pattern(width: usize, height: usize, mode: ChannelMode) -> PixelBuffer {
    let len = width * height * mode.channels();
    let data = (0..len).map(|i| ((i * 37 + 11) % 256) as u8).collect();
    PixelBuffer::from_raw(width, height, mode, data).unwrap()
}

fn decode(text: &str, mode: ChannelMode) -> hexpix::DecodedImage {
    decode_str(text, mode, DimensionOverride::default()).unwrap()
}

fn body_lines(text: &str) -> Vec<&str> {
    let header = HexHeader::parse(&text.lines().collect::<Vec<_>>()).unwrap();
    text.lines().skip(header.data_start).collect()
}

// ==================== Round-trip Tests ====================

#[test]
fn test_roundtrip_bgr_square_and_non_square() {
    for (w, h) in [(4, 4), (5, 3), (1, 7)] {
        let img = pattern(w, h, ChannelMode::Bgr);
        let text = encode_to_string(&img, "p.png");
        let decoded = decode(&text, ChannelMode::Bgr);
        assert!(!decoded.guessed);
        assert_eq!(decoded.image, img, "{}x{}", w, h);
    }
}

#[test]
fn test_roundtrip_gray_square_and_non_square() {
    for (w, h) in [(3, 3), (6, 2)] {
        let img = pattern(w, h, ChannelMode::Gray);
        let decoded = decode(&encode_to_string(&img, "g.png"), ChannelMode::Gray);
        assert_eq!(decoded.image, img, "{}x{}", w, h);
    }
}

#[test]
fn test_header_roundtrip_size() {
    let img = pattern(7, 2, ChannelMode::Bgr);
    let text = encode_to_string(&img, "wide.png");
    let lines: Vec<&str> = text.lines().collect();
    let header = HexHeader::parse(&lines).unwrap();
    assert_eq!(header.dimensions(), Some((7, 2)));
    assert_eq!(header.image.as_deref(), Some("wide.png"));
    assert_eq!(header.format.as_deref(), Some("BGR (3 channels)"));
    assert_eq!(body_lines(&text).len(), 14);
}

#[test]
fn test_two_by_two_scenario() {
    // (R,G,B) per pixel, row-major
    let rgb = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];
    let mut img = PixelBuffer::try_new(2, 2, ChannelMode::Bgr).unwrap();
    for (i, [r, g, b]) in rgb.iter().enumerate() {
        img.set_pixel(i % 2, i / 2, &[*b, *g, *r]);
    }

    let text = encode_to_string(&img, "four.png");
    assert_eq!(body_lines(&text), vec!["FF0000", "00FF00", "0000FF", "FFFFFF"]);

    let decoded = decode_str(
        "FF0000\n00FF00\n0000FF\nFFFFFF\n",
        ChannelMode::Bgr,
        DimensionOverride {
            width: Some(2),
            height: Some(2),
        },
    )
    .unwrap();
    for (i, expected) in rgb.iter().enumerate() {
        assert_eq!(decoded.image.rgb(i % 2, i / 2), Some(*expected));
    }
}

// ==================== Robustness Tests ====================

#[test]
fn test_corrupted_line_does_not_shift_later_pixels() {
    let img = pattern(3, 3, ChannelMode::Bgr);
    let text = encode_to_string(&img, "c.png");

    // Insert a garbage line in the middle of the body
    let mut lines: Vec<String> = text.lines().map(String::from).collect();
    let header = HexHeader::parse(&lines).unwrap();
    lines.insert(header.data_start + 4, "ZZ!!QQ".to_string());
    let corrupted = lines.join("\n");

    let decoded = decode(&corrupted, ChannelMode::Bgr);
    assert_eq!(decoded.skipped, 1);
    assert_eq!(decoded.parsed, 9);
    assert_eq!(decoded.image, img);
}

#[test]
fn test_surplus_lines_parsed_but_not_written() {
    let text = "// Size: 2x1\n\n01\n02\n03\n04\n";
    let decoded = decode(text, ChannelMode::Gray);
    assert_eq!(decoded.image.as_raw(), &[1, 2]);
    assert_eq!(decoded.parsed, 4);
}

#[test]
fn test_size_with_extra_field_decodes_first_two() {
    let decoded = decode("// Size: 2x1x9\n\n01\n02\n", ChannelMode::Gray);
    assert!(!decoded.guessed);
    assert_eq!((decoded.image.width(), decoded.image.height()), (2, 1));
    assert_eq!(decoded.image.as_raw(), &[1, 2]);
}

#[test]
fn test_oversized_header_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let hex = dir.path().join("huge.hex");
    let out = dir.path().join("huge.png");
    fs::write(&hex, format!("// Size: {}x2\n\n000000\n", usize::MAX)).unwrap();

    let result = decode_file(&hex, &out, ChannelMode::Bgr);
    assert!(matches!(result, Err(hexpix::HexError::HeaderParse { .. })));
    assert!(!out.exists());
}

// ==================== Dimension Fallback Tests ====================

#[test]
fn test_fallback_perfect_square() {
    let body: String = (0..9).map(|i| format!("{:02X}\n", i)).collect();
    let decoded = decode(&body, ChannelMode::Gray);
    assert!(decoded.guessed);
    assert_eq!((decoded.image.width(), decoded.image.height()), (3, 3));
    assert_eq!(decoded.image.as_raw(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_fallback_non_square_drops_trailing_pixels() {
    // 6 pixels of a 3x2 image without a header: guessed as 2x2
    let body = "010101\n020202\n030303\n040404\n050505\n060606\n";
    let decoded = decode(body, ChannelMode::Bgr);
    assert!(decoded.guessed);
    assert_eq!((decoded.image.width(), decoded.image.height()), (2, 2));
    assert_eq!(decoded.parsed, 6);
    assert_eq!(decoded.image.rgb(1, 1), Some([4, 4, 4]));
}

// ==================== File Tool Tests ====================

#[test]
fn test_encode_decode_files_bgr() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src.png");
    let hex = dir.path().join("out/dump.hex");
    let restored = dir.path().join("restored.png");

    let img = pattern(5, 3, ChannelMode::Bgr);
    save_image(&img, &src).unwrap();

    let enc = encode_file(&src, &hex, ChannelMode::Bgr).unwrap();
    assert_eq!((enc.width, enc.height, enc.pixel_count()), (5, 3, 15));

    let text = fs::read_to_string(&hex).unwrap();
    assert!(text.starts_with("// Image: src.png\n// Size: 5x3\n"));

    let dec = decode_file(&hex, &restored, ChannelMode::Bgr).unwrap();
    assert_eq!((dec.width, dec.height), (5, 3));
    assert!(!dec.guessed);
    assert_eq!(dec.format.as_deref(), Some("BGR (3 channels)"));
    assert_eq!(load_image(&restored, ChannelMode::Bgr).unwrap(), img);
}

#[test]
fn test_encode_decode_files_gray() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("g.png");
    let hex = dir.path().join("g.hex");
    let restored = dir.path().join("g2.png");

    let img = pattern(4, 6, ChannelMode::Gray);
    save_image(&img, &src).unwrap();

    encode_file(&src, &hex, ChannelMode::Gray).unwrap();
    let text = fs::read_to_string(&hex).unwrap();
    assert!(text.contains("// Format: Grayscale (1 channel)\n\n"));

    decode_file(&hex, &restored, ChannelMode::Gray).unwrap();
    assert_eq!(load_image(&restored, ChannelMode::Gray).unwrap(), img);
}

#[test]
fn test_decode_file_reports_skipped_lines() {
    let dir = TempDir::new().unwrap();
    let hex = dir.path().join("s.hex");
    fs::write(&hex, "// Size: 2x1\n\nAA\nnope\nBB\n").unwrap();

    let dec = decode_file(&hex, &dir.path().join("s.png"), ChannelMode::Gray).unwrap();
    assert_eq!(dec.skipped, 1);
    assert_eq!(dec.parsed, 2);
}
