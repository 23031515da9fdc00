//! Image codec I/O through the `image` crate.
//!
//! - `load_image`: read a PNG/JPEG/BMP into a `PixelBuffer` in the requested mode.
//! - `save_image`: write a `PixelBuffer`, format chosen from the extension.
//! - `ensure_parent_dir`: create the parent directory of an output path.

use image::{GrayImage, RgbImage};
use std::fs;
use std::path::Path;

use crate::error::HexError;
use crate::pixels::{ChannelMode, PixelBuffer};

/// Load an image from disk, converting to 8-bit BGR or gray.
pub fn load_image(path: &Path, mode: ChannelMode) -> Result<PixelBuffer, HexError> {
    if !path.exists() {
        return Err(HexError::FileNotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|source| HexError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = match mode {
        ChannelMode::Bgr => {
            let mut data = img.into_rgb8().into_raw();
            for px in data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            data
        }
        ChannelMode::Gray => img.into_luma8().into_raw(),
    };

    PixelBuffer::from_raw(width, height, mode, data).ok_or_else(|| {
        HexError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("decoded buffer of {} does not match {}x{}", path.display(), width, height),
        ))
    })
}

/// Save a buffer as an image file.
pub fn save_image(image: &PixelBuffer, path: &Path) -> Result<(), HexError> {
    ensure_parent_dir(path)?;
    let (w, h) = (image.width() as u32, image.height() as u32);
    let save_err = |source| HexError::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    match image.mode() {
        ChannelMode::Bgr => {
            let mut out = RgbImage::new(w, h);
            for (dst, src) in out.pixels_mut().zip(image.pixels()) {
                dst.0 = [src[2], src[1], src[0]];
            }
            out.save(path).map_err(save_err)
        }
        ChannelMode::Gray => {
            let mut out = GrayImage::new(w, h);
            for (dst, src) in out.pixels_mut().zip(image.pixels()) {
                dst.0 = [src[0]];
            }
            out.save(path).map_err(save_err)
        }
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<(), HexError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_bgr_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out.png");
        let img = PixelBuffer::from_raw(2, 1, ChannelMode::Bgr, vec![1, 2, 3, 4, 5, 6]).unwrap();

        save_image(&img, &path).unwrap();
        let loaded = load_image(&path, ChannelMode::Bgr).unwrap();
        assert_eq!(loaded, img);
    }

    #[test]
    fn test_save_and_load_gray_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("g.png");
        let img = PixelBuffer::from_raw(1, 3, ChannelMode::Gray, vec![0, 128, 255]).unwrap();

        save_image(&img, &path).unwrap();
        assert_eq!(load_image(&path, ChannelMode::Gray).unwrap(), img);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_image(&dir.path().join("nope.png"), ChannelMode::Bgr);
        assert!(matches!(result, Err(HexError::FileNotFound(_))));
    }

    #[test]
    fn test_load_garbage_is_image_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not an image").unwrap();
        let result = load_image(&path, ChannelMode::Bgr);
        assert!(matches!(result, Err(HexError::ImageLoad { .. })));
    }
}
