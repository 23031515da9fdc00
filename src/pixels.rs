//! In-memory pixel storage shared by the encoder, decoder and viewer.
//!
//! `PixelBuffer` owns a tightly packed, row-major grid of samples. Color
//! pixels are stored as three bytes in **B, G, R** order (the usual
//! computer-vision convention); gray pixels are a single byte. The buffer
//! knows nothing about the `image` crate, see `image_io` for the conversions.

use std::fmt;

/// Channel layout of a pixel buffer and of a hex file body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelMode {
    /// Three channels, stored B,G,R in memory, written R,G,B on disk.
    #[default]
    Bgr,
    /// One intensity channel.
    Gray,
}

impl ChannelMode {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            ChannelMode::Bgr => 3,
            ChannelMode::Gray => 1,
        }
    }

    /// Text written to the `// Format:` header line.
    pub fn description(self) -> &'static str {
        match self {
            ChannelMode::Bgr => "BGR (3 channels)",
            ChannelMode::Gray => "Grayscale (1 channel)",
        }
    }

    /// Short lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ChannelMode::Bgr => "bgr",
            ChannelMode::Gray => "gray",
        }
    }

    /// Parse a mode name (`bgr` or `gray`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bgr" => Some(ChannelMode::Bgr),
            "gray" | "grey" => Some(ChannelMode::Gray),
            _ => None,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned width x height pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    mode: ChannelMode,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Number of samples a `width` x `height` buffer holds, or `None` when
    /// the product doesn't fit in `usize`.
    pub fn sample_count(width: usize, height: usize, mode: ChannelMode) -> Option<usize> {
        width.checked_mul(height)?.checked_mul(mode.channels())
    }

    /// Create an all-zero (black) buffer. Returns `None` if the dimensions
    /// overflow.
    pub fn try_new(width: usize, height: usize, mode: ChannelMode) -> Option<Self> {
        let len = Self::sample_count(width, height, mode)?;
        Some(Self {
            width,
            height,
            mode,
            data: vec![0; len],
        })
    }

    /// Wrap raw samples. Returns `None` if the length doesn't match the
    /// dimensions.
    pub fn from_raw(width: usize, height: usize, mode: ChannelMode, data: Vec<u8>) -> Option<Self> {
        if Self::sample_count(width, height, mode)? != data.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            mode,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mode(&self) -> ChannelMode {
        self.mode
    }

    /// Raw samples in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) * self.mode.channels())
        } else {
            None
        }
    }

    /// Samples of one pixel in storage order, or `None` when out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let start = self.offset(x, y)?;
        Some(&self.data[start..start + self.mode.channels()])
    }

    /// Overwrite one pixel with samples in storage order. Out-of-bounds
    /// writes and wrong-length samples are ignored and reported as `false`.
    pub fn set_pixel(&mut self, x: usize, y: usize, samples: &[u8]) -> bool {
        let channels = self.mode.channels();
        if samples.len() != channels {
            return false;
        }
        match self.offset(x, y) {
            Some(start) => {
                self.data[start..start + channels].copy_from_slice(samples);
                true
            }
            None => false,
        }
    }

    /// Pixel as `[r, g, b]`; gray samples are replicated.
    pub fn rgb(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        let px = self.pixel(x, y)?;
        Some(match self.mode {
            ChannelMode::Bgr => [px[2], px[1], px[0]],
            ChannelMode::Gray => [px[0], px[0], px[0]],
        })
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.mode.channels())
    }
}
