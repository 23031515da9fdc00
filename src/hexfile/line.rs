//! Single body-line parsing.

use crate::pixels::ChannelMode;

/// Outcome of parsing one body line.
///
/// Only `Pixel` advances the pixel index; `Skip` covers blank lines,
/// comments and malformed values alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineParse {
    /// Samples in storage order (`[b, g, r]` or `[v]`); `len` is the
    /// number of valid bytes.
    Pixel { samples: [u8; 3], len: usize },
    Skip,
}

impl LineParse {
    fn bgr(r: u8, g: u8, b: u8) -> Self {
        LineParse::Pixel {
            samples: [b, g, r],
            len: 3,
        }
    }

    fn gray(v: u8) -> Self {
        LineParse::Pixel {
            samples: [v, 0, 0],
            len: 1,
        }
    }

    /// Valid samples of a `Pixel`, `None` for `Skip`.
    pub fn samples(&self) -> Option<&[u8]> {
        match self {
            LineParse::Pixel { samples, len } => Some(&samples[..*len]),
            LineParse::Skip => None,
        }
    }
}

/// Parse one line of the body in the given mode.
///
/// - BGR: the first six characters are `RRGGBB`; anything after them is
///   ignored.
/// - Gray: the whole line is one hex value that must fit in a byte.
///   `0x1F` and `1_F` are accepted.
pub fn parse_line(line: &str, mode: ChannelMode) -> LineParse {
    let line = line.trim();
    if super::header::is_ignorable(line) {
        return LineParse::Skip;
    }

    match mode {
        ChannelMode::Bgr => {
            let Some(digits) = line.as_bytes().get(..6) else {
                return LineParse::Skip;
            };
            match hex::decode(digits) {
                Ok(rgb) => LineParse::bgr(rgb[0], rgb[1], rgb[2]),
                Err(_) => LineParse::Skip,
            }
        }
        ChannelMode::Gray => match parse_gray(line) {
            Some(v) => LineParse::gray(v),
            None => LineParse::Skip,
        },
    }
}

/// One base-16 byte, with an optional `0x` prefix and single `_` between
/// digits.
fn parse_gray(line: &str) -> Option<u8> {
    let digits = line
        .strip_prefix("0x")
        .or_else(|| line.strip_prefix("0X"))
        .unwrap_or(line);
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit() || b == b'_') {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    u8::from_str_radix(&digits, 16).ok()
}

/// Serialize one pixel (storage order) as an uppercase hex line body.
/// BGR samples are written R,G,B.
pub fn format_pixel(samples: &[u8], mode: ChannelMode) -> String {
    match mode {
        ChannelMode::Bgr => hex::encode_upper([samples[2], samples[1], samples[0]]),
        ChannelMode::Gray => hex::encode_upper([samples[0]]),
    }
}
