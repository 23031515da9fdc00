//! Header block: leading `//` comment lines terminated by the first blank line.

use crate::error::HexError;
use crate::pixels::ChannelMode;

/// Comment marker for header lines (and for comments inside the body).
pub const COMMENT_PREFIX: &str = "//";

const IMAGE_KEY: &str = "// Image:";
const SIZE_KEY: &str = "// Size:";
const FORMAT_KEY: &str = "// Format:";

/// Metadata read from the header of a hex file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexHeader {
    /// Name of the source image, if recorded.
    pub image: Option<String>,
    /// Width from `// Size:`.
    pub width: Option<usize>,
    /// Height from `// Size:`.
    pub height: Option<usize>,
    /// Free-text `// Format:` value. Informational only.
    pub format: Option<String>,
    /// Index of the first body line.
    pub data_start: usize,
}

impl HexHeader {
    /// Scan `lines` from the top up to the first blank line.
    ///
    /// The first occurrence of each known key wins. If no blank line exists
    /// the body starts at line 0 and every line is scanned for keys.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, HexError> {
        let mut header = HexHeader::default();

        for (i, raw) in lines.iter().enumerate() {
            let line = raw.as_ref().trim();

            if line.is_empty() {
                header.data_start = i + 1;
                break;
            }

            if let Some(value) = line.strip_prefix(SIZE_KEY) {
                if header.width.is_none() {
                    let (w, h) = parse_size(value).ok_or_else(|| HexError::HeaderParse {
                        line: line.to_string(),
                    })?;
                    header.width = Some(w);
                    header.height = Some(h);
                }
            } else if let Some(value) = line.strip_prefix(FORMAT_KEY) {
                header.format.get_or_insert_with(|| value.trim().to_string());
            } else if let Some(value) = line.strip_prefix(IMAGE_KEY) {
                header.image.get_or_insert_with(|| value.trim().to_string());
            }
        }

        Ok(header)
    }

    /// Both dimensions, if present and non-zero.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            _ => None,
        }
    }
}

/// Parse `"<w>x<h>"`, tolerating surrounding whitespace. Fields after the
/// second are ignored.
fn parse_size(value: &str) -> Option<(usize, usize)> {
    let mut fields = value.trim().split('x');
    let w = fields.next()?.trim().parse().ok()?;
    let h = fields.next()?.trim().parse().ok()?;
    Some((w, h))
}

/// Header text written by the encoder, including the terminating blank line.
pub fn format_header(image_name: &str, width: usize, height: usize, mode: ChannelMode) -> String {
    format!(
        "{IMAGE_KEY} {image_name}\n{SIZE_KEY} {width}x{height}\n{FORMAT_KEY} {}\n\n",
        mode.description()
    )
}

/// True for lines that carry no pixel data.
pub fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(COMMENT_PREFIX)
}
