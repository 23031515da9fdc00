//! The hex pixel-dump text format.
//!
//! ```text
//! // Image: <original filename>
//! // Size: <width>x<height>
//! // Format: <description>
//!
//! RRGGBB      (bgr mode, one line per pixel)
//! VV          (gray mode)
//! ```

mod decode;
mod encode;
mod header;
mod line;

pub use decode::{
    decode_lines, decode_str, guess_square_side, resolve_dimensions, DecodedImage,
    DimensionOverride,
};
pub use encode::{encode_to_string, write_hex};
pub use header::{format_header, is_ignorable, HexHeader, COMMENT_PREFIX};
pub use line::{format_pixel, parse_line, LineParse};
