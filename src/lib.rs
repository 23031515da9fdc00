//! hexpix library crate.
//!
//! Converts raster images to a line-per-pixel hexadecimal text format and
//! back, and watches such files in a terminal viewer.
//!
//! ```no_run
//! use hexpix::{convert, ChannelMode};
//! use std::path::Path;
//!
//! let summary = convert::encode_file(Path::new("in.png"), Path::new("in.hex"), ChannelMode::Bgr)?;
//! println!("{}x{}", summary.width, summary.height);
//! # Ok::<(), hexpix::HexError>(())
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod hexfile;
pub mod image_io;
pub mod input;
pub mod pixels;
pub mod renderer;
pub mod terminal;
pub mod viewer;

pub use error::HexError;
pub use hexfile::{DecodedImage, DimensionOverride, HexHeader, LineParse};
pub use pixels::{ChannelMode, PixelBuffer};
pub use viewer::{Display, RefreshMode, ViewerOptions, ViewerSession, ViewerState};
