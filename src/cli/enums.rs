//! CLI enum types.

use clap::ValueEnum;

use crate::pixels::ChannelMode;

/// Pixel data layout selected with `--mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Three channels, `RRGGBB` per line
    #[default]
    Bgr,
    /// One channel, `VV` per line
    Gray,
}

impl From<Mode> for ChannelMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Bgr => ChannelMode::Bgr,
            Mode::Gray => ChannelMode::Gray,
        }
    }
}
