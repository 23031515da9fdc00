//! ANSI rendering of a pixel buffer for the terminal viewer.
//!
//! Each character cell shows two vertically stacked pixels: the upper one as
//! the foreground color of `▀`, the lower one as the background color. The
//! image is scaled (nearest neighbour) to fit the available cells while
//! keeping its aspect ratio, and centered.

use crate::pixels::PixelBuffer;

/// Upper half block.
const HALF_BLOCK: char = '▀';

/// Output size in pixels for an image drawn into `cols` x `rows` cells.
///
/// Each row holds two pixels. Small images are scaled up to fill the area.
pub fn fit_dimensions(width: usize, height: usize, cols: u16, rows: u16) -> (usize, usize) {
    let avail_w = cols as usize;
    let avail_h = rows as usize * 2;
    if width == 0 || height == 0 || avail_w == 0 || avail_h == 0 {
        return (0, 0);
    }

    let scale = (avail_w as f64 / width as f64).min(avail_h as f64 / height as f64);
    let out_w = ((width as f64 * scale) as usize).clamp(1, avail_w);
    let out_h = ((height as f64 * scale) as usize).clamp(1, avail_h);
    (out_w, out_h)
}

/// Build the escape sequence that clears the screen and draws `image` in
/// the top `rows` rows of a `cols`-wide terminal.
pub fn compose_frame(image: Option<&PixelBuffer>, cols: u16, rows: u16) -> String {
    let mut output = String::new();
    output.push_str("\x1b[0m\x1b[2J");

    let Some(image) = image else {
        return output;
    };
    let (out_w, out_h) = fit_dimensions(image.width(), image.height(), cols, rows);
    if out_w == 0 || out_h == 0 {
        return output;
    }

    let cell_rows = out_h.div_ceil(2);
    let x0 = (cols as usize - out_w) / 2;
    let y0 = (rows as usize).saturating_sub(cell_rows) / 2;

    let sample = |ox: usize, oy: usize| -> [u8; 3] {
        let sx = ox * image.width() / out_w;
        let sy = oy * image.height() / out_h;
        image.rgb(sx, sy).unwrap_or([0, 0, 0])
    };

    for cy in 0..cell_rows {
        // 1-based ANSI coordinates
        output.push_str(&format!("\x1b[{};{}H", y0 + cy + 1, x0 + 1));
        for cx in 0..out_w {
            let [r, g, b] = sample(cx, cy * 2);
            output.push_str(&format!("\x1b[38;2;{};{};{}m", r, g, b));
            if cy * 2 + 1 < out_h {
                let [r, g, b] = sample(cx, cy * 2 + 1);
                output.push_str(&format!("\x1b[48;2;{};{};{}m", r, g, b));
            } else {
                output.push_str("\x1b[49m");
            }
            output.push(HALF_BLOCK);
        }
    }

    output.push_str("\x1b[0m");
    output
}

/// Draw one line of text on `row` (1-based) in inverted colors, padded or
/// truncated to `cols` characters.
pub fn compose_status_line(text: &str, cols: u16, row: u16) -> String {
    let width = cols as usize;
    let mut line: String = text.chars().take(width).collect();
    let len = line.chars().count();
    line.push_str(&" ".repeat(width - len));
    format!("\x1b[{};1H\x1b[30;47m{}\x1b[0m", row, line)
}
