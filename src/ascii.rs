use image::{DynamicImage, GrayImage, Rgb, RgbImage};

use crate::density::DensityTable;

/// Parameters for one rendering pass, built once from the CLI and
/// immutable thereafter.
#[derive(Debug, Clone, Copy)]
pub struct AsciiOptions {
    pub width: u32,
    pub height: u32,
    pub table: DensityTable,
}

impl AsciiOptions {
    pub fn new(width: u32, height: u32, table: DensityTable) -> Self {
        Self {
            width,
            height,
            table,
        }
    }

    /// Output grid dimensions for this pass.
    pub fn target_size(&self) -> (u32, u32) {
        target_size(self.width, self.height)
    }
}

/// Compute the output grid (cols, rows) for a requested size. Width is
/// doubled because glyph cells are roughly twice as tall as wide, so a
/// two-character-wide cell approximates a square patch of the image.
pub fn target_size(width: u32, height: u32) -> (u32, u32) {
    (width * 2, height)
}

/// Perceptual brightness of an RGB pixel using standard luma weights,
/// truncated to an integer.
pub fn brightness(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) as u8
}

/// Render a resized image as a block of text, one glyph per pixel.
///
/// Grayscale sources produce plain glyphs; color sources wrap each
/// glyph in a bold 24-bit foreground escape carrying the pixel's own
/// color, so glyph shape encodes brightness while color encodes hue.
pub fn render(image: &DynamicImage, table: DensityTable) -> String {
    if image.color().has_color() {
        render_color(&image.to_rgb8(), table)
    } else {
        render_gray(&image.to_luma8(), table)
    }
}

fn render_gray(image: &GrayImage, table: DensityTable) -> String {
    let mut ascii = String::with_capacity(((image.width() + 1) * image.height()) as usize);

    for row in image.rows() {
        for pixel in row {
            ascii.push(table.select(pixel.0[0]));
        }
        ascii.push('\n');
    }

    strip_trailing_newline(ascii)
}

fn render_color(image: &RgbImage, table: DensityTable) -> String {
    use std::fmt::Write;

    let mut ascii = String::new();

    for row in image.rows() {
        for &pixel in row {
            let glyph = table.select(brightness(pixel));
            let [r, g, b] = pixel.0;
            let _ = write!(ascii, "\x1b[1m\x1b[38;2;{r};{g};{b}m{glyph}\x1b[0m");
        }
        ascii.push('\n');
    }

    strip_trailing_newline(ascii)
}

// The row loop appends a break after every row; drop the last one so
// the block ends without a dangling blank line.
fn strip_trailing_newline(mut ascii: String) -> String {
    if ascii.ends_with('\n') {
        ascii.pop();
    }
    ascii
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn grayscale_brightness_is_identity() {
        // A single-channel sample is its own brightness; the luma
        // weights only apply to color pixels.
        for value in 0..=255u8 {
            let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([value])));
            let expected = DensityTable::transparent().select(value).to_string();
            assert_eq!(render(&gray, DensityTable::transparent()), expected);
        }
    }

    #[test]
    fn luma_matches_reference_points() {
        assert_eq!(brightness(Rgb([255, 255, 255])), 255);
        assert_eq!(brightness(Rgb([0, 0, 0])), 0);
        // 0.299 * 255 = 76.245, truncated.
        assert_eq!(brightness(Rgb([255, 0, 0])), 76);
        assert_eq!(brightness(Rgb([0, 255, 0])), 149);
        assert_eq!(brightness(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn target_size_doubles_width_only() {
        assert_eq!(target_size(20, 20), (40, 20));
        assert_eq!(target_size(10, 5), (20, 5));
    }

    #[test]
    fn uniform_white_grid_renders_only_the_brightest_glyph() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 20, Luma([255])));
        let text = render(&image, DensityTable::transparent());

        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 20);
        for line in lines {
            assert_eq!(line, "Ñ".repeat(40));
        }
    }

    #[test]
    fn color_pixel_emits_exact_escape_sequence() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0, 255, 0])));
        let text = render(&image, DensityTable::transparent());

        let glyph = DensityTable::transparent().select(brightness(Rgb([0, 255, 0])));
        assert_eq!(text, format!("\x1b[1m\x1b[38;2;0;255;0m{glyph}\x1b[0m"));
    }

    #[test]
    fn output_never_ends_with_line_break() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([128])));
        assert!(!render(&gray, DensityTable::transparent()).ends_with('\n'));

        let color = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([10, 20, 30])));
        assert!(!render(&color, DensityTable::transparent()).ends_with('\n'));
    }

    #[test]
    fn rgba_sources_render_with_color_escapes() {
        let image = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            1,
            1,
            image::Rgba([255, 0, 0, 255]),
        ));
        let text = render(&image, DensityTable::transparent());
        assert!(text.starts_with("\x1b[1m\x1b[38;2;255;0;0m"));
    }

    #[test]
    fn row_order_is_top_to_bottom() {
        let mut image = GrayImage::from_pixel(1, 2, Luma([255]));
        image.put_pixel(0, 1, Luma([0]));
        let text = render(
            &DynamicImage::ImageLuma8(image),
            DensityTable::transparent(),
        );
        assert_eq!(text, "Ñ\n ");
    }
}
