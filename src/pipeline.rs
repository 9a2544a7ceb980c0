use std::path::PathBuf;

use image::imageops::FilterType;

use crate::ascii::{self, AsciiOptions};
use crate::density::DensityTable;
use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    pub no_transparency: bool,
}

/// Load, resize, and render one image as a block of text.
pub fn run(config: &RenderConfig) -> Result<String> {
    if !config.input.exists() {
        return Err(AppError::InputNotFound(config.input.clone()));
    }

    let image = image::open(&config.input)?;

    let table = DensityTable::for_flag(config.no_transparency);
    let options = AsciiOptions::new(config.width, config.height, table);
    let (cols, rows) = options.target_size();

    // resize_exact ignores aspect ratio; the requested grid already
    // carries the glyph-cell compensation.
    let resized = image.resize_exact(cols, rows, FilterType::Triangle);

    Ok(ascii::render(&resized, options.table))
}
