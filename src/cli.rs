use std::path::PathBuf;

use clap::Parser;

/// Requested output size in character cells, before the horizontal
/// stretch compensation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Convert an image into colorized ASCII art on the terminal"
)]
pub struct Cli {
    /// Input image path
    pub input: PathBuf,

    /// Output size as a single integer or WIDTH,HEIGHT
    #[arg(short, long, default_value = "20,20", value_parser = parse_size)]
    pub size: Size,

    /// Use the opaque glyph palette instead of the transparency-aware one
    #[arg(short = 'n', long, alias = "nt")]
    pub no_transparency: bool,
}

/// Parse `N` (square) or `W,H`. Any malformed segment rejects the whole
/// value instead of leaving a partially applied size behind.
fn parse_size(value: &str) -> Result<Size, String> {
    match value.split_once(',') {
        None => {
            let side = parse_dimension(value)?;
            Ok(Size {
                width: side,
                height: side,
            })
        }
        Some((w, h)) => {
            if h.contains(',') {
                return Err(format!("expected at most two dimensions in '{value}'"));
            }
            Ok(Size {
                width: parse_dimension(w)?,
                height: parse_dimension(h)?,
            })
        }
    }
}

fn parse_dimension(segment: &str) -> Result<u32, String> {
    segment
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("cannot convert '{segment}' to a dimension"))
}
