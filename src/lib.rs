mod encoder;
mod ink;
mod labels;

pub use crate::encoder::{encode_tiles, AsmFormat, EncodeError, TILE_COLUMNS, TILE_ROWS};
pub use crate::ink::{InkColor, ParseInkError};
pub use crate::labels::{parse_labels, read_labels_file};

use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub ink: InkColor,
    pub labels: Vec<String>,
    pub format: AsmFormat,
}

pub fn convert(file: &Path, out_file: &Path, options: &ConvertOptions) -> Result<(), ConvertError> {
    let img = image::open(file)?;
    info!("Opened image {}", file.display());
    let img = img.into_rgb8();
    info!("To rgb 8 bit");

    let lines = encode_tiles(&img, options.ink, &options.labels, &options.format)?;
    info!("Packed {} tile(s)", lines.len() / 2);

    let mut text = String::new();
    for line in &lines {
        text.push_str(line);
        text.push('\n');
    }
    let mut out = File::create(out_file)?;
    out.write_all(text.as_bytes())?;
    info!("Data written. Done");
    Ok(())
}
