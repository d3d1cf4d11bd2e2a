use crate::ink::InkColor;
use image::RgbImage;
use thiserror::Error;
use tracing::warn;

pub const TILE_ROWS: u32 = 8;
pub const TILE_COLUMNS: u32 = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("ran out of labels at tile {tile_index}: only {available} label(s) supplied")]
    OutOfLabels { tile_index: usize, available: usize },
    #[error("image is {width} pixel(s) wide; tiles need at least {TILE_COLUMNS}")]
    ImageTooNarrow { width: u32 },
}

/// Shape of the emitted data lines. Defaults reproduce the classic
/// `gfx<label>          defb    ...` layout.
#[derive(Debug, Clone)]
pub struct AsmFormat {
    pub label_prefix: String,
    pub column_width: usize,
    pub keyword: String,
}

impl Default for AsmFormat {
    fn default() -> Self {
        Self {
            label_prefix: "gfx".to_string(),
            column_width: 16,
            keyword: "defb".to_string(),
        }
    }
}

impl AsmFormat {
    fn data_line(&self, label: &str, bytes: &[u8; TILE_ROWS as usize]) -> String {
        let joined = bytes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}{}    {}", self.label_field(label), self.keyword, joined)
    }

    fn label_field(&self, label: &str) -> String {
        let field = format!("{}{}", self.label_prefix, label);
        if field.len() >= self.column_width {
            // long labels are never truncated; keep one separating space
            return field + " ";
        }
        format!("{field:<width$}", width = self.column_width)
    }
}

/// Pack one image row into a byte: a pixel equal to `ink` is a set bit, the
/// leftmost tested pixel lands in bit 7. Columns past 7 are ignored.
fn pack_row(img: &RgbImage, y: u32, ink: InkColor) -> u8 {
    (0..TILE_COLUMNS).fold(0u8, |byte, x| {
        if ink.matches(img.get_pixel(x, y)) {
            byte | 0x80 >> x
        } else {
            byte
        }
    })
}

/// Walk the image top to bottom in 8-row groups and render each group as a
/// comment line plus a labeled data line. Labels are consumed sequentially,
/// one per tile; trailing rows short of a full tile are dropped with a
/// warning.
pub fn encode_tiles(
    img: &RgbImage,
    ink: InkColor,
    labels: &[String],
    format: &AsmFormat,
) -> Result<Vec<String>, EncodeError> {
    if img.width() < TILE_COLUMNS {
        return Err(EncodeError::ImageTooNarrow { width: img.width() });
    }

    let tiles = img.height() / TILE_ROWS;
    let leftover = img.height() % TILE_ROWS;
    if leftover != 0 {
        warn!(
            "image height {} is not a multiple of {TILE_ROWS}; dropping the last {leftover} row(s)",
            img.height()
        );
    }

    let mut lines = Vec::with_capacity(tiles as usize * 2);
    let mut bytes = [0u8; TILE_ROWS as usize];
    for tile_index in 0..tiles as usize {
        let label = labels.get(tile_index).ok_or(EncodeError::OutOfLabels {
            tile_index,
            available: labels.len(),
        })?;
        for row in 0..TILE_ROWS {
            bytes[row as usize] = pack_row(img, tile_index as u32 * TILE_ROWS + row, ink);
        }
        lines.push(format!("; Graphic for {label}"));
        lines.push(format.data_line(label, &bytes));
    }
    Ok(lines)
}
