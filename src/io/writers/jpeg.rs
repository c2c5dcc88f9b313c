use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::{Error, Result};

pub const DEFAULT_QUALITY: u8 = 95;

pub fn write_rgb_jpeg(output: &Path, img: &RgbImage, quality: u8) -> Result<()> {
    let (cols, rows) = img.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(cols), u16::try_from(rows)) else {
        return Err(Error::ImageTooLarge {
            width: cols,
            height: rows,
        });
    };
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder.encode(img.as_raw(), w, h, ColorType::Rgb)?;
    info!("Wrote JPEG {}x{} (q={}) to {:?}", cols, rows, quality, output);
    Ok(())
}
