use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader};

use crate::error::Result;

/// Decode an image file, sniffing the real format from its content.
/// The on-disk extension is not trusted; a JPEG payload under a `.png`
/// name still decodes.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(img)
}

/// Encode interleaved RGBA8 bytes as PNG at `output`, replacing any
/// existing file.
pub fn write_rgba_png(output: &Path, width: u32, height: u32, data: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new(writer);
    encoder.write_image(data, width, height, ExtendedColorType::Rgba8)?;
    Ok(())
}
