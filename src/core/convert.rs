use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::png::{read_image, write_rgba_png};

/// Re-encode the file at `path` as an RGBA PNG, overwriting it in place.
///
/// The source is fully decoded into memory before the file is truncated,
/// so a decode failure leaves the original bytes untouched. Sources
/// without an alpha channel gain a fully opaque one; existing alpha is
/// preserved.
pub fn convert_to_rgba_png(path: &Path) -> Result<()> {
    let img = read_image(path)?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    write_rgba_png(path, width, height, rgba.as_raw())?;
    info!(
        "convert_to_rgba_png: {} re-encoded as {}x{} RGBA PNG",
        path.display(),
        width,
        height
    );
    Ok(())
}
