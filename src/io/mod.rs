//! Image file input/output: decoding arbitrary raster files and encoding
//! RGBA buffers back to PNG.
pub mod png;

pub use png::{read_image, write_rgba_png};
