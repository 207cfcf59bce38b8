//! colorpick IO - Image loading and saving
//!
//! PNG is the only codec. Files are identified by their header, not their
//! extension, so a mislabeled file is still decoded and a non-PNG file is
//! refused with its real format in the error.

pub mod error;
pub mod format;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use self::png::{read_png, write_png};

use colorpick_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;
use tracing::debug;

fn require_png(format: ImageFormat) -> IoResult<()> {
    match format {
        ImageFormat::Png => Ok(()),
        other => Err(IoError::UnsupportedFormat(format!(
            "{} images cannot be decoded, only PNG",
            other
        ))),
    }
}

/// Read an image from a file path.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    require_png(detect_format(path)?)?;
    let pix = read_png(BufReader::new(File::open(path)?))?;
    debug!(
        path = %path.display(),
        width = pix.width(),
        height = pix.height(),
        "read image"
    );
    Ok(pix)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    require_png(detect_format_from_bytes(data)?)?;
    read_png(Cursor::new(data))
}

/// Write an image to a file path as PNG.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(pix, &mut writer)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote image");
    Ok(())
}

/// Encode an image as PNG into memory.
pub fn write_image_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(pix, &mut buffer)?;
    Ok(buffer)
}
