use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::error::{MudmapError, MudmapResult};
use crate::render::canvas::Canvas;

/// Encode a canvas as PNG bytes.
///
/// Raster row 0 becomes the top image row, matching the orientation the
/// upstream map tooling has always produced. The render path itself never
/// performs encoding; this is the image-encoder collaborator kept in its own
/// module.
pub fn encode_png(canvas: &Canvas) -> MudmapResult<Vec<u8>> {
    let img = image::RgbImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgb8_bytes())
        .ok_or_else(|| MudmapError::validation("canvas buffer does not match its dimensions"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode canvas as png")?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
