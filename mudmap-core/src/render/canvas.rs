use crate::foundation::core::Rgb8;
use crate::foundation::error::{MudmapError, MudmapResult};

/// Addressable pixel buffer plus its parallel "assigned" protection bitmap.
///
/// The canvas is deliberately dumb: [`Canvas::set`] always overwrites and never
/// consults the bitmap. The ownership rule — who may repaint a pixel — lives
/// entirely in the rasterizer, which checks [`Canvas::is_assigned`] before
/// painting. A canvas is created fresh per render call and handed off (or
/// dropped) when the pass completes; no canvas is shared between renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
    assigned: Vec<bool>,
}

impl Canvas {
    /// Create a canvas with every pixel black and unassigned.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgb8::default(); len],
            assigned: vec![false; len],
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn idx(&self, x: u32, y: u32) -> MudmapResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(MudmapError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb8) -> MudmapResult<()> {
        let i = self.idx(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> MudmapResult<Rgb8> {
        Ok(self.pixels[self.idx(x, y)?])
    }

    /// Return `true` when `(x, y)` is protected from further overwrite.
    pub fn is_assigned(&self, x: u32, y: u32) -> MudmapResult<bool> {
        Ok(self.assigned[self.idx(x, y)?])
    }

    /// Protect `(x, y)` from further overwrite.
    pub fn mark_assigned(&mut self, x: u32, y: u32) -> MudmapResult<()> {
        let i = self.idx(x, y)?;
        self.assigned[i] = true;
        Ok(())
    }

    /// Tightly packed RGB8 bytes, row-major, raster row 0 first.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.extend_from_slice(&[px.r, px.g, px.b]);
        }
        bytes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
