use crate::foundation::core::Rgb8;
use crate::foundation::error::MudmapResult;
use crate::map::grid::MapGrid;
use crate::map::palette::{Palette, START_TOKEN};
use crate::render::canvas::Canvas;

/// Manhattan radius of the protected fill around a start marker.
pub const START_FILL_RADIUS: i64 = 3;

/// Paint a full canvas from a parsed grid.
///
/// Rows are visited in increasing raster order and columns left to right. The
/// traversal order is load-bearing: when two start-marker diamonds contest a
/// pixel, the first marker reached wins, because its fill protects the pixel
/// before the second marker is processed.
///
/// An ordinary token paints its cell but leaves it overwritable; a start
/// marker paints a 25-cell diamond (`|dx| + |dy| <= 3`, clamped to the canvas
/// edges) and protects every cell it touches. A start marker whose own cell is
/// already protected emits nothing at all.
///
/// Any token without a palette entry aborts the whole render; a map is either
/// fully valid or not rendered.
#[tracing::instrument(skip(grid, palette), fields(width = grid.width(), height = grid.height()))]
pub fn rasterize(grid: &MapGrid, palette: &Palette) -> MudmapResult<Canvas> {
    let mut canvas = Canvas::new(grid.width(), grid.height());
    for y in 0..grid.height() {
        for (x, &token) in grid.row(y).iter().enumerate() {
            let x = x as u32;
            let color = palette.lookup(token)?;
            if token == START_TOKEN {
                if !canvas.is_assigned(x, y)? {
                    paint_protected(&mut canvas, x, y, color)?;
                    diamond_fill(&mut canvas, x, y, color)?;
                }
            } else if !canvas.is_assigned(x, y)? {
                paint_unprotected(&mut canvas, x, y, color)?;
            }
        }
    }
    Ok(canvas)
}

/// Paint `(x, y)` and protect it from any later overwrite.
fn paint_protected(canvas: &mut Canvas, x: u32, y: u32, color: Rgb8) -> MudmapResult<()> {
    canvas.set(x, y, color)?;
    canvas.mark_assigned(x, y)
}

/// Paint `(x, y)` but leave it overwritable by later traversal steps.
fn paint_unprotected(canvas: &mut Canvas, x: u32, y: u32, color: Rgb8) -> MudmapResult<()> {
    canvas.set(x, y, color)
}

/// Protected diamond fill around a start marker.
///
/// Offsets past the canvas edge are clamped onto it rather than skipped, so a
/// marker at an edge or corner still gets a visible, flattened mark. Several
/// offsets may collapse onto the same boundary pixel; the assigned check makes
/// the first one win and the rest no-ops.
fn diamond_fill(canvas: &mut Canvas, x: u32, y: u32, color: Rgb8) -> MudmapResult<()> {
    let max_x = i64::from(canvas.width()) - 1;
    let max_y = i64::from(canvas.height()) - 1;
    for dx in -START_FILL_RADIUS..=START_FILL_RADIUS {
        for dy in -START_FILL_RADIUS..=START_FILL_RADIUS {
            if dx.abs() + dy.abs() > START_FILL_RADIUS {
                continue;
            }
            let nx = (i64::from(x) + dx).clamp(0, max_x) as u32;
            let ny = (i64::from(y) + dy).clamp(0, max_y) as u32;
            if !canvas.is_assigned(nx, ny)? {
                paint_protected(canvas, nx, ny, color)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/rasterize.rs"]
mod tests;
