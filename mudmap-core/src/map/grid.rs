use crate::foundation::error::{MudmapError, MudmapResult};

/// A parsed world map: declared dimensions plus token rows in raster order.
///
/// Map text is written top-of-world first, while image consumers expect raster
/// row 0 at the bottom of the in-game world. The parser therefore reverses the
/// body lines: raster row 0 is the last non-empty line of the source text.
///
/// Rows may be shorter than `width` (columns past a row's end are simply
/// unpainted) and a short map stores empty rows up to `height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapGrid {
    width: u32,
    height: u32,
    rows: Vec<Vec<char>>,
}

impl MapGrid {
    /// Parse the `<width>x<height>` header plus token body.
    ///
    /// Empty lines are skipped without consuming a row index. More non-empty
    /// body lines than `height`, or a line longer than `width`, fail with
    /// [`MudmapError::MalformedBody`]; the map is either fully valid or not
    /// parsed at all. Token validity is not checked here — that is the
    /// rasterizer's job via palette lookup.
    pub fn parse(raw: &str) -> MudmapResult<Self> {
        let mut lines = raw.lines();
        let (width, height) = parse_header(lines.next().unwrap_or(""))?;

        let mut body: Vec<&str> = lines.filter(|l| !l.is_empty()).collect();
        body.reverse();
        if body.len() as u64 > u64::from(height) {
            return Err(MudmapError::malformed_body(format!(
                "{} body rows exceed declared height {height}",
                body.len()
            )));
        }

        let mut rows = Vec::with_capacity(height as usize);
        for (y, line) in body.iter().enumerate() {
            let row: Vec<char> = line.chars().collect();
            if row.len() as u64 > u64::from(width) {
                return Err(MudmapError::malformed_body(format!(
                    "raster row {y} has {} tokens, declared width is {width}",
                    row.len()
                )));
            }
            rows.push(row);
        }
        rows.resize_with(height as usize, Vec::new);

        Ok(Self {
            width,
            height,
            rows,
        })
    }

    /// Declared map width in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Declared map height in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tokens of raster row `y`. May be shorter than `width`; rows outside
    /// the grid are empty.
    pub fn row(&self, y: u32) -> &[char] {
        match self.rows.get(y as usize) {
            Some(row) => row,
            None => &[],
        }
    }

    /// Token at `(x, y)`, if that cell is inside a stored row.
    pub fn token_at(&self, x: u32, y: u32) -> Option<char> {
        self.rows.get(y as usize)?.get(x as usize).copied()
    }
}

fn parse_header(line: &str) -> MudmapResult<(u32, u32)> {
    let line = line.trim();
    let Some((w, h)) = line.split_once('x') else {
        return Err(MudmapError::malformed_header(format!(
            "expected '<width>x<height>', got '{line}'"
        )));
    };
    let dim = |s: &str| {
        s.trim().parse::<u32>().map_err(|_| {
            MudmapError::malformed_header(format!("'{s}' is not a decimal dimension"))
        })
    };
    let (width, height) = (dim(w)?, dim(h)?);
    if width == 0 || height == 0 {
        return Err(MudmapError::malformed_header(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/map/grid.rs"]
mod tests;
