/// Convenience result type used across mudmap.
pub type MudmapResult<T> = Result<T, MudmapError>;

/// Top-level error taxonomy used by the render core.
///
/// Every variant is fatal for the current render: the core never substitutes a
/// default color and never emits a partial image.
#[derive(thiserror::Error, Debug)]
pub enum MudmapError {
    /// The first input line does not declare `<width>x<height>`.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The map body does not fit the declared dimensions.
    #[error("malformed body: {0}")]
    MalformedBody(String),

    /// A body character has no palette entry.
    #[error("unknown token '{0}'")]
    UnknownToken(char),

    /// A canvas access outside `[0, width) x [0, height)`.
    ///
    /// The rasterizer clamps every coordinate before touching the canvas, so
    /// seeing this from the public render path is a programming error rather
    /// than a recoverable condition.
    #[error("out of bounds: ({x}, {y}) outside {width}x{height}")]
    OutOfBounds {
        /// Offending column.
        x: u32,
        /// Offending row.
        y: u32,
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },

    /// Invalid palette data (bad JSON shape, remapped token).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MudmapError {
    /// Build a [`MudmapError::MalformedHeader`] value.
    pub fn malformed_header(msg: impl Into<String>) -> Self {
        Self::MalformedHeader(msg.into())
    }

    /// Build a [`MudmapError::MalformedBody`] value.
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self::MalformedBody(msg.into())
    }

    /// Build a [`MudmapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
