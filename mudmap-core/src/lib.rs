//! Mudmap turns a character-per-tile text encoding of a game world into pixels.
//!
//! The input format is the map snapshot a MUD server writes out periodically: a
//! `<width>x<height>` header line followed by one token row per line, where
//! each character names a terrain or ownership category.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: `&str -> MapGrid` (header + token rows, raster row order)
//! 2. **Rasterize**: `MapGrid + Palette -> Canvas` (palette lookups, protected
//!    diamond fills around start markers, pixel-ownership rules)
//! 3. **Encode** (optional): `Canvas -> PNG bytes`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rasterization is a pure function of its input; the same
//!   text always yields byte-identical pixels.
//! - **No IO in the render path**: reading map files and writing images belong
//!   to callers (see the `mudmap-cli` crate); the core only offers the
//!   in-memory [`encode_png`] collaborator.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod map;
mod render;

pub use encode::png::encode_png;
pub use foundation::core::Rgb8;
pub use foundation::error::{MudmapError, MudmapResult};
pub use map::grid::MapGrid;
pub use map::palette::{Palette, START_TOKEN, UNCLAIMED_TOKEN};
pub use render::canvas::Canvas;
pub use render::rasterize::{START_FILL_RADIUS, rasterize};
