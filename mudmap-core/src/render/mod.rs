pub mod canvas;
pub mod rasterize;
