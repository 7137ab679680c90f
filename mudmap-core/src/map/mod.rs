pub mod grid;
pub mod palette;
