mod coords;
mod font;
mod generator;
mod parametric;
mod raster;

pub mod icons;

pub use coords::*;
pub use generator::*;
pub use parametric::*;
pub use raster::*;
