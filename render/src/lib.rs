extern crate kiss3d;

pub mod scene;
pub mod status;

pub use kiss3d::event;
