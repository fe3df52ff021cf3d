mod color;
mod curves;
mod easing;

pub use color::*;
pub use curves::*;
pub use easing::*;

use nalgebra::Vector3;

#[inline]
pub fn vector3_from_const(f: f32) -> Vector3<f32> {
    Vector3::new(f, f, f)
}

/// Maps a uniform sample in [0, 1) to [-spread / 2, spread / 2).
#[inline]
pub fn centered(sample: f32, spread: f32) -> f32 {
    (sample - 0.5) * spread
}
