use std::f32::consts::PI;

use rand::Rng;

use utils::centered;

use crate::{CoordinatePoint, CoordinateSet};

/// Uniform area density on the sphere: random azimuth, inverse-cosine polar angle.
pub fn sphere<R: Rng>(count: usize, radius: f32, rng: &mut R) -> CoordinateSet {
    (0..count)
        .map(|_| {
            let theta = rng.gen::<f32>() * PI * 2.;
            let phi = (rng.gen::<f32>() * 2. - 1.).max(-1.).min(1.).acos();

            CoordinatePoint::plain(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

/// Two interleaved strands: even indices on the `+radius` strand, odd ones
/// mirrored through the axis.
pub fn helix(count: usize, radius: f32, height: f32, turns: f32) -> CoordinateSet {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let angle = t * PI * 2. * turns;
            let strand = if i % 2 == 0 { 1. } else { -1. };

            CoordinatePoint::plain(
                angle.cos() * radius * strand,
                (t - 0.5) * height,
                angle.sin() * radius * strand,
            )
        })
        .collect()
}

pub const WAVE_FLOOR_Y: f32 = -20.;
pub const WAVE_FLOOR_SPREAD: f32 = 50.;

/// Standing-wave surface on a `grid_size`² XZ grid, surplus points scattered
/// on a low floor.
pub fn wave_grid<R: Rng>(count: usize, grid_size: usize, step: f32, rng: &mut R) -> CoordinateSet {
    let half = grid_size as f32 / 2.;

    (0..count)
        .map(|i| {
            if grid_size == 0 || i >= grid_size * grid_size {
                return CoordinatePoint::plain(
                    centered(rng.gen(), WAVE_FLOOR_SPREAD),
                    WAVE_FLOOR_Y,
                    centered(rng.gen(), WAVE_FLOOR_SPREAD),
                );
            }

            let x = (i % grid_size) as f32 - half;
            let z = (i / grid_size) as f32 - half;

            CoordinatePoint::plain(
                x * step,
                (x / 5.).sin() * (z / 5.).cos() * 4. - 5.,
                z * step,
            )
        })
        .collect()
}
