use nalgebra::Vector3;
use serde_derive::*;

use utils::Rgb;

/// A target position in scene units, optionally carrying a fixed colour.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum CoordinatePoint {
    Plain(Vector3<f32>),
    Colored(Vector3<f32>, Rgb),
}

impl CoordinatePoint {
    pub fn plain(x: f32, y: f32, z: f32) -> CoordinatePoint {
        CoordinatePoint::Plain(Vector3::new(x, y, z))
    }

    pub fn position(&self) -> Vector3<f32> {
        match self {
            CoordinatePoint::Plain(p) => *p,
            CoordinatePoint::Colored(p, _) => *p,
        }
    }

    pub fn color(&self) -> Option<Rgb> {
        match self {
            CoordinatePoint::Plain(_) => None,
            CoordinatePoint::Colored(_, c) => Some(*c),
        }
    }
}

pub type CoordinateSet = Vec<CoordinatePoint>;

/// A set is painted when its entries carry their own colours.
pub fn is_painted(coords: &[CoordinatePoint]) -> bool {
    match coords.first() {
        Some(CoordinatePoint::Colored(..)) => true,
        _ => false,
    }
}
