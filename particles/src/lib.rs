mod camera;
mod command;
mod config;
mod input;
mod paint;
mod portfolio;
mod simulation;
mod state;
mod store;
mod transition;
mod tween;
mod ui;

pub use camera::*;
pub use command::*;
pub use config::*;
pub use input::*;
pub use paint::*;
pub use portfolio::*;
pub use simulation::*;
pub use state::*;
pub use store::*;
pub use transition::*;
pub use tween::*;
pub use ui::*;

pub use shapes::{CoordinatePoint, CoordinateSet, Language, ShapeKey};
pub use utils::Rgb;
