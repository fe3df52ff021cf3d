use nalgebra::Vector3;

use utils::{Easing, Rgb};

use crate::{Camera, PendingPose};

/// Advances `current` by `dt` without passing `max`, returns the normalized progress.
fn timer(current: &mut f32, max: f32, dt: f32) -> f32 {
    *current = (*current + dt.max(0.)).min(max);

    if max <= 0. {
        1.
    } else {
        *current / max
    }
}

pub trait Lerp: Copy {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, to: &f32, t: f32) -> f32 {
        self * (1. - t) + to * t
    }
}

impl Lerp for Vector3<f32> {
    fn lerp(&self, to: &Vector3<f32>, t: f32) -> Vector3<f32> {
        self * (1. - t) + to * t
    }
}

#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    time: f32,
    current_time: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, time: f32, easing: Easing) -> Tween<T> {
        Tween {
            from,
            to,
            time,
            current_time: 0.,
            easing,
        }
    }

    pub fn advance(&mut self, dt: f32) -> T {
        let t = timer(&mut self.current_time, self.time, dt);
        self.from.lerp(&self.to, self.easing.apply(t))
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.current_time >= self.time
    }
}

/// Fades every particle colour from its value at start to one uniform colour.
#[derive(Debug, Clone)]
pub struct ColorTween {
    from: Vec<f32>,
    to: Rgb,
    time: f32,
    current_time: f32,
    easing: Easing,
}

impl ColorTween {
    pub fn new(from: &[f32], to: Rgb, time: f32, easing: Easing) -> ColorTween {
        ColorTween {
            from: from.to_vec(),
            to,
            time,
            current_time: 0.,
            easing,
        }
    }

    pub fn target(&self) -> Rgb {
        self.to
    }

    pub fn advance(&mut self, dt: f32, colors: &mut [f32]) {
        let t = self.easing.apply(timer(&mut self.current_time, self.time, dt));
        let to = self.to.to_array();

        for (i, (color, from)) in colors.iter_mut().zip(self.from.iter()).enumerate() {
            *color = from.lerp(&to[i % 3], t);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_time >= self.time
    }
}

/// Moves the camera position and its x rotation together.
#[derive(Debug, Clone)]
pub struct CameraTween {
    position: Tween<Vector3<f32>>,
    rotation_x: Tween<f32>,
}

impl CameraTween {
    pub fn new(camera: &Camera, position: Vector3<f32>, rotation_x: f32, time: f32, easing: Easing) -> CameraTween {
        CameraTween {
            position: Tween::new(camera.position(), position, time, easing),
            rotation_x: Tween::new(camera.rotation().x, rotation_x, time, easing),
        }
    }

    pub fn advance(&mut self, dt: f32) -> PendingPose {
        PendingPose {
            position: self.position.advance(dt),
            rotation_x: self.rotation_x.advance(dt),
        }
    }

    pub fn target(&self) -> PendingPose {
        PendingPose {
            position: self.position.target(),
            rotation_x: self.rotation_x.target(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.position.is_finished() && self.rotation_x.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_reaches_target_and_stays() {
        let mut tween = Tween::new(0f32, 10., 2., Easing::Power2InOut);

        let mid = tween.advance(1.);
        assert!((mid - 5.).abs() < 1e-4);
        assert!(!tween.is_finished());

        assert_eq!(tween.advance(5.), 10.);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(1.), 10.);
    }

    #[test]
    fn zero_length_tween_jumps() {
        let mut tween = Tween::new(Vector3::zeros(), Vector3::new(1., 2., 3.), 0., Easing::Linear);
        assert_eq!(tween.advance(0.), Vector3::new(1., 2., 3.));
        assert!(tween.is_finished());
    }

    #[test]
    fn color_tween_starts_from_snapshot() {
        let from = vec![0., 0., 0., 1., 1., 1.];
        let mut colors = from.clone();
        let mut tween = ColorTween::new(&from, Rgb::new(1., 0., 0.5), 1.5, Easing::Power1Out);

        tween.advance(0., &mut colors);
        assert_eq!(colors, from);

        tween.advance(1.5, &mut colors);
        assert_eq!(colors, vec![1., 0., 0.5, 1., 0., 0.5]);
        assert!(tween.is_finished());
    }

    #[test]
    fn camera_tween_moves_rotation_with_position() {
        let camera = Camera::new(Vector3::new(0., 0., 75.));
        let mut tween = CameraTween::new(&camera, Vector3::new(0., 20., 50.), -0.5, 2., Easing::Power2InOut);

        let pose = tween.advance(2.);
        assert_eq!(pose.position, Vector3::new(0., 20., 50.));
        assert_eq!(pose.rotation_x, -0.5);
        assert!(tween.is_finished());
    }
}
