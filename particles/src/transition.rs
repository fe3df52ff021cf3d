use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use shapes::{is_painted, CoordinatePoint};
use utils::{centered, vector3_from_const, Easing, Rgb};

use crate::{Camera, CameraTween, ColorTween, Config, ParticleStore, PendingPose, SceneState, PARKED};

pub const COLOR_TIME: f32 = 1.5;
pub const CAMERA_TIME: f32 = 2.0;
pub const CONTACT_TILT: f32 = -0.5;

pub const EXACT_JITTER: f32 = 0.2;
pub const SURPLUS_SPREAD: f32 = 50.;
pub const SURPLUS_DEPTH: f32 = 60.;
pub const SCATTER_SPREAD: f32 = 50.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Index has its own coordinate, placed with a tiny jitter.
    Exact,
    /// Index reuses `coords[i % len]` with a wide jitter.
    Surplus,
}

pub fn placement(index: usize, len: usize) -> Placement {
    if index < len {
        Placement::Exact
    } else {
        Placement::Surplus
    }
}

/// Describes one request to show a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: SceneState,
    pub skip_camera: bool,
    pub color: Option<Rgb>,
}

impl Transition {
    pub fn to(state: SceneState) -> Transition {
        Transition {
            state,
            skip_camera: false,
            color: None,
        }
    }

    pub fn without_camera(mut self) -> Transition {
        self.skip_camera = true;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Transition {
        self.color = Some(color);
        self
    }
}

/// Owns the current state and the two tween channels.
///
/// Starting a tween on a channel replaces whatever ran there before.
pub struct TransitionController {
    current: SceneState,
    camera: Option<CameraTween>,
    color: Option<ColorTween>,
    rng: StdRng,
}

impl TransitionController {
    pub fn new(seed: Option<u64>) -> TransitionController {
        TransitionController {
            current: SceneState::Home,
            camera: None,
            color: None,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    pub fn current_state(&self) -> SceneState {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.camera.is_some() || self.color.is_some()
    }

    pub fn color_tween(&self) -> Option<&ColorTween> {
        self.color.as_ref()
    }

    pub fn camera_tween(&self) -> Option<&CameraTween> {
        self.camera.as_ref()
    }

    pub fn cancel_color_tween(&mut self) {
        self.color = None;
    }

    pub fn set_targets(
        &mut self,
        store: &mut ParticleStore,
        camera: &Camera,
        config: &Config,
        transition: Transition,
        coords: &[CoordinatePoint],
    ) {
        let state = transition.state;
        let color = transition.color.unwrap_or_else(|| config.color(state));
        self.current = state;

        if !transition.skip_camera {
            let tilt = if state == SceneState::Contact { CONTACT_TILT } else { 0. };
            self.camera = Some(CameraTween::new(
                camera,
                config.camera_pose(state),
                tilt,
                CAMERA_TIME,
                Easing::Power2InOut,
            ));
        }

        if state == SceneState::Home && is_painted(coords) {
            self.install_painted(store, coords, color);
        } else {
            if coords.is_empty() {
                self.scatter(store);
            } else {
                self.assign(store, state, coords);
            }

            self.color = Some(ColorTween::new(store.colors(), color, COLOR_TIME, Easing::Power1Out));
        }

        debug!(state = %state, points = coords.len(), skip_camera = transition.skip_camera, "targets assigned");
    }

    /// Steps both channels, returns the camera pose to apply this frame.
    pub fn advance(&mut self, dt: f32, store: &mut ParticleStore) -> Option<PendingPose> {
        let color_done = match self.color.as_mut() {
            Some(tween) => {
                tween.advance(dt, store.colors_mut());
                store.mark_colors_dirty();
                tween.is_finished()
            }
            None => false,
        };
        if color_done {
            self.color = None;
        }

        let pose = self.camera.as_mut().map(|tween| (tween.advance(dt), tween.is_finished()));
        match pose {
            Some((pose, true)) => {
                self.camera = None;
                Some(pose)
            }
            Some((pose, false)) => Some(pose),
            None => None,
        }
    }

    fn jitter(&mut self, spread: f32) -> f32 {
        centered(self.rng.gen::<f32>(), spread)
    }

    fn scatter(&mut self, store: &mut ParticleStore) {
        for i in 0..store.len() {
            let target = Vector3::new(
                self.jitter(SCATTER_SPREAD),
                self.jitter(SCATTER_SPREAD),
                self.jitter(SCATTER_SPREAD),
            );
            store.set_target(i, target);
        }
    }

    fn assign(&mut self, store: &mut ParticleStore, state: SceneState, coords: &[CoordinatePoint]) {
        let len = coords.len();

        for i in 0..store.len() {
            let c = coords[i % len].position();

            let target = match placement(i, len) {
                Placement::Exact => {
                    let mut target = c + Vector3::new(
                        self.jitter(EXACT_JITTER),
                        self.jitter(EXACT_JITTER),
                        self.jitter(EXACT_JITTER),
                    );
                    if state == SceneState::Contact {
                        target.z = c.z;
                    }
                    target
                }
                Placement::Surplus => Vector3::new(
                    c.x + self.jitter(SURPLUS_SPREAD),
                    c.y + self.jitter(SURPLUS_SPREAD),
                    self.jitter(SURPLUS_DEPTH),
                ),
            };

            store.set_target(i, target);
        }
    }

    /// Painted home shapes keep their own colours and skip the fade,
    /// leftover particles fly off to the parking spot.
    fn install_painted(&mut self, store: &mut ParticleStore, coords: &[CoordinatePoint], fallback: Rgb) {
        self.color = None;

        for i in 0..store.len() {
            match coords.get(i) {
                Some(point) => {
                    store.set_target(i, point.position());
                    store.set_color(i, point.color().unwrap_or(fallback));
                }
                None => {
                    store.set_target(i, vector3_from_const(PARKED));
                    store.set_color(i, Rgb::BLACK);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(count: usize) -> (TransitionController, ParticleStore, Camera, Config) {
        let store = ParticleStore::new(count, &mut StdRng::seed_from_u64(1));
        let camera = Camera::new(Vector3::new(0., 0., 75.));
        (TransitionController::new(Some(2)), store, camera, Config::default())
    }

    fn line(len: usize) -> Vec<CoordinatePoint> {
        (0..len).map(|i| CoordinatePoint::plain(i as f32, 2. * i as f32, 1.)).collect()
    }

    #[test]
    fn exact_and_surplus_partition() {
        let (mut controller, mut store, camera, config) = setup(10);
        let coords = line(4);

        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::About), &coords);

        for i in 0..10 {
            let c = coords[i % 4].position();
            let t = store.target(i);
            match placement(i, 4) {
                Placement::Exact => assert!((t - c).amax() <= EXACT_JITTER / 2. + 1e-4),
                Placement::Surplus => {
                    assert!((t.x - c.x).abs() <= SURPLUS_SPREAD / 2. + 1e-3);
                    assert!((t.y - c.y).abs() <= SURPLUS_SPREAD / 2. + 1e-3);
                    assert!(t.z.abs() <= SURPLUS_DEPTH / 2.);
                }
            }
        }

        assert_eq!(placement(3, 4), Placement::Exact);
        assert_eq!(placement(4, 4), Placement::Surplus);
    }

    #[test]
    fn contact_keeps_exact_depth() {
        let (mut controller, mut store, camera, config) = setup(3);
        let coords = line(3);

        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::Contact), &coords);

        for i in 0..3 {
            assert_eq!(store.target(i).z, 1.);
        }
        assert_eq!(controller.camera_tween().unwrap().target().rotation_x, CONTACT_TILT);
    }

    #[test]
    fn empty_set_scatters() {
        let (mut controller, mut store, camera, config) = setup(50);

        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::Projects), &[]);

        assert!(store.targets().iter().all(|v| v.abs() <= SCATTER_SPREAD / 2.));
        assert_eq!(controller.current_state(), SceneState::Projects);
        assert!(controller.color_tween().is_some());
    }

    #[test]
    fn skip_camera_keeps_running_tween() {
        let (mut controller, mut store, camera, config) = setup(5);
        let coords = line(5);

        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::Projects), &coords);
        controller.advance(0.5, &mut store);

        let logo = Transition::to(SceneState::Projects).without_camera();
        controller.set_targets(&mut store, &camera, &config, logo, &coords);

        let target = controller.camera_tween().unwrap().target();
        assert_eq!(target.position, Vector3::new(0., 0., 60.));
    }

    #[test]
    fn tweens_settle_on_targets() {
        let (mut controller, mut store, camera, config) = setup(4);
        let coords = line(4);

        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::About), &coords);

        let mut last = None;
        for _ in 0..40 {
            if let Some(pose) = controller.advance(0.1, &mut store) {
                last = Some(pose);
            }
        }

        assert!(!controller.is_animating());
        assert_eq!(last.unwrap().position, Vector3::new(0., 0., 60.));
        for i in 0..4 {
            assert_eq!(store.color(i), config.color(SceneState::About));
        }
    }

    #[test]
    fn painted_home_installs_instantly() {
        let (mut controller, mut store, camera, config) = setup(6);
        let red = Rgb::new(1., 0., 0.);
        let coords = vec![
            CoordinatePoint::Colored(Vector3::new(1., 1., 1.), red),
            CoordinatePoint::Colored(Vector3::new(2., 2., 2.), red),
        ];

        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::About), &line(6));
        controller.set_targets(&mut store, &camera, &config, Transition::to(SceneState::Home), &coords);

        assert!(controller.color_tween().is_none());
        assert_eq!(store.target(1), Vector3::new(2., 2., 2.));
        assert_eq!(store.color(0), red);
        for i in 2..6 {
            assert_eq!(store.target(i), Vector3::repeat(PARKED));
            assert!(store.color(i).is_black());
        }
    }
}
