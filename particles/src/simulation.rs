use nalgebra::Vector3;

use crate::{Camera, ParticleStore, SceneState};

pub const EASE_RATE: f32 = 3.0;

pub const WANDER_THRESHOLD: f32 = 0.5;
pub const WANDER_AMPLITUDE: f32 = 0.02;

pub const SPIN_RADIUS: f32 = 15.;
pub const SPIN_SPEED: f32 = 1.;

pub const RIPPLE_BAND: f32 = 2.;
pub const RIPPLE_AMPLITUDE: f32 = 0.5;

pub const REPULSION_EPSILON: f32 = 0.01;
pub const REPULSION_GAIN: f32 = 10.;

/// Accumulated drag rotation, applied as an orbit around the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orbit {
    pub fn direction(&self) -> Vector3<f32> {
        Vector3::new(
            self.yaw.sin() * self.pitch.cos(),
            -self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }

    /// Keeps the camera distance, moves it on the orbit and faces the origin.
    pub fn apply(&self, camera: &mut Camera) {
        let radius = camera.position().norm();

        camera.set_position(self.direction() * radius);
        camera.look_at(Vector3::zeros());
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repulsion {
    pub center: Vector3<f32>,
    pub radius: f32,
    pub strength: f32,
}

/// Everything a step reads besides the store and the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    /// `None` suspends the per-state motion.
    pub state: Option<SceneState>,
    pub repulsion: Option<Repulsion>,
    pub orbit: Option<Orbit>,
}

pub fn ease(position: &mut Vector3<f32>, target: &Vector3<f32>, dt: f32) {
    *position += (target - *position) * (EASE_RATE * dt).min(1.);
}

pub fn wander(position: &mut Vector3<f32>, target: &Vector3<f32>, index: usize, time: f32) {
    if (*position - target).norm() <= WANDER_THRESHOLD {
        return;
    }

    let i = index as f32;
    position.x += (time * 0.5 + i).sin() * WANDER_AMPLITUDE;
    position.y += (time * 0.3 + i * 0.5).cos() * WANDER_AMPLITUDE;
    position.z += (time * 0.4 + i * 0.7).sin() * WANDER_AMPLITUDE;
}

/// Rotates about the y axis when within the spin radius of it.
pub fn spin(position: &mut Vector3<f32>, dt: f32) {
    let r = (position.x * position.x + position.z * position.z).sqrt();
    if r >= SPIN_RADIUS {
        return;
    }

    let (sin, cos) = (SPIN_SPEED * dt).sin_cos();
    let (x, z) = (position.x, position.z);

    position.x = x * cos - z * sin;
    position.z = x * sin + z * cos;
}

pub fn ripple(position: &mut Vector3<f32>, target: &Vector3<f32>, time: f32, dt: f32) {
    if (position.y - target.y).abs() >= RIPPLE_BAND {
        return;
    }

    position.y += (position.x / 8. + time * 0.5).sin() * RIPPLE_AMPLITUDE * dt;
}

/// Pushes away from the pointer in the xy plane.
pub fn repel(position: &mut Vector3<f32>, repulsion: &Repulsion, dt: f32) {
    let dx = position.x - repulsion.center.x;
    let dy = position.y - repulsion.center.y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist >= repulsion.radius || dist <= REPULSION_EPSILON {
        return;
    }

    let force = (repulsion.radius - dist) * repulsion.strength * dt * REPULSION_GAIN;
    position.x += dx / dist * force;
    position.y += dy / dist * force;
}

/// Per-frame particle integration.
pub struct Simulation {
    running: bool,
    time: f32,
    frames: u64,
}

impl Default for Simulation {
    fn default() -> Simulation {
        Simulation::new()
    }
}

impl Simulation {
    pub fn new() -> Simulation {
        Simulation {
            running: false,
            time: 0.,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns false without touching anything while stopped.
    pub fn step(&mut self, dt: f32, store: &mut ParticleStore, camera: &mut Camera, forces: &Forces) -> bool {
        if !self.running {
            return false;
        }

        self.time += dt;
        let time = self.time;

        let (positions, targets) = store.positions_and_targets_mut();

        for (i, (p, t)) in positions.chunks_exact_mut(3).zip(targets.chunks_exact(3)).enumerate() {
            let mut position = Vector3::new(p[0], p[1], p[2]);
            let target = Vector3::new(t[0], t[1], t[2]);

            ease(&mut position, &target, dt);
            wander(&mut position, &target, i, time);

            match forces.state {
                Some(SceneState::Projects) => spin(&mut position, dt),
                Some(SceneState::Contact) => ripple(&mut position, &target, time, dt),
                _ => (),
            }

            if let Some(repulsion) = &forces.repulsion {
                repel(&mut position, repulsion, dt);
            }

            p.copy_from_slice(position.as_slice());
        }

        if let Some(orbit) = &forces.orbit {
            orbit.apply(camera);
        }

        store.mark_positions_dirty();
        self.frames += 1;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn forces(state: SceneState) -> Forces {
        Forces {
            state: Some(state),
            repulsion: None,
            orbit: None,
        }
    }

    #[test]
    fn stopped_simulation_is_inert() {
        let mut store = ParticleStore::new(4, &mut StdRng::seed_from_u64(3));
        let mut camera = Camera::new(Vector3::new(0., 0., 75.));
        let before = store.positions().to_vec();

        let mut simulation = Simulation::new();
        assert!(!simulation.step(0.016, &mut store, &mut camera, &forces(SceneState::Home)));
        assert_eq!(store.positions(), before.as_slice());
        assert_eq!(simulation.frames(), 0);
    }

    #[test]
    fn ease_closes_gap() {
        let mut p = Vector3::new(10., 0., 0.);
        ease(&mut p, &Vector3::zeros(), 0.1);
        assert!((p.x - 7.).abs() < 1e-5);
    }

    #[test]
    fn wander_only_when_far() {
        let target = Vector3::zeros();

        let mut near = Vector3::new(0.1, 0., 0.);
        wander(&mut near, &target, 3, 1.);
        assert_eq!(near, Vector3::new(0.1, 0., 0.));

        let mut far = Vector3::new(5., 0., 0.);
        wander(&mut far, &target, 0, 0.);
        assert!((far - Vector3::new(5., WANDER_AMPLITUDE, 0.)).norm() < 1e-6);
    }

    #[test]
    fn spin_respects_radius() {
        let mut inside = Vector3::new(5., 1., 0.);
        spin(&mut inside, 0.5);
        assert!(((inside.x * inside.x + inside.z * inside.z).sqrt() - 5.).abs() < 1e-5);
        assert!(inside.z > 0.);
        assert_eq!(inside.y, 1.);

        let mut outside = Vector3::new(20., 0., 0.);
        spin(&mut outside, 0.5);
        assert_eq!(outside, Vector3::new(20., 0., 0.));
    }

    #[test]
    fn ripple_only_near_target_height() {
        let target = Vector3::new(0., 0., 0.);

        let mut far = Vector3::new(0., 5., 0.);
        ripple(&mut far, &target, 3., 0.1);
        assert_eq!(far.y, 5.);

        let mut near = Vector3::new(0., 0., 0.);
        ripple(&mut near, &target, std::f32::consts::PI, 0.1);
        assert!((near.y - RIPPLE_AMPLITUDE * 0.1).abs() < 1e-5);
    }

    #[test]
    fn repulsion_bounds() {
        let repulsion = Repulsion {
            center: Vector3::zeros(),
            radius: 5.,
            strength: 3.,
        };

        let mut on_center = Vector3::new(0.001, 0., 4.);
        repel(&mut on_center, &repulsion, 0.1);
        assert_eq!(on_center, Vector3::new(0.001, 0., 4.));

        let mut outside = Vector3::new(6., 0., 0.);
        repel(&mut outside, &repulsion, 0.1);
        assert_eq!(outside.x, 6.);

        let mut inside = Vector3::new(0., 2., 7.);
        repel(&mut inside, &repulsion, 0.1);
        assert!((inside.y - (2. + 3. * 3. * 0.1 * REPULSION_GAIN)).abs() < 1e-4);
        assert_eq!(inside.z, 7.);
    }

    #[test]
    fn step_counts_frames_and_flags_positions() {
        let mut store = ParticleStore::new(8, &mut StdRng::seed_from_u64(3));
        let mut camera = Camera::new(Vector3::new(0., 0., 75.));
        store.take_positions_dirty();

        let mut simulation = Simulation::new();
        simulation.start();
        assert!(simulation.step(0.016, &mut store, &mut camera, &forces(SceneState::About)));

        assert!(store.take_positions_dirty());
        assert_eq!(simulation.frames(), 1);
        assert!((simulation.time() - 0.016).abs() < 1e-6);
        assert_eq!(store.positions().len(), 24);
    }

    #[test]
    fn long_frames_land_on_target() {
        let target = Vector3::zeros();
        let mut p = Vector3::new(10., 0., 0.);

        for _ in 0..4 {
            ease(&mut p, &target, 1.);
            assert_eq!(p, target);
        }

        let mut p = Vector3::new(10., 0., 0.);
        ease(&mut p, &target, 0.25);
        assert!((p.x - 2.5).abs() < 1e-5);
    }

    #[test]
    fn suspended_state_skips_spin() {
        let mut store = ParticleStore::new(1, &mut StdRng::seed_from_u64(3));
        let mut camera = Camera::new(Vector3::new(0., 0., 75.));
        store.set_position(0, Vector3::new(5., 0., 0.));
        store.set_target(0, Vector3::new(5., 0., 0.));

        let mut simulation = Simulation::new();
        simulation.start();
        let suspended = Forces {
            state: None,
            repulsion: None,
            orbit: None,
        };
        for _ in 0..60 {
            simulation.step(1. / 60., &mut store, &mut camera, &suspended);
        }
        assert!((store.position(0) - Vector3::new(5., 0., 0.)).norm() < 1e-5);

        simulation.step(1. / 60., &mut store, &mut camera, &forces(SceneState::Projects));
        assert!((store.position(0) - Vector3::new(5., 0., 0.)).norm() > 1e-3);
    }

    #[test]
    fn orbit_keeps_camera_distance() {
        let mut camera = Camera::new(Vector3::new(0., 0., 60.));
        Orbit { yaw: 0.4, pitch: -0.3 }.apply(&mut camera);

        assert!((camera.position().norm() - 60.).abs() < 1e-3);
        let facing = (-camera.position()).normalize();
        assert!((camera.forward() - facing).norm() < 1e-4);
    }

    proptest! {
        #[test]
        fn easing_never_overshoots(x in -100f32..100., tx in -100f32..100., dt in 0f32..2.) {
            let mut p = Vector3::new(x, 0., 0.);
            let target = Vector3::new(tx, 0., 0.);
            let before = (p - target).norm();

            ease(&mut p, &target, dt);
            prop_assert!((p - target).norm() <= before + 1e-4);
        }
    }
}
