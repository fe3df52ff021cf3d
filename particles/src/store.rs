use nalgebra::Vector3;
use rand::Rng;

use utils::{centered, vector3_from_const, Rgb};

/// Coordinate used to hide a particle out of view.
pub const PARKED: f32 = 9999.;

pub const INITIAL_SPREAD: f32 = 100.;
pub const INITIAL_COLOR: Rgb = Rgb::new(0., 1., 1.);

/// Flat `[x0, y0, z0, x1, ...]` buffers shared with the renderer.
///
/// The buffers are allocated once and keep their length for the whole
/// session. Writers flag which buffer changed so the renderer only
/// uploads what it must.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    positions: Vec<f32>,
    targets: Vec<f32>,
    colors: Vec<f32>,

    positions_dirty: bool,
    colors_dirty: bool,
}

fn read(buffer: &[f32], i: usize) -> Vector3<f32> {
    Vector3::new(buffer[i * 3], buffer[i * 3 + 1], buffer[i * 3 + 2])
}

fn write(buffer: &mut [f32], i: usize, value: Vector3<f32>) {
    buffer[i * 3] = value.x;
    buffer[i * 3 + 1] = value.y;
    buffer[i * 3 + 2] = value.z;
}

impl ParticleStore {
    pub fn new<R: Rng>(count: usize, rng: &mut R) -> ParticleStore {
        let positions: Vec<f32> = (0..count * 3).map(|_| centered(rng.gen::<f32>(), INITIAL_SPREAD)).collect();
        let targets = positions.clone();
        let colors = (0..count).flat_map(|_| INITIAL_COLOR.to_array().to_vec()).collect();

        ParticleStore {
            positions,
            targets,
            colors,
            positions_dirty: true,
            colors_dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn targets(&self) -> &[f32] {
        &self.targets
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut [f32] {
        &mut self.colors
    }

    /// Both buffers at once for the integration loop.
    pub fn positions_and_targets_mut(&mut self) -> (&mut [f32], &[f32]) {
        (&mut self.positions, &self.targets)
    }

    pub fn position(&self, i: usize) -> Vector3<f32> {
        read(&self.positions, i)
    }

    pub fn target(&self, i: usize) -> Vector3<f32> {
        read(&self.targets, i)
    }

    pub fn color(&self, i: usize) -> Rgb {
        Rgb::new(self.colors[i * 3], self.colors[i * 3 + 1], self.colors[i * 3 + 2])
    }

    pub fn set_position(&mut self, i: usize, position: Vector3<f32>) {
        write(&mut self.positions, i, position);
        self.positions_dirty = true;
    }

    pub fn set_target(&mut self, i: usize, target: Vector3<f32>) {
        write(&mut self.targets, i, target);
    }

    pub fn set_color(&mut self, i: usize, color: Rgb) {
        write(&mut self.colors, i, Vector3::new(color.r, color.g, color.b));
        self.colors_dirty = true;
    }

    /// Moves a particle and its target out of view.
    pub fn park(&mut self, i: usize) {
        let parked = vector3_from_const(PARKED);
        self.set_position(i, parked);
        self.set_target(i, parked);
        self.set_color(i, Rgb::BLACK);
    }

    pub fn is_parked(&self, i: usize) -> bool {
        self.position(i) == vector3_from_const(PARKED)
    }

    pub fn mark_positions_dirty(&mut self) {
        self.positions_dirty = true;
    }

    pub fn mark_colors_dirty(&mut self) {
        self.colors_dirty = true;
    }

    pub fn take_positions_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.positions_dirty, false)
    }

    pub fn take_colors_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.colors_dirty, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store(count: usize) -> ParticleStore {
        ParticleStore::new(count, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn initial_layout() {
        let store = store(20);

        assert_eq!(store.len(), 20);
        assert_eq!(store.positions().len(), 60);
        assert_eq!(store.targets(), store.positions());
        assert!(store.positions().iter().all(|v| v.abs() <= INITIAL_SPREAD / 2.));

        for i in 0..store.len() {
            assert_eq!(store.color(i), INITIAL_COLOR);
        }
    }

    #[test]
    fn dirty_flags_are_consumed() {
        let mut store = store(2);
        assert!(store.take_positions_dirty());
        assert!(!store.take_positions_dirty());

        store.set_position(1, Vector3::new(1., 2., 3.));
        assert!(store.take_positions_dirty());
        assert_eq!(store.position(1), Vector3::new(1., 2., 3.));

        assert!(store.take_colors_dirty());
        store.set_color(0, Rgb::new(0.5, 0.5, 0.5));
        assert!(store.take_colors_dirty());
    }

    #[test]
    fn parking_hides_particle() {
        let mut store = store(3);
        store.park(2);

        assert!(store.is_parked(2));
        assert!(!store.is_parked(0));
        assert_eq!(store.target(2), store.position(2));
        assert!(store.color(2).is_black());
        assert_eq!(store.positions().len(), 9);
    }
}
