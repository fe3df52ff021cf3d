use std::collections::HashMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::*;
use tracing::debug;

use crate::icons;
use crate::{helix, sphere, wave_grid, CoordinatePoint, CoordinateSet, Drawing};

pub const HOME_TEXT_SIZE: f32 = 80.;
pub const SECRET_TEXT_SIZE: f32 = 60.;
pub const TEXT_SCALE: f32 = 0.25;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Rust,
    Python,
    Javascript,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Rust, Language::Python, Language::Javascript, Language::Cpp];
}

/// Names of the cached coordinate sets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKey {
    Home,
    Sphere,
    Helix,
    Wave,
    Figure,
    Repo,
    Envelope,
    Logo(Language),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ShapeConfig {
    pub home_text: String,
    pub sphere_radius: f32,
    pub helix_radius: f32,
    pub helix_height: f32,
    pub helix_turns: f32,
    pub grid_size: usize,
    pub grid_step: f32,

    /// Shapes shown for the non-home sections.
    pub about: ShapeKey,
    pub projects: ShapeKey,
    pub contact: ShapeKey,
}

impl Default for ShapeConfig {
    fn default() -> ShapeConfig {
        ShapeConfig {
            home_text: "RICKY".to_string(),
            sphere_radius: 12.,
            helix_radius: 8.,
            helix_height: 40.,
            helix_turns: 3.,
            grid_size: 60,
            grid_step: 0.8,
            about: ShapeKey::Sphere,
            projects: ShapeKey::Helix,
            contact: ShapeKey::Wave,
        }
    }
}

/// Produces and caches every named coordinate set.
pub struct ShapeGenerator {
    config: ShapeConfig,
    particle_count: usize,
    sets: HashMap<ShapeKey, CoordinateSet>,
    rng: StdRng,
}

impl ShapeGenerator {
    pub fn new(config: ShapeConfig, particle_count: usize, seed: Option<u64>) -> ShapeGenerator {
        ShapeGenerator {
            config,
            particle_count,
            sets: HashMap::new(),
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    pub fn config(&self) -> &ShapeConfig {
        &self.config
    }

    /// Fills every set. Sphere and wave floor are resampled on each call.
    pub fn generate(&mut self) -> bool {
        let now = Instant::now();
        let n = self.particle_count;

        let c = &self.config;

        let home = Drawing::text(&c.home_text, HOME_TEXT_SIZE, TEXT_SCALE).sample();
        let sphere = sphere(n, c.sphere_radius, &mut self.rng);
        let helix = helix(n, c.helix_radius, c.helix_height, c.helix_turns);
        let wave = wave_grid(n, c.grid_size, c.grid_step, &mut self.rng);

        self.sets.insert(ShapeKey::Home, home);
        self.sets.insert(ShapeKey::Sphere, sphere);
        self.sets.insert(ShapeKey::Helix, helix);
        self.sets.insert(ShapeKey::Wave, wave);

        self.sets.insert(ShapeKey::Figure, icons::figure().sample());
        self.sets.insert(ShapeKey::Repo, icons::repo().sample());
        self.sets.insert(ShapeKey::Envelope, icons::envelope().sample());

        for language in Language::ALL.iter() {
            self.sets.insert(ShapeKey::Logo(*language), icons::logo(*language).sample());
        }

        debug!(
            home = self.coords(ShapeKey::Home).len(),
            elapsed_ms = now.elapsed().as_millis() as u64,
            "coordinate sets generated"
        );

        true
    }

    /// Empty until `generate` ran, callers fall back to scatter.
    pub fn coords(&self, key: ShapeKey) -> &[CoordinatePoint] {
        self.sets.get(&key).map(|s| s.as_slice()).unwrap_or(&[])
    }

    pub fn home(&self) -> &[CoordinatePoint] {
        self.coords(ShapeKey::Home)
    }

    /// Re-rasterizes the home text with the smaller secret font.
    pub fn update_home_text(&mut self, text: &str) -> &[CoordinatePoint] {
        let coords = Drawing::text(text, SECRET_TEXT_SIZE, TEXT_SCALE).sample();
        debug!(text, points = coords.len(), "home text replaced");

        self.set_home(coords);
        self.home()
    }

    pub fn set_home(&mut self, coords: CoordinateSet) {
        self.sets.insert(ShapeKey::Home, coords);
    }

    pub fn language_logo(&self, index: usize) -> Option<&[CoordinatePoint]> {
        Language::ALL
            .get(index)
            .map(|language| self.coords(ShapeKey::Logo(*language)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(count: usize) -> ShapeGenerator {
        let mut generator = ShapeGenerator::new(ShapeConfig::default(), count, Some(42));
        assert!(generator.generate());
        generator
    }

    #[test]
    fn sets_are_empty_before_generate() {
        let generator = ShapeGenerator::new(ShapeConfig::default(), 100, Some(1));
        assert!(generator.home().is_empty());
        assert!(generator.language_logo(0).unwrap().is_empty());
    }

    #[test]
    fn parametric_sets_match_particle_count() {
        let generator = generator(500);

        assert_eq!(generator.coords(ShapeKey::Sphere).len(), 500);
        assert_eq!(generator.coords(ShapeKey::Helix).len(), 500);
        assert_eq!(generator.coords(ShapeKey::Wave).len(), 500);
        assert!(!generator.home().is_empty());
    }

    #[test]
    fn text_rasterization_is_deterministic() {
        let a = generator(10);
        let b = generator(10);

        assert_eq!(a.home(), b.home());
        assert_eq!(a.coords(ShapeKey::Figure), b.coords(ShapeKey::Figure));
    }

    #[test]
    fn secret_text_replaces_home() {
        let mut generator = generator(10);
        let before = generator.home().to_vec();

        let after = generator.update_home_text("Yay Ricky!").to_vec();
        assert!(!after.is_empty());
        assert_ne!(before, after);
        assert_eq!(generator.home(), after.as_slice());
    }

    #[test]
    fn language_logo_bounds() {
        let generator = generator(10);

        for i in 0..Language::ALL.len() {
            assert!(!generator.language_logo(i).unwrap().is_empty());
        }
        assert!(generator.language_logo(Language::ALL.len()).is_none());
    }
}
