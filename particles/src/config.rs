use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use nalgebra::Vector3;
use serde_derive::*;

use shapes::ShapeConfig;
use utils::Rgb;

use crate::SceneState;

/// Colour used when neither the state nor home has one configured.
pub const FALLBACK_COLOR: Rgb = Rgb::new(0., 0.95, 1.);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, z: f32) -> Pose {
        Pose { x, y, z }
    }

    pub fn to_vector(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub particle_count: usize,
    pub particle_size: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub secret_code: String,
    pub secret_text: String,

    pub colors: BTreeMap<SceneState, Rgb>,
    pub cameras: BTreeMap<SceneState, Pose>,

    pub shapes: ShapeConfig,

    /// Fixed seed for every random source, entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Config {
        let mut colors = BTreeMap::new();
        colors.insert(SceneState::Home, FALLBACK_COLOR);
        colors.insert(SceneState::About, Rgb::new(1., 0., 0.5));
        colors.insert(SceneState::Projects, Rgb::new(0.5, 0., 1.));
        colors.insert(SceneState::Contact, Rgb::new(0., 1., 0.5));

        let mut cameras = BTreeMap::new();
        cameras.insert(SceneState::Home, Pose::new(0., 0., 75.));
        cameras.insert(SceneState::About, Pose::new(0., 0., 60.));
        cameras.insert(SceneState::Projects, Pose::new(0., 0., 60.));
        cameras.insert(SceneState::Contact, Pose::new(0., 20., 50.));

        Config {
            particle_count: 5000,
            particle_size: 0.55,
            repulsion_radius: 5.,
            repulsion_strength: 3.,
            secret_code: "Barisal07".to_string(),
            secret_text: "Yay Ricky!".to_string(),
            colors,
            cameras,
            shapes: ShapeConfig::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Logo states and unconfigured states reuse the home colour.
    pub fn color(&self, state: SceneState) -> Rgb {
        self.colors
            .get(&state)
            .or_else(|| self.colors.get(&SceneState::Home))
            .copied()
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn camera_pose(&self, state: SceneState) -> Vector3<f32> {
        self.cameras
            .get(&state)
            .or_else(|| self.cameras.get(&SceneState::Home))
            .map(|p| p.to_vector())
            .unwrap_or_else(|| Vector3::new(0., 0., 75.))
    }

    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.particle_count == 0 {
            return Err("particle_count must be at least 1".into());
        }

        if self.secret_code.is_empty() {
            return Err("secret_code must not be empty".into());
        }

        if self.repulsion_radius <= 0. {
            return Err(format!("repulsion_radius must be positive, got {}", self.repulsion_radius).into());
        }

        if self.particle_size <= 0. {
            return Err(format!("particle_size must be positive, got {}", self.particle_size).into());
        }

        let shapes = &self.shapes;
        if shapes.sphere_radius <= 0. || shapes.helix_radius <= 0. || shapes.grid_size == 0 || shapes.grid_step <= 0. {
            return Err("shape radii and grid dimensions must be positive".into());
        }

        Ok(())
    }
}

/// Reads a YAML configuration, an empty file yields the defaults.
pub fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let mut content = String::new();
    File::open(path)?.read_to_string(&mut content)?;

    let config: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("particle_count: 12\nseed: 3\n").unwrap();

        assert_eq!(config.particle_count, 12);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.secret_code, "Barisal07");
        assert_eq!(config.shapes.grid_size, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn logo_states_fall_back_to_home() {
        let config = Config::default();

        assert_eq!(config.color(SceneState::RustLogo), config.color(SceneState::Home));
        assert_eq!(config.camera_pose(SceneState::CppLogo), Vector3::new(0., 0., 75.));
        assert_eq!(config.camera_pose(SceneState::Contact), Vector3::new(0., 20., 50.));
    }

    #[test]
    fn state_maps_are_keyed_by_name() {
        let yaml = "colors:\n  about:\n    r: 0.1\n    g: 0.2\n    b: 0.3\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.color(SceneState::About), Rgb::new(0.1, 0.2, 0.3));
        // Home is no longer configured.
        assert_eq!(config.color(SceneState::Home), FALLBACK_COLOR);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut config = Config::default();
        config.particle_count = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.secret_code.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shapes.grid_size = 0;
        assert!(config.validate().is_err());
    }
}
