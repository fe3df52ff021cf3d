use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use shapes::{CoordinatePoint, CoordinateSet};
use utils::{centered, Rgb};

use crate::{ParticleStore, Ray};

/// Particles placed per brush dab.
pub const BRUSH_BATCH: usize = 3;
pub const BRUSH_SPREAD: f32 = 1.5;
pub const BRUSH_DEPTH_SPREAD: f32 = BRUSH_SPREAD * 0.5;

pub const DEFAULT_BRUSH_COLOR: &str = "#00f3ff";
pub const DEFAULT_BRUSH_STRENGTH: f32 = 50.;

#[derive(Debug, Clone, Default)]
pub struct PaintSession {
    next_index: usize,
    placed: CoordinateSet,
}

impl PaintSession {
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn placed(&self) -> &[CoordinatePoint] {
        &self.placed
    }
}

/// Free-draw mode placing particles along pointer rays.
pub struct Painter {
    session: Option<PaintSession>,
    stroking: bool,
    color: Rgb,
    strength: f32,
    rng: StdRng,
}

impl Painter {
    pub fn new(seed: Option<u64>) -> Painter {
        Painter {
            session: None,
            stroking: false,
            color: Rgb::from_hex(DEFAULT_BRUSH_COLOR).unwrap_or_default(),
            strength: DEFAULT_BRUSH_STRENGTH,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_stroking(&self) -> bool {
        self.stroking
    }

    pub fn session(&self) -> Option<&PaintSession> {
        self.session.as_ref()
    }

    pub fn placed_count(&self) -> usize {
        self.session.as_ref().map(|s| s.placed.len()).unwrap_or(0)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Starts a fresh session with every particle parked.
    pub fn enter(&mut self, store: &mut ParticleStore) {
        for i in 0..store.len() {
            store.park(i);
        }

        self.stroking = false;
        self.session = Some(PaintSession::default());
    }

    /// Ends the session, returns the placed points unless nothing was drawn.
    pub fn exit(&mut self) -> Option<CoordinateSet> {
        self.stroking = false;

        self.session
            .take()
            .map(|session| session.placed)
            .filter(|placed| !placed.is_empty())
    }

    pub fn begin_stroke(&mut self) {
        if self.is_active() {
            self.stroking = true;
        }
    }

    pub fn end_stroke(&mut self) {
        self.stroking = false;
    }

    /// Places up to one batch around the point at brush distance along `ray`.
    pub fn paint(&mut self, store: &mut ParticleStore, ray: &Ray) -> usize {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return 0,
        };

        let center = ray.at(self.strength);
        let mut placed = 0;

        while placed < BRUSH_BATCH && session.next_index < store.len() {
            let offset = Vector3::new(
                centered(self.rng.gen::<f32>(), BRUSH_SPREAD),
                centered(self.rng.gen::<f32>(), BRUSH_SPREAD),
                centered(self.rng.gen::<f32>(), BRUSH_DEPTH_SPREAD),
            );
            let position = center + offset;
            let i = session.next_index;

            store.set_position(i, position);
            store.set_target(i, position);
            store.set_color(i, self.color);

            session.placed.push(CoordinatePoint::Colored(position, self.color));
            session.next_index += 1;
            placed += 1;
        }

        if placed > 0 {
            debug!(placed = session.next_index, total = store.len(), "brush dab");
        }

        placed
    }

    /// Unparseable colours keep the previous brush colour.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Rgb::from_hex(hex) {
            Some(color) => {
                self.color = color;
                true
            }
            None => {
                warn!(hex, "ignoring invalid brush colour");
                false
            }
        }
    }

    pub fn set_strength(&mut self, strength: f32) {
        if strength.is_finite() {
            self.strength = strength;
        }
    }
}
