use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use shapes::{CoordinatePoint, ShapeGenerator};

use crate::{
    Camera, Command, Config, Forces, InputRouter, NoUi, Painter, ParticleStore, PointerButton, PointerTarget,
    Repulsion, SceneState, Simulation, SurfaceRect, Transition, TransitionController, UiHooks,
};

/// Scroll distance covered by one project entry.
pub const PROJECT_ITEM_HEIGHT: f32 = 150.;

fn derive_seed(seed: Option<u64>, stream: u64) -> Option<u64> {
    seed.map(|s| s.wrapping_add(stream))
}

/// Application context tying every component together.
pub struct Portfolio {
    config: Config,
    store: ParticleStore,
    shapes: ShapeGenerator,
    transition: TransitionController,
    camera: Camera,
    simulation: Simulation,
    painter: Painter,
    input: InputRouter,
    ui: Box<dyn UiHooks>,

    commands: VecDeque<Command>,
    project_index: Option<usize>,
}

impl Portfolio {
    pub fn new(config: Config) -> Portfolio {
        Portfolio::with_ui(config, Box::new(NoUi))
    }

    /// Generates every coordinate set and shows home.
    pub fn with_ui(config: Config, ui: Box<dyn UiHooks>) -> Portfolio {
        let count = config.particle_count;
        let seed = config.seed;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut shapes = ShapeGenerator::new(config.shapes.clone(), count, derive_seed(seed, 1));
        shapes.generate();

        let mut portfolio = Portfolio {
            store: ParticleStore::new(count, &mut rng),
            shapes,
            transition: TransitionController::new(derive_seed(seed, 2)),
            camera: Camera::new(config.camera_pose(SceneState::Home)),
            simulation: Simulation::new(),
            painter: Painter::new(derive_seed(seed, 3)),
            input: InputRouter::new(SurfaceRect::new(0., 0.), &config.secret_code),
            ui,
            commands: VecDeque::new(),
            project_index: None,
            config,
        };

        portfolio.install(Transition::to(SceneState::Home));
        info!(particles = count, "portfolio ready");

        portfolio
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn shapes(&self) -> &ShapeGenerator {
        &self.shapes
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn current_state(&self) -> SceneState {
        self.transition.current_state()
    }

    pub fn start(&mut self) {
        self.simulation.start();
    }

    pub fn stop(&mut self) {
        self.simulation.stop();
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Shows explicit coordinates for a state.
    pub fn set_targets(&mut self, transition: Transition, coords: &[CoordinatePoint]) {
        self.transition
            .set_targets(&mut self.store, &self.camera, &self.config, transition, coords);
        self.notify_state(transition.state);
    }

    /// Applies queued commands, then advances tweens and particles.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.process_commands();

        if !self.simulation.is_running() {
            return false;
        }

        if let Some(pose) = self.transition.advance(dt, &mut self.store) {
            self.camera.apply(&pose);
        }

        let forces = self.forces();
        self.simulation.step(dt, &mut self.store, &mut self.camera, &forces)
    }

    pub fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            self.handle(command);
        }
    }

    fn forces(&self) -> Forces {
        let repulsion = self
            .camera
            .ray(self.input.pointer())
            .intersect_z(0.)
            .map(|center| Repulsion {
                center,
                radius: self.config.repulsion_radius,
                strength: self.config.repulsion_strength,
            });

        let state = if self.painter.is_active() {
            None
        } else {
            Some(self.transition.current_state())
        };

        Forces {
            state,
            repulsion,
            orbit: self.input.drag().orbit(),
        }
    }

    fn install(&mut self, transition: Transition) {
        let key = transition.state.shape(&self.config.shapes);
        let coords = self.shapes.coords(key);

        self.transition
            .set_targets(&mut self.store, &self.camera, &self.config, transition, coords);
        self.project_index = None;
        self.notify_state(transition.state);
    }

    fn notify_state(&mut self, state: SceneState) {
        self.ui.hide_link_notification();
        self.ui.show_panel(state);
        self.ui.highlight_nav(state);
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::SurfaceResized { rect } => {
                self.input.set_surface(rect);
                if let Some(aspect) = rect.aspect() {
                    self.camera.set_aspect(aspect);
                }
            }
            Command::PointerMoved { x, y } => {
                self.input.pointer_moved(x, y);
                if self.painter.is_stroking() {
                    self.paint_at_pointer();
                }
            }
            Command::PointerPressed { button, x, y, target } => {
                self.input.pointer_moved(x, y);

                if button == PointerButton::Primary {
                    if target == PointerTarget::Canvas {
                        self.input.drag_start(x, y);
                    }
                    if self.painter.is_active() && target != PointerTarget::PaintUi {
                        self.painter.begin_stroke();
                        self.paint_at_pointer();
                    }
                }
            }
            Command::PointerReleased { button } => {
                self.input.drag_end();
                if button == PointerButton::Primary {
                    self.painter.end_stroke();
                }
            }
            Command::KeyPressed { key } => {
                if self.input.key_pressed(key) {
                    self.secret_code_entered();
                }
            }
            Command::StateRequested { state } => {
                if self.painter.is_active() {
                    debug!(state = %state, "state request ignored while painting");
                    return;
                }

                info!(state = %state, "state requested");
                self.install(Transition::to(state));
            }
            Command::ProjectsScrolled { offset } => self.projects_scrolled(offset),
            Command::PaintEntered => self.enter_paint(),
            Command::PaintExited => self.exit_paint(),
            Command::BrushColor { hex } => {
                self.painter.set_color(&hex);
            }
            Command::BrushStrength { value } => self.painter.set_strength(value),
        }
    }

    fn secret_code_entered(&mut self) {
        info!("secret code entered");
        let text = self.config.secret_text.clone();
        self.shapes.update_home_text(&text);

        if self.current_state() == SceneState::Home && !self.painter.is_active() {
            self.install(Transition::to(SceneState::Home));
        }
    }

    fn projects_scrolled(&mut self, offset: f32) {
        if self.painter.is_active() || self.current_state() != SceneState::Projects {
            return;
        }

        let index = (offset.max(0.) / PROJECT_ITEM_HEIGHT).floor() as usize;
        if self.project_index == Some(index) {
            return;
        }

        let coords = match self.shapes.language_logo(index) {
            Some(coords) if !coords.is_empty() => coords,
            _ => return,
        };

        let transition = Transition::to(SceneState::Projects).without_camera();
        self.transition
            .set_targets(&mut self.store, &self.camera, &self.config, transition, coords);
        self.project_index = Some(index);
        self.notify_state(SceneState::Projects);
    }

    fn enter_paint(&mut self) {
        if self.painter.is_active() {
            return;
        }

        info!("paint mode entered");
        self.transition.cancel_color_tween();
        self.painter.enter(&mut self.store);

        self.ui.paint_mode_changed(true);
        self.ui.paint_counter(0, self.store.len());
    }

    fn exit_paint(&mut self) {
        if !self.painter.is_active() {
            return;
        }

        if let Some(placed) = self.painter.exit() {
            info!(points = placed.len(), "painting kept as home");
            self.shapes.set_home(placed);
        }

        self.ui.paint_mode_changed(false);
        self.install(Transition::to(SceneState::Home));
    }

    fn paint_at_pointer(&mut self) {
        let ray = self.camera.ray(self.input.pointer());

        if self.painter.paint(&mut self.store, &ray) > 0 {
            self.ui.paint_counter(self.painter.placed_count(), self.store.len());
        }
    }
}
