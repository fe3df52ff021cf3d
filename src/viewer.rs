use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use clap::ArgMatches;
use tracing::info;

use particles::{Command, PointerButton, PointerTarget, Portfolio, SceneState};
use render::event::{Action, Key, MouseButton, WindowEvent};
use render::status::{Status, StatusHooks};

use crate::config_from_args;

const BRUSH_COLORS: [&str; 6] = ["#00f3ff", "#ff0080", "#8000ff", "#00ff80", "#ffffff", "#ffd000"];
const STRENGTH_STEP: f32 = 5.;
const SCROLL_STEP: f32 = 50.;
const MAX_FRAME_TIME: f32 = 0.1;

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Button1 => PointerButton::Primary,
        MouseButton::Button2 => PointerButton::Secondary,
        _ => PointerButton::Middle,
    }
}

/// Window side state not owned by the portfolio.
struct Controls {
    cursor: (f32, f32),
    scroll: f32,
    brush: usize,
    strength: f32,
    show_info: bool,
}

impl Controls {
    fn new() -> Controls {
        Controls {
            cursor: (0., 0.),
            scroll: 0.,
            brush: 0,
            strength: particles::DEFAULT_BRUSH_STRENGTH,
            show_info: true,
        }
    }

    /// Turns a window event into commands, true when the event was consumed.
    fn translate(&mut self, event: &WindowEvent, portfolio: &mut Portfolio) -> bool {
        match *event {
            WindowEvent::FramebufferSize(width, height) => {
                portfolio.push(Command::SurfaceResized {
                    rect: particles::SurfaceRect::new(width as f32, height as f32),
                });
                false
            }
            WindowEvent::CursorPos(x, y, _) => {
                self.cursor = (x as f32, y as f32);
                portfolio.push(Command::PointerMoved { x: x as f32, y: y as f32 });
                true
            }
            WindowEvent::MouseButton(button, Action::Press, _) => {
                portfolio.push(Command::PointerPressed {
                    button: pointer_button(button),
                    x: self.cursor.0,
                    y: self.cursor.1,
                    target: PointerTarget::Canvas,
                });
                true
            }
            WindowEvent::MouseButton(button, Action::Release, _) => {
                portfolio.push(Command::PointerReleased {
                    button: pointer_button(button),
                });
                true
            }
            WindowEvent::Scroll(_, dy, _) => {
                self.scroll = (self.scroll - dy as f32 * SCROLL_STEP).max(0.);
                portfolio.push(Command::ProjectsScrolled { offset: self.scroll });
                true
            }
            WindowEvent::Char(c) => {
                portfolio.push(Command::KeyPressed { key: c });
                true
            }
            WindowEvent::Key(key, Action::Release, _) => self.key_released(key, portfolio),
            _ => false,
        }
    }

    fn key_released(&mut self, key: Key, portfolio: &mut Portfolio) -> bool {
        let section = match key {
            Key::F1 => Some(0),
            Key::F2 => Some(1),
            Key::F3 => Some(2),
            Key::F4 => Some(3),
            _ => None,
        };

        if let Some(index) = section {
            let state = SceneState::SECTIONS[index];
            if state != SceneState::Projects {
                self.scroll = 0.;
            }
            portfolio.push(Command::StateRequested { state });
            return true;
        }

        match key {
            Key::F5 => {
                let command = if portfolio.painter().is_active() {
                    Command::PaintExited
                } else {
                    Command::PaintEntered
                };
                portfolio.push(command);
            }
            Key::F6 => {
                self.brush = (self.brush + 1) % BRUSH_COLORS.len();
                portfolio.push(Command::BrushColor {
                    hex: BRUSH_COLORS[self.brush].to_string(),
                });
            }
            Key::PageUp | Key::PageDown => {
                let step = if key == Key::PageUp { STRENGTH_STEP } else { -STRENGTH_STEP };
                self.strength = (self.strength + step).max(STRENGTH_STEP);
                portfolio.push(Command::BrushStrength { value: self.strength });
            }
            Key::I => self.show_info = !self.show_info,
            _ => return false,
        }

        true
    }
}

fn view(portfolio: &mut Portfolio, status: Rc<RefCell<Status>>) -> Result<(), Box<dyn std::error::Error>> {
    let mut renderer = render::scene::Scene::new("folio", portfolio.config().particle_size, portfolio.camera());
    let mut controls = Controls::new();

    portfolio.push(Command::SurfaceResized { rect: renderer.surface() });
    portfolio.start();

    let mut last_frame = Instant::now();

    while renderer.render() {
        let timer = Instant::now();
        let dt = last_frame.elapsed().as_secs_f32().min(MAX_FRAME_TIME);
        last_frame = timer;

        for mut event in renderer.window.events().iter() {
            if controls.translate(&event.value, portfolio) {
                event.inhibited = true;
            }
        }

        portfolio.tick(dt);

        renderer.sync(portfolio.store_mut());
        renderer.sync_camera(portfolio.camera());

        if controls.show_info {
            renderer.debug_text(&format!("\
                state: {}\n\
                {}\n\
                brush: {} @ {:.0}\n\
                frame: {:.3} ms\
                ", portfolio.current_state(), status.borrow().text(), BRUSH_COLORS[controls.brush], controls.strength, timer.elapsed().as_secs_f32() * 1000.));
        }
    }

    info!(frames = portfolio.simulation().frames(), "window closed");

    Ok(())
}

pub fn main_viewer(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_from_args(args)?;

    let status = Rc::new(RefCell::new(Status::default()));
    let now = Instant::now();
    let mut portfolio = Portfolio::with_ui(config, Box::new(StatusHooks(status.clone())));
    info!(elapsed_ms = now.elapsed().as_millis() as u64, "scene prepared");

    view(&mut portfolio, status)
}
