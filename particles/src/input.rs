use std::collections::VecDeque;

use nalgebra::Vector2;
use serde_derive::*;

use crate::Orbit;

pub const DRAG_SENSITIVITY: f32 = 0.005;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

/// Drawing surface in client pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub fn new(width: f32, height: f32) -> SurfaceRect {
        SurfaceRect {
            left: 0.,
            top: 0.,
            width,
            height,
        }
    }

    pub fn aspect(&self) -> Option<f32> {
        if self.width > 0. && self.height > 0. {
            Some(self.width / self.height)
        } else {
            None
        }
    }

    /// Client pixels to `[-1, 1]` with y pointing up, none for a zero-sized surface.
    pub fn normalize(&self, x: f32, y: f32) -> Option<Vector2<f32>> {
        if self.width <= 0. || self.height <= 0. {
            return None;
        }

        Some(Vector2::new(
            (x - self.left) / self.width * 2. - 1.,
            -((y - self.top) / self.height) * 2. + 1.,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    pub dragging: bool,
    pub last: Vector2<f32>,
    pub yaw: f32,
    pub pitch: f32,
}

impl DragState {
    /// Orbit to apply this frame, none until the user ever dragged.
    pub fn orbit(&self) -> Option<Orbit> {
        if self.dragging || self.yaw != 0. || self.pitch != 0. {
            Some(Orbit {
                yaw: self.yaw,
                pitch: self.pitch,
            })
        } else {
            None
        }
    }
}

/// Sliding window over typed characters.
#[derive(Debug, Clone)]
pub struct KeyBuffer {
    code: Vec<char>,
    window: VecDeque<char>,
}

impl KeyBuffer {
    pub fn new(code: &str) -> KeyBuffer {
        let code: Vec<char> = code.chars().collect();
        KeyBuffer {
            window: VecDeque::with_capacity(code.len()),
            code,
        }
    }

    /// True once the window matches the code, the window is cleared on match.
    pub fn push(&mut self, c: char) -> bool {
        if self.code.is_empty() || c.is_control() {
            return false;
        }

        self.window.push_back(c);
        while self.window.len() > self.code.len() {
            self.window.pop_front();
        }

        let matched = self.window.iter().eq(self.code.iter());
        if matched {
            self.window.clear();
        }
        matched
    }

    pub fn window(&self) -> String {
        self.window.iter().collect()
    }
}

pub struct InputRouter {
    surface: SurfaceRect,
    pointer: Vector2<f32>,
    drag: DragState,
    keys: KeyBuffer,
}

impl InputRouter {
    pub fn new(surface: SurfaceRect, secret_code: &str) -> InputRouter {
        InputRouter {
            surface,
            pointer: Vector2::zeros(),
            drag: DragState::default(),
            keys: KeyBuffer::new(secret_code),
        }
    }

    pub fn surface(&self) -> SurfaceRect {
        self.surface
    }

    pub fn set_surface(&mut self, surface: SurfaceRect) {
        self.surface = surface;
    }

    pub fn pointer(&self) -> Vector2<f32> {
        self.pointer
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Off-surface or zero-sized surfaces keep the last pointer.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(pointer) = self.surface.normalize(x, y) {
            self.pointer = pointer;
        }

        if self.drag.dragging {
            let delta = Vector2::new(x, y) - self.drag.last;

            self.drag.yaw += delta.x * DRAG_SENSITIVITY;
            self.drag.pitch = (self.drag.pitch + delta.y * DRAG_SENSITIVITY).max(-PITCH_LIMIT).min(PITCH_LIMIT);
            self.drag.last = Vector2::new(x, y);
        }
    }

    pub fn drag_start(&mut self, x: f32, y: f32) {
        self.drag.dragging = true;
        self.drag.last = Vector2::new(x, y);
    }

    pub fn drag_end(&mut self) {
        self.drag.dragging = false;
    }

    pub fn key_pressed(&mut self, c: char) -> bool {
        self.keys.push(c)
    }
}
