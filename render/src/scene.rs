extern crate kiss3d;
extern crate nalgebra as na;

use kiss3d::camera::FirstPerson;
use kiss3d::text::Font;
use kiss3d::window::Window;

use particles::{Camera, ParticleStore, SurfaceRect, PARKED};

use self::na::{Point2, Point3, Vector3};

/// Pixels per world unit of configured particle size.
pub const POINT_SCALE: f32 = 8.;

fn to_point(v: Vector3<f32>) -> Point3<f32> {
    Point3::new(v.x, v.y, v.z)
}

pub struct Scene {
    pub window: Window,
    pub camera: FirstPerson,
    positions: Vec<Point3<f32>>,
    colors: Vec<Point3<f32>>,
}

impl Scene {
    pub fn new(title: &str, particle_size: f32, camera: &Camera) -> Scene {
        let eye = to_point(camera.position());
        let at = to_point(camera.position() + camera.forward());

        let mut scene = Scene {
            window: Window::new(title),
            camera: FirstPerson::new_with_frustrum(camera.fov(), camera.near(), camera.far(), eye, at),
            positions: vec![],
            colors: vec![],
        };

        scene.window.set_background_color(0., 0., 0.);
        scene.window.set_point_size(particle_size * POINT_SCALE);

        scene
    }

    pub fn surface(&self) -> SurfaceRect {
        SurfaceRect::new(self.window.width() as f32, self.window.height() as f32)
    }

    /// Copies the buffers the store flagged since the last call.
    pub fn sync(&mut self, store: &mut ParticleStore) -> bool {
        let positions_dirty = store.take_positions_dirty();
        let colors_dirty = store.take_colors_dirty();

        if positions_dirty || self.positions.len() != store.len() {
            self.positions = store
                .positions()
                .chunks_exact(3)
                .map(|p| Point3::new(p[0], p[1], p[2]))
                .collect();
        }

        if colors_dirty || self.colors.len() != store.len() {
            self.colors = store
                .colors()
                .chunks_exact(3)
                .map(|c| Point3::new(c[0], c[1], c[2]))
                .collect();
        }

        positions_dirty || colors_dirty
    }

    pub fn sync_camera(&mut self, camera: &Camera) {
        let eye = to_point(camera.position());
        self.camera.look_at(eye, eye + camera.forward());
    }

    pub fn debug_text(&mut self, text: &str) {
        self.window.draw_text(text, &Point2::new(10., 0.), 30.0, &Font::default(), &Point3::new(1., 1., 1.))
    }

    pub fn render(&mut self) -> bool {
        for (position, color) in self.positions.iter().zip(self.colors.iter()) {
            if position.x < PARKED {
                self.window.draw_point(position, color);
            }
        }

        self.window.render_with_camera(&mut self.camera)
    }
}
