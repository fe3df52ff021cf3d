//! Hand-authored drawing programs for the icon silhouettes.
//!
//! Every icon is drawn on the same square canvas so the resulting point
//! clouds share a footprint of roughly 36 scene units.

use std::f32::consts::PI;

use nalgebra::Vector2;

use utils::Curve;

use crate::{Drawing, Language, Stroke};

pub const ICON_CANVAS: u32 = 300;
pub const ICON_SCALE: f32 = 0.12;

const CENTER: f32 = ICON_CANVAS as f32 / 2.;

#[inline]
fn p(x: f32, y: f32) -> Vector2<f32> {
    Vector2::new(x, y)
}

fn canvas() -> Drawing {
    Drawing::new(ICON_CANVAS, ICON_CANVAS, ICON_SCALE)
}

fn line(from: Vector2<f32>, to: Vector2<f32>, width: f32) -> Stroke {
    Stroke::Line { from, to, width }
}

fn ring(center: Vector2<f32>, radius: f32, width: f32) -> Stroke {
    Stroke::Arc { center, radius, start: 0., end: 2. * PI, width }
}

fn text(text: &str, center: Vector2<f32>, size: f32) -> Stroke {
    Stroke::Text { text: text.to_string(), center, size }
}

/// Standing person, arms slightly raised.
pub fn figure() -> Drawing {
    canvas()
        .with(Stroke::Circle { center: p(CENTER, 62.), radius: 28. })
        .with(line(p(CENTER, 100.), p(CENTER, 185.), 26.))
        .with(line(p(CENTER, 112.), p(92., 168.), 14.))
        .with(line(p(CENTER, 112.), p(208., 168.), 14.))
        .with(line(p(CENTER, 182.), p(108., 268.), 17.))
        .with(line(p(CENTER, 182.), p(192., 268.), 17.))
}

/// Repository host mark: a cat head inside a ring.
pub fn repo() -> Drawing {
    canvas()
        .with(ring(p(CENTER, CENTER), 118., 16.))
        .with(Stroke::Circle { center: p(CENTER, 138.), radius: 56. })
        .with(Stroke::Polygon { points: vec![p(98., 118.), p(104., 52.), p(140., 92.)] })
        .with(Stroke::Polygon { points: vec![p(202., 118.), p(196., 52.), p(160., 92.)] })
        .with(line(p(CENTER, 180.), p(CENTER, 262.), 34.))
        .with(Stroke::Curve {
            curve: Curve::Bezier {
                control_points: [p(128., 226.), p(100., 244.), p(84., 214.), p(62., 204.)],
            },
            width: 11.,
        })
}

/// Closed envelope with its flap folded down.
pub fn envelope() -> Drawing {
    let corners = [p(40., 78.), p(260., 78.), p(260., 222.), p(40., 222.), p(40., 78.)];

    let mut drawing = canvas();
    for pair in corners.windows(2) {
        drawing = drawing.with(line(pair[0], pair[1], 14.));
    }

    drawing
        .with(line(p(40., 78.), p(CENTER, 162.), 12.))
        .with(line(p(CENTER, 162.), p(260., 78.), 12.))
}

pub fn logo(language: Language) -> Drawing {
    match language {
        Language::Rust => rust_logo(),
        Language::Python => python_logo(),
        Language::Javascript => javascript_logo(),
        Language::Cpp => cpp_logo(),
    }
}

fn rust_logo() -> Drawing {
    let teeth = 16;
    let mut drawing = canvas().with(ring(p(CENTER, CENTER), 100., 20.));

    for i in 0..teeth {
        let angle = i as f32 / teeth as f32 * 2. * PI;
        let dir = p(angle.cos(), angle.sin());

        drawing = drawing.with(line(p(CENTER, CENTER) + dir * 108., p(CENTER, CENTER) + dir * 128., 14.));
    }

    drawing.with(text("R", p(CENTER, CENTER), 120.))
}

// Two interlocking snakes, point-symmetric around the canvas center.
fn python_logo() -> Drawing {
    canvas()
        .with(line(p(100., 58.), p(196., 58.), 48.))
        .with(line(p(100., 58.), p(100., 146.), 48.))
        .with(line(p(100., 146.), p(148., 146.), 30.))
        .with(Stroke::Circle { center: p(82., 42.), radius: 6. })
        .with(line(p(200., 242.), p(104., 242.), 48.))
        .with(line(p(200., 242.), p(200., 154.), 48.))
        .with(line(p(200., 154.), p(152., 154.), 30.))
        .with(Stroke::Circle { center: p(218., 258.), radius: 6. })
}

fn javascript_logo() -> Drawing {
    let corners = [p(42., 42.), p(258., 42.), p(258., 258.), p(42., 258.), p(42., 42.)];

    let mut drawing = canvas();
    for pair in corners.windows(2) {
        drawing = drawing.with(line(pair[0], pair[1], 14.));
    }

    drawing.with(text("JS", p(168., 182.), 104.))
}

fn cpp_logo() -> Drawing {
    canvas()
        .with(Stroke::Arc { center: p(118., CENTER), radius: 82., start: 0.7, end: 2. * PI - 0.7, width: 28. })
        .with(text("++", p(232., CENTER), 52.))
}
