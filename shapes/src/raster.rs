use std::path::Path;

use image::{GrayImage, Luma};
use nalgebra::Vector2;
use rayon::prelude::*;
use serde_derive::*;

use utils::Curve;

use crate::font::{self, GLYPH_ADVANCE, GLYPH_COLUMNS, GLYPH_ROWS};
use crate::{CoordinatePoint, CoordinateSet};

/// Only every `SAMPLE_STEP`-th pixel on both axes is inspected.
pub const SAMPLE_STEP: u32 = 3;

/// Pixels brighter than this (out of 255) become points.
pub const LUMINANCE_THRESHOLD: u8 = 50;

pub const TEXT_CANVAS_WIDTH: u32 = 800;
pub const TEXT_CANVAS_HEIGHT: u32 = 200;

// The em box is 8 glyph cells tall, leaving a cell of leading.
const TEXT_CELLS_PER_EM: f32 = 8.;

const CURVE_SEGMENTS: usize = 24;

const INK: Luma<u8> = Luma([255]);

/// One drawing instruction, in canvas pixels (y grows downward).
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stroke {
    Rect {
        origin: Vector2<f32>,
        size: Vector2<f32>,
    },
    Circle {
        center: Vector2<f32>,
        radius: f32,
    },
    Polygon {
        points: Vec<Vector2<f32>>,
    },
    Line {
        from: Vector2<f32>,
        to: Vector2<f32>,
        width: f32,
    },
    /// Angles in radians, measured from +x toward +y (clockwise on screen).
    Arc {
        center: Vector2<f32>,
        radius: f32,
        start: f32,
        end: f32,
        width: f32,
    },
    Curve {
        curve: Curve,
        width: f32,
    },
    Text {
        text: String,
        center: Vector2<f32>,
        size: f32,
    },
}

#[inline]
fn v2(x: f32, y: f32) -> Vector2<f32> {
    Vector2::new(x, y)
}

fn distance_to_segment(p: Vector2<f32>, a: Vector2<f32>, b: Vector2<f32>) -> f32 {
    let ab = b - a;
    let len2 = ab.norm_squared();

    if len2 == 0. {
        return (p - a).norm();
    }

    let t = ((p - a).dot(&ab) / len2).max(0.).min(1.);
    (p - (a + ab * t)).norm()
}

fn polygon_contains(points: &[Vector2<f32>], p: Vector2<f32>) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;

    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);

        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }

        j = i;
    }

    inside
}

fn bounds(points: &[Vector2<f32>]) -> (Vector2<f32>, Vector2<f32>) {
    points.iter().fold(
        (v2(std::f32::INFINITY, std::f32::INFINITY), v2(std::f32::NEG_INFINITY, std::f32::NEG_INFINITY)),
        |(min, max), p| (v2(min.x.min(p.x), min.y.min(p.y)), v2(max.x.max(p.x), max.y.max(p.y))),
    )
}

/// Off-screen monochrome canvas: black background, everything is drawn white.
pub struct Raster {
    image: GrayImage,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Raster {
        Raster {
            image: GrayImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[0]
    }

    pub fn lit_pixels(&self) -> usize {
        self.image.pixels().filter(|p| p.0[0] > LUMINANCE_THRESHOLD).count()
    }

    /// Lights every pixel of the box whose center satisfies `inside`.
    fn fill_where<F: Fn(Vector2<f32>) -> bool>(&mut self, min: Vector2<f32>, max: Vector2<f32>, inside: F) {
        let width = self.image.width() as i64;
        let height = self.image.height() as i64;

        if width == 0 || height == 0 || !min.x.is_finite() || !max.x.is_finite() {
            return;
        }

        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(width - 1);
        let y1 = (max.y.ceil() as i64).min(height - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                if inside(v2(x as f32 + 0.5, y as f32 + 0.5)) {
                    self.image.put_pixel(x as u32, y as u32, INK);
                }
            }
        }
    }

    pub fn fill_rect(&mut self, origin: Vector2<f32>, size: Vector2<f32>) {
        let end = origin + size;

        self.fill_where(origin, end, |p| p.x >= origin.x && p.x < end.x && p.y >= origin.y && p.y < end.y);
    }

    pub fn fill_circle(&mut self, center: Vector2<f32>, radius: f32) {
        let r = v2(radius, radius);

        self.fill_where(center - r, center + r, |p| (p - center).norm() <= radius);
    }

    pub fn fill_polygon(&mut self, points: &[Vector2<f32>]) {
        if points.len() < 3 {
            return;
        }

        let (min, max) = bounds(points);
        self.fill_where(min, max, |p| polygon_contains(points, p));
    }

    /// Thick segment with round caps.
    pub fn stroke_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, width: f32) {
        let half = width / 2.;
        let (min, max) = bounds(&[from, to]);

        self.fill_where(min - v2(half, half), max + v2(half, half), |p| distance_to_segment(p, from, to) <= half);
    }

    pub fn stroke_polyline(&mut self, points: &[Vector2<f32>], width: f32) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], width);
        }
    }

    pub fn stroke_arc(&mut self, center: Vector2<f32>, radius: f32, start: f32, end: f32, width: f32) {
        let sweep = end - start;
        let segments = (sweep.abs() / (std::f32::consts::PI / 32.)).ceil().max(1.) as usize;

        let points: Vec<Vector2<f32>> = (0..=segments)
            .map(|i| {
                let angle = start + sweep * i as f32 / segments as f32;
                center + v2(angle.cos(), angle.sin()) * radius
            })
            .collect();

        self.stroke_polyline(&points, width);
    }

    pub fn stroke_curve(&mut self, curve: &Curve, width: f32) {
        self.stroke_polyline(&curve.flatten(CURVE_SEGMENTS), width);
    }

    /// Block text centered on `center`; `size` is the em height in pixels.
    pub fn fill_text(&mut self, text: &str, center: Vector2<f32>, size: f32) {
        let chars: Vec<char> = text.chars().collect();

        if chars.is_empty() {
            return;
        }

        let cell = size / TEXT_CELLS_PER_EM;
        let columns = chars.len() * GLYPH_ADVANCE - (GLYPH_ADVANCE - GLYPH_COLUMNS);

        let left = center.x - columns as f32 * cell / 2.;
        let top = center.y - GLYPH_ROWS as f32 * cell / 2.;

        for (i, c) in chars.iter().enumerate() {
            let glyph = match font::glyph(*c) {
                Some(g) => g,
                None => continue,
            };

            for row in 0..GLYPH_ROWS {
                for col in 0..GLYPH_COLUMNS {
                    if font::is_set(glyph, row, col) {
                        let x = left + (i * GLYPH_ADVANCE + col) as f32 * cell;
                        let y = top + row as f32 * cell;

                        self.fill_rect(v2(x, y), v2(cell, cell));
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, stroke: &Stroke) {
        match stroke {
            Stroke::Rect { origin, size } => self.fill_rect(*origin, *size),
            Stroke::Circle { center, radius } => self.fill_circle(*center, *radius),
            Stroke::Polygon { points } => self.fill_polygon(points),
            Stroke::Line { from, to, width } => self.stroke_line(*from, *to, *width),
            Stroke::Arc { center, radius, start, end, width } => self.stroke_arc(*center, *radius, *start, *end, *width),
            Stroke::Curve { curve, width } => self.stroke_curve(curve, *width),
            Stroke::Text { text, center, size } => self.fill_text(text, *center, *size),
        }
    }

    /// Scans the canvas on a `step` pixel stride and maps every lit sample to
    /// scene space, canvas center at the origin and y pointing up.
    pub fn sample(&self, step: u32, threshold: u8, scale: f32) -> CoordinateSet {
        let (width, height) = self.image.dimensions();
        let step = step.max(1);
        let rows = (height + step - 1) / step;

        let half_w = width as f32 / 2.;
        let half_h = height as f32 / 2.;

        (0..rows)
            .into_par_iter()
            .flat_map(|row| {
                let y = row * step;

                (0..width)
                    .step_by(step as usize)
                    .filter(|&x| self.image.get_pixel(x, y).0[0] > threshold)
                    .map(|x| CoordinatePoint::plain((x as f32 - half_w) * scale, -(y as f32 - half_h) * scale, 0.))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        self.image.save(path)?;
        Ok(())
    }
}

/// A drawing program: canvas size, pixel-to-scene scale and instructions.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Drawing {
    pub width: u32,
    pub height: u32,
    pub scale: f32,
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new(width: u32, height: u32, scale: f32) -> Drawing {
        Drawing {
            width,
            height,
            scale,
            strokes: Vec::new(),
        }
    }

    /// Single line of text centered on the text canvas.
    pub fn text(text: &str, size: f32, scale: f32) -> Drawing {
        Drawing::new(TEXT_CANVAS_WIDTH, TEXT_CANVAS_HEIGHT, scale).with(Stroke::Text {
            text: text.to_string(),
            center: v2(TEXT_CANVAS_WIDTH as f32 / 2., TEXT_CANVAS_HEIGHT as f32 / 2.),
            size,
        })
    }

    pub fn with(mut self, stroke: Stroke) -> Drawing {
        self.strokes.push(stroke);
        self
    }

    pub fn rasterize(&self) -> Raster {
        let mut raster = Raster::new(self.width, self.height);

        for stroke in &self.strokes {
            raster.draw(stroke);
        }

        raster
    }

    pub fn sample(&self) -> CoordinateSet {
        self.rasterize().sample(SAMPLE_STEP, LUMINANCE_THRESHOLD, self.scale)
    }
}
