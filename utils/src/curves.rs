use serde_derive::*;
use nalgebra::Vector2;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum Curve {
    #[serde(rename = "linear")]
    Linear {
        a: Vector2<f32>,
        b: Vector2<f32>,
    },
    #[serde(rename = "quadratic")]
    Quadratic {
        control_points: [Vector2<f32>; 3],
    },
    #[serde(rename = "bezier")]
    Bezier {
        control_points: [Vector2<f32>; 4],
    }
}

fn bernstein(control_points: &[Vector2<f32>], mults: &[f32], t: f32) -> Vector2<f32> {
    let tx = 1.0 - t;
    let mut result = Vector2::zeros();

    let len = control_points.len() as i32;

    for i in 0..len {
        let m = tx.powi(len - 1 - i) * t.powi(i) * mults[i as usize];
        result += control_points[i as usize] * m;
    }

    result
}

impl Curve {
    pub fn sample(&self, t: f32) -> Vector2<f32> {
        match self {
            Curve::Linear { a, b } => (*b - *a) * t + *a,
            Curve::Quadratic { control_points } => bernstein(control_points, &[1., 2., 1.], t),
            Curve::Bezier { control_points } => bernstein(control_points, &[1., 3., 3., 1.], t),
        }
    }

    /// Polyline through `segments + 1` evenly spaced samples, endpoints included.
    pub fn flatten(&self, segments: usize) -> Vec<Vector2<f32>> {
        let segments = segments.max(1);

        (0..=segments)
            .map(|i| self.sample(i as f32 / segments as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_passes_through_endpoints() {
        let curve = Curve::Bezier {
            control_points: [
                Vector2::new(0., 0.),
                Vector2::new(1., 2.),
                Vector2::new(3., 2.),
                Vector2::new(4., 0.),
            ],
        };

        assert!((curve.sample(0.) - Vector2::new(0., 0.)).norm() < 1e-6);
        assert!((curve.sample(1.) - Vector2::new(4., 0.)).norm() < 1e-6);
        assert!((curve.sample(0.5).x - 2.).abs() < 1e-6);
    }

    #[test]
    fn quadratic_midpoint() {
        let curve = Curve::Quadratic {
            control_points: [Vector2::new(0., 0.), Vector2::new(1., 2.), Vector2::new(2., 0.)],
        };

        let mid = curve.sample(0.5);
        assert!((mid - Vector2::new(1., 1.)).norm() < 1e-6);
    }

    #[test]
    fn flatten_sample_count() {
        let curve = Curve::Linear { a: Vector2::new(0., 0.), b: Vector2::new(10., 0.) };
        let points = curve.flatten(5);

        assert_eq!(points.len(), 6);
        assert!((points[3].x - 6.).abs() < 1e-5);
        assert_eq!(curve.flatten(0).len(), 2);
    }
}
