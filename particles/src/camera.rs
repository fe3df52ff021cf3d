use nalgebra::{Matrix3, Rotation3, Vector2, Vector3};

pub const FIELD_OF_VIEW: f32 = std::f32::consts::PI / 4.;
pub const NEAR_PLANE: f32 = 1.;
pub const FAR_PLANE: f32 = 1000.;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, distance: f32) -> Vector3<f32> {
        self.origin + self.direction * distance
    }

    /// Intersection with the plane `z = value`, none for rays parallel to it.
    pub fn intersect_z(&self, z: f32) -> Option<Vector3<f32>> {
        if self.direction.z.abs() < 1e-6 {
            return None;
        }

        let t = (z - self.origin.z) / self.direction.z;
        Some(self.at(t))
    }
}

/// Pose produced by a running camera tween, applied before each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingPose {
    pub position: Vector3<f32>,
    pub rotation_x: f32,
}

/// Perspective camera looking down its local -z axis.
///
/// The orientation is stored as XYZ euler angles so a tween can drive
/// `rotation.x` on its own.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vector3<f32>,
    rotation: Vector3<f32>,
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

fn euler_from_matrix(m: &Matrix3<f32>) -> Vector3<f32> {
    let m13 = m[(0, 2)].max(-1.).min(1.);
    let y = m13.asin();

    if m13.abs() < 0.999_999_9 {
        Vector3::new((-m[(1, 2)]).atan2(m[(2, 2)]), y, (-m[(0, 1)]).atan2(m[(0, 0)]))
    } else {
        Vector3::new(m[(2, 1)].atan2(m[(1, 1)]), y, 0.)
    }
}

impl Camera {
    pub fn new(position: Vector3<f32>) -> Camera {
        Camera {
            position,
            rotation: Vector3::zeros(),
            fov: FIELD_OF_VIEW,
            aspect: 1.,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Vector3<f32>) {
        self.rotation = rotation;
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0. {
            self.aspect = aspect;
        }
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn rotation_matrix(&self) -> Rotation3<f32> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.rotation.x)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.rotation.y)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), self.rotation.z)
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.rotation_matrix() * -Vector3::z()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.rotation_matrix() * Vector3::y()
    }

    pub fn look_at(&mut self, at: Vector3<f32>) {
        let up = Vector3::y();

        let mut z = self.position - at;
        if z.norm_squared() == 0. {
            z.z = 1.;
        }
        z.normalize_mut();

        let mut x = up.cross(&z);
        if x.norm_squared() == 0. {
            z.z += 0.0001;
            z.normalize_mut();
            x = up.cross(&z);
        }
        x.normalize_mut();

        let y = z.cross(&x);
        self.rotation = euler_from_matrix(&Matrix3::from_columns(&[x, y, z]));
    }

    pub fn apply(&mut self, pose: &PendingPose) {
        self.position = pose.position;
        self.rotation.x = pose.rotation_x;
    }

    /// World-space ray through a point in normalized device coordinates.
    pub fn ray(&self, ndc: Vector2<f32>) -> Ray {
        let tan = (self.fov / 2.).tan();
        let direction = Vector3::new(ndc.x * tan * self.aspect, ndc.y * tan, -1.);

        Ray::new(self.position, self.rotation_matrix() * direction)
    }
}
