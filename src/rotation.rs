use gl::types::*;
use na::{vector, Matrix4, Perspective3, Rotation3, Unit, Vector3};

/// Key driven movement for one update. Each axis is -1, 0 or 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Movement {
    pub horizontal: i32,
    pub vertical: i32,
}

impl Movement {
    pub fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub fn is_still(&self) -> bool {
        self.horizontal == 0 && self.vertical == 0
    }

    /// Up/down input turns the cube about x, left/right about -y.
    pub fn axis(&self) -> Option<Unit<Vector3<GLfloat>>> {
        if self.is_still() {
            return None;
        }
        let axis = vector![self.vertical as GLfloat, -self.horizontal as GLfloat, 0.0];
        Some(Unit::new_normalize(axis))
    }
}

/// Accumulated orientation of the cube.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeRotation {
    matrix: Matrix4<GLfloat>,
}

impl CubeRotation {
    pub fn new() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Turns the cube at one radian per second about the movement axis. New
    /// rotations are applied in view space, on the left.
    pub fn apply(&mut self, movement: Movement, delta_time: f64) {
        let Some(axis) = movement.axis() else {
            return;
        };
        let step = Rotation3::from_axis_angle(&axis, delta_time as GLfloat).to_homogeneous();
        self.matrix = step * self.matrix;
    }

    pub fn matrix(&self) -> Matrix4<GLfloat> {
        self.matrix
    }
}

impl Default for CubeRotation {
    fn default() -> Self {
        Self::new()
    }
}

/// Left-handed perspective with clip depth in [-1, 1]: the camera looks down
/// +z. `Perspective3` is right-handed, so z is mirrored before projecting.
pub fn perspective_lh(aspect: GLfloat, fovy: GLfloat, znear: GLfloat, zfar: GLfloat) -> Matrix4<GLfloat> {
    let mirror_z = Matrix4::new_nonuniform_scaling(&vector![1.0, 1.0, -1.0]);
    Perspective3::new(aspect, fovy, znear, zfar).to_homogeneous() * mirror_z
}
