//! Row-major 4x4 homogeneous transform matrices.
//!
//! All constructors are pure and side-effect-free. Points transform as
//! row vectors (`point x matrix`), so the translation lives in the last
//! row and a parent transform multiplies on the LEFT of a child's local
//! matrix. Composition order is the single most safety-critical invariant
//! in this module: getting it wrong produces a silently skewed scene, not
//! an error.

use std::f32::consts::PI;
use std::ops::Mul;

/// A 4x4 homogeneous transform, 16 floats in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4 {
    m: [f32; 16],
}

impl Mat4 {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Builds a matrix from 16 row-major elements.
    pub fn from_rows(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Translation by `(tx, ty, tz)`.
    pub fn translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self {
            m: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                tx, ty, tz, 1.0,
            ],
        }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        Self {
            m: [
                sx, 0.0, 0.0, 0.0, //
                0.0, sy, 0.0, 0.0, //
                0.0, 0.0, sz, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Rotation of `angle` degrees about the axis `(x, y, z)`.
    ///
    /// The axis is normalized internally before building the Rodrigues-form
    /// rotation matrix (the classic glRotate construction). A zero-length
    /// axis is a caller error and produces NaN entries.
    pub fn rotation(angle: f32, x: f32, y: f32, z: f32) -> Self {
        let axis_length = (x * x + y * y + z * z).sqrt();
        let s = (angle * PI / 180.0).sin();
        let c = (angle * PI / 180.0).cos();
        let one_minus_c = 1.0 - c;
        let x = x / axis_length;
        let y = y / axis_length;
        let z = z / axis_length;

        let (x2, y2, z2) = (x * x, y * y, z * z);
        let (xy, yz, xz) = (x * y, y * z, x * z);
        let (xs, ys, zs) = (x * s, y * s, z * s);

        Self {
            m: [
                x2 * one_minus_c + c,
                xy * one_minus_c + zs,
                xz * one_minus_c - ys,
                0.0,
                //
                xy * one_minus_c - zs,
                y2 * one_minus_c + c,
                yz * one_minus_c + xs,
                0.0,
                //
                xz * one_minus_c + ys,
                yz * one_minus_c - xs,
                z2 * one_minus_c + c,
                0.0,
                //
                0.0,
                0.0,
                0.0,
                1.0,
            ],
        }
    }

    /// Orthographic projection over the box `[left,right] x [bottom,top] x [near,far]`.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            m: [
                2.0 / (right - left),
                0.0,
                0.0,
                0.0,
                //
                0.0,
                2.0 / (top - bottom),
                0.0,
                0.0,
                //
                0.0,
                0.0,
                -2.0 / (far - near),
                0.0,
                //
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                1.0,
            ],
        }
    }

    /// Perspective projection from a vertical field of view in degrees.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = (PI * 0.5 - 0.5 * fov_y * PI / 180.0).tan();
        let range_inv = 1.0 / (near - far);

        Self {
            m: [
                f / aspect,
                0.0,
                0.0,
                0.0,
                //
                0.0,
                f,
                0.0,
                0.0,
                //
                0.0,
                0.0,
                (near + far) * range_inv,
                -1.0,
                //
                0.0,
                0.0,
                near * far * range_inv * 2.0,
                0.0,
            ],
        }
    }

    /// Matrix product `self x other`:
    /// `result[row, col] = sum over i of self[row, i] * other[i, col]`.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let mut result = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for i in 0..4 {
                    sum += self.m[row * 4 + i] * other.m[i * 4 + col];
                }
                result[row * 4 + col] = sum;
            }
        }
        Mat4 { m: result }
    }

    /// Transforms a point using the row-vector convention, including the
    /// perspective divide. For affine transforms `w` stays 1 and the divide
    /// is a no-op.
    pub fn transform_point(&self, point: [f32; 3]) -> [f32; 3] {
        let [px, py, pz] = point;
        let mut out = [0.0f32; 4];
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = px * self.m[col]
                + py * self.m[4 + col]
                + pz * self.m[8 + col]
                + self.m[12 + col];
        }
        let w = out[3];
        [out[0] / w, out[1] / w, out[2] / w]
    }

    /// The 16 row-major elements, ready for upload.
    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}
