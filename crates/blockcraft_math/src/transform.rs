//! Construction of transformation matrices.
//!
//! All matrices produced here follow the row-vector convention of
//! [`Matrix4x4`]: a vector is transformed as `v' = v * M`, and a chain
//! `A * B` of such matrices applies `A` before `B`.

use crate::{angle::Angle, matrix::Matrix4x4, vector::Vector4};

impl Matrix4x4 {
    /// Creates a matrix rotating by the given angle in radians about the
    /// x-axis.
    ///
    /// The lower-right 2x2 block of the y/z rows and columns holds
    /// `[[cos, -sin], [sin, cos]]`. This is a right-handed rotation for column
    /// vectors; a row vector transformed as `v * M` is rotated by `-angle`.
    pub fn rotation_x(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// y-axis.
    ///
    /// The x/z rows and columns hold `[[cos, sin], [-sin, cos]]`, the sign
    /// pattern that keeps the rotation right-handed about y for column
    /// vectors.
    pub fn rotation_y(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// z-axis.
    pub fn rotation_z(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a rotation matrix from the x-, y- and z-components of the given
    /// vector, which are interpreted as angles in radians about the
    /// corresponding axes. The w-component is ignored.
    ///
    /// The result is always `rotation_x(x) * rotation_y(y) * rotation_z(z)`.
    /// No other composition order is supported.
    pub fn rotation(angles: &Vector4) -> Self {
        Self::rotation_x(angles.x()) * Self::rotation_y(angles.y()) * Self::rotation_z(angles.z())
    }

    /// Creates a matrix translating by the x-, y- and z-components of the
    /// given vector. The translation occupies the first three elements of the
    /// last row.
    pub fn translation(translation: &Vector4) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [translation.x(), translation.y(), translation.z(), 1.0],
        ])
    }

    /// Creates an orientation matrix whose basis looks along `direction` with
    /// `up` as the approximate up direction.
    ///
    /// The basis axes are
    /// - `z = normalize(direction)`,
    /// - `x = normalize(up × z)`,
    /// - `y = z × x`,
    ///
    /// which always satisfy `x × y = z`. They are stored as the first three
    /// columns of the upper-left 3x3 block, so `v * M` expresses `v` in the
    /// basis. The matrix has no translation; position the eye separately with
    /// [`Self::translation`].
    ///
    /// Both vectors should be directions (`w = 0`), since normalization
    /// includes the w-component.
    ///
    /// # Warning
    /// A zero `direction`, or an `up` parallel to `direction`, gives a
    /// matrix with non-finite elements. This is not checked.
    pub fn look_at(direction: &Vector4, up: &Vector4) -> Self {
        let z_axis = direction.normalized();
        let x_axis = up.cross(&z_axis).normalized();
        let y_axis = z_axis.cross(&x_axis);

        Self::from_rows([
            [x_axis.x(), y_axis.x(), z_axis.x(), 0.0],
            [x_axis.y(), y_axis.y(), z_axis.y(), 0.0],
            [x_axis.z(), y_axis.z(), z_axis.z(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a perspective projection matrix.
    ///
    /// `focal_scale` is the pre-scaled focal factor `1 / tan(fov / 2)`, not a
    /// field of view angle. Use [`focal_scale_from_vertical_fov`] to compute
    /// it from an angle. The horizontal scale is `aspect_ratio * focal_scale`.
    ///
    /// After multiplying a view-space row vector `(x, y, z, 1)` and dividing
    /// by the resulting `w = z`, depth `z_near` maps to 0 and `z_far` to 1.
    ///
    /// # Warning
    /// `z_far == z_near` gives non-finite elements. This is not checked.
    pub fn perspective(focal_scale: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let depth_range = z_far - z_near;
        Self::from_rows([
            [aspect_ratio * focal_scale, 0.0, 0.0, 0.0],
            [0.0, focal_scale, 0.0, 0.0],
            [0.0, 0.0, z_far / depth_range, 1.0],
            [0.0, 0.0, -z_far * z_near / depth_range, 0.0],
        ])
    }
}

/// Computes the focal scale `1 / tan(fov / 2)` expected by
/// [`Matrix4x4::perspective`] from a vertical field of view angle.
pub fn focal_scale_from_vertical_fov(vertical_field_of_view: impl Angle) -> f32 {
    1.0 / (0.5 * vertical_field_of_view.radians()).tan()
}
