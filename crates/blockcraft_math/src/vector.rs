//! Vectors.

use approx::RelativeEq;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4-dimensional vector in homogeneous coordinates.
///
/// Directions conventionally have `w = 0` and positions `w = 1`. The
/// components are stored in a 128-bit SIMD register, giving the type an
/// alignment of 16 bytes.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    inner: glam::Vec4,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::wrap(glam::Vec4::new(x, y, z, w))
    }

    /// Creates a direction vector (`w = 0`) with the given spatial components.
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Creates a position vector (`w = 1`) with the given spatial components.
    #[inline]
    pub const fn position(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::wrap(glam::Vec4::ZERO)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f32 {
        self.inner.z
    }

    /// The w-component.
    #[inline]
    pub fn w(&self) -> f32 {
        self.inner.w
    }

    /// Returns the components as an array `[x, y, z, w]`.
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.inner.x, self.inner.y, self.inner.z, self.inner.w]
    }

    /// Computes the dot product of this vector with another, including the
    /// w-components.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.inner.dot(other.inner)
    }

    /// Computes the norm (length) of the vector over all four components.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.inner.length()
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.inner.length_squared()
    }

    /// Computes the normalized version of this vector, treating all four
    /// components as a single 4D vector. A zero vector gives non-finite
    /// components.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::wrap(self.inner.normalize())
    }

    /// Computes the 3D cross product of the spatial (x, y, z) parts of this
    /// vector and another. The result is a direction (`w = 0`).
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(
            self.inner
                .truncate()
                .cross(other.inner.truncate())
                .extend(0.0),
        )
    }

    #[inline]
    const fn wrap(inner: glam::Vec4) -> Self {
        Self { inner }
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vector4> for [f32; 4] {
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;

    /// # Panics
    /// If the index exceeds 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector4 {
    /// # Panics
    /// If the index exceeds 3.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_binop!(Add, add, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector4, Vector4, Vector4, |a, b| {
    Vector4::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector4, f32, Vector4, |a, b| {
    Vector4::wrap(a.inner * *b)
});

impl_abs_diff_eq!(Vector4, |a, b, epsilon| {
    a.inner.abs_diff_eq(b.inner, epsilon)
});

impl_relative_eq!(Vector4, |a, b, epsilon, max_relative| {
    a.inner.x.relative_eq(&b.inner.x, epsilon, max_relative)
        && a.inner.y.relative_eq(&b.inner.y, epsilon, max_relative)
        && a.inner.z.relative_eq(&b.inner.z, epsilon, max_relative)
        && a.inner.w.relative_eq(&b.inner.w, epsilon, max_relative)
});

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.inner.x)
            .field("y", &self.inner.y)
            .field("z", &self.inner.z)
            .field("w", &self.inner.w)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn creating_vector4_stores_components() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn direction_and_position_set_homogeneous_component() {
        assert_eq!(Vector4::direction(1.0, 2.0, 3.0).w(), 0.0);
        assert_eq!(Vector4::position(1.0, 2.0, 3.0).w(), 1.0);
    }

    #[test]
    fn default_vector4_is_zero() {
        assert_eq!(Vector4::default(), Vector4::zeros());
    }

    #[test]
    fn indexing_vector4_works() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        v[2] = 7.0;
        assert_eq!(v.z(), 7.0);
    }

    #[test]
    #[should_panic]
    fn indexing_vector4_out_of_bounds_panics() {
        let v = Vector4::zeros();
        let _ = v[4];
    }

    #[test]
    fn normalizing_vector4_gives_unit_length() {
        let v = Vector4::direction(3.0, 0.0, 4.0).normalized();
        assert_abs_diff_eq!(v.norm(), 1.0, epsilon = EPSILON);
        assert_abs_diff_eq!(v, Vector4::direction(0.6, 0.0, 0.8), epsilon = EPSILON);
    }

    #[test]
    fn normalizing_zero_vector4_gives_non_finite_components() {
        let v = Vector4::zeros().normalized();
        assert!(!v.x().is_finite());
    }

    #[test]
    fn cross_product_of_unit_axes_follows_right_hand_rule() {
        let x = Vector4::direction(1.0, 0.0, 0.0);
        let y = Vector4::direction(0.0, 1.0, 0.0);
        let z = Vector4::direction(0.0, 0.0, 1.0);

        assert_eq!(x.cross(&y), z);
        assert_eq!(y.cross(&z), x);
        assert_eq!(z.cross(&x), y);
        assert_eq!(y.cross(&x), Vector4::direction(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_product_ignores_and_clears_w() {
        let a = Vector4::new(1.0, 0.0, 0.0, 5.0);
        let b = Vector4::new(0.0, 1.0, 0.0, 7.0);
        assert_eq!(a.cross(&b), Vector4::direction(0.0, 0.0, 1.0));
    }

    #[test]
    fn vector4_arithmetic_works() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(4.0, 3.0, 2.0, 1.0);
        assert_eq!(a + b, Vector4::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(&a - &b, Vector4::new(-3.0, -1.0, 1.0, 3.0));
        assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(a.dot(&b), 20.0);
        assert_eq!(a.norm_squared(), 30.0);
    }
}
