//! Matrices.

use crate::vector::Vector4;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4x4 matrix of single-precision floats.
///
/// The 16 elements are stored contiguously in row-major order, so element
/// `(row, column)` lives at flat index `row * 4 + column`. Matrices are meant
/// to transform row vectors multiplied from the left (`v' = v * M`), which is
/// why translations end up in the last row.
///
/// The default value is the zero matrix, not the identity. Use
/// [`Matrix4x4::IDENTITY`] for the latter.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4x4 {
    elements: [f32; 16],
}

impl Matrix4x4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self::from_row_major([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_row_major([0.0; 16])
    }

    /// Creates a matrix from the given 16 elements in row-major order.
    #[inline]
    pub const fn from_row_major(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        Self::from_row_major([
            r0[0], r0[1], r0[2], r0[3], //
            r1[0], r1[1], r1[2], r1[3], //
            r2[0], r2[1], r2[2], r2[3], //
            r3[0], r3[1], r3[2], r3[3],
        ])
    }

    /// The elements of the matrix in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.elements
    }

    /// The elements of the matrix in row-major order.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.elements
    }

    /// Returns the element at the given row and column.
    ///
    /// # Panics
    /// If the row or column is outside the matrix.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        self.elements[flat_index(row, column)]
    }

    /// Returns a mutable reference to the element at the given row and
    /// column.
    ///
    /// # Panics
    /// If the row or column is outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, row: usize, column: usize) -> &mut f32 {
        &mut self.elements[flat_index(row, column)]
    }

    /// Returns the given row of the matrix.
    ///
    /// # Panics
    /// If the row index exceeds 3.
    #[inline]
    pub fn row(&self, row: usize) -> [f32; 4] {
        [0, 1, 2, 3].map(|column| self.element(row, column))
    }

    /// Returns the given column of the matrix.
    ///
    /// # Panics
    /// If the column index exceeds 3.
    #[inline]
    pub fn column(&self, column: usize) -> [f32; 4] {
        [0, 1, 2, 3].map(|row| self.element(row, column))
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let m = &self.elements;
        Self::from_row_major([
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        ])
    }

    /// Transforms the given vector treated as a row vector multiplied from the
    /// left, i.e. computes `vector * self`.
    #[inline]
    pub fn transform_row_vector(&self, vector: &Vector4) -> Vector4 {
        let v = vector.to_array();
        let [x, y, z, w] = [0, 1, 2, 3].map(|column| {
            (0..4).fold(0.0, |sum, k| sum + v[k] * self.element(k, column))
        });
        Vector4::new(x, y, z, w)
    }

    fn product(lhs: &Self, rhs: &Self) -> Self {
        let mut result = Self::zeros();
        for row in 0..4 {
            for column in 0..4 {
                for k in 0..4 {
                    result.elements[row * 4 + column] +=
                        lhs.elements[row * 4 + k] * rhs.elements[k * 4 + column];
                }
            }
        }
        result
    }
}

#[inline]
fn flat_index(row: usize, column: usize) -> usize {
    assert!(
        row < 4 && column < 4,
        "matrix index ({row}, {column}) out of bounds"
    );
    row * 4 + column
}

impl Index<usize> for Matrix4x4 {
    type Output = f32;

    /// # Panics
    /// If the index exceeds 15.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl IndexMut<usize> for Matrix4x4 {
    /// # Panics
    /// If the index exceeds 15.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl Index<(usize, usize)> for Matrix4x4 {
    type Output = f32;

    /// # Panics
    /// If the row or column exceeds 3.
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.elements[flat_index(row, column)]
    }
}

impl IndexMut<(usize, usize)> for Matrix4x4 {
    /// # Panics
    /// If the row or column exceeds 3.
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        self.element_mut(row, column)
    }
}

impl_binop!(Mul, mul, Matrix4x4, Matrix4x4, Matrix4x4, |a, b| {
    Matrix4x4::product(a, b)
});

impl_binop!(Mul, mul, Vector4, Matrix4x4, Vector4, |a, b| {
    b.transform_row_vector(a)
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4x4, Matrix4x4, |a, b| {
    *a = Matrix4x4::product(a, b);
});

impl_abs_diff_eq!(Matrix4x4, |a, b, epsilon| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix4x4, |a, b, epsilon, max_relative| {
    a.elements
        .iter()
        .zip(&b.elements)
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

/// Writes the matrix as four newline-terminated rows of four space-separated
/// values. A precision given in the format string is applied to every value.
/// The output is meant for diagnostics and is not a stable format.
impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            for (column, value) in self.row(row).into_iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(precision) => write!(f, "{value:.precision$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
