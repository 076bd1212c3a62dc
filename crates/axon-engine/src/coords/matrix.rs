use super::{AlgebraError, Vec3, Vector};

/// Rectangular grid of `f32`, stored as row vectors.
///
/// Invariant: every row has the same length. Constructors enforce it, so
/// `transpose` never sees ragged input.
///
/// Transform matrices are 4×4 and act on homogeneous row vectors from the
/// right (`p · M`), so translations sit in the last row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Builds a matrix from row vectors, rejecting ragged input.
    pub fn try_from_rows<R>(rows: Vec<R>) -> Result<Self, AlgebraError>
    where
        R: Into<Vector>,
    {
        let rows: Vec<Vector> = rows.into_iter().map(Into::into).collect();
        if let Some(expected) = rows.first().map(Vector::len) {
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(AlgebraError::Ragged { row, len: r.len(), expected });
            }
        }
        Ok(Self { rows })
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Panics
    /// Panics if the rows differ in length.
    pub fn from_rows<R>(rows: Vec<R>) -> Self
    where
        R: Into<Vector>,
    {
        match Self::try_from_rows(rows) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    // ── constructors ──────────────────────────────────────────────────────

    pub fn identity() -> Self {
        Self::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translate(v: Vec3) -> Self {
        Self::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [v.x, v.y, v.z, 1.0],
        ])
    }

    pub fn scale(v: Vec3) -> Self {
        Self::from([
            [v.x, 0.0, 0.0, 0.0],
            [0.0, v.y, 0.0, 0.0],
            [0.0, 0.0, v.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the X axis by `degrees`.
    pub fn rotate_x(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Y axis by `degrees`.
    pub fn rotate_y(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the Z axis by `degrees`.
    pub fn rotate_z(degrees: f32) -> Self {
        let (s, c) = degrees.to_radians().sin_cos();
        Self::from([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Orthographic projection onto the XY plane: keeps x, y and w, zeroes depth.
    pub fn orthographic() -> Self {
        Self::scale(Vec3::new(1.0, 1.0, 0.0))
    }

    /// Parallel projection viewing the scene turned by `phi` degrees about Y and
    /// tilted by `theta` degrees about X.
    ///
    /// `axonometric(0, 0)` is [`Matrix::orthographic`]; `axonometric(45, 35.264)`
    /// is the classic isometric view.
    pub fn axonometric(phi: f32, theta: f32) -> Self {
        Self::rotate_y(phi)
            .concat(&Self::rotate_x(theta))
            .concat(&Self::orthographic())
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> &[Vector] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns; zero for a matrix without rows.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vector::len)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// The `n`-th component taken across every row (the `n`-th column).
    ///
    /// # Panics
    /// Panics if `n` is out of range.
    pub fn column(&self, n: usize) -> Vector {
        self.rows.iter().map(|r| r.at(n)).collect()
    }

    // ── algebra ───────────────────────────────────────────────────────────

    pub fn transpose(&self) -> Self {
        let rows = (0..self.column_count()).map(|n| self.column(n)).collect();
        Self { rows }
    }

    /// Matrix product `self · other`.
    pub fn try_concat(&self, other: &Matrix) -> Result<Self, AlgebraError> {
        if self.column_count() != other.row_count() {
            return Err(AlgebraError::DimensionMismatch {
                op: "concat",
                left: self.column_count(),
                right: other.row_count(),
            });
        }

        let columns = other.transpose();
        let rows = self
            .rows
            .iter()
            .map(|r| columns.rows.iter().map(|c| r.dot(c)).collect())
            .collect();
        Ok(Self { rows })
    }

    /// Matrix product `self · other`.
    ///
    /// Associative, with [`Matrix::identity`] as the unit on 4×4 operands.
    ///
    /// # Panics
    /// Panics unless `self` has as many columns as `other` has rows.
    pub fn concat(&self, other: &Matrix) -> Self {
        match self.try_concat(other) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }

    /// Curried product for pipelines: `Matrix::mul(&b)(&a) == a.concat(&b)`.
    ///
    /// The argument supplied second is the left operand, so
    /// `[t, s].iter().map(Matrix::mul(&x))` post-multiplies each by `x`.
    pub fn mul(b: &Matrix) -> impl Fn(&Matrix) -> Matrix + '_ {
        move |a| a.concat(b)
    }

    /// Element-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f32) -> bool {
        self.row_count() == other.row_count()
            && self.column_count() == other.column_count()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| a.iter().zip(b).all(|(x, y)| (x - y).abs() <= eps))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const R: usize, const C: usize> From<[[f32; C]; R]> for Matrix {
    fn from(rows: [[f32; C]; R]) -> Self {
        Self { rows: rows.into_iter().map(Vector::from).collect() }
    }
}

impl<'a> core::iter::Product<&'a Matrix> for Matrix {
    fn product<I: Iterator<Item = &'a Matrix>>(iter: I) -> Self {
        iter.fold(Matrix::identity(), |acc, m| acc.concat(m))
    }
}

impl core::iter::Product for Matrix {
    fn product<I: Iterator<Item = Matrix>>(iter: I) -> Self {
        iter.fold(Matrix::identity(), |acc, m| acc.concat(&m))
    }
}
