use core::ops::Index;

use super::AlgebraError;

/// Immutable numeric tuple of any arity ≥ 1.
///
/// Used as a matrix row and as a homogeneous point. Arity is not part of the
/// type; operations that combine two vectors check it at runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector(Vec<f32>);

impl Vector {
    #[inline]
    pub fn new(components: Vec<f32>) -> Self {
        Self(components)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, f32> {
        self.0.iter()
    }

    /// Component `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    #[inline]
    pub fn at(&self, i: usize) -> f32 {
        self.0[i]
    }

    /// Σ aᵢ·bᵢ, or an error when the arities differ.
    pub fn try_dot(&self, other: &Vector) -> Result<f32, AlgebraError> {
        if self.len() != other.len() {
            return Err(AlgebraError::DimensionMismatch {
                op: "dot",
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    /// Σ aᵢ·bᵢ.
    ///
    /// # Panics
    /// Panics if the arities differ.
    pub fn dot(&self, other: &Vector) -> f32 {
        match self.try_dot(other) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<usize> for Vector {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    #[inline]
    fn from(components: [f32; N]) -> Self {
        Self(components.to_vec())
    }
}

impl From<Vec<f32>> for Vector {
    #[inline]
    fn from(components: Vec<f32>) -> Self {
        Self(components)
    }
}

impl FromIterator<f32> for Vector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f32;
    type IntoIter = core::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── dot ───────────────────────────────────────────────────────────────

    #[test]
    fn dot_of_mixed_signs() {
        let a = Vector::from([1.0, 2.0, -3.0]);
        let b = Vector::from([1.0, 2.0, 1.0]);
        assert_eq!(a.dot(&b), 2.0);
    }

    #[test]
    fn try_dot_reports_mismatch() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(
            a.try_dot(&b),
            Err(AlgebraError::DimensionMismatch { op: "dot", left: 2, right: 3 })
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in dot")]
    fn dot_panics_on_mismatch() {
        Vector::from([1.0]).dot(&Vector::from([1.0, 2.0]));
    }

    // ── at ────────────────────────────────────────────────────────────────

    #[test]
    fn at_reads_component() {
        let v = Vector::from([4.0, 55.0, 330.0]);
        assert_eq!(v.at(1), 55.0);
        assert_eq!(v[2], 330.0);
    }

    #[test]
    #[should_panic]
    fn at_out_of_range_panics() {
        Vector::from([1.0, 2.0, 3.0]).at(3);
    }
}
