use super::Vector;

/// Projected point on the drawing plane, as handed to a
/// [`Renderer`](crate::render::Renderer). Depth and `w` are already gone.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Keeps the first two components of a projected homogeneous row.
    ///
    /// # Panics
    /// Panics if `row` has fewer than two components.
    #[inline]
    pub fn from_row(row: &Vector) -> Self {
        Self::new(row.at(0), row.at(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_row_discards_depth_and_w() {
        let row = Vector::from([3.0, -4.0, 9.0, 1.0]);
        assert_eq!(Vec2::from_row(&row), Vec2::new(3.0, -4.0));
    }

    #[test]
    #[should_panic]
    fn from_row_needs_two_components() {
        Vec2::from_row(&Vector::from([1.0]));
    }
}
