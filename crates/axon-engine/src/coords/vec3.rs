use super::Vector;

/// 3D point in scene space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// False if any coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Lifts the point to a homogeneous 4-vector with `w = 1`.
    #[inline]
    pub fn to_homogeneous(self) -> Vector {
        Vector::from([self.x, self.y, self.z, 1.0])
    }
}

/// Shorthand for [`Vec3::new`].
#[inline]
pub const fn point(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

impl From<Vec3> for Vector {
    #[inline]
    fn from(p: Vec3) -> Self {
        Vector::from([p.x, p.y, p.z])
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_point() {
        assert!(point(4.0, 55.0, 330.0).is_finite());
    }

    #[test]
    fn any_non_finite_coordinate_is_not_finite() {
        assert!(!point(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!point(0.0, f32::INFINITY, 0.0).is_finite());
        assert!(!point(0.0, 0.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn homogeneous_appends_unit_w() {
        let v = point(1.0, 2.0, 3.0).to_homogeneous();
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 1.0]);
    }
}
