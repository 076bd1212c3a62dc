use core::f32::consts::PI;

/// An angle tagged with its unit.
///
/// Matrix constructors take degrees; use [`Angle::degrees`] to normalize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Angle {
    Degrees(f32),
    Radians(f32),
}

impl Angle {
    /// The angle in degrees (`rad · 180 / π` for radians).
    #[inline]
    pub fn degrees(self) -> f32 {
        match self {
            Angle::Degrees(d) => d,
            Angle::Radians(r) => r * 180.0 / PI,
        }
    }

    #[inline]
    pub fn radians(self) -> f32 {
        match self {
            Angle::Degrees(d) => d * PI / 180.0,
            Angle::Radians(r) => r,
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::Degrees(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_pass_through() {
        assert_eq!(Angle::Degrees(30.0).degrees(), 30.0);
    }

    #[test]
    fn radians_normalize_to_degrees() {
        assert!((Angle::Radians(PI).degrees() - 180.0).abs() < 1e-4);
        assert!((Angle::Radians(PI / 2.0).degrees() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn degrees_to_radians() {
        assert!((Angle::Degrees(180.0).radians() - PI).abs() < 1e-6);
    }
}
