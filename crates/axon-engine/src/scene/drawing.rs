use crate::coords::Angle;

use super::{FillStyle, OutlineStyle, Shape};

/// Recursive scene tree.
///
/// Leaves paint a [`Shape`]; inner nodes group children or wrap one child in
/// a transform. Rotation angles are in degrees.
///
/// `Drawing` is a monoid under [`Drawing::concat`] with [`Drawing::empty`] as
/// the identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawing {
    Fill { shape: Shape, style: FillStyle },
    Outline { shape: Shape, style: OutlineStyle },
    Many(Vec<Drawing>),
    Translate { dx: f32, dy: f32, dz: f32, child: Box<Drawing> },
    Rotate { ax: f32, ay: f32, az: f32, child: Box<Drawing> },
    Scale { sx: f32, sy: f32, sz: f32, child: Box<Drawing> },
}

impl Drawing {
    /// `Many([])`.
    #[inline]
    pub fn empty() -> Self {
        Drawing::Many(Vec::new())
    }

    #[inline]
    pub fn fill(shape: Shape, style: FillStyle) -> Self {
        Drawing::Fill { shape, style }
    }

    #[inline]
    pub fn outline(shape: Shape, style: OutlineStyle) -> Self {
        Drawing::Outline { shape, style }
    }

    pub fn many(children: impl IntoIterator<Item = Drawing>) -> Self {
        Drawing::Many(children.into_iter().collect())
    }

    pub fn translate(dx: f32, dy: f32, dz: f32, child: Drawing) -> Self {
        Drawing::Translate { dx, dy, dz, child: Box::new(child) }
    }

    /// Rotation about X, Y and Z, in degrees.
    pub fn rotate(ax: f32, ay: f32, az: f32, child: Drawing) -> Self {
        Drawing::Rotate { ax, ay, az, child: Box::new(child) }
    }

    pub fn rotate_angles(ax: Angle, ay: Angle, az: Angle, child: Drawing) -> Self {
        Self::rotate(ax.degrees(), ay.degrees(), az.degrees(), child)
    }

    pub fn scale(sx: f32, sy: f32, sz: f32, child: Drawing) -> Self {
        Drawing::Scale { sx, sy, sz, child: Box::new(child) }
    }

    /// Monoid combination.
    ///
    /// `Many` operands are flattened one level; anything else becomes a
    /// single element of the result.
    pub fn concat(self, other: Drawing) -> Self {
        match (self, other) {
            (Drawing::Many(mut xs), Drawing::Many(ys)) => {
                xs.extend(ys);
                Drawing::Many(xs)
            }
            (Drawing::Many(mut xs), y) => {
                xs.push(y);
                Drawing::Many(xs)
            }
            (x, Drawing::Many(mut ys)) => {
                ys.insert(0, x);
                Drawing::Many(ys)
            }
            (x, y) => Drawing::Many(vec![x, y]),
        }
    }

    /// Counts `Fill` and `Outline` leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Drawing::Fill { .. } | Drawing::Outline { .. } => 1,
            Drawing::Many(children) => children.iter().map(Drawing::leaf_count).sum(),
            Drawing::Translate { child, .. }
            | Drawing::Rotate { child, .. }
            | Drawing::Scale { child, .. } => child.leaf_count(),
        }
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Drawing> for Drawing {
    fn from_iter<I: IntoIterator<Item = Drawing>>(iter: I) -> Self {
        iter.into_iter().fold(Drawing::empty(), Drawing::concat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::point;
    use crate::paint::Color;

    fn leaf(x: f32) -> Drawing {
        Drawing::fill(Shape::path([point(x, 0.0, 0.0)]), FillStyle::color(Color::RED))
    }

    fn line(x: f32) -> Drawing {
        Drawing::outline(Shape::path([point(x, 1.0, 0.0)]), OutlineStyle::default())
    }

    // ── concat ────────────────────────────────────────────────────────────

    #[test]
    fn concat_merges_two_many() {
        let out = Drawing::many([leaf(1.0), leaf(2.0)]).concat(Drawing::many([leaf(3.0)]));
        assert_eq!(out, Drawing::many([leaf(1.0), leaf(2.0), leaf(3.0)]));
    }

    #[test]
    fn concat_prepends_single_left_operand() {
        let out = leaf(0.0).concat(Drawing::many([line(1.0), line(2.0)]));
        assert_eq!(out, Drawing::many([leaf(0.0), line(1.0), line(2.0)]));
    }

    #[test]
    fn concat_appends_single_right_operand() {
        let out = Drawing::many([leaf(1.0)]).concat(line(2.0));
        assert_eq!(out, Drawing::many([leaf(1.0), line(2.0)]));
    }

    #[test]
    fn concat_wraps_two_leaves() {
        assert_eq!(leaf(1.0).concat(line(2.0)), Drawing::many([leaf(1.0), line(2.0)]));
    }

    #[test]
    fn concat_does_not_flatten_transformed_groups() {
        let moved = Drawing::translate(1.0, 0.0, 0.0, Drawing::many([leaf(1.0)]));
        let out = moved.clone().concat(leaf(2.0));
        assert_eq!(out, Drawing::Many(vec![moved, leaf(2.0)]));
    }

    #[test]
    fn empty_is_identity() {
        let d = Drawing::many([leaf(1.0), line(2.0)]);
        assert_eq!(Drawing::empty().concat(d.clone()), d);
        assert_eq!(d.clone().concat(Drawing::empty()), d);
    }

    #[test]
    fn concat_is_associative() {
        let (a, b, c) = (leaf(1.0), Drawing::many([line(2.0), leaf(3.0)]), line(4.0));
        let left = a.clone().concat(b.clone()).concat(c.clone());
        let right = a.concat(b.concat(c));
        assert_eq!(left, right);
    }

    #[test]
    fn collect_folds_with_concat() {
        let d: Drawing = [leaf(1.0), Drawing::many([leaf(2.0), leaf(3.0)])].into_iter().collect();
        assert_eq!(d, Drawing::many([leaf(1.0), leaf(2.0), leaf(3.0)]));
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_angles_normalizes_to_degrees() {
        let d = Drawing::rotate_angles(
            Angle::Radians(core::f32::consts::PI),
            Angle::Degrees(45.0),
            Angle::Degrees(0.0),
            leaf(0.0),
        );
        match d {
            Drawing::Rotate { ax, ay, az, .. } => {
                assert!((ax - 180.0).abs() < 1e-4);
                assert_eq!(ay, 45.0);
                assert_eq!(az, 0.0);
            }
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn leaf_count_walks_transforms() {
        let d = Drawing::scale(
            2.0,
            2.0,
            2.0,
            Drawing::many([leaf(1.0), Drawing::rotate(0.0, 0.0, 90.0, line(2.0))]),
        );
        assert_eq!(d.leaf_count(), 2);
        assert_eq!(Drawing::empty().leaf_count(), 0);
    }
}
