use crate::coords::Vec3;

/// Declarative geometry: a polyline or a group of shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Composite(Vec<Shape>),
    Path { closed: bool, points: Vec<Vec3> },
}

impl Shape {
    /// Groups `children`, preserving their order.
    pub fn composite(children: impl IntoIterator<Item = Shape>) -> Self {
        Shape::Composite(children.into_iter().collect())
    }

    /// Open polyline through `points`.
    pub fn path(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self::fold_points(false, points)
    }

    /// Closed polygon through `points`; the renderer returns to the first point.
    pub fn closed(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self::fold_points(true, points)
    }

    /// Alias for [`Shape::closed`].
    pub fn polygon(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self::closed(points)
    }

    /// True for a path without points or a composite whose children are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Composite(children) => children.iter().all(Shape::is_empty),
            Shape::Path { points, .. } => points.is_empty(),
        }
    }

    fn fold_points(closed: bool, points: impl IntoIterator<Item = Vec3>) -> Self {
        points
            .into_iter()
            .fold(Shape::Path { closed, points: Vec::new() }, Shape::appended)
    }

    fn appended(self, p: Vec3) -> Self {
        match self {
            Shape::Path { closed, mut points } => {
                points.push(p);
                Shape::Path { closed, points }
            }
            composite => composite,
        }
    }
}

impl FromIterator<Shape> for Shape {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Shape::composite(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::point;

    #[test]
    fn path_keeps_point_order() {
        let pts = [point(0.0, 0.0, 0.0), point(1.0, 0.0, 0.0), point(1.0, 1.0, 0.0)];
        assert_eq!(Shape::path(pts), Shape::Path { closed: false, points: pts.to_vec() });
    }

    #[test]
    fn closed_accepts_any_iterator() {
        let s = Shape::closed((0..3).map(|i| point(i as f32, 0.0, 0.0)));
        match s {
            Shape::Path { closed, points } => {
                assert!(closed);
                assert_eq!(points.len(), 3);
                assert_eq!(points[2], point(2.0, 0.0, 0.0));
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_gives_empty_path() {
        assert_eq!(Shape::path(Vec::new()), Shape::Path { closed: false, points: vec![] });
        assert!(Shape::closed(core::iter::empty()).is_empty());
    }

    #[test]
    fn collect_builds_composite() {
        let s: Shape = (0..2).map(|i| Shape::path([point(i as f32, 0.0, 0.0)])).collect();
        match s {
            Shape::Composite(children) => assert_eq!(children.len(), 2),
            other => panic!("expected a composite, got {other:?}"),
        }
    }

    #[test]
    fn composite_of_empty_paths_is_empty() {
        let s = Shape::composite([Shape::path([]), Shape::composite([])]);
        assert!(s.is_empty());
        assert!(!Shape::composite([Shape::path([point(1.0, 1.0, 1.0)])]).is_empty());
    }
}
