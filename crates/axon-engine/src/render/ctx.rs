use crate::coords::{Matrix, Vec2, Vec3};

/// Transform state threaded through a render.
///
/// `transform` accumulates the tree's Translate / Rotate / Scale nodes;
/// `projection` maps the transformed homogeneous points to the 2D plane.
/// The default starts from identity with an orthographic projection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCtx {
    pub transform: Matrix,
    pub projection: Matrix,
}

impl Default for RenderCtx {
    fn default() -> Self {
        Self::new(Matrix::identity())
    }
}

impl RenderCtx {
    /// Starts from `transform` with the orthographic projection.
    #[inline]
    pub fn new(transform: Matrix) -> Self {
        Self { transform, projection: Matrix::orthographic() }
    }

    /// Replaces the projection, e.g. with [`Matrix::axonometric`].
    #[inline]
    pub fn with_projection(mut self, projection: Matrix) -> Self {
        self.projection = projection;
        self
    }

    fn with_transform(&self, transform: Matrix) -> Self {
        Self { transform, projection: self.projection.clone() }
    }

    /// `T · Translate(dx, dy, dz)`.
    pub fn translated(&self, dx: f32, dy: f32, dz: f32) -> Self {
        self.with_transform(self.transform.concat(&Matrix::translate(Vec3::new(dx, dy, dz))))
    }

    /// `T · Scale(sx, sy, sz)`.
    pub fn scaled(&self, sx: f32, sy: f32, sz: f32) -> Self {
        self.with_transform(self.transform.concat(&Matrix::scale(Vec3::new(sx, sy, sz))))
    }

    /// `(RotateY(ay) · RotateX(ax)) · (T · RotateZ(az))`, angles in degrees.
    ///
    /// Unlike `translated` / `scaled` the X and Y rotations land on the left
    /// of the accumulated transform. Existing scenes depend on this order.
    pub fn rotated(&self, ax: f32, ay: f32, az: f32) -> Self {
        let outer = Matrix::rotate_y(ay).concat(&Matrix::rotate_x(ax));
        let inner = self.transform.concat(&Matrix::rotate_z(az));
        self.with_transform(outer.concat(&inner))
    }

    /// Transforms and projects a run of points, keeping x and y.
    pub fn project(&self, points: &[Vec3]) -> Vec<Vec2> {
        if points.is_empty() {
            return Vec::new();
        }

        let rows: Vec<_> = points.iter().map(|p| p.to_homogeneous()).collect();
        Matrix::from_rows(rows)
            .concat(&self.transform)
            .concat(&self.projection)
            .rows()
            .iter()
            .map(Vec2::from_row)
            .collect()
    }
}
