use crate::coords::Vec3;

/// Sequence of subpaths, each an ordered run of 3D points.
///
/// Persistent value: the builder methods take `&self` and return a new path,
/// so earlier values never change. The in-place `push_*` variants exist for
/// callers that own the only copy.
///
/// Non-finite points are dropped silently by `move_to` / `line_to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path3D {
    subpaths: Vec<Vec<Vec3>>,
}

impl Path3D {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn subpaths(&self) -> &[Vec<Vec3>] {
        &self.subpaths
    }

    #[inline]
    pub fn into_subpaths(self) -> Vec<Vec<Vec3>> {
        self.subpaths
    }

    /// Number of subpaths.
    #[inline]
    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    // ── persistent builders ───────────────────────────────────────────────

    /// Starts a new subpath at `p`.
    pub fn move_to(&self, p: Vec3) -> Self {
        let mut next = self.clone();
        next.push_move(p);
        next
    }

    /// Extends the last subpath to `p`, or starts one when the path is empty.
    pub fn line_to(&self, p: Vec3) -> Self {
        let mut next = self.clone();
        next.push_line(p);
        next
    }

    /// Closes the last subpath back to its first point.
    ///
    /// Besides the closing point, a new single-point subpath seeded with that
    /// point is appended so later commands continue from it. Nothing happens
    /// when the path is empty, when the last subpath has at most one point, or
    /// when it already ends where it starts.
    pub fn close_path(&self) -> Self {
        let mut next = self.clone();
        next.push_close();
        next
    }

    /// Plain concatenation of subpath lists. No joining takes place.
    pub fn append(&self, other: &Path3D) -> Self {
        let mut next = self.clone();
        next.extend_from(other);
        next
    }

    // ── in-place variants ─────────────────────────────────────────────────

    pub fn push_move(&mut self, p: Vec3) {
        if !p.is_finite() {
            log::trace!("move_to: dropping non-finite point {p:?}");
            return;
        }
        self.subpaths.push(vec![p]);
    }

    pub fn push_line(&mut self, p: Vec3) {
        if !p.is_finite() {
            log::trace!("line_to: dropping non-finite point {p:?}");
            return;
        }
        match self.subpaths.last_mut() {
            Some(last) => last.push(p),
            None => self.subpaths.push(vec![p]),
        }
    }

    pub fn push_close(&mut self) {
        let Some(last) = self.subpaths.last_mut() else {
            return;
        };
        if last.len() <= 1 {
            return;
        }
        let first = last[0];
        if last.last() == Some(&first) {
            return;
        }
        last.push(first);
        self.subpaths.push(vec![first]);
    }

    pub fn extend_from(&mut self, other: &Path3D) {
        self.subpaths.extend(other.subpaths.iter().cloned());
    }

    /// Removes the trailing subpath when it holds a single point.
    pub(crate) fn drop_trailing_seed(&mut self) {
        if self.subpaths.last().is_some_and(|s| s.len() == 1) {
            self.subpaths.pop();
        }
    }
}

impl From<Vec<Vec<Vec3>>> for Path3D {
    fn from(subpaths: Vec<Vec<Vec3>>) -> Self {
        Self { subpaths }
    }
}

impl IntoIterator for Path3D {
    type Item = Vec<Vec3>;
    type IntoIter = std::vec::IntoIter<Vec<Vec3>>;

    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path3D {
    type Item = &'a Vec<Vec3>;
    type IntoIter = core::slice::Iter<'a, Vec<Vec3>>;

    fn into_iter(self) -> Self::IntoIter {
        self.subpaths.iter()
    }
}

impl FromIterator<Path3D> for Path3D {
    fn from_iter<I: IntoIterator<Item = Path3D>>(iter: I) -> Self {
        Self { subpaths: iter.into_iter().flatten().collect() }
    }
}
