use crate::domain::*;
use crate::util::*;

/// Constant value on the outer shell of a field.
/// The solver only ever uses the value `1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirichletBoundary<T> {
    value: T,
}

impl<T: FloatTrait> DirichletBoundary<T> {
    pub fn new(value: T) -> Self {
        DirichletBoundary { value }
    }

    pub fn unit() -> Self {
        DirichletBoundary { value: T::one() }
    }

    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Boundary value for coordinates on the shell of `aabb`.
    pub fn check(&self, aabb: &AABB<2>, coord: &Coord<2>) -> Option<T> {
        if aabb.on_boundary(coord) {
            Some(self.value)
        } else {
            None
        }
    }

    /// Set every shell coordinate of the field to the boundary value.
    pub fn pin<F: FieldView<T>>(&self, field: &mut F) {
        let aabb = *field.aabb();
        let (min, max) = (aabb.min(), aabb.max());
        for r in min[0]..=max[0] {
            field.set_coord(&vector![r, min[1]], self.value);
            field.set_coord(&vector![r, max[1]], self.value);
        }
        for c in min[1]..=max[1] {
            field.set_coord(&vector![min[0], c], self.value);
            field.set_coord(&vector![max[0], c], self.value);
        }
    }

    /// Check that every shell coordinate holds exactly the boundary value.
    pub fn holds<F: FieldView<T>>(&self, field: &F) -> bool {
        let aabb = field.aabb();
        aabb.coord_iter(field.layout())
            .all(|c| match self.check(aabb, &c) {
                Some(value) => field.view(&c) == value,
                None => true,
            })
    }
}
