use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// This is the logical index space of a field,
/// mapping to a linear buffer is delegated to a `Layout`.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const GRID_DIMENSION: usize> std::fmt::Display for AABB<GRID_DIMENSION> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}", self.bounds)
    }
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9]  would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Exclusive size along one dimension.
    #[inline]
    pub fn len(&self, d: usize) -> usize {
        (self.bounds[(d, 1)] - self.bounds[(d, 0)] + 1) as usize
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(
        &self,
        coord: &Coord<DIMENSION>,
        layout: Layout,
    ) -> usize {
        coord_to_linear(
            &(coord - self.min()),
            &self.exclusive_bounds(),
            layout,
        )
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(
        &self,
        index: usize,
        layout: Layout,
    ) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds(), layout) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        for d in 0..DIMENSION {
            if coord[d] < self.bounds[(d, 0)] || coord[d] > self.bounds[(d, 1)]
            {
                return false;
            }
        }
        true
    }

    /// Check whether a contained coordinate sits on the outer shell.
    pub fn on_boundary(&self, coord: &Coord<DIMENSION>) -> bool {
        debug_assert!(self.contains(coord));
        for d in 0..DIMENSION {
            if coord[d] == self.bounds[(d, 0)] || coord[d] == self.bounds[(d, 1)]
            {
                return true;
            }
        }
        false
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        for d in 0..DIMENSION {
            if self.bounds[(d, 0)] > self.bounds[(d, 1)] {
                return false;
            }
        }
        true
    }

    /// Return iterator over contained coords
    /// in the linear ordering of `layout`.
    pub fn coord_iter(
        &self,
        layout: Layout,
    ) -> impl Iterator<Item = Coord<DIMENSION>> + '_ {
        (0..self.buffer_size()).map(move |i| self.linear_to_coord(i, layout))
    }
}

impl AABB<2> {
    /// The `n x n` grid anchored at the origin.
    pub fn square(n: usize) -> Self {
        let inclusive = n as i32 - 1;
        AABB::new(matrix![0, inclusive; 0, inclusive])
    }

    /// True when both sides have the same length.
    pub fn is_square(&self) -> bool {
        self.len(0) == self.len(1)
    }
}
