use crate::util::*;

/// Direction of the lines a sweep solves along.
/// Coordinates are `[row, column]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Each line is a column, positions run over rows.
    Column,
    /// Each line is a row, positions run over columns.
    Row,
}

impl Axis {
    /// Dimension the positions of one line run along.
    #[inline]
    pub fn line_dimension(&self) -> usize {
        match self {
            Axis::Column => 0,
            Axis::Row => 1,
        }
    }

    /// Dimension that enumerates lines.
    #[inline]
    pub fn outer_dimension(&self) -> usize {
        1 - self.line_dimension()
    }

    /// Grid coordinate of `position` on `line`.
    #[inline]
    pub fn coord(&self, line: usize, position: usize) -> Coord<2> {
        match self {
            Axis::Column => vector![position as i32, line as i32],
            Axis::Row => vector![line as i32, position as i32],
        }
    }

    /// Inverse of `coord`, returns `(line, position)`.
    #[inline]
    pub fn split(&self, coord: &Coord<2>) -> (usize, usize) {
        match self {
            Axis::Column => (coord[1] as usize, coord[0] as usize),
            Axis::Row => (coord[0] as usize, coord[1] as usize),
        }
    }

    /// Storage layout in which every line of this axis is contiguous.
    pub fn contiguous_layout(&self) -> Layout {
        match self {
            Axis::Column => Layout::ColumnMajor,
            Axis::Row => Layout::RowMajor,
        }
    }
}

/// Read only strided access to one line of a buffer.
#[derive(Copy, Clone, Debug)]
pub struct LineView<'a, T> {
    buffer: &'a [T],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a, T: Copy> LineView<'a, T> {
    pub fn new(buffer: &'a [T], offset: usize, stride: usize, len: usize) -> Self {
        debug_assert!(len == 0 || offset + (len - 1) * stride < buffer.len());
        LineView {
            buffer,
            offset,
            stride,
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, position: usize) -> T {
        debug_assert!(position < self.len);
        self.buffer[self.offset + position * self.stride]
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |p| self.get(p))
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn coord_split_test() {
        for axis in [Axis::Column, Axis::Row] {
            let c = axis.coord(3, 5);
            assert_eq!(axis.split(&c), (3, 5));
        }
        assert_eq!(Axis::Column.coord(3, 5), vector![5, 3]);
        assert_eq!(Axis::Row.coord(3, 5), vector![3, 5]);
    }

    #[test]
    fn dimension_test() {
        assert_eq!(Axis::Column.line_dimension(), 0);
        assert_eq!(Axis::Column.outer_dimension(), 1);
        assert_eq!(Axis::Row.line_dimension(), 1);
        assert_eq!(Axis::Row.contiguous_layout(), Layout::RowMajor);
    }

    #[test]
    fn line_view_test() {
        let buffer: Vec<f64> = (0..12).map(|i| i as f64).collect();
        let line = LineView::new(&buffer, 1, 4, 3);
        assert_eq!(line.len(), 3);
        let values: Vec<f64> = line.iter().collect();
        assert_eq!(values, vec![1.0, 5.0, 9.0]);
    }
}
