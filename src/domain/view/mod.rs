mod chunk;
mod owned;
mod slice;

pub use chunk::*;
pub use owned::*;
pub use slice::*;

use crate::domain::*;
use crate::util::*;
use rayon::prelude::*;
use std::ops::Range;

/// A 2D field: an index space, a storage layout, and a buffer.
pub trait FieldView<T: FloatTrait>: Sync {
    fn aabb(&self) -> &AABB<2>;

    fn layout(&self) -> Layout;

    fn buffer(&self) -> &[T];

    fn buffer_mut(&mut self) -> &mut [T];

    fn aabb_buffer_mut(&mut self) -> (&AABB<2>, Layout, &mut [T]);

    #[track_caller]
    fn view(&self, world_coord: &Coord<2>) -> T {
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let index = self.aabb().coord_to_linear(world_coord, self.layout());
        self.buffer()[index]
    }

    #[track_caller]
    fn set_coord(&mut self, world_coord: &Coord<2>, value: T) {
        debug_assert!(
            self.aabb().contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb(),
            world_coord
        );
        let index = self.aabb().coord_to_linear(world_coord, self.layout());
        self.buffer_mut()[index] = value;
    }

    /// Number of lines along `axis`, and the length of each line.
    fn line_shape(&self, axis: Axis) -> (usize, usize) {
        (
            self.aabb().len(axis.outer_dimension()),
            self.aabb().len(axis.line_dimension()),
        )
    }

    /// Strided view of one line, no copies.
    fn line(&self, axis: Axis, line: usize) -> LineView<'_, T> {
        let (lines, len) = self.line_shape(axis);
        debug_assert!(line < lines);
        let strides = strides(&self.aabb().exclusive_bounds(), self.layout());
        let offset = line * strides[axis.outer_dimension()];
        let stride = strides[axis.line_dimension()];
        LineView::new(self.buffer(), offset, stride, len)
    }

    /// True when each line along `axis` is one contiguous run of the buffer,
    /// with lines stored in increasing order.
    fn lines_contiguous(&self, axis: Axis) -> bool {
        self.layout() == axis.contiguous_layout()
    }

    fn par_modify_access<'a>(
        &'a mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = FieldChunk<'a, T>> {
        let (aabb, layout, buffer) = self.aabb_buffer_mut();
        par_modify_access_impl(buffer, aabb, layout, chunk_size)
    }

    fn par_set_values<F: Fn(Coord<2>) -> T + Send + Sync>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size)
            .for_each(|mut d: FieldChunk<'_, T>| {
                d.coord_iter_mut().for_each(|(world_coord, value_mut)| {
                    *value_mut = f(world_coord);
                })
            });
    }

    /// Copy another field with the same index space into self,
    /// regardless of either layout.
    fn par_set_from<Other: FieldView<T>>(
        &mut self,
        other: &Other,
        chunk_size: usize,
    ) {
        debug_assert_eq!(self.aabb(), other.aabb());
        if self.layout() == other.layout() {
            self.buffer_mut()
                .par_chunks_mut(chunk_size)
                .zip(other.buffer().par_chunks(chunk_size))
                .for_each(|(a, b)| a.copy_from_slice(b));
        } else {
            self.par_set_values(|c| other.view(&c), chunk_size);
        }
    }

    /// Scatter lines `line_range` of a line-major buffer into self.
    /// `lines` holds every line of `axis` back to back,
    /// entries outside `line_range` are ignored.
    fn par_write_lines(
        &mut self,
        axis: Axis,
        lines: &[T],
        line_range: Range<usize>,
        chunk_size: usize,
    ) {
        let (n_lines, len) = self.line_shape(axis);
        debug_assert_eq!(lines.len(), n_lines * len);
        debug_assert!(line_range.end <= n_lines);
        if self.lines_contiguous(axis) {
            let range = line_range.start * len..line_range.end * len;
            self.buffer_mut()[range.clone()]
                .par_chunks_mut(chunk_size)
                .zip(lines[range].par_chunks(chunk_size))
                .for_each(|(a, b)| a.copy_from_slice(b));
        } else {
            self.par_modify_access(chunk_size).for_each(
                |mut d: FieldChunk<'_, T>| {
                    d.coord_iter_mut().for_each(|(world_coord, value_mut)| {
                        let (line, position) = axis.split(&world_coord);
                        if line_range.contains(&line) {
                            *value_mut = lines[line * len + position];
                        }
                    })
                },
            );
        }
    }

    /// Values in logical row-major order, independent of storage layout.
    fn to_row_major(&self) -> Vec<T> {
        if self.layout() == Layout::RowMajor {
            self.buffer().to_vec()
        } else {
            self.aabb()
                .coord_iter(Layout::RowMajor)
                .map(|c| self.view(&c))
                .collect()
        }
    }
}

/// Why not just put this into FieldView::par_modify_access?
/// Rust compiler can't figure out how to borrow aabb and buffer
/// at the same time in this way.
/// By putting their borrows into one function call first we work around it.
fn par_modify_access_impl<'a, T: FloatTrait>(
    buffer: &'a mut [T],
    aabb: &'a AABB<2>,
    layout: Layout,
    chunk_size: usize,
) -> impl ParallelIterator<Item = FieldChunk<'a, T>> + 'a {
    buffer[0..aabb.buffer_size()]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [T])| {
            let offset = i * chunk_size;
            FieldChunk::new(offset, aabb, layout, buffer_chunk)
        })
}
