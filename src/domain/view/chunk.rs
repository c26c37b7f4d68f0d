use crate::util::*;

/// Disjoint piece of a field buffer handed to one rayon task.
pub struct FieldChunk<'a, T> {
    offset: usize,
    aabb: &'a AABB<2>,
    layout: Layout,
    buffer: &'a mut [T],
}

impl<'a, T> FieldChunk<'a, T> {
    pub fn new(
        offset: usize,
        aabb: &'a AABB<2>,
        layout: Layout,
        buffer: &'a mut [T],
    ) -> Self {
        FieldChunk {
            offset,
            aabb,
            layout,
            buffer,
        }
    }

    /// Linear index of the first element of this chunk.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<2>, &mut T)> {
        let offset = self.offset;
        let aabb = self.aabb;
        let layout = self.layout;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v): (usize, &mut T)| {
                let coord = aabb.linear_to_coord(offset + i, layout);
                (coord, v)
            })
    }
}
