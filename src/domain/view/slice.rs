use super::*;
use crate::util::*;

/// Field over a caller provided buffer,
/// e.g. the harness's own storage for `U`.
pub struct SliceField<'a, T> {
    aabb: AABB<2>,
    layout: Layout,
    buffer: &'a mut [T],
}

impl<'a, T> SliceField<'a, T> {
    pub fn new(aabb: AABB<2>, layout: Layout, buffer: &'a mut [T]) -> Self {
        debug_assert!(buffer.len() >= aabb.buffer_size());
        SliceField {
            aabb,
            layout,
            buffer,
        }
    }
}

impl<'a, T: FloatTrait> FieldView<T> for SliceField<'a, T> {
    fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    fn layout(&self) -> Layout {
        self.layout
    }

    fn buffer(&self) -> &[T] {
        &self.buffer[0..self.aabb().buffer_size()]
    }

    fn buffer_mut(&mut self) -> &mut [T] {
        let range = 0..self.aabb().buffer_size();
        &mut self.buffer[range]
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<2>, Layout, &mut [T]) {
        let range = 0..self.aabb.buffer_size();
        (&self.aabb, self.layout, &mut self.buffer[range])
    }
}
