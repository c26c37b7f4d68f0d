use super::*;
use crate::util::*;

/// Field that owns its buffer.
#[derive(Clone, Debug)]
pub struct OwnedField<T> {
    aabb: AABB<2>,
    layout: Layout,
    buffer: Vec<T>,
}

impl<T: FloatTrait> OwnedField<T> {
    /// Zero filled field.
    pub fn new(aabb: AABB<2>, layout: Layout) -> Self {
        let buffer = vec![T::zero(); aabb.buffer_size()];
        OwnedField {
            aabb,
            layout,
            buffer,
        }
    }

    /// Wrap values given in logical row-major order,
    /// storing them in `layout`.
    pub fn from_row_major(
        aabb: AABB<2>,
        layout: Layout,
        values: &[T],
    ) -> Self {
        debug_assert_eq!(values.len(), aabb.buffer_size());
        let mut result = OwnedField::new(aabb, layout);
        for (i, v) in values.iter().enumerate() {
            let c = aabb.linear_to_coord(i, Layout::RowMajor);
            result.set_coord(&c, *v);
        }
        result
    }

    pub fn as_slice_field(&mut self) -> SliceField<'_, T> {
        SliceField::new(self.aabb, self.layout, &mut self.buffer)
    }

    pub fn into_buffer(self) -> Vec<T> {
        self.buffer
    }
}

impl<T: FloatTrait> FieldView<T> for OwnedField<T> {
    fn aabb(&self) -> &AABB<2> {
        &self.aabb
    }

    fn layout(&self) -> Layout {
        self.layout
    }

    fn buffer(&self) -> &[T] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<2>, Layout, &mut [T]) {
        (&self.aabb, self.layout, &mut self.buffer)
    }
}
