use crate::domain::*;
use crate::util::*;

/// The benchmark's fixture, `U[i][j] = (i + n - j) / n`,
/// evaluated as one division of exact integers.
pub fn polybench_ic<T: FloatTrait, FieldType: FieldView<T>>(
    field: &mut FieldType,
    chunk_size: usize,
) {
    debug_assert_eq!(field.aabb().min(), vector![0, 0]);
    let n = field.aabb().len(0);
    let n_f = T::from_index(n);
    field.par_set_values(
        |coord: Coord<2>| {
            let (i, j) = (coord[0] as usize, coord[1] as usize);
            T::from_index(i + n - j) / n_f
        },
        chunk_size,
    );
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn polybench_ic_test() {
        for layout in [Layout::RowMajor, Layout::ColumnMajor] {
            let mut field = OwnedField::<f64>::new(AABB::square(5), layout);
            polybench_ic(&mut field, 3);
            let rows = field.to_row_major();
            assert_eq!(&rows[0..5], &[1.0, 0.8, 0.6, 0.4, 0.2]);
            assert_eq!(field.view(&vector![4, 0]), 9.0 / 5.0);
            assert_eq!(field.view(&vector![2, 2]), 1.0);
        }
    }
}
