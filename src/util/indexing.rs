use crate::util::*;
use clap::ValueEnum;

/// Physical storage order of a grid buffer.
/// `RowMajor` means the highest dimension goes the fastest,
/// `ColumnMajor` means dimension 0 goes the fastest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Layout {
    #[default]
    RowMajor,
    ColumnMajor,
}

pub fn real_buffer_size<const GRID_DIMENSION: usize>(
    exclusive_bound: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut accumulator = 1;
    for d in exclusive_bound {
        accumulator *= *d as usize;
    }
    accumulator
}

/// Linear distance between neighbors in each dimension.
pub fn strides<const GRID_DIMENSION: usize>(
    exclusive_bounds: &Coord<GRID_DIMENSION>,
    layout: Layout,
) -> [usize; GRID_DIMENSION] {
    let mut result = [0; GRID_DIMENSION];
    let mut accumulator = 1;
    match layout {
        Layout::RowMajor => {
            for d in (0..GRID_DIMENSION).rev() {
                result[d] = accumulator;
                accumulator *= exclusive_bounds[d] as usize;
            }
        }
        Layout::ColumnMajor => {
            for d in 0..GRID_DIMENSION {
                result[d] = accumulator;
                accumulator *= exclusive_bounds[d] as usize;
            }
        }
    }
    result
}

pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
    layout: Layout,
) -> usize {
    let strides = strides(exclusive_bounds, layout);
    let mut accumulator = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0);
        accumulator += coord[d] as usize * strides[d];
    }
    accumulator
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
    layout: Layout,
) -> Coord<GRID_DIMENSION> {
    let strides = strides(exclusive_bounds, layout);
    let mut result = Coord::zeros();
    let mut index_accumulator = linear_index;

    // Slowest dimension first
    let mut order: [usize; GRID_DIMENSION] = std::array::from_fn(|d| d);
    if layout == Layout::ColumnMajor {
        order.reverse();
    }
    for d in order {
        result[d] = (index_accumulator / strides[d]) as i32;
        index_accumulator %= strides[d];
    }
    result
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        assert_eq!(real_buffer_size(&vector![5]), 5);
        assert_eq!(real_buffer_size(&vector![5, 7, 9]), 5 * 7 * 9);
    }

    #[test]
    fn strides_test() {
        let bounds = vector![4, 6];
        assert_eq!(strides(&bounds, Layout::RowMajor), [6, 1]);
        assert_eq!(strides(&bounds, Layout::ColumnMajor), [1, 4]);

        let bounds = vector![2, 3, 5];
        assert_eq!(strides(&bounds, Layout::RowMajor), [15, 5, 1]);
        assert_eq!(strides(&bounds, Layout::ColumnMajor), [1, 2, 6]);
    }

    #[test]
    fn coord_to_linear_test() {
        let bounds = vector![10, 10, 10];
        assert_eq!(
            coord_to_linear(&vector![1, 2, 3], &bounds, Layout::RowMajor),
            123
        );
        assert_eq!(
            coord_to_linear(&vector![1, 2, 3], &bounds, Layout::ColumnMajor),
            321
        );
    }

    #[test]
    fn linear_to_coord_test() {
        for layout in [Layout::RowMajor, Layout::ColumnMajor] {
            let bounds = vector![3, 7];
            for i in 0..real_buffer_size(&bounds) {
                let c = linear_to_coord(i, &bounds, layout);
                assert_eq!(coord_to_linear(&c, &bounds, layout), i);
            }
        }
        assert_eq!(
            linear_to_coord(7, &vector![3, 5], Layout::ColumnMajor),
            vector![1, 2]
        );
        assert_eq!(
            linear_to_coord(7, &vector![3, 5], Layout::RowMajor),
            vector![1, 2]
        );
    }

    #[test]
    fn layout_names_test() {
        assert_eq!(
            Layout::from_str("column-major", false),
            Ok(Layout::ColumnMajor)
        );
        assert_eq!(Layout::default(), Layout::RowMajor);
    }
}
