use crate::domain::*;
use crate::util::*;

/// Generate normal like distribution over the field with spike in the middle,
/// all values are in [0, 1].
pub fn normal_ic<T: FloatTrait, FieldType: FieldView<T>>(
    field: &mut FieldType,
    variance: f64,
    chunk_size: usize,
) {
    let exclusive_bounds = field.aabb().exclusive_bounds();
    let height_f = exclusive_bounds[0] as f64;
    let width_f = exclusive_bounds[1] as f64;
    let sigma_sq: f64 = (width_f / variance) * (width_f / variance);
    let ic_gen = |coord: Coord<2>| {
        let y = (coord[0] as f64) - (height_f / 2.0);
        let x = (coord[1] as f64) - (width_f / 2.0);
        let r = (x * x + y * y).sqrt();
        let exp = -r * r / (2.0 * sigma_sq);
        T::lit(exp.exp())
    };
    field.par_set_values(ic_gen, chunk_size);
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn normal_ic_test() {
        let mut field = OwnedField::<f64>::new(AABB::square(11), Layout::RowMajor);
        normal_ic(&mut field, 5.0, 16);
        let center = field.view(&vector![5, 5]);
        for v in field.buffer() {
            assert!(*v > 0.0 && *v <= center);
        }
        assert!(field.view(&vector![0, 0]) < field.view(&vector![3, 4]));
    }
}
