use crate::domain::*;
use crate::util::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Uniform values in `[0, 1)`.
/// Each chunk seeds its own generator from `seed` and its offset,
/// so results do not depend on how rayon schedules chunks.
pub fn rand_ic<T: FloatTrait, FieldType: FieldView<T>>(
    field: &mut FieldType,
    seed: u64,
    chunk_size: usize,
) {
    field
        .par_modify_access(chunk_size)
        .for_each(|mut d: FieldChunk<'_, T>| {
            let mut rng = StdRng::seed_from_u64(seed ^ d.offset() as u64);
            d.coord_iter_mut().for_each(|(_, value_mut)| {
                *value_mut = T::lit(rng.gen::<f64>());
            })
        });
}
