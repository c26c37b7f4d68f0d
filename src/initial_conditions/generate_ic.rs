use crate::domain::*;
use crate::initial_conditions::normal_impulse::*;
use crate::initial_conditions::polybench::*;
use crate::initial_conditions::rand::*;
use crate::initial_conditions::*;
use crate::util::*;

pub fn generate_ic<T: FloatTrait, FieldType: FieldView<T>>(
    field: &mut FieldType,
    ic_type: ICType,
    chunk_size: usize,
) {
    match ic_type {
        ICType::Polybench => {
            polybench_ic(field, chunk_size);
        }
        ICType::Rand { seed } => {
            rand_ic(field, seed, chunk_size);
        }
        ICType::Impulse { variance } => {
            normal_ic(field, variance, chunk_size);
        }
    }
}
