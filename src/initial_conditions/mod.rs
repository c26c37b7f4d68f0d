mod generate_ic;
pub mod normal_impulse;
pub mod polybench;
pub mod rand;
use crate::error::*;
use clap::ValueEnum;
pub use generate_ic::*;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ICType {
    /// `U[i][j] = (i + n - j) / n`
    #[default]
    Polybench,
    Rand {
        seed: u64,
    },
    Impulse {
        variance: f64,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ClapICType {
    #[default]
    Polybench,
    Rand,
    Impulse,
}

impl ClapICType {
    /// `dial` is the seed for `Rand` and the variance for `Impulse`.
    /// A `Rand` seed must be a non negative whole number.
    pub fn to_ic_type(&self, dial: f64) -> Result<ICType> {
        match self {
            ClapICType::Polybench => Ok(ICType::Polybench),
            ClapICType::Rand => {
                if dial < 0.0 || dial.fract() != 0.0 || dial >= u64::MAX as f64 {
                    return Err(AdiError::configuration(format!(
                        "rand seed must be a non negative integer, got {dial}"
                    )));
                }
                Ok(ICType::Rand { seed: dial as u64 })
            }
            ClapICType::Impulse => Ok(ICType::Impulse { variance: dial }),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn to_ic_type_test() {
        assert_eq!(
            ClapICType::Polybench.to_ic_type(3.0).unwrap(),
            ICType::Polybench
        );
        assert_eq!(
            ClapICType::Rand.to_ic_type(3.0).unwrap(),
            ICType::Rand { seed: 3 }
        );
        assert_eq!(
            ClapICType::Impulse.to_ic_type(25.0).unwrap(),
            ICType::Impulse { variance: 25.0 }
        );
    }

    #[test]
    fn rand_seed_rejected_test() {
        for dial in [-3.0, 2.7, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ClapICType::Rand.to_ic_type(dial),
                Err(AdiError::Configuration { .. })
            ));
        }
        // Non integer dials are fine as a variance
        assert!(ClapICType::Impulse.to_ic_type(2.7).is_ok());
    }
}
