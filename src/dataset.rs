use clap::ValueEnum;

/// Problem sizes of the benchmark harness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    #[default]
    Mini,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Dataset {
    /// Grid side length.
    pub fn n(&self) -> usize {
        match self {
            Dataset::Mini => 20,
            Dataset::Small => 60,
            Dataset::Medium => 200,
            Dataset::Large => 1000,
            Dataset::ExtraLarge => 2000,
        }
    }

    /// Number of time steps.
    pub fn tsteps(&self) -> usize {
        match self {
            Dataset::Mini => 20,
            Dataset::Small => 40,
            Dataset::Medium => 100,
            Dataset::Large => 500,
            Dataset::ExtraLarge => 1000,
        }
    }
}
