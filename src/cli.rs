use crate::build_info;
use crate::dataset::Dataset;
use crate::error::*;
use crate::initial_conditions::*;
use crate::solver::*;
use crate::util::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Element type the grid is stored in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DataType {
    F32,
    #[default]
    F64,
}

/// adi 2D heat solver executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Problem size preset.
    #[arg(short, long, value_enum, default_value = "mini")]
    pub dataset: Dataset,

    /// Grid size, overrides the dataset.
    #[arg(short, long)]
    pub n: Option<usize>,

    /// Number of time steps, overrides the dataset.
    #[arg(short = 's', long)]
    pub tsteps: Option<usize>,

    /// Element type of the grid.
    #[arg(long, value_enum, default_value = "f64")]
    pub data_type: DataType,

    /// The number of threads to use.
    #[arg(short, long, default_value = "1")]
    pub threads: usize,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Minimum number of lines per parallel task.
    #[arg(long, default_value = "8")]
    pub lines_per_task: usize,

    /// Storage order of U.
    #[arg(long, value_enum, default_value = "row-major")]
    pub u_layout: Layout,

    /// Storage order of V.
    #[arg(long, value_enum, default_value = "column-major")]
    pub v_layout: Layout,

    /// Line order within a sweep.
    #[arg(long, value_enum, default_value = "forward")]
    pub traversal: Traversal,

    /// Seed for shuffled traversal.
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Initial condition.
    #[arg(long, value_enum, default_value = "polybench")]
    pub ic: ClapICType,

    /// Seed for rand (a non negative integer), variance for impulse.
    #[arg(long, default_value = "25.0")]
    pub ic_dial: f64,

    /// Do not print the final grid.
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the final grid as csv.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the final grid as a heat map image,
    /// WARNING: we do not check image size, so be reasonable.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn solver_parameters(&self) -> SolverParameters {
        let defaults = SolverParameters::from_dataset(self.dataset);
        SolverParameters {
            n: self.n.unwrap_or(defaults.n),
            tsteps: self.tsteps.unwrap_or(defaults.tsteps),
            threads: self.threads,
            lines_per_task: self.lines_per_task,
            chunk_size: self.chunk_size,
            u_layout: self.u_layout,
            v_layout: self.v_layout,
            traversal: self.traversal,
            seed: self.seed,
            ..defaults
        }
    }

    pub fn ic_type(&self) -> Result<ICType> {
        self.ic.to_ic_type(self.ic_dial)
    }

    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        log::debug!("{}: {:?}", name, args);
        args
    }
}
