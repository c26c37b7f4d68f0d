pub mod build_info;
pub mod cli;
pub mod csv;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod image;
pub mod initial_conditions;
pub mod solver;
pub mod util;

pub use error::*;
