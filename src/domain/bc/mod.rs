mod constant;

pub use constant::*;
