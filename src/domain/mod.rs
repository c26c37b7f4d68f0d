//! This module has things for managing fields,
//! which really means retrieving values based on grid coordinates.
//! A field owns (or borrows) a linear buffer plus the index space
//! and layout that map grid coordinates into it.
//! Sweeps work line by line, so we also describe how a line
//! of a field is laid out in that buffer.

mod axis;
mod bc;
mod view;

pub use axis::*;
pub use bc::*;
pub use view::*;
