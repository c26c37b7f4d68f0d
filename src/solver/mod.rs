//! Alternating direction implicit time stepping.
//! Each step is a column sweep writing `V` from `U`,
//! followed by a row sweep writing `U` from `V`.
//! Every sweep runs Thomas elimination on each interior line.

mod coefficients;
mod coordinator;
mod driver;
mod parameters;
mod phase;
mod scratch;
mod sweep;
mod traversal;

pub use coefficients::*;
pub use coordinator::*;
pub use driver::*;
pub use parameters::*;
pub use phase::*;
pub use scratch::*;
pub use sweep::*;
pub use traversal::*;
