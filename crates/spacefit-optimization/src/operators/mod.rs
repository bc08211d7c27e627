//! Variation and selection operators shared by the generational loop.
//!
//! Every operator takes the caller's random stream explicitly so a run is
//! reproducible from a single seed.

pub mod crossover;
pub mod init;
pub mod mutation;
pub mod selection;

pub use crossover::uniform_crossover;
pub use init::{random_individual, random_population};
pub use mutation::step_mutation;
pub use selection::{roulette, select, tournament};
