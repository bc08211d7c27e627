pub mod ga;

pub use ga::GASolver;
