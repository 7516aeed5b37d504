pub mod decoder;
pub mod frame;
pub mod probe;

#[cfg(test)]
mod probe_test;

pub use decoder::*;
pub use frame::*;
pub use probe::*;
