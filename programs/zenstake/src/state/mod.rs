pub mod program;
pub use program::*;

pub mod meditation_plan;
pub use meditation_plan::*;

pub mod attestation;
pub use attestation::*;
