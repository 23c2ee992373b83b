pub mod initialize;
pub use initialize::*;

pub mod create_plan;
pub use create_plan::*;

pub mod attest;
pub use attest::*;

pub mod settle;
pub use settle::*;
