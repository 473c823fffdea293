//! Value Objects

mod approval;

pub use approval::*;
