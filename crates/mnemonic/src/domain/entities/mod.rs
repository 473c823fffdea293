//! Domain Entities

mod image;
mod verse;

pub use image::*;
pub use verse::*;
