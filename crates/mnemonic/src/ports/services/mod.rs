//! Service Ports
//!
//! Abstract interfaces for external services.

mod image_generator;
mod prompt_rewriter;
mod verse_lookup;

pub use image_generator::*;
pub use prompt_rewriter::*;
pub use verse_lookup::*;
