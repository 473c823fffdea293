//! Domain Layer
//!
//! Plain values flowing through a session and the errors each step can raise.
//! Nothing here touches the network or the console.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
