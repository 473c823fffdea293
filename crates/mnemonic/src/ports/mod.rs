//! Ports (Interfaces)
//!
//! Abstract interfaces between the session and the outside world:
//! one trait per external HTTP service, and one for the operator's console.
//!
//! Implementations live in `services/` (HTTP) and in the CLI (console).

pub mod console;
pub mod services;

// Re-exports
pub use console::*;
pub use services::*;
