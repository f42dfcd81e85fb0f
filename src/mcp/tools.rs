//! MCP tool request and response types
//!
//! Tools themselves live on `HealthServer`; this module holds their
//! parameter and structured-output shapes.

pub mod types;

// Re-export types for convenience
pub use types::*;
