pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod mcp;

pub use config::Config;
pub use error::Error;
