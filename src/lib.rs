// ABOUTME: Main library module for hostenv
// ABOUTME: Exports cluster loading, host env resolution and template rendering

pub mod cli;
pub mod cluster;
pub mod env;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use cluster::{Cluster, Host};
pub use env::{EnvError, EnvProcessor, EnvValue, HostEnv, Processor};
pub use template::TemplateEngine;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
