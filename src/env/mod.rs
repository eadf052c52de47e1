// ABOUTME: Env module for hostenv
// ABOUTME: Exports host env resolution, shell wrapping and template directory rendering

pub mod error;
pub mod processor;
pub mod render;
pub mod resolver;
pub mod value;

pub use error::{EnvError, Result};
pub use processor::{EnvProcessor, Processor};
pub use render::TEMPLATE_SUFFIX;
pub use resolver::{convert_env, merge_list, HostEnv};
pub use value::EnvValue;
