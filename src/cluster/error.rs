// ABOUTME: Error types for cluster file loading
// ABOUTME: Defines specific error types for reading and deserializing cluster definitions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("Failed to read cluster file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("No document of kind 'Cluster' found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, ClusterError>;
