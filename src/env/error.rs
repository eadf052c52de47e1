// ABOUTME: Error types for env resolution and template rendering
// ABOUTME: Every rendering failure carries the path of the file that caused it

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("failed to read template [{}]: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create template: {}: {source}", .path.display())]
    ParseTemplate {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("failed to render env template: {}: {source}", .path.display())]
    RenderTemplate {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("failed to open file [{}] when render env template [{}]: {source}", .output.display(), .path.display())]
    OpenOutput {
        path: PathBuf,
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write rendered file [{}]: {source}", .output.display())]
    WriteOutput {
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create template engine: {0}")]
    Engine(#[from] TemplateError),
}

impl EnvError {
    /// Path of the file being processed when the error occurred
    pub fn path(&self) -> Option<&Path> {
        match self {
            EnvError::Walk(err) => err.path(),
            EnvError::ReadTemplate { path, .. }
            | EnvError::ParseTemplate { path, .. }
            | EnvError::RenderTemplate { path, .. }
            | EnvError::OpenOutput { path, .. } => Some(path),
            EnvError::WriteOutput { output, .. } => Some(output),
            EnvError::Engine(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
