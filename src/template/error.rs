// ABOUTME: Error types for template engine operations
// ABOUTME: Separates template syntax failures from render-time failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error: {0}")]
    SyntaxError(#[from] handlebars::TemplateError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Failed to register helper: {0}")]
    HelperError(String),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
