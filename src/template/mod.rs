// ABOUTME: Template engine module for hostenv
// ABOUTME: Provides handlebars rendering and helpers for env-aware templates

pub mod engine;
pub mod error;
pub mod helpers;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
