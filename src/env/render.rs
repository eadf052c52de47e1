// ABOUTME: Directory walker that renders env templates in place
// ABOUTME: Turns every `*.tmpl` file into a sibling file with the suffix stripped

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::error::{EnvError, Result};
use super::resolver::HostEnv;
use crate::template::{TemplateEngine, TemplateError};

pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Output path for a template file, or `None` if the path is not a template
pub fn output_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(TEMPLATE_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}

/// Render every template under `dir` against `env`.
///
/// Stops at the first failure. Returns the written output paths in walk order.
pub fn render_dir(engine: &TemplateEngine, env: &HostEnv, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut rendered = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let Some(output) = output_path(path) else {
            continue;
        };

        render_file(engine, env, path, &output)?;
        rendered.push(output);
    }

    Ok(rendered)
}

/// Render a single template file into `output`, truncating any previous content
pub fn render_file(engine: &TemplateEngine, env: &HostEnv, path: &Path, output: &Path) -> Result<()> {
    debug!("Rendering template: {}", path.display());

    let source = std::fs::read_to_string(path).map_err(|source| EnvError::ReadTemplate {
        path: path.to_path_buf(),
        source,
    })?;

    let content = engine.render(&source, env).map_err(|source| match source {
        TemplateError::SyntaxError(_) => EnvError::ParseTemplate {
            path: path.to_path_buf(),
            source,
        },
        _ => EnvError::RenderTemplate {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut writer = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(output)
        .map_err(|source| EnvError::OpenOutput {
            path: path.to_path_buf(),
            output: output.to_path_buf(),
            source,
        })?;

    writer
        .write_all(content.as_bytes())
        .map_err(|source| EnvError::WriteOutput {
            output: output.to_path_buf(),
            source,
        })?;

    info!(
        "Rendered {} -> {} ({} bytes)",
        path.display(),
        output.display(),
        content.len()
    );
    Ok(())
}
