// ABOUTME: Handlebars helper functions for template rendering
// ABOUTME: Implements list-aware helpers so templates can branch on single vs multi-valued env

use handlebars::{
    handlebars_helper, Context, Handlebars, Helper, Output, RenderContext, RenderError,
};
use serde_json::Value as JsonValue;

const DEFAULT_SEPARATOR: &str = ",";

/// Helpers every Handlebars registry starts with
pub const HANDLEBARS_HELPERS: &[&str] = &[
    "if", "unless", "each", "with", "lookup", "raw", "log", "eq", "ne", "gt", "gte", "lt", "lte",
    "and", "or", "not", "len",
];

/// Helpers added by `register_helpers`
pub const HOSTENV_HELPERS: &[&str] = &[
    "join",
    "default",
    "upper",
    "lower",
    "is_list",
    "first",
    ENV_VALUE_HELPER,
];

/// Helper that bare `{{KEY}}` expressions are routed through
pub const ENV_VALUE_HELPER: &str = "env_value";

/// Flatten a scalar or list env value into text, joining list items with `separator`
fn flatten(value: &JsonValue, separator: &str) -> std::result::Result<String, RenderError> {
    match value {
        JsonValue::Null => Ok(String::new()),
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Array(items) => {
            let strings: std::result::Result<Vec<&str>, RenderError> = items
                .iter()
                .map(|v| {
                    v.as_str()
                        .ok_or_else(|| RenderError::new("Array elements must be strings"))
                })
                .collect();
            Ok(strings?.join(separator))
        }
        other => Ok(other.to_string()),
    }
}

/// Env value helper - prints a value the way a shell sees it, lists as `[a b]`
pub fn env_value_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let rendered = match h.param(0).map(|v| v.value()) {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Array(items)) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| match item {
                    JsonValue::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            format!("[{}]", items.join(" "))
        }
        Some(other) => other.to_string(),
    };

    out.write(&rendered)?;
    Ok(())
}

/// Join helper - joins a list value with an optional separator (default ",")
pub fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = h
        .param(0)
        .map(|v| v.value())
        .ok_or_else(|| RenderError::new("join helper requires a value parameter"))?;

    let separator = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .unwrap_or(DEFAULT_SEPARATOR);

    out.write(&flatten(value, separator)?)?;
    Ok(())
}

/// Default helper - provides a fallback if the value is empty or missing
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let value = match h.param(0) {
        Some(v) => flatten(v.value(), DEFAULT_SEPARATOR)?,
        None => String::new(),
    };

    let default_value = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires default value parameter"))?;

    let result = if value.is_empty() {
        default_value
    } else {
        value.as_str()
    };

    out.write(result)?;
    Ok(())
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("upper helper requires input parameter"))?;

    out.write(&input.to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let input = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("lower helper requires input parameter"))?;

    out.write(&input.to_lowercase())?;
    Ok(())
}

handlebars_helper!(is_list: |v: Json| v.is_array());

handlebars_helper!(first: |v: Json| match v {
    JsonValue::Array(items) => items.first().cloned().unwrap_or(JsonValue::Null),
    other => other.clone(),
});

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(
    handlebars: &mut Handlebars,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    handlebars.register_helper("join", Box::new(join_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("is_list", Box::new(is_list));
    handlebars.register_helper("first", Box::new(first));
    handlebars.register_helper(ENV_VALUE_HELPER, Box::new(env_value_helper));

    Ok(())
}
