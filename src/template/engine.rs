// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Provides template validation and rendering against serializable env data

use std::collections::HashSet;

use handlebars::template::{Parameter, Template, TemplateElement};
use handlebars::{Context, Handlebars, RenderContext, RenderError, Renderable, StringOutput};
use serde::Serialize;

use super::error::{Result, TemplateError};
use super::helpers;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    helper_names: HashSet<String>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Missing keys render as empty strings
        handlebars.set_strict_mode(false);

        // Rendered files are config and shell text, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars)
            .map_err(|e| TemplateError::HelperError(e.to_string()))?;

        let helper_names = helpers::HANDLEBARS_HELPERS
            .iter()
            .chain(helpers::HOSTENV_HELPERS)
            .map(|name| name.to_string())
            .collect();

        Ok(Self {
            handlebars,
            helper_names,
        })
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        Template::compile(template)?;
        Ok(())
    }

    /// Parse a template once so it can be rendered any number of times.
    ///
    /// Bare value expressions such as `{{KEY}}` are rewritten to go through
    /// the `env_value` helper, so a list prints as `[a b]` exactly like it
    /// does in a wrapped shell command.
    pub fn compile(&self, template: &str) -> Result<Template> {
        let mut compiled = Template::compile(template)?;
        self.route_bare_values(&mut compiled);
        Ok(compiled)
    }

    /// Render a compiled template against any serializable data
    pub fn render_compiled<T: Serialize>(&self, template: &Template, data: &T) -> Result<String> {
        let context = Context::wraps(data)?;
        let mut output = StringOutput::new();
        {
            let mut render_context = RenderContext::new(None);
            template.render(&self.handlebars, &context, &mut render_context, &mut output)?;
        }

        output
            .into_string()
            .map_err(|e| TemplateError::RenderError(RenderError::from(e)))
    }

    /// Render a template string against any serializable data.
    ///
    /// A malformed template fails with `SyntaxError` before anything runs, so
    /// callers can tell it apart from one that failed while executing.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        let compiled = self.compile(template)?;
        self.render_compiled(&compiled, data)
    }

    /// Register a custom helper function
    pub fn register_helper<F>(&mut self, name: &str, helper: F)
    where
        F: handlebars::HelperDef + Send + Sync + 'static,
    {
        self.handlebars.register_helper(name, Box::new(helper));
        self.helper_names.insert(name.to_string());
    }

    fn route_bare_values(&self, template: &mut Template) {
        for element in template.elements.iter_mut() {
            match element {
                TemplateElement::Expression(ht) | TemplateElement::HtmlExpression(ht) => {
                    let bare_value = ht.params.is_empty()
                        && ht.hash.is_empty()
                        && matches!(ht.name, Parameter::Path(_))
                        && ht
                            .name
                            .as_name()
                            .map_or(false, |name| !self.helper_names.contains(name));
                    if bare_value {
                        let value = std::mem::replace(
                            &mut ht.name,
                            Parameter::Name(helpers::ENV_VALUE_HELPER.to_string()),
                        );
                        ht.params.push(value);
                    }
                }
                TemplateElement::HelperBlock(ht) => {
                    if let Some(inner) = ht.template.as_mut() {
                        self.route_bare_values(inner);
                    }
                    if let Some(inverse) = ht.inverse.as_mut() {
                        self.route_bare_values(inverse);
                    }
                }
                TemplateElement::DecoratorBlock(dt) | TemplateElement::PartialBlock(dt) => {
                    if let Some(inner) = dt.template.as_mut() {
                        self.route_bare_values(inner);
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_template_rendering() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine
            .render("datadisk={{DATADISK}}", &json!({"DATADISK": "/data"}))
            .unwrap();

        assert_eq!(result, "datadisk=/data");
    }

    #[test]
    fn test_missing_key_renders_empty() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("[{{MISSING}}]", &json!({})).unwrap();
        assert_eq!(result, "[]");
    }

    #[test]
    fn test_no_html_escaping() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine
            .render("{{CMD}}", &json!({"CMD": "a && b > \"c\""}))
            .unwrap();
        assert_eq!(result, "a && b > \"c\"");
    }

    #[test]
    fn test_list_iteration() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine
            .render(
                "{{#each IP}}server {{this}}\n{{/each}}",
                &json!({"IP": ["10.0.0.1", "10.0.0.2"]}),
            )
            .unwrap();
        assert_eq!(result, "server 10.0.0.1\nserver 10.0.0.2\n");
    }

    #[test]
    fn test_bare_list_prints_like_shell() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({"IP": ["10.0.0.1", "10.0.0.2"], "DISK": "/data"});

        let result = engine
            .render("ips={{IP}} disk={{DISK}} raw={{{IP}}}", &data)
            .unwrap();
        assert_eq!(result, "ips=[10.0.0.1 10.0.0.2] disk=/data raw=[10.0.0.1 10.0.0.2]");
    }

    #[test]
    fn test_bare_values_inside_blocks() {
        let engine = TemplateEngine::new().unwrap();
        let data = json!({"IP": ["a", "b"], "V": ["x", "y"], "S": "s"});

        let each = engine
            .render("{{#each IP}}{{@index}}={{this}};{{/each}}", &data)
            .unwrap();
        assert_eq!(each, "0=a;1=b;");

        let branch = engine
            .render("{{#if (is_list S)}}{{S}}{{else}}{{V}}{{/if}}", &data)
            .unwrap();
        assert_eq!(branch, "[x y]");
    }

    #[test]
    fn test_compiled_template_renders_repeatedly() {
        let engine = TemplateEngine::new().unwrap();
        let compiled = engine.compile("disk={{DISK}}").unwrap();

        let first = engine
            .render_compiled(&compiled, &json!({"DISK": "/a"}))
            .unwrap();
        let second = engine
            .render_compiled(&compiled, &json!({"DISK": "/b"}))
            .unwrap();
        assert_eq!(first, "disk=/a");
        assert_eq!(second, "disk=/b");
    }

    #[test]
    fn test_registered_helper_is_not_treated_as_value() {
        let mut engine = TemplateEngine::new().unwrap();
        engine.register_helper(
            "greeting",
            |_: &handlebars::Helper,
             _: &Handlebars,
             _: &handlebars::Context,
             _: &mut handlebars::RenderContext,
             out: &mut dyn handlebars::Output| {
                out.write("hello")?;
                Ok(())
            },
        );

        let result = engine
            .render("{{greeting}}", &json!({"greeting": ["not", "used"]}))
            .unwrap();
        assert_eq!(result, "hello");
    }

    #[test]
    fn test_template_validation() {
        let engine = TemplateEngine::new().unwrap();

        assert!(engine.validate_template("Hello {{name}}").is_ok());
        assert!(engine
            .validate_template("{{#if condition}}true{{else}}false{{/if}}")
            .is_ok());

        let err = engine.validate_template("Hello {{name}").unwrap_err();
        assert!(matches!(err, TemplateError::SyntaxError(_)));
    }

    #[test]
    fn test_render_reports_syntax_errors() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("value={{x}", &json!({})).unwrap_err();
        assert!(matches!(err, TemplateError::SyntaxError(_)));
    }

    #[test]
    fn test_custom_helper() {
        let mut engine = TemplateEngine::new().unwrap();

        engine.register_helper(
            "multiply",
            |h: &handlebars::Helper,
             _: &Handlebars,
             _: &handlebars::Context,
             _: &mut handlebars::RenderContext,
             out: &mut dyn handlebars::Output| {
                let a = h.param(0).and_then(|v| v.value().as_u64()).ok_or_else(|| {
                    handlebars::RenderError::new("First parameter must be a number")
                })?;

                let b = h.param(1).and_then(|v| v.value().as_u64()).ok_or_else(|| {
                    handlebars::RenderError::new("Second parameter must be a number")
                })?;

                out.write(&(a * b).to_string())?;
                Ok(())
            },
        );

        let result = engine.render("{{multiply 6 7}}", &json!({})).unwrap();
        assert_eq!(result, "42");
    }

    #[test]
    fn test_helper_failure_is_render_error() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("{{upper 42}}", &json!({})).unwrap_err();
        assert!(matches!(err, TemplateError::RenderError(_)));
    }
}
