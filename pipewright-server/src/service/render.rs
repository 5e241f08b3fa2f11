//! Jenkinsfile rendering
//!
//! Thin wrapper around a handlebars registry holding the single named
//! Jenkinsfile template. The template is registered once, eagerly, so a
//! missing or unparsable resource surfaces at startup rather than on the
//! first request. Rendering itself is a pure function of the pipeline
//! name and tech stack.
//!
//! Tag names and the pipeline name are interpolated into the output as-is;
//! callers are responsible for passing values that are safe to embed.

use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

const TEMPLATE_NAME: &str = "jenkinsfile";

/// Renderer owning the registered Jenkinsfile template
pub struct JenkinsfileRenderer {
    handlebars: Handlebars<'static>,
}

impl JenkinsfileRenderer {
    /// Registers the template from a file on disk
    pub fn from_file(path: &Path) -> Result<Self, handlebars::TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_file(TEMPLATE_NAME, path)?;

        Ok(Self { handlebars })
    }

    /// Registers the template from an in-memory string
    pub fn from_template_str(template: &str) -> Result<Self, handlebars::TemplateError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(TEMPLATE_NAME, template)?;

        Ok(Self { handlebars })
    }

    /// Renders the Jenkinsfile for a pipeline name and resolved tech stack
    pub fn render(
        &self,
        name: &str,
        tech_stack: &[String],
    ) -> Result<String, handlebars::RenderError> {
        self.handlebars.render(
            TEMPLATE_NAME,
            &json!({
                "name": name,
                "tech_stack": tech_stack,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "pipeline for {{name}} with \
        {{#each tech_stack}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}";

    fn stack(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_render_interpolates_name_and_tags() {
        let renderer = JenkinsfileRenderer::from_template_str(TEMPLATE).unwrap();

        let rendered = renderer
            .render("Example", &stack(&["docker", "make"]))
            .unwrap();

        assert_eq!(rendered, "pipeline for Example with docker, make");
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = JenkinsfileRenderer::from_template_str(TEMPLATE).unwrap();
        let tech_stack = stack(&["artifactory", "docker"]);

        let first = renderer.render("Example", &tech_stack).unwrap();
        let second = renderer.render("Example", &tech_stack).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_render_with_empty_stack() {
        let renderer = JenkinsfileRenderer::from_template_str(TEMPLATE).unwrap();

        let rendered = renderer.render("Bare", &[]).unwrap();
        assert_eq!(rendered, "pipeline for Bare with ");
    }

    #[test]
    fn test_missing_template_file_is_an_error() {
        let result = JenkinsfileRenderer::from_file(Path::new("does/not/exist.hbs"));
        assert!(result.is_err());
    }
}
