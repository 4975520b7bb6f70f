//! Manifest Template
//!
//! Loads the manifest template and substitutes a [`BenchmarkProfile`] into it.
//! Templates use Jinja syntax and see the profile fields as top-level
//! variables (`Bench`, `Name`, `Image`, `Nproc`, `Command`, `Machine`).

use crate::error::RenderError;
use minijinja::{Environment, UndefinedBehavior};
use mpijob_core::BenchmarkProfile;
use std::path::Path;

/// Default template location, relative to the working directory
pub const TEMPLATE_FILE: &str = "mpijob_template.yaml";

/// Name of the lowercase helper, usable as `ToLower(x)` or `x | ToLower`
pub const TO_LOWER: &str = "ToLower";

const TEMPLATE_NAME: &str = "runtime";

/// A parsed manifest template, ready to render
pub struct ManifestTemplate {
    env: Environment<'static>,
}

impl ManifestTemplate {
    /// Parse template source.
    ///
    /// Unknown variables are an error at render time rather than rendering
    /// as empty strings.
    pub fn parse(source: impl Into<String>) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.add_function(TO_LOWER, to_lower);
        env.add_filter(TO_LOWER, to_lower);

        env.add_template_owned(TEMPLATE_NAME, source.into())
            .map_err(RenderError::Parse)?;

        Ok(Self { env })
    }

    /// Read and parse the template at `path`
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        tracing::debug!(path = %path.display(), "loading template");
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(source)
    }

    /// Render the template for one profile
    pub fn render(&self, profile: &BenchmarkProfile) -> Result<String, RenderError> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(RenderError::Render)?;
        let rendered = template.render(profile).map_err(RenderError::Render)?;

        tracing::debug!(bytes = rendered.len(), job = profile.name(), "rendered manifest");
        Ok(rendered)
    }
}

/// Load the template at `path` and render it for `profile`
pub fn render_manifest(path: &Path, profile: &BenchmarkProfile) -> Result<String, RenderError> {
    ManifestTemplate::load(path)?.render(profile)
}

fn to_lower(value: String) -> String {
    value.to_lowercase()
}
