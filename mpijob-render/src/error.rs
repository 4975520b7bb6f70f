use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or applying a manifest template
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read the template '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse the template")]
    Parse(#[source] minijinja::Error),

    #[error("failed to apply the template")]
    Render(#[source] minijinja::Error),
}
