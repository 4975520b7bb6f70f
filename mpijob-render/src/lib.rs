//! mpijob Render - Manifest Templates
//!
//! Substitutes a resolved benchmark profile into the MPIJob template.

mod error;
mod template;

pub use error::RenderError;
pub use template::{render_manifest, ManifestTemplate, TEMPLATE_FILE, TO_LOWER};
