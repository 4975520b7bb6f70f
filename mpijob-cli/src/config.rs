//! Run Configuration
//!
//! The parsed command line, frozen into one value that is handed to each
//! stage explicitly.

use crate::Cli;
use mpijob_core::ProfileRequest;
use std::path::{Path, PathBuf};

/// What the invocation should produce on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Rendered manifest
    Render,
    /// Resolved profile as JSON, no template involved
    DryRun,
    /// Benchmark catalog
    List,
}

/// Immutable configuration for a single invocation
#[derive(Debug, Clone)]
pub struct RenderConfig {
    name: String,
    np: Option<String>,
    machine: String,
    template_path: PathBuf,
    mode: Mode,
}

impl RenderConfig {
    pub fn new(
        name: impl Into<String>,
        np: Option<String>,
        machine: impl Into<String>,
        template_path: impl Into<PathBuf>,
        mode: Mode,
    ) -> Self {
        Self {
            name: name.into(),
            np,
            machine: machine.into(),
            template_path: template_path.into(),
            mode,
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        // --list wins over --dry-run; neither needs a template
        let mode = if cli.list {
            Mode::List
        } else if cli.dry_run {
            Mode::DryRun
        } else {
            Mode::Render
        };

        Self::new(
            cli.name.clone(),
            cli.np.clone(),
            cli.machine.clone(),
            cli.template.clone(),
            mode,
        )
    }

    /// Inputs for profile resolution, borrowed from this config
    pub fn request(&self) -> ProfileRequest<'_> {
        ProfileRequest {
            name: &self.name,
            np: self.np.as_deref(),
            machine: &self.machine,
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}
