//! Interface to the host build system
//!
//! Everything the analysis cannot do on its own — deriving output-file
//! handles, persisting bytes, registering the package-manifest action and
//! output groups — goes through this trait. Path resolution and the
//! actual writing are entirely the host's business.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::types::{ArtifactLocation, Label};

/// Named output groups the host registers finished artifact sets under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputGroup {
    /// Binary info records plus package manifests.
    Info,
    /// Human-readable duplicates of the records.
    InfoText,
    /// Compiled artifacts needed for IDE symbol resolution.
    Resolve,
}

impl OutputGroup {
    pub fn name(&self) -> &'static str {
        match self {
            OutputGroup::Info => "ide-info",
            OutputGroup::InfoText => "ide-info-text",
            OutputGroup::Resolve => "ide-resolve",
        }
    }
}

/// Host-side services consumed once per target.
pub trait Host {
    /// Derives a new output-file handle for `target` with the given file
    /// suffix, under the host's generated-files root.
    fn derive_output(&mut self, target: &Label, suffix: &str) -> ArtifactLocation;

    /// Persists the compact binary form of a record at `output`.
    fn write_binary(&mut self, output: &ArtifactLocation, bytes: &[u8]) -> Result<()>;

    /// Persists the human-readable form of a record at `output`.
    fn write_text(&mut self, output: &ArtifactLocation, text: &str) -> Result<()>;

    /// Registers the companion action that derives a package manifest from
    /// the given Java sources, returning the manifest's output handle.
    fn register_package_manifest(
        &mut self,
        target: &Label,
        java_sources: &[ArtifactLocation],
    ) -> ArtifactLocation;

    /// Adds finished artifacts to a named output group.
    fn add_to_output_group(&mut self, group: OutputGroup, artifacts: &BTreeSet<ArtifactLocation>);
}
