//! Filesystem host: persists records under an output directory

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use idegen_core::{ArtifactLocation, Host, Label, OutputGroup, Result};

/// Host implementation backed by a directory on disk. Derived outputs land
/// under `<out_dir>/genfiles/<package path>/<name><suffix>`; output-group
/// membership is accumulated in memory for reporting.
#[derive(Debug)]
pub struct FsHost {
    out_dir: PathBuf,
    groups: BTreeMap<&'static str, BTreeSet<ArtifactLocation>>,
}

impl FsHost {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        FsHost {
            out_dir: out_dir.into(),
            groups: BTreeMap::new(),
        }
    }

    /// Accumulated output-group membership, keyed by group name.
    pub fn groups(&self) -> &BTreeMap<&'static str, BTreeSet<ArtifactLocation>> {
        &self.groups
    }

    fn path_for(&self, location: &ArtifactLocation) -> PathBuf {
        self.out_dir
            .join(&location.root_execution_path)
            .join(&location.relative_path)
    }

    fn write_file(&self, location: &ArtifactLocation, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(location);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&path)?;
        file.write_all(bytes)?;
        tracing::debug!("wrote {}", path.display());
        Ok(())
    }
}

impl Host for FsHost {
    fn derive_output(&mut self, target: &Label, suffix: &str) -> ArtifactLocation {
        // "//java/com/app:lib" -> "java/com/app/lib<suffix>"; a root-package
        // label like "//:app" must stay relative to the output root.
        let relative = format!("{}{}", target.as_str().trim_start_matches("//"), suffix)
            .replace(':', "/")
            .trim_start_matches('/')
            .to_string();
        ArtifactLocation::generated(self.out_dir.display().to_string(), "genfiles", relative)
    }

    fn write_binary(&mut self, output: &ArtifactLocation, bytes: &[u8]) -> Result<()> {
        self.write_file(output, bytes)
    }

    fn write_text(&mut self, output: &ArtifactLocation, text: &str) -> Result<()> {
        self.write_file(output, text.as_bytes())
    }

    fn register_package_manifest(
        &mut self,
        target: &Label,
        java_sources: &[ArtifactLocation],
    ) -> ArtifactLocation {
        // Stands in for the build system's shell-out action: the manifest
        // simply lists the Java sources the IDE should scan for packages.
        let manifest = self.derive_output(target, ".manifest");
        let listing: String = java_sources
            .iter()
            .map(|source| format!("{source}\n"))
            .collect();
        if let Err(error) = self.write_file(&manifest, listing.as_bytes()) {
            tracing::warn!("failed to write package manifest for {target}: {error}");
        }
        manifest
    }

    fn add_to_output_group(&mut self, group: OutputGroup, artifacts: &BTreeSet<ArtifactLocation>) {
        self.groups
            .entry(group.name())
            .or_default()
            .extend(artifacts.iter().cloned());
    }
}
