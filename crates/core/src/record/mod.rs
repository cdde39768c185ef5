//! The serializable description of one target

pub mod builder;

pub use builder::{BuiltRecord, build_record};

use serde::{Deserialize, Serialize};

use crate::types::{ArtifactLocation, Label, LibraryArtifact, TargetKind};

/// Finished, write-once description of a single target, as handed to the
/// IDE. Field order here is the order of the serialized forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoRecord {
    pub label: Label,
    pub build_file: String,
    pub kind: TargetKind,
    /// Direct dependencies plus one hop of their exports, sorted.
    pub dependencies: Vec<Label>,
    pub runtime_deps: Vec<Label>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// At most one kind-specific payload. `None` for a toolchain target
    /// whose configuration fragment was unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

/// Kind-specific portion of an [`InfoRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    Java(JavaInfo),
    Cc(CInfo),
    CcToolchain(ToolchainInfo),
    Android(AndroidInfo),
    Sdk(SdkInfo),
}

/// Java build information: produced jars and source files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JavaInfo {
    /// One entry per produced output-jar group.
    pub jars: Vec<LibraryArtifact>,
    /// Annotation-processor output, present only when processing ran.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generated_jars: Vec<LibraryArtifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jdeps: Option<ArtifactLocation>,
    pub sources: Vec<ArtifactLocation>,
}

/// C/C++ build information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CInfo {
    pub sources: Vec<ArtifactLocation>,
    pub exported_headers: Vec<ArtifactLocation>,
    /// Verbatim rule attributes.
    pub target_includes: Vec<String>,
    pub target_defines: Vec<String>,
    pub target_copts: Vec<String>,
    /// From the host's transitive compilation context; empty when absent.
    pub transitive_include_dirs: Vec<String>,
    pub transitive_quote_include_dirs: Vec<String>,
    pub transitive_system_include_dirs: Vec<String>,
    pub transitive_defines: Vec<String>,
}

/// C++ toolchain flags and built-in include directories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolchainInfo {
    pub compiler_options: Vec<String>,
    pub linker_options: Vec<String>,
    pub built_in_include_dirs: Vec<String>,
}

/// Android build information. Android targets are also Java targets, so
/// the Java facet is embedded here rather than carried as a second payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndroidInfo {
    pub java: JavaInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apk: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_manifest: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependency_apks: Vec<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_package: Option<String>,
    /// Library derived from IDL sources; present only when the target has
    /// IDL sources at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idl_jar: Option<LibraryArtifact>,
    pub generate_resource_class: bool,
    /// Back-reference to a legacy `resources` dependency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_resources: Option<Label>,
}

/// Android SDK description: plain root paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdkInfo {
    pub android_sdk_path: String,
    pub genfiles_path: String,
    pub bin_path: String,
}
