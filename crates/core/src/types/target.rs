//! Per-target input supplied by the host's analysis

use serde::{Deserialize, Serialize};

use super::artifact::ArtifactLocation;

/// Everything the host knows about one target before this analysis runs:
/// its identity, raw attribute values, and whichever feature bundles the
/// host's own analysis already computed.
///
/// Feature bundles are statically-typed optional fields rather than a
/// runtime capability lookup; the target's kind decides which of them the
/// record builder reads. An absent bundle is a first-class "no value",
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetData {
    /// Path of the BUILD file that declared this target.
    #[serde(default)]
    pub build_file: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sources: Vec<ArtifactLocation>,
    /// Exported headers (`hdrs`), for C rules.
    #[serde(default)]
    pub exported_headers: Vec<ArtifactLocation>,
    /// Include paths taken verbatim from the rule's attributes.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Preprocessor defines taken verbatim from the rule's attributes.
    #[serde(default)]
    pub defines: Vec<String>,
    /// Compiler options taken verbatim from the rule's attributes.
    #[serde(default)]
    pub copts: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_outputs: Option<JavaOutputs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation_processing: Option<AnnotationProcessing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_context: Option<CcCompilationContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_toolchain: Option<CcToolchainConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidFeatures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdk: Option<SdkFeatures>,
}

/// Compiled Java outputs, one entry per produced jar group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JavaOutputs {
    #[serde(default)]
    pub jars: Vec<OutputJarGroup>,
    /// Dependency-analysis file emitted by the Java compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jdeps: Option<ArtifactLocation>,
}

/// One produced jar group; any of the three outputs may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputJarGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_jar: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface_jar: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_jar: Option<ArtifactLocation>,
}

/// Annotation-processor outputs. `enabled` reports whether processing was
/// actually applied to this target; the jars may be present as declared
/// outputs even when no processor ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationProcessing {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_jar: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_jar: Option<ArtifactLocation>,
}

/// Transitive C++ compilation context computed by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CcCompilationContext {
    #[serde(default)]
    pub include_dirs: Vec<String>,
    #[serde(default)]
    pub quote_include_dirs: Vec<String>,
    #[serde(default)]
    pub system_include_dirs: Vec<String>,
    #[serde(default)]
    pub defines: Vec<String>,
}

/// C++ toolchain configuration fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CcToolchainConfig {
    #[serde(default)]
    pub compiler_options: Vec<String>,
    #[serde(default)]
    pub linker_options: Vec<String>,
    #[serde(default)]
    pub built_in_include_dirs: Vec<String>,
}

/// Android-specific provider bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndroidFeatures {
    /// Signed APK output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apk: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_manifest: Option<ArtifactLocation>,
    /// APKs of the targets an android_test instruments.
    #[serde(default)]
    pub apks_under_test: Vec<ArtifactLocation>,
    #[serde(default)]
    pub resource_dirs: Vec<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_package: Option<String>,
    #[serde(default)]
    pub idl_sources: Vec<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idl_class_jar: Option<ArtifactLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idl_source_jar: Option<ArtifactLocation>,
    #[serde(default)]
    pub generates_resource_class: bool,
}

/// SDK-describing bundle; its presence is what marks a target as an SDK.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SdkFeatures {
    pub sdk_path: String,
    pub genfiles_path: String,
    pub bin_path: String,
}
