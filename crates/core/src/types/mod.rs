pub mod artifact;
pub mod kind;
pub mod label;
pub mod summary;
pub mod target;

// Re-export commonly used types
pub use artifact::{ArtifactLocation, LibraryArtifact};
pub use kind::TargetKind;
pub use label::Label;
pub use summary::TargetSummary;
pub use target::{
    AndroidFeatures, AnnotationProcessing, CcCompilationContext, CcToolchainConfig, JavaOutputs,
    OutputJarGroup, SdkFeatures, TargetData,
};
