//! idegen - IDE build-info generation for an evaluated target graph
//!
//! This crate walks a dependency graph of build targets (Java, Android,
//! C/C++ rules) in dependency order and emits one structured info record
//! per target for an external IDE integration:
//! - merge each target's prerequisite summaries (export propagation,
//!   runtime deps, resolve/info artifact sets)
//! - build a kind-specific record from the target's own attributes and
//!   feature bundles
//! - serialize the record in binary and text form through the host
pub mod aggregator;
pub mod emitter;
pub mod error;
pub mod host;
pub mod record;
pub mod traversal;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use aggregator::{AggregatedDeps, DependencyRole, PrerequisiteEdge, aggregate};
pub use emitter::{EmittedRecord, INFO_FILE_SUFFIX, INFO_TEXT_FILE_SUFFIX, emit};
pub use host::{Host, OutputGroup};
pub use record::{BuiltRecord, InfoRecord, Payload, build_record};
pub use traversal::{AnalysisResult, TargetGraph, TargetNode, process_graph};
