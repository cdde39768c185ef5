use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::artifact::ArtifactLocation;
use super::kind::TargetKind;
use super::label::Label;

/// The finalized, per-target result handed to every direct dependent.
///
/// A summary is created exactly once, after its target has been fully
/// processed, and is read-only from then on. All sets are `BTreeSet` so
/// membership is deduplicated by identity and iteration order is stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub kind: TargetKind,
    /// Direct dependencies plus each dependency's own declared exports.
    pub transitive_deps: BTreeSet<Label>,
    /// Direct runtime-only dependencies; not expanded transitively here.
    pub runtime_deps: BTreeSet<Label>,
    /// Labels this target re-exposes to its own dependents.
    pub exported_deps: BTreeSet<Label>,
    /// Compiled outputs the IDE needs for symbol resolution, accumulated
    /// over the whole reachable subgraph.
    pub resolve_artifacts: BTreeSet<ArtifactLocation>,
    /// Info records and package manifests produced so far, accumulated
    /// over the whole reachable subgraph.
    pub info_artifacts: BTreeSet<ArtifactLocation>,
}

impl TargetSummary {
    pub fn new(kind: TargetKind) -> Self {
        TargetSummary {
            kind,
            transitive_deps: BTreeSet::new(),
            runtime_deps: BTreeSet::new(),
            exported_deps: BTreeSet::new(),
            resolve_artifacts: BTreeSet::new(),
            info_artifacts: BTreeSet::new(),
        }
    }
}
