//! Merging of prerequisite summaries into a target's dependency sets
//!
//! Runs before the record builder: every direct prerequisite edge arrives
//! here tagged with its role and carrying the prerequisite's finalized
//! [`TargetSummary`]. The aggregator has no error states — an absent
//! attribute or an empty edge list simply yields empty sets.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{ArtifactLocation, Label, TargetKind, TargetSummary};

/// The role a prerequisite edge plays on the depending target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyRole {
    /// Ordinary compile-time dependency (`deps`).
    Dependency,
    /// Runtime-only dependency (`runtime_deps`).
    Runtime,
    /// Export-only edge (`exports`): re-exposed without being depended on.
    Export,
    /// C++ toolchain edge.
    Toolchain,
    /// Legacy `resources` attribute (single label).
    Resources,
    /// Companion target of a java_wrap_cc rule.
    JavaWrap,
}

/// One direct prerequisite edge plus its finalized summary.
#[derive(Debug, Clone, Copy)]
pub struct PrerequisiteEdge<'a> {
    pub label: &'a Label,
    pub role: DependencyRole,
    pub summary: &'a TargetSummary,
}

/// Dependency data merged from a target's direct prerequisites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedDeps {
    pub transitive_deps: BTreeSet<Label>,
    pub runtime_deps: BTreeSet<Label>,
    pub exported_deps: BTreeSet<Label>,
    pub resolve_artifacts: BTreeSet<ArtifactLocation>,
    pub info_artifacts: BTreeSet<ArtifactLocation>,
    /// Label of the direct `resources` edge, if the target declared one.
    pub legacy_resources: Option<Label>,
}

/// Merges the direct prerequisite edges of a target of the given kind.
///
/// Export propagation is one hop: a prerequisite contributes its own label
/// plus the labels it declares exported. Exports of exports are not chased
/// here; they only become visible if the intermediate target re-exports
/// them into its own `exported_deps`.
///
/// `has_sources` feeds the sourceless-library rule: an android_library with
/// no sources of its own re-exports its entire direct dependency set, so
/// header/resource-only wrappers stay transparent to dependents.
pub fn aggregate(
    kind: TargetKind,
    has_sources: bool,
    edges: &[PrerequisiteEdge<'_>],
) -> AggregatedDeps {
    let mut merged = AggregatedDeps::default();

    for edge in edges {
        match edge.role {
            DependencyRole::Runtime => {
                merged.runtime_deps.insert(edge.label.clone());
            }
            DependencyRole::Export => {
                merged.exported_deps.insert(edge.label.clone());
            }
            DependencyRole::Dependency
            | DependencyRole::Toolchain
            | DependencyRole::Resources
            | DependencyRole::JavaWrap => {
                merged.transitive_deps.insert(edge.label.clone());
                merged
                    .transitive_deps
                    .extend(edge.summary.exported_deps.iter().cloned());
            }
        }

        if edge.role == DependencyRole::Resources {
            merged.legacy_resources = Some(edge.label.clone());
        }

        // Artifact sets accumulate over every edge, whatever its role.
        merged
            .resolve_artifacts
            .extend(edge.summary.resolve_artifacts.iter().cloned());
        merged
            .info_artifacts
            .extend(edge.summary.info_artifacts.iter().cloned());
    }

    if kind == TargetKind::AndroidLibrary && !has_sources {
        let implicit: Vec<Label> = edges
            .iter()
            .filter(|e| e.role == DependencyRole::Dependency)
            .map(|e| e.label.clone())
            .collect();
        if !implicit.is_empty() {
            tracing::debug!(
                "sourceless android_library re-exports {} direct deps",
                implicit.len()
            );
        }
        merged.exported_deps.extend(implicit);
    }

    merged
}
