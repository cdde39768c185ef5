//! Dependency-ordered processing of a target graph
//!
//! The host build system would normally schedule targets bottom-up; this
//! driver provides the same guarantee on its own with a worklist keyed by
//! in-degree. A target is processed only after every one of its direct
//! prerequisites has a finalized summary, so each per-target step only
//! ever reads immutable inputs.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::aggregator::{self, DependencyRole, PrerequisiteEdge};
use crate::emitter;
use crate::error::{Error, Result};
use crate::host::{Host, OutputGroup};
use crate::record::{self, InfoRecord};
use crate::types::{Label, TargetData, TargetKind, TargetSummary};

/// One target as described by the host: its rule class, attribute values
/// and feature bundles, plus its direct prerequisite edges.
#[derive(Debug, Clone)]
pub struct TargetNode {
    pub rule_class: String,
    pub data: TargetData,
    pub edges: Vec<(Label, DependencyRole)>,
}

/// An acyclic graph of targets keyed by label.
#[derive(Debug, Clone, Default)]
pub struct TargetGraph {
    targets: BTreeMap<Label, TargetNode>,
}

impl TargetGraph {
    pub fn new() -> Self {
        TargetGraph::default()
    }

    pub fn add_target(&mut self, label: Label, node: TargetNode) -> Result<()> {
        if self.targets.contains_key(&label) {
            return Err(Error::DuplicateTarget(label));
        }
        self.targets.insert(label, node);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, label: &Label) -> Option<&TargetNode> {
        self.targets.get(label)
    }
}

/// Everything a full pass produces: the finalized summary of every target
/// and the info record of every recognized target.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    pub summaries: BTreeMap<Label, TargetSummary>,
    pub records: BTreeMap<Label, InfoRecord>,
}

/// Processes every target of `graph` in dependency order.
///
/// Fails before any per-target work if an edge points outside the graph,
/// and mid-pass with [`Error::DependencyCycle`] if the worklist drains
/// while targets remain. Ties in the ready set are broken by label order,
/// so two runs over the same graph do identical work in identical order.
pub fn process_graph(graph: &TargetGraph, host: &mut dyn Host) -> Result<AnalysisResult> {
    let mut in_degree: BTreeMap<&Label, usize> = BTreeMap::new();
    let mut dependents: HashMap<&Label, Vec<&Label>> = HashMap::new();

    for (label, node) in &graph.targets {
        in_degree.entry(label).or_insert(0);
        for (dep, _) in &node.edges {
            let Some((dep_key, _)) = graph.targets.get_key_value(dep) else {
                return Err(Error::UnknownDependency {
                    target: label.clone(),
                    dependency: dep.clone(),
                });
            };
            *in_degree.entry(label).or_insert(0) += 1;
            dependents.entry(dep_key).or_default().push(label);
        }
    }

    let mut ready: BTreeSet<&Label> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(label, _)| *label)
        .collect();

    let mut result = AnalysisResult::default();
    while let Some(label) = ready.pop_first() {
        process_target(graph, label, host, &mut result)?;

        for dependent in dependents.get(label).into_iter().flatten().copied() {
            if let Some(degree) = in_degree.get_mut(dependent) {
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(dependent);
                }
            }
        }
    }

    if result.summaries.len() < graph.len()
        && let Some(stuck) = graph
            .targets
            .keys()
            .find(|label| !result.summaries.contains_key(*label))
    {
        return Err(Error::DependencyCycle(stuck.clone()));
    }

    tracing::info!("processed {} targets", result.summaries.len());
    Ok(result)
}

fn process_target(
    graph: &TargetGraph,
    label: &Label,
    host: &mut dyn Host,
    result: &mut AnalysisResult,
) -> Result<()> {
    let node = &graph.targets[label];
    let kind = TargetKind::from_rule_class(&node.rule_class, node.data.sdk.is_some());
    tracing::debug!("processing {label} ({kind:?})");

    let edges: Vec<PrerequisiteEdge<'_>> = node
        .edges
        .iter()
        .map(|(dep, role)| PrerequisiteEdge {
            label: dep,
            role: *role,
            summary: &result.summaries[dep],
        })
        .collect();

    let has_sources = !node.data.sources.is_empty();
    let merged = aggregator::aggregate(kind, has_sources, &edges);
    let built = record::build_record(label, kind, &node.data, &merged);

    let mut summary = TargetSummary {
        kind,
        transitive_deps: merged.transitive_deps,
        runtime_deps: merged.runtime_deps,
        exported_deps: merged.exported_deps,
        resolve_artifacts: merged.resolve_artifacts,
        info_artifacts: merged.info_artifacts,
    };
    summary.resolve_artifacts.extend(built.resolve_artifacts);

    let mut text_outputs = BTreeSet::new();
    if let Some(record) = built.record {
        let emitted = emitter::emit(&record, host)?;
        summary.info_artifacts.insert(emitted.binary);
        text_outputs.insert(emitted.text);

        if kind.bears_java_sources() {
            let java_sources: Vec<_> = node
                .data
                .sources
                .iter()
                .filter(|source| source.has_extension("java"))
                .cloned()
                .collect();
            if !java_sources.is_empty() {
                let manifest = host.register_package_manifest(label, &java_sources);
                summary.info_artifacts.insert(manifest);
            }
        }

        result.records.insert(label.clone(), record);
    }

    host.add_to_output_group(OutputGroup::Info, &summary.info_artifacts);
    host.add_to_output_group(OutputGroup::InfoText, &text_outputs);
    host.add_to_output_group(OutputGroup::Resolve, &summary.resolve_artifacts);

    result.summaries.insert(label.clone(), summary);
    Ok(())
}
