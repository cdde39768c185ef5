//! JSON description of an evaluated target graph
//!
//! The file format mirrors what a build system's analysis phase would
//! hand over per target: label, rule class, role-tagged dependency edges,
//! attribute values and optional feature bundles.

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use idegen_core::{DependencyRole, Label, TargetData, TargetGraph, TargetNode};

#[derive(Debug, Deserialize)]
pub struct GraphFile {
    pub targets: Vec<TargetEntry>,
}

/// One target as described in the graph file. Attribute values and feature
/// bundles deserialize straight into the core's `TargetData`.
#[derive(Debug, Deserialize)]
pub struct TargetEntry {
    pub label: String,
    pub rule_class: String,
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default)]
    pub runtime_deps: Vec<String>,
    #[serde(default)]
    pub exports: Vec<String>,
    #[serde(default)]
    pub toolchains: Vec<String>,
    #[serde(default)]
    pub resources: Option<String>,
    #[serde(default)]
    pub java_wrap: Option<String>,
    #[serde(flatten)]
    pub data: TargetData,
}

impl GraphFile {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed graph file")
    }

    /// Converts the parsed description into a core target graph.
    pub fn into_graph(self) -> Result<TargetGraph> {
        let mut graph = TargetGraph::new();
        for entry in self.targets {
            if entry.label.is_empty() {
                bail!("target with empty label");
            }
            let label = Label::from(entry.label);

            let mut edges = Vec::new();
            let roles = [
                (&entry.deps, DependencyRole::Dependency),
                (&entry.runtime_deps, DependencyRole::Runtime),
                (&entry.exports, DependencyRole::Export),
                (&entry.toolchains, DependencyRole::Toolchain),
            ];
            for (labels, role) in roles {
                edges.extend(labels.iter().map(|dep| (Label::from(dep.as_str()), role)));
            }
            if let Some(resources) = &entry.resources {
                edges.push((Label::from(resources.as_str()), DependencyRole::Resources));
            }
            if let Some(wrapped) = &entry.java_wrap {
                edges.push((Label::from(wrapped.as_str()), DependencyRole::JavaWrap));
            }

            let node = TargetNode {
                rule_class: entry.rule_class,
                data: entry.data,
                edges,
            };
            graph
                .add_target(label.clone(), node)
                .with_context(|| format!("adding target {label}"))?;
        }
        Ok(graph)
    }
}
