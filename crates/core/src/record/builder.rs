//! Per-kind construction of info records
//!
//! Takes the target's own attributes and feature bundles plus the already
//! merged dependency data, and produces the record together with the
//! resolve artifacts this target introduces itself. Every optional input
//! degrades to "emit nothing for that facet".

use std::collections::BTreeSet;

use crate::aggregator::AggregatedDeps;
use crate::types::{ArtifactLocation, Label, LibraryArtifact, TargetData, TargetKind};

use super::{AndroidInfo, CInfo, InfoRecord, JavaInfo, Payload, SdkInfo, ToolchainInfo};

/// Output of [`build_record`]: the record (absent for unrecognized kinds)
/// and the resolve artifacts newly introduced by this target.
#[derive(Debug, Clone, Default)]
pub struct BuiltRecord {
    pub record: Option<InfoRecord>,
    pub resolve_artifacts: BTreeSet<ArtifactLocation>,
}

/// Builds the info record for one target.
pub fn build_record(
    label: &Label,
    kind: TargetKind,
    data: &TargetData,
    deps: &AggregatedDeps,
) -> BuiltRecord {
    if kind == TargetKind::Unrecognized {
        tracing::debug!("{label}: unrecognized kind, no record");
        return BuiltRecord::default();
    }

    let mut resolve_artifacts = BTreeSet::new();
    let payload = make_payload(kind, data, deps, &mut resolve_artifacts);

    let record = InfoRecord {
        label: label.clone(),
        build_file: data.build_file.clone(),
        kind,
        dependencies: deps.transitive_deps.iter().cloned().collect(),
        runtime_deps: deps.runtime_deps.iter().cloned().collect(),
        tags: data.tags.clone(),
        payload,
    };

    BuiltRecord {
        record: Some(record),
        resolve_artifacts,
    }
}

fn make_payload(
    kind: TargetKind,
    data: &TargetData,
    deps: &AggregatedDeps,
    resolve: &mut BTreeSet<ArtifactLocation>,
) -> Option<Payload> {
    if kind.is_android() {
        return Some(Payload::Android(make_android_info(data, deps, resolve)));
    }
    if kind.emits_java() {
        return Some(Payload::Java(make_java_info(data, resolve)));
    }
    if kind.emits_cc() {
        return Some(Payload::Cc(make_c_info(data)));
    }
    match kind {
        // No fragment means no payload at all, not a zeroed one.
        TargetKind::CcToolchain => data.cc_toolchain.as_ref().map(|toolchain| {
            Payload::CcToolchain(ToolchainInfo {
                compiler_options: toolchain.compiler_options.clone(),
                linker_options: toolchain.linker_options.clone(),
                built_in_include_dirs: toolchain.built_in_include_dirs.clone(),
            })
        }),
        TargetKind::AndroidSdk => data.sdk.as_ref().map(|sdk| {
            Payload::Sdk(SdkInfo {
                android_sdk_path: sdk.sdk_path.clone(),
                genfiles_path: sdk.genfiles_path.clone(),
                bin_path: sdk.bin_path.clone(),
            })
        }),
        _ => None,
    }
}

/// Collects jar groups, annotation-processor output, the jdeps file and
/// source locations. Jar groups with no class output are dropped. Every
/// emitted jar that is not a source artifact joins the resolve set.
fn make_java_info(data: &TargetData, resolve: &mut BTreeSet<ArtifactLocation>) -> JavaInfo {
    let mut info = JavaInfo::default();

    if let Some(outputs) = &data.java_outputs {
        for group in &outputs.jars {
            if let Some(library) = LibraryArtifact::from_outputs(
                group.class_jar.clone(),
                group.interface_jar.clone(),
                group.source_jar.clone(),
            ) {
                add_jars_to_resolve(&library, resolve);
                info.jars.push(library);
            }
        }
        info.jdeps = outputs.jdeps.clone();
    }

    // The presence of generated-jar outputs alone is not enough; a
    // processor has to have actually run on this target.
    if let Some(processing) = &data.annotation_processing
        && processing.enabled
        && let Some(library) = LibraryArtifact::from_outputs(
            processing.class_jar.clone(),
            None,
            processing.source_jar.clone(),
        )
    {
        add_jars_to_resolve(&library, resolve);
        info.generated_jars.push(library);
    }

    info.sources = data.sources.clone();
    info
}

fn add_jars_to_resolve(library: &LibraryArtifact, resolve: &mut BTreeSet<ArtifactLocation>) {
    for jar in library.jars() {
        if !jar.is_source {
            resolve.insert(jar.clone());
        }
    }
}

fn make_c_info(data: &TargetData) -> CInfo {
    // Absent compilation context yields empty transitive lists.
    let context = data.cc_context.clone().unwrap_or_default();
    CInfo {
        sources: data.sources.clone(),
        exported_headers: data.exported_headers.clone(),
        target_includes: data.includes.clone(),
        target_defines: data.defines.clone(),
        target_copts: data.copts.clone(),
        transitive_include_dirs: context.include_dirs,
        transitive_quote_include_dirs: context.quote_include_dirs,
        transitive_system_include_dirs: context.system_include_dirs,
        transitive_defines: context.defines,
    }
}

fn make_android_info(
    data: &TargetData,
    deps: &AggregatedDeps,
    resolve: &mut BTreeSet<ArtifactLocation>,
) -> AndroidInfo {
    let mut info = AndroidInfo {
        java: make_java_info(data, resolve),
        generate_resource_class: false,
        legacy_resources: deps.legacy_resources.clone(),
        ..AndroidInfo::default()
    };

    let Some(android) = &data.android else {
        return info;
    };

    info.apk = android.apk.clone();
    info.manifest = android.manifest.clone();
    info.generated_manifest = android.generated_manifest.clone();
    info.dependency_apks = android.apks_under_test.clone();
    info.resources = android.resource_dirs.clone();
    info.java_package = android.java_package.clone();
    info.generate_resource_class = android.generates_resource_class;

    if let Some(manifest) = &android.manifest
        && !manifest.is_source
    {
        resolve.insert(manifest.clone());
    }

    // An IDL jar is only meaningful when the target has IDL sources.
    if !android.idl_sources.is_empty()
        && let Some(library) = LibraryArtifact::from_outputs(
            android.idl_class_jar.clone(),
            None,
            android.idl_source_jar.clone(),
        )
    {
        add_jars_to_resolve(&library, resolve);
        info.idl_jar = Some(library);
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::target::{
        AndroidFeatures, AnnotationProcessing, CcToolchainConfig, JavaOutputs, OutputJarGroup,
        SdkFeatures,
    };

    fn jar(name: &str) -> ArtifactLocation {
        ArtifactLocation::generated("/out", "bin", name)
    }

    fn source_file(name: &str) -> ArtifactLocation {
        ArtifactLocation::source("/ws", name)
    }

    fn label() -> Label {
        Label::from("//java/com/app:lib")
    }

    #[test]
    fn test_java_library_scenario() {
        // Java library, no deps, sources a.java + b.java, class jar only.
        let data = TargetData {
            sources: vec![source_file("a.java"), source_file("b.java")],
            java_outputs: Some(JavaOutputs {
                jars: vec![OutputJarGroup {
                    class_jar: Some(jar("T.jar")),
                    ..OutputJarGroup::default()
                }],
                jdeps: None,
            }),
            ..TargetData::default()
        };

        let built = build_record(
            &label(),
            TargetKind::JavaLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let record = built.record.unwrap();
        let Some(Payload::Java(java)) = record.payload else {
            panic!("expected java payload");
        };
        assert_eq!(java.jars.len(), 1);
        assert_eq!(java.jars[0].jar, jar("T.jar"));
        assert_eq!(java.sources.len(), 2);
        assert_eq!(
            built.resolve_artifacts,
            BTreeSet::from([jar("T.jar")]),
        );
    }

    #[test]
    fn test_jar_group_without_class_jar_is_suppressed() {
        let data = TargetData {
            java_outputs: Some(JavaOutputs {
                jars: vec![OutputJarGroup {
                    class_jar: None,
                    interface_jar: Some(jar("lib-ijar.jar")),
                    source_jar: Some(jar("lib-src.jar")),
                }],
                jdeps: None,
            }),
            ..TargetData::default()
        };

        let built = build_record(
            &label(),
            TargetKind::JavaLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Java(java)) = built.record.unwrap().payload else {
            panic!("expected java payload");
        };
        assert!(java.jars.is_empty());
        assert!(built.resolve_artifacts.is_empty());
    }

    #[test]
    fn test_generated_jars_require_processing_to_have_run() {
        let mut data = TargetData {
            annotation_processing: Some(AnnotationProcessing {
                enabled: false,
                class_jar: Some(jar("lib-gen.jar")),
                source_jar: Some(jar("lib-gensrc.jar")),
            }),
            ..TargetData::default()
        };

        let built = build_record(
            &label(),
            TargetKind::JavaLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Java(java)) = built.record.unwrap().payload else {
            panic!("expected java payload");
        };
        assert!(java.generated_jars.is_empty());

        data.annotation_processing.as_mut().unwrap().enabled = true;
        let built = build_record(
            &label(),
            TargetKind::JavaLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Java(java)) = built.record.unwrap().payload else {
            panic!("expected java payload");
        };
        assert_eq!(java.generated_jars.len(), 1);
        assert!(built.resolve_artifacts.contains(&jar("lib-gen.jar")));
        assert!(built.resolve_artifacts.contains(&jar("lib-gensrc.jar")));
    }

    #[test]
    fn test_toolchain_without_fragment_has_no_payload() {
        let built = build_record(
            &label(),
            TargetKind::CcToolchain,
            &TargetData::default(),
            &AggregatedDeps::default(),
        );
        let record = built.record.unwrap();
        assert_eq!(record.kind, TargetKind::CcToolchain);
        assert!(record.payload.is_none());
    }

    #[test]
    fn test_toolchain_with_empty_fragment_keeps_payload() {
        let data = TargetData {
            cc_toolchain: Some(CcToolchainConfig::default()),
            ..TargetData::default()
        };
        let built = build_record(
            &label(),
            TargetKind::CcToolchain,
            &data,
            &AggregatedDeps::default(),
        );
        // All-empty lists are still a payload; distinguishable from none.
        assert!(matches!(
            built.record.unwrap().payload,
            Some(Payload::CcToolchain(_))
        ));
    }

    #[test]
    fn test_cc_library_without_context_gets_empty_transitive_lists() {
        let data = TargetData {
            sources: vec![source_file("lib.cc")],
            exported_headers: vec![source_file("lib.h")],
            includes: vec!["include".to_string()],
            defines: vec!["FOO=1".to_string()],
            copts: vec!["-Wall".to_string()],
            ..TargetData::default()
        };
        let built = build_record(
            &label(),
            TargetKind::CcLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Cc(c)) = built.record.unwrap().payload else {
            panic!("expected c payload");
        };
        assert_eq!(c.target_includes, vec!["include"]);
        assert_eq!(c.target_defines, vec!["FOO=1"]);
        assert_eq!(c.target_copts, vec!["-Wall"]);
        assert!(c.transitive_include_dirs.is_empty());
        assert!(c.transitive_defines.is_empty());
        assert!(built.resolve_artifacts.is_empty());
    }

    #[test]
    fn test_android_record_embeds_java_and_collects_manifest() {
        let manifest = jar("AndroidManifest.xml");
        let data = TargetData {
            sources: vec![source_file("A.java")],
            java_outputs: Some(JavaOutputs {
                jars: vec![OutputJarGroup {
                    class_jar: Some(jar("lib.jar")),
                    ..OutputJarGroup::default()
                }],
                jdeps: None,
            }),
            android: Some(AndroidFeatures {
                manifest: Some(manifest.clone()),
                java_package: Some("com.app".to_string()),
                generates_resource_class: true,
                ..AndroidFeatures::default()
            }),
            ..TargetData::default()
        };

        let built = build_record(
            &label(),
            TargetKind::AndroidLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Android(android)) = built.record.unwrap().payload else {
            panic!("expected android payload");
        };
        assert_eq!(android.java.jars.len(), 1);
        assert_eq!(android.java_package.as_deref(), Some("com.app"));
        assert!(android.generate_resource_class);
        assert!(built.resolve_artifacts.contains(&manifest));
        assert!(built.resolve_artifacts.contains(&jar("lib.jar")));
    }

    #[test]
    fn test_idl_jar_requires_idl_sources() {
        let mut data = TargetData {
            android: Some(AndroidFeatures {
                idl_class_jar: Some(jar("lib-idl.jar")),
                idl_source_jar: Some(jar("lib-idl-src.jar")),
                ..AndroidFeatures::default()
            }),
            ..TargetData::default()
        };

        let built = build_record(
            &label(),
            TargetKind::AndroidLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Android(android)) = built.record.unwrap().payload else {
            panic!("expected android payload");
        };
        assert!(android.idl_jar.is_none());

        data.android.as_mut().unwrap().idl_sources = vec![source_file("IService.aidl")];
        let built = build_record(
            &label(),
            TargetKind::AndroidLibrary,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Android(android)) = built.record.unwrap().payload else {
            panic!("expected android payload");
        };
        assert!(android.idl_jar.is_some());
        assert!(built.resolve_artifacts.contains(&jar("lib-idl.jar")));
    }

    #[test]
    fn test_sdk_payload_from_bundle() {
        let data = TargetData {
            sdk: Some(SdkFeatures {
                sdk_path: "/sdk".to_string(),
                genfiles_path: "/out/genfiles".to_string(),
                bin_path: "/out/bin".to_string(),
            }),
            ..TargetData::default()
        };
        let built = build_record(
            &label(),
            TargetKind::AndroidSdk,
            &data,
            &AggregatedDeps::default(),
        );
        let Some(Payload::Sdk(sdk)) = built.record.unwrap().payload else {
            panic!("expected sdk payload");
        };
        assert_eq!(sdk.android_sdk_path, "/sdk");
        assert_eq!(sdk.genfiles_path, "/out/genfiles");
        assert_eq!(sdk.bin_path, "/out/bin");
    }

    #[test]
    fn test_unrecognized_kind_produces_no_record() {
        let built = build_record(
            &label(),
            TargetKind::Unrecognized,
            &TargetData::default(),
            &AggregatedDeps::default(),
        );
        assert!(built.record.is_none());
        assert!(built.resolve_artifacts.is_empty());
    }

    #[test]
    fn test_record_lists_dependencies_sorted() {
        let mut deps = AggregatedDeps::default();
        deps.transitive_deps.insert(Label::from("//z:z"));
        deps.transitive_deps.insert(Label::from("//a:a"));
        deps.runtime_deps.insert(Label::from("//r:r"));

        let built = build_record(&label(), TargetKind::JavaLibrary, &TargetData::default(), &deps);
        let record = built.record.unwrap();
        assert_eq!(
            record.dependencies,
            vec![Label::from("//a:a"), Label::from("//z:z")]
        );
        assert_eq!(record.runtime_deps, vec![Label::from("//r:r")]);
    }

    #[test]
    fn test_build_record_is_idempotent() {
        let data = TargetData {
            sources: vec![source_file("A.java")],
            java_outputs: Some(JavaOutputs {
                jars: vec![OutputJarGroup {
                    class_jar: Some(jar("lib.jar")),
                    interface_jar: Some(jar("lib-ijar.jar")),
                    source_jar: Some(jar("lib-src.jar")),
                }],
                jdeps: Some(jar("lib.jdeps")),
            }),
            ..TargetData::default()
        };
        let deps = AggregatedDeps::default();

        let first = build_record(&label(), TargetKind::JavaLibrary, &data, &deps);
        let second = build_record(&label(), TargetKind::JavaLibrary, &data, &deps);
        assert_eq!(first.record, second.record);
        assert_eq!(first.resolve_artifacts, second.resolve_artifacts);
    }
}
