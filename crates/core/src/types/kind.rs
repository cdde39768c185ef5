//! Classification of targets by rule class

use serde::{Deserialize, Serialize};

/// The closed set of rule classes the analysis understands.
///
/// The kind decides which info payload a target's record carries. Anything
/// outside this set maps to `Unrecognized`: such targets produce no record
/// of their own but still forward their dependency summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    JavaLibrary,
    JavaImport,
    JavaTest,
    JavaBinary,
    AndroidLibrary,
    AndroidBinary,
    AndroidTest,
    AndroidRobolectricTest,
    AndroidResources,
    AndroidSdk,
    CcLibrary,
    CcBinary,
    CcTest,
    CcIncLibrary,
    CcToolchain,
    ProtoLibrary,
    JavaPlugin,
    JavaWrapCc,
    Unrecognized,
}

impl TargetKind {
    /// Maps a rule-class name to a kind.
    ///
    /// The SDK kind is not keyed on a rule class: it is detected by the
    /// presence of an SDK feature bundle on the target, which the caller
    /// reports through `has_sdk_bundle`.
    pub fn from_rule_class(rule_class: &str, has_sdk_bundle: bool) -> Self {
        match rule_class {
            "java_library" => TargetKind::JavaLibrary,
            "java_import" => TargetKind::JavaImport,
            "java_test" => TargetKind::JavaTest,
            "java_binary" => TargetKind::JavaBinary,
            "android_library" => TargetKind::AndroidLibrary,
            "android_binary" => TargetKind::AndroidBinary,
            "android_test" => TargetKind::AndroidTest,
            "android_robolectric_test" => TargetKind::AndroidRobolectricTest,
            "android_resources" => TargetKind::AndroidResources,
            "cc_library" => TargetKind::CcLibrary,
            "cc_binary" => TargetKind::CcBinary,
            "cc_test" => TargetKind::CcTest,
            "cc_inc_library" => TargetKind::CcIncLibrary,
            "cc_toolchain" => TargetKind::CcToolchain,
            "proto_library" => TargetKind::ProtoLibrary,
            "java_plugin" => TargetKind::JavaPlugin,
            "java_wrap_cc" => TargetKind::JavaWrapCc,
            _ if has_sdk_bundle => TargetKind::AndroidSdk,
            _ => TargetKind::Unrecognized,
        }
    }

    /// Kinds whose record carries Java output information (directly, or
    /// embedded in the Android payload).
    pub fn emits_java(&self) -> bool {
        matches!(
            self,
            TargetKind::JavaLibrary
                | TargetKind::JavaImport
                | TargetKind::JavaTest
                | TargetKind::JavaBinary
                | TargetKind::AndroidLibrary
                | TargetKind::AndroidBinary
                | TargetKind::AndroidTest
                | TargetKind::AndroidRobolectricTest
                | TargetKind::AndroidResources
                | TargetKind::ProtoLibrary
                | TargetKind::JavaPlugin
                | TargetKind::JavaWrapCc
        )
    }

    /// Kinds whose record carries the Android payload.
    pub fn is_android(&self) -> bool {
        matches!(
            self,
            TargetKind::AndroidLibrary
                | TargetKind::AndroidBinary
                | TargetKind::AndroidTest
                | TargetKind::AndroidResources
        )
    }

    /// Kinds whose record carries the C payload.
    pub fn emits_cc(&self) -> bool {
        matches!(
            self,
            TargetKind::CcLibrary
                | TargetKind::CcBinary
                | TargetKind::CcTest
                | TargetKind::CcIncLibrary
        )
    }

    /// Kinds whose source files are Java and qualify for a package manifest.
    pub fn bears_java_sources(&self) -> bool {
        matches!(
            self,
            TargetKind::JavaLibrary
                | TargetKind::JavaTest
                | TargetKind::JavaBinary
                | TargetKind::AndroidLibrary
                | TargetKind::AndroidBinary
                | TargetKind::AndroidTest
                | TargetKind::AndroidRobolectricTest
                | TargetKind::JavaPlugin
        )
    }
}
