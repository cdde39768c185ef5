//! Serialization and handoff of finished records
//!
//! The emitter does no transformation of its own: it encodes the record
//! once as a compact binary blob and once as pretty-printed text, then
//! hands both to host-provided output handles.

use crate::error::Result;
use crate::host::Host;
use crate::record::InfoRecord;
use crate::types::ArtifactLocation;

/// File suffix of the binary record form.
pub const INFO_FILE_SUFFIX: &str = ".ide-info";
/// File suffix of the human-readable record form.
pub const INFO_TEXT_FILE_SUFFIX: &str = ".ide-info.txt";

/// Artifacts produced for one emitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedRecord {
    pub binary: ArtifactLocation,
    pub text: ArtifactLocation,
}

/// Writes `record` in both forms through the host.
pub fn emit(record: &InfoRecord, host: &mut dyn Host) -> Result<EmittedRecord> {
    let binary = host.derive_output(&record.label, INFO_FILE_SUFFIX);
    let text = host.derive_output(&record.label, INFO_TEXT_FILE_SUFFIX);

    let bytes = rmp_serde::to_vec_named(record)?;
    host.write_binary(&binary, &bytes)?;

    let dump = serde_json::to_string_pretty(record)?;
    host.write_text(&text, &dump)?;

    tracing::debug!(
        "emitted {} ({} bytes binary, {} bytes text)",
        record.label,
        bytes.len(),
        dump.len()
    );

    Ok(EmittedRecord { binary, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingHost;
    use crate::record::{JavaInfo, Payload};
    use crate::types::{Label, TargetKind};

    fn record() -> InfoRecord {
        InfoRecord {
            label: Label::from("//java:lib"),
            build_file: "java/BUILD".to_string(),
            kind: TargetKind::JavaLibrary,
            dependencies: vec![Label::from("//java:dep")],
            runtime_deps: vec![],
            tags: vec!["manual".to_string()],
            payload: Some(Payload::Java(JavaInfo::default())),
        }
    }

    #[test]
    fn test_emit_writes_both_forms() {
        let mut host = RecordingHost::default();
        let emitted = emit(&record(), &mut host).unwrap();

        assert!(emitted.binary.relative_path.ends_with(".ide-info"));
        assert!(emitted.text.relative_path.ends_with(".ide-info.txt"));
        assert!(host.binary_writes.contains_key(&emitted.binary));

        let text = &host.text_writes[&emitted.text];
        assert!(text.contains("//java:lib"));
        assert!(text.contains("java/BUILD"));
    }

    #[test]
    fn test_emit_is_byte_identical_across_runs() {
        let mut first_host = RecordingHost::default();
        let first = emit(&record(), &mut first_host).unwrap();
        let mut second_host = RecordingHost::default();
        let second = emit(&record(), &mut second_host).unwrap();

        assert_eq!(
            first_host.binary_writes[&first.binary],
            second_host.binary_writes[&second.binary]
        );
        assert_eq!(
            first_host.text_writes[&first.text],
            second_host.text_writes[&second.text]
        );
    }

    #[test]
    fn test_binary_form_round_trips() {
        let mut host = RecordingHost::default();
        let emitted = emit(&record(), &mut host).unwrap();
        let bytes = &host.binary_writes[&emitted.binary];
        let decoded: InfoRecord = rmp_serde::from_slice(bytes).unwrap();
        assert_eq!(decoded, record());
    }
}
