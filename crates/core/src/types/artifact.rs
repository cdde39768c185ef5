//! Normalized references to files produced or consumed by targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized reference to a file, relative to one of the build's roots.
///
/// Source artifacts live under the source tree and carry no execution-root
/// prefix; generated artifacts additionally record the root's path under
/// the execution root. Two locations are equal iff all fields match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtifactLocation {
    pub root_path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub root_execution_path: String,
    pub relative_path: String,
    pub is_source: bool,
}

impl ArtifactLocation {
    /// A file under the source tree.
    pub fn source(root_path: impl Into<String>, relative_path: impl Into<String>) -> Self {
        ArtifactLocation {
            root_path: root_path.into(),
            root_execution_path: String::new(),
            relative_path: relative_path.into(),
            is_source: true,
        }
    }

    /// A file under a derived-output root.
    pub fn generated(
        root_path: impl Into<String>,
        root_execution_path: impl Into<String>,
        relative_path: impl Into<String>,
    ) -> Self {
        ArtifactLocation {
            root_path: root_path.into(),
            root_execution_path: root_execution_path.into(),
            relative_path: relative_path.into(),
            is_source: false,
        }
    }

    /// File name component of the relative path.
    pub fn file_name(&self) -> &str {
        self.relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path)
    }

    pub fn has_extension(&self, ext: &str) -> bool {
        std::path::Path::new(&self.relative_path)
            .extension()
            .is_some_and(|e| e == ext)
    }
}

impl fmt::Display for ArtifactLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.root_path, self.relative_path)
    }
}

/// One group of compiled Java outputs: a class jar plus optional companion
/// interface and source jars.
///
/// The class jar is not optional. A library artifact without compiled output
/// is meaningless to the IDE and must be dropped rather than emitted empty;
/// use [`LibraryArtifact::from_outputs`] when the class jar may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryArtifact {
    pub jar: ArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_jar: Option<ArtifactLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_jar: Option<ArtifactLocation>,
}

impl LibraryArtifact {
    pub fn new(jar: ArtifactLocation) -> Self {
        LibraryArtifact {
            jar,
            interface_jar: None,
            source_jar: None,
        }
    }

    /// Builds a library artifact from possibly-absent outputs, returning
    /// `None` when there is no class jar (even if companion jars exist).
    pub fn from_outputs(
        jar: Option<ArtifactLocation>,
        interface_jar: Option<ArtifactLocation>,
        source_jar: Option<ArtifactLocation>,
    ) -> Option<Self> {
        jar.map(|jar| LibraryArtifact {
            jar,
            interface_jar,
            source_jar,
        })
    }

    /// All jars in this group, class jar first.
    pub fn jars(&self) -> impl Iterator<Item = &ArtifactLocation> {
        std::iter::once(&self.jar)
            .chain(self.interface_jar.as_ref())
            .chain(self.source_jar.as_ref())
    }
}
