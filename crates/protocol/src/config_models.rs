//! Configuration document models.
//!
//! The document itself stays untyped so arbitrary keys can be read and written
//! through dot-paths. Only the names of the required sections are fixed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// A configuration document: string keys mapped to JSON values.
///
/// Values are strings, numbers, sequences, or nested documents. Key order is
/// preserved so sections are written back in the order they were read.
pub type ConfigDocument = serde_json::Map<String, serde_json::Value>;

/// Top-level key holding the document version string.
pub const VERSION_KEY: &str = "version";

/// One of the required top-level mappings of a configuration document.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Named filesystem paths shared by all tools.
    Paths,

    /// Agent descriptors, keyed by agent name.
    Agents,

    /// Scalar tool settings (poll intervals, retries, log level, ...).
    Settings,
}

impl Section {
    /// All required sections, in document order.
    pub const ALL: [Section; 3] = [Section::Paths, Section::Agents, Section::Settings];

    /// The top-level key this section is stored under.
    pub fn key(self) -> &'static str {
        match self {
            Section::Paths => "paths",
            Section::Agents => "agents",
            Section::Settings => "settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
