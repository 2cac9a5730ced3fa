//! Append-only changelog writing
//!
//! Each bump appends one entry; prior entries are never rewritten. The entry
//! shape doubles as the resolver's fallback source, so the `## [x.y.z]`
//! marker format here and the scan in [crate::resolver] must stay in sync.

use crate::error::{Result, VerbumpError};
use crate::version::{BumpKind, Version};
use chrono::{Local, NaiveDate};
use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Changelog collaborator contract
pub trait Changelog {
    fn update(&self, version: &Version, kind: BumpKind, short: &str, long: &str) -> Result<()>;
}

/// Formats a single changelog entry
///
/// The long-description line is omitted entirely when empty.
pub fn format_entry(
    version: &Version,
    kind: BumpKind,
    short: &str,
    long: &str,
    date: NaiveDate,
) -> String {
    let mut entry = format!("\n## [{}] - {}\n", version, date.format("%Y-%m-%d"));
    entry.push_str(&format!("### {}\n", kind.heading()));
    entry.push_str(&format!("- {}\n", short));
    if !long.is_empty() {
        entry.push_str(&format!("  {}\n", long));
    }
    entry
}

/// File-backed changelog, created on first append
pub struct FileChangelog {
    path: PathBuf,
}

impl FileChangelog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileChangelog { path: path.into() }
    }
}

impl Changelog for FileChangelog {
    fn update(&self, version: &Version, kind: BumpKind, short: &str, long: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| {
                VerbumpError::changelog(format!("opening {}: {}", self.path.display(), e))
            })?;

        let entry = format_entry(version, kind, short, long, Local::now().date_naive());
        file.write_all(entry.as_bytes()).map_err(|e| {
            VerbumpError::changelog(format!("writing {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

/// Recorded arguments of one mock update call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEntry {
    pub version: Version,
    pub kind: BumpKind,
    pub short: String,
    pub long: String,
}

/// Mock changelog for testing without touching the filesystem
#[derive(Default)]
pub struct MockChangelog {
    entries: RefCell<Vec<RecordedEntry>>,
    fail: bool,
}

impl MockChangelog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose update calls always fail
    pub fn failing() -> Self {
        MockChangelog {
            entries: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn entries(&self) -> Vec<RecordedEntry> {
        self.entries.borrow().clone()
    }
}

impl Changelog for MockChangelog {
    fn update(&self, version: &Version, kind: BumpKind, short: &str, long: &str) -> Result<()> {
        if self.fail {
            return Err(VerbumpError::changelog("mock failure"));
        }
        self.entries.borrow_mut().push(RecordedEntry {
            version: *version,
            kind,
            short: short.to_string(),
            long: long.to_string(),
        });
        Ok(())
    }
}
