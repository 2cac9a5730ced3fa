//! Version resolution - ordered fallback over the version file and changelog
//!
//! The authoritative current version is determined by trying sources in a
//! fixed order: the primary version record, then a scan of the changelog
//! history, then a fixed first-development default. A missing or malformed
//! source falls through to the next one; only real I/O failures (permission
//! errors and the like) propagate.

use crate::error::Result;
use crate::version::{BumpKind, Version};
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// First development version, used when no source yields a version
pub const DEFAULT_VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
};

/// Resolves, bumps and persists the current version
///
/// Caches the most recent result so the wizard can re-read exactly what it
/// just wrote without going back to disk.
pub struct VersionResolver {
    version_file: PathBuf,
    changelog_file: PathBuf,
    resolved: Option<Version>,
}

impl VersionResolver {
    pub fn new(version_file: impl Into<PathBuf>, changelog_file: impl Into<PathBuf>) -> Self {
        VersionResolver {
            version_file: version_file.into(),
            changelog_file: changelog_file.into(),
            resolved: None,
        }
    }

    /// Resolve the current version through the fallback chain
    ///
    /// 1. Primary record (whole-file version string)
    /// 2. Maximum version among changelog `## [x.y.z]` entries
    /// 3. `DEFAULT_VERSION`
    pub fn latest(&mut self) -> Result<Version> {
        let sources: [fn(&Self) -> Result<Option<Version>>; 2] =
            [Self::from_version_file, Self::from_changelog];

        let mut current = DEFAULT_VERSION;
        for source in sources {
            if let Some(found) = source(self)? {
                current = found;
                break;
            }
        }

        self.resolved = Some(current);
        Ok(current)
    }

    /// Bump the current version and persist the result
    ///
    /// The write is all-or-nothing: the new version goes to a sibling
    /// temporary file which then replaces the version file in one rename.
    pub fn bump(&mut self, kind: BumpKind) -> Result<Version> {
        let current = self.latest()?;
        let next = current.bump(kind);

        write_atomic(&self.version_file, &next.to_string())?;

        self.resolved = Some(next);
        Ok(next)
    }

    /// Last version resolved or written in this session
    ///
    /// Falls back to a fresh resolution when nothing has been computed yet.
    pub fn read(&mut self) -> Result<Version> {
        match self.resolved {
            Some(v) => Ok(v),
            None => self.latest(),
        }
    }

    fn from_version_file(&self) -> Result<Option<Version>> {
        let text = match fs::read_to_string(&self.version_file) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A malformed record is tolerated here; the changelog takes over.
        Ok(Version::parse(text.trim()).ok())
    }

    fn from_changelog(&self) -> Result<Option<Version>> {
        let text = match fs::read_to_string(&self.changelog_file) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut best: Option<Version> = None;
        if let Ok(re) = Regex::new(r"^## \[([^\]]+)\]") {
            for line in text.lines() {
                if let Some(captures) = re.captures(line) {
                    // Entries that don't parse as versions are skipped, not fatal.
                    if let Ok(candidate) = Version::parse(&captures[1]) {
                        if best.map_or(true, |b| candidate > b) {
                            best = Some(candidate);
                        }
                    }
                }
            }
        }

        Ok(best)
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn resolver_in(dir: &Path) -> VersionResolver {
        VersionResolver::new(dir.join("VERSION.md"), dir.join("CHANGELOG.md"))
    }

    #[test]
    fn test_latest_from_version_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "3.4.5").unwrap();
        // Changelog would disagree; the primary record wins.
        fs::write(dir.path().join("CHANGELOG.md"), "## [9.9.9] - 2024-01-01\n").unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), Version::new(3, 4, 5));
    }

    #[test]
    fn test_latest_trims_trailing_newline() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "1.0.0\n").unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), Version::new(1, 0, 0));
    }

    #[test]
    fn test_latest_falls_back_to_changelog_maximum() {
        let dir = tempdir().unwrap();
        let changelog = "\
# Changelog

## [1.0.0] - 2024-01-01
### Major
- first stable

## [2.0.0] - 2024-06-01
### Major
- second stable

## [1.5.0] - 2024-03-01
### Minor
- midway
";
        fs::write(dir.path().join("CHANGELOG.md"), changelog).unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), Version::new(2, 0, 0));
    }

    #[test]
    fn test_latest_skips_unparsable_changelog_entries() {
        let dir = tempdir().unwrap();
        let changelog = "\
## [not-a-version] - 2024-01-01
## [1.2.3] - 2024-02-01
## [Unreleased]
";
        fs::write(dir.path().join("CHANGELOG.md"), changelog).unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_latest_default_when_nothing_exists() {
        let dir = tempdir().unwrap();
        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), DEFAULT_VERSION);
    }

    #[test]
    fn test_latest_malformed_record_falls_through() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "not a version").unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), DEFAULT_VERSION);
    }

    #[test]
    fn test_latest_malformed_record_with_changelog() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "garbage").unwrap();
        fs::write(dir.path().join("CHANGELOG.md"), "## [0.3.0] - 2024-01-01\n").unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.latest().unwrap(), Version::new(0, 3, 0));
    }

    #[test]
    fn test_bump_persists_canonical_text() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "1.2.3").unwrap();

        let mut resolver = resolver_in(dir.path());
        let bumped = resolver.bump(BumpKind::Minor).unwrap();

        assert_eq!(bumped, Version::new(1, 3, 0));
        let on_disk = fs::read_to_string(dir.path().join("VERSION.md")).unwrap();
        assert_eq!(on_disk, "1.3.0");
    }

    #[test]
    fn test_bump_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "1.2.3 with trailing junk").unwrap();

        let mut resolver = resolver_in(dir.path());
        resolver.bump(BumpKind::Patch).unwrap();

        // Malformed record fell through to the default, then patch-bumped.
        let on_disk = fs::read_to_string(dir.path().join("VERSION.md")).unwrap();
        assert_eq!(on_disk, "0.1.1");
    }

    #[test]
    fn test_bump_failure_leaves_no_version_cached_on_disk() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let mut resolver = VersionResolver::new(
            missing.join("VERSION.md"),
            missing.join("CHANGELOG.md"),
        );

        assert!(resolver.bump(BumpKind::Major).is_err());
        assert!(!missing.exists());
    }

    #[test]
    fn test_read_returns_cached_bump_result() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "2.0.0").unwrap();

        let mut resolver = resolver_in(dir.path());
        resolver.bump(BumpKind::Major).unwrap();

        // Even if the file changes underneath, read() sees the cached value.
        fs::write(dir.path().join("VERSION.md"), "9.9.9").unwrap();
        assert_eq!(resolver.read().unwrap(), Version::new(3, 0, 0));
    }

    #[test]
    fn test_read_resolves_fresh_when_uncached() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION.md"), "0.2.0").unwrap();

        let mut resolver = resolver_in(dir.path());
        assert_eq!(resolver.read().unwrap(), Version::new(0, 2, 0));
    }
}
