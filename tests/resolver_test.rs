// tests/resolver_test.rs
use std::fs;

use tempfile::tempdir;
use verbump::resolver::{VersionResolver, DEFAULT_VERSION};
use verbump::version::{BumpKind, Version};

fn resolver_in(dir: &std::path::Path) -> VersionResolver {
    VersionResolver::new(dir.join("VERSION.md"), dir.join("CHANGELOG.md"))
}

#[test]
fn test_primary_record_wins_over_changelog() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("VERSION.md"), "1.0.0").unwrap();
    fs::write(
        dir.path().join("CHANGELOG.md"),
        "## [2.0.0] - 2024-01-01\n### Major\n- rewrite\n",
    )
    .unwrap();

    let mut resolver = resolver_in(dir.path());
    assert_eq!(resolver.latest().unwrap(), Version::new(1, 0, 0));
}

#[test]
fn test_changelog_fallback_selects_maximum() {
    let dir = tempdir().unwrap();
    let changelog = "\
# Changelog

## [2.0.0] - 2024-06-01
### Major
- second stable

## [1.0.0] - 2024-01-01
### Major
- first stable
";
    fs::write(dir.path().join("CHANGELOG.md"), changelog).unwrap();

    let mut resolver = resolver_in(dir.path());
    assert_eq!(resolver.latest().unwrap(), Version::new(2, 0, 0));
}

#[test]
fn test_default_when_no_sources() {
    let dir = tempdir().unwrap();
    let mut resolver = resolver_in(dir.path());
    assert_eq!(resolver.latest().unwrap(), DEFAULT_VERSION);
    assert_eq!(DEFAULT_VERSION, Version::new(0, 1, 0));
}

#[test]
fn test_invalid_primary_and_absent_changelog_yield_default() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("VERSION.md"), "definitely not a version").unwrap();

    let mut resolver = resolver_in(dir.path());
    assert_eq!(resolver.latest().unwrap(), Version::new(0, 1, 0));
}

#[test]
fn test_bump_then_resolve_round_trip() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("VERSION.md"), "0.9.9").unwrap();

    let mut resolver = resolver_in(dir.path());
    let bumped = resolver.bump(BumpKind::Minor).unwrap();
    assert_eq!(bumped, Version::new(0, 10, 0));

    // A fresh resolver sees what was persisted.
    let mut fresh = resolver_in(dir.path());
    assert_eq!(fresh.latest().unwrap(), Version::new(0, 10, 0));
}

#[test]
fn test_read_after_bump_matches_written_version() {
    let dir = tempdir().unwrap();

    let mut resolver = resolver_in(dir.path());
    let bumped = resolver.bump(BumpKind::Patch).unwrap();
    assert_eq!(resolver.read().unwrap(), bumped);
}

#[test]
fn test_repeated_bumps_are_monotonic() {
    let dir = tempdir().unwrap();
    let mut resolver = resolver_in(dir.path());

    let mut previous = resolver.latest().unwrap();
    for kind in [
        BumpKind::Patch,
        BumpKind::Minor,
        BumpKind::Patch,
        BumpKind::Major,
    ] {
        let next = resolver.bump(kind).unwrap();
        assert!(next > previous, "{} should exceed {}", next, previous);
        previous = next;
    }
}
