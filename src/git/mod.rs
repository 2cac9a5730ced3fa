//! Git operations abstraction layer
//!
//! The wizard only needs two operations: stage-everything-and-commit, and
//! create a version tag. [Vcs] abstracts them so the state machine can be
//! exercised against [mock::MockVcs] without a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockVcs;
pub use repository::Git2Vcs;

use crate::error::Result;
use crate::version::Version;

/// Version-control collaborator contract
pub trait Vcs {
    /// Stage all working-tree changes and create a commit with the message
    fn commit(&self, message: &str) -> Result<()>;

    /// Create a tag named `v{version}` on the current HEAD
    fn tag(&self, version: &Version) -> Result<()>;
}

/// Tag name for a version (e.g., "v1.2.3")
pub fn tag_name(version: &Version) -> String {
    format!("v{}", version)
}
