use crate::error::{Result, VerbumpError};
use crate::git::{tag_name, Vcs};
use crate::version::Version;
use git2::{ErrorCode, IndexAddOption, ObjectType, Repository};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Vcs {
    repo: Repository,
}

impl Git2Vcs {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2Vcs { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Vcs { repo }
    }

    fn head_commit(&self) -> Result<Option<git2::Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .map_err(|e| VerbumpError::commit(format!("Cannot resolve HEAD: {}", e)))?;
                Ok(Some(commit))
            }
            // First commit in a fresh repository has no parent.
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(VerbumpError::commit(format!("Cannot read HEAD: {}", e))),
        }
    }
}

impl Vcs for Git2Vcs {
    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self
            .repo
            .index()
            .map_err(|e| VerbumpError::add(format!("Cannot open index: {}", e)))?;

        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .map_err(|e| VerbumpError::add(format!("Cannot stage changes: {}", e)))?;
        index
            .write()
            .map_err(|e| VerbumpError::add(format!("Cannot write index: {}", e)))?;

        let tree_id = index
            .write_tree()
            .map_err(|e| VerbumpError::commit(format!("Cannot write tree: {}", e)))?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .map_err(|e| VerbumpError::commit(format!("Cannot find tree: {}", e)))?;

        let signature = self
            .repo
            .signature()
            .map_err(|e| VerbumpError::commit(format!("Cannot determine signature: {}", e)))?;

        let parent = self.head_commit()?;
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .map_err(|e| VerbumpError::commit(format!("Cannot create commit: {}", e)))?;

        Ok(())
    }

    fn tag(&self, version: &Version) -> Result<()> {
        let name = tag_name(version);

        let head = self
            .repo
            .head()
            .and_then(|h| h.peel(ObjectType::Commit))
            .map_err(|e| VerbumpError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(&name, &head, false)
            .map_err(|e| VerbumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }
}
