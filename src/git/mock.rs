use crate::error::{Result, VerbumpError};
use crate::git::{tag_name, Vcs};
use crate::version::Version;
use std::cell::RefCell;

/// Mock VCS for testing without actual git operations
///
/// Records every commit message and tag name; can be configured to fail
/// either operation.
#[derive(Default)]
pub struct MockVcs {
    commits: RefCell<Vec<String>>,
    tags: RefCell<Vec<String>>,
    fail_commit: bool,
    fail_tag: bool,
}

impl MockVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose commit calls always fail
    pub fn failing_commit() -> Self {
        MockVcs {
            fail_commit: true,
            ..Self::default()
        }
    }

    /// Mock whose tag calls always fail
    pub fn failing_tag() -> Self {
        MockVcs {
            fail_tag: true,
            ..Self::default()
        }
    }

    pub fn commits(&self) -> Vec<String> {
        self.commits.borrow().clone()
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }
}

impl Vcs for MockVcs {
    fn commit(&self, message: &str) -> Result<()> {
        if self.fail_commit {
            return Err(VerbumpError::commit("mock failure"));
        }
        self.commits.borrow_mut().push(message.to_string());
        Ok(())
    }

    fn tag(&self, version: &Version) -> Result<()> {
        if self.fail_tag {
            return Err(VerbumpError::tag("mock failure"));
        }
        self.tags.borrow_mut().push(tag_name(version));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_commits_and_tags() {
        let mock = MockVcs::new();
        mock.commit("fix parser").unwrap();
        mock.tag(&Version::new(1, 2, 3)).unwrap();

        assert_eq!(mock.commits(), vec!["fix parser".to_string()]);
        assert_eq!(mock.tags(), vec!["v1.2.3".to_string()]);
    }

    #[test]
    fn test_mock_failing_commit() {
        let mock = MockVcs::failing_commit();
        assert!(mock.commit("x").is_err());
        assert!(mock.commits().is_empty());
    }

    #[test]
    fn test_mock_failing_tag() {
        let mock = MockVcs::failing_tag();
        assert!(mock.tag(&Version::new(1, 0, 0)).is_err());
        assert!(mock.tags().is_empty());
    }
}
