use crate::error::{Result, VerbumpError};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// Ordering is lexicographic by (major, minor, patch), which the derived
/// `Ord` provides given the field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from its canonical form (e.g., "1.2.3")
    ///
    /// Exactly three dot-separated non-negative decimal integers. No `v`
    /// prefix, no sign, no surrounding whitespace, no pre-release suffix.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(VerbumpError::version(format!(
                "'{}' - expected MAJOR.MINOR.PATCH",
                text
            )));
        }

        let mut fields = [0u32; 3];
        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(VerbumpError::version(format!(
                    "'{}' - component '{}' is not a non-negative integer",
                    text, part
                )));
            }
            fields[i] = part.parse::<u32>().map_err(|_| {
                VerbumpError::version(format!("'{}' - component '{}' out of range", text, part))
            })?;
        }

        Ok(Version::new(fields[0], fields[1], fields[2]))
    }

    /// Bump version according to the bump kind
    ///
    /// Pure arithmetic on the triple; the result is always strictly greater
    /// than `self` under the total order.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Change-significance kind driving the bump arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    /// Fixed display order for the wizard's selection list
    pub const ALL: [BumpKind; 3] = [BumpKind::Major, BumpKind::Minor, BumpKind::Patch];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }

    /// Capitalized form used as the changelog section heading
    pub fn heading(&self) -> &'static str {
        match self {
            BumpKind::Major => "Major",
            BumpKind::Minor => "Minor",
            BumpKind::Patch => "Patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(VerbumpError::bump_kind(format!(
                "'{}' - expected major, minor or patch",
                other
            ))),
        }
    }
}
