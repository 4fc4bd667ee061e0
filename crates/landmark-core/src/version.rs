//! Producer versions stamped on persisted rule collections.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownNameError;

/// A `major.minor.revision` version.
///
/// # Example
///
/// ```
/// use landmark_core::Version;
///
/// let v: Version = "2.1.4".parse().unwrap();
/// assert!(v < Version::new(2, 2, 0));
/// assert_eq!(v.to_string(), "2.1.4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Version {
    /// Newest document format this crate reads and the one it writes.
    pub const CURRENT: Version = Version::new(2, 2, 0);

    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Whether documents written by this version can be read.
    pub fn is_supported(&self) -> bool {
        *self <= Self::CURRENT
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl FromStr for Version {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.').map(str::parse::<u32>);
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(major)), Some(Ok(minor)), Some(Ok(revision)), None) => {
                Ok(Version::new(major, minor, revision))
            }
            _ => Err(UnknownNameError::new("version", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("2.2.0".parse::<Version>().unwrap(), Version::new(2, 2, 0));
        assert!("2.2".parse::<Version>().is_err());
        assert!("2.2.0.1".parse::<Version>().is_err());
        assert!("two.2.0".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Version::new(1, 13, 8) < Version::new(2, 0, 0));
        assert!(Version::new(2, 2, 0) > Version::new(2, 1, 9));
        assert!(Version::new(2, 1, 0).is_supported());
        assert!(!Version::new(3, 0, 0).is_supported());
    }
}
