use std::{fmt, str};

use crate::ParseError;

/// Selects the generation routine.
///
/// The three routines produce differently shaped strings; callers must not assume a single
/// parseable format across versions:
///
/// | Tag  | Shape                                                      |
/// | ---- | ---------------------------------------------------------- |
/// | `v1` | `{decimal ms}-{decimal machine id}-1xxx-yxxx-xxxxxxxxxxxx` |
/// | `v4` | `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`                     |
/// | `v7` | 32 unbroken hex digits                                     |
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Version {
    /// Decorative time-based format built from a timestamp and a random machine id.
    V1,

    /// Random identifier in the canonical 8-4-4-4-12 layout.
    #[default]
    V4,

    /// Time-ordered random identifier.
    V7,
}

impl Version {
    /// Returns the tag text, `"v1"`, `"v4"` or `"v7"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V4 => "v4",
            Self::V7 => "v7",
        }
    }

    /// Parses a version tag, falling back to [`Version::V7`] for anything unrecognized.
    ///
    /// This reproduces the permissive behavior hosts have historically relied upon. The fallback
    /// is reported through [`log::warn!`]; use [`str::parse`] to reject unknown tags instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use guidgen::Version;
    ///
    /// assert_eq!(Version::from_tag_or_v7("v1"), Version::V1);
    /// assert_eq!(Version::from_tag_or_v7("v5"), Version::V7);
    /// ```
    pub fn from_tag_or_v7(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err| {
            log::warn!("{err}; falling back to {}", Self::V7);
            Self::V7
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for Version {
    type Err = ParseError;

    /// Parses exactly `"v1"`, `"v4"` or `"v7"`.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src {
            "v1" => Ok(Self::V1),
            "v4" => Ok(Self::V4),
            "v7" => Ok(Self::V7),
            _ => Err(ParseError::UnknownVersion(src.to_owned())),
        }
    }
}
