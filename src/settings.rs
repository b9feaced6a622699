//! Per-node generation settings.

use crate::Version;

/// The two values a host resolves before asking for an identifier.
///
/// With the `serde` feature enabled, missing fields take their defaults and the version is
/// written as `"v1"`, `"v4"` or `"v7"`.
///
/// # Examples
///
/// ```rust
/// use guidgen::{GuidSettings, Version};
///
/// let settings = GuidSettings::from_inputs(Some("v7"), None);
/// assert_eq!(settings.version, Version::V7);
/// assert!(!settings.uppercase);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuidSettings {
    /// Generation routine; `v4` unless specified.
    pub version: Version,

    /// Whether to uppercase the generated string; `false` unless specified.
    pub uppercase: bool,
}

impl GuidSettings {
    /// Builds settings from already-resolved host inputs.
    ///
    /// Missing values take their defaults. An unrecognized version tag selects
    /// [`Version::V7`] and is logged; see [`Version::from_tag_or_v7`].
    pub fn from_inputs(version: Option<&str>, uppercase: Option<bool>) -> Self {
        Self {
            version: version.map(Version::from_tag_or_v7).unwrap_or_default(),
            uppercase: uppercase.unwrap_or_default(),
        }
    }
}
