//! Layout profiles
//!
//! A profile is a TOML file overriding any subset of the layout constants,
//! so different canvases (compact embeds, wall displays) can reuse one
//! binary. Fields left out keep their defaults.
//!
//! ```toml
//! [metadata]
//! name = "compact"
//!
//! [layout]
//! card_width = 120.0
//! horizontal_spacing = 150.0
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;

/// Errors that can occur when loading or parsing profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A named set of layout constant overrides
#[derive(Debug, Clone, Default)]
pub struct LayoutProfile {
    pub name: Option<String>,
    pub description: Option<String>,
    pub layout: LayoutConfig,
}

#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    layout: LayoutConfig,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl LayoutProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        Ok(LayoutProfile {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            layout: parsed.layout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile_uses_defaults() {
        let profile = LayoutProfile::from_str("").unwrap();
        assert!(profile.name.is_none());
        assert_eq!(profile.layout.card_width, LayoutConfig::default().card_width);
    }

    #[test]
    fn test_partial_override() {
        let profile = LayoutProfile::from_str(
            r#"
[metadata]
name = "compact"
description = "dense cards for embeds"

[layout]
card_width = 120.0
horizontal_spacing = 150.0
"#,
        )
        .unwrap();

        assert_eq!(profile.name.as_deref(), Some("compact"));
        assert_eq!(profile.layout.card_width, 120.0);
        assert_eq!(profile.layout.horizontal_spacing, 150.0);
        assert_eq!(
            profile.layout.card_height,
            LayoutConfig::default().card_height
        );
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        assert!(LayoutProfile::from_str("layout = 3").is_err());
    }
}
