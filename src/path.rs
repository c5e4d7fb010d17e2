//! Soft asset paths
//!
//! A path names an asset inside the engine's content tree:
//! `/Root/Package/Dir.AssetName:SubObject`. The asset and sub-object parts are
//! optional. The empty path is the null path, which is a valid value but never
//! resolves.

use crate::error::PathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated soft path
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetPath {
    full: String,
    // Byte offsets of the `.` and `:` separators inside `full`
    asset_sep: Option<usize>,
    sub_sep: Option<usize>,
}

impl AssetPath {
    /// The null path
    pub fn null() -> Self {
        Self::default()
    }

    /// Parse a path string. The empty string yields the null path.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Ok(Self::null());
        }
        if !input.starts_with('/') {
            return Err(PathError::MissingRoot(input.to_string()));
        }

        let sub_sep = input.find(':');
        let package_and_asset = match sub_sep {
            Some(idx) => &input[..idx],
            None => input,
        };
        let asset_sep = package_and_asset.find('.');
        let package = match asset_sep {
            Some(idx) => &package_and_asset[..idx],
            None => package_and_asset,
        };

        for segment in package[1..].split('/') {
            if segment.is_empty() {
                return Err(PathError::EmptySegment(input.to_string()));
            }
            validate_name(input, segment)?;
        }

        if let Some(idx) = asset_sep {
            let asset = &package_and_asset[idx + 1..];
            if asset.is_empty() {
                return Err(PathError::EmptyAssetName(input.to_string()));
            }
            validate_name(input, asset)?;
        }

        if let Some(idx) = sub_sep {
            let sub = &input[idx + 1..];
            if sub.is_empty() {
                return Err(PathError::EmptySubObject(input.to_string()));
            }
            validate_name(input, sub)?;
        }

        Ok(Self {
            full: input.to_string(),
            asset_sep,
            sub_sep,
        })
    }

    /// True for the empty path
    pub fn is_null(&self) -> bool {
        self.full.is_empty()
    }

    /// Full path string
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Package part, e.g. `/Game/Props/Chair`
    pub fn package_name(&self) -> &str {
        let end = self.asset_sep.or(self.sub_sep).unwrap_or(self.full.len());
        &self.full[..end]
    }

    /// Asset name. Falls back to the last package segment when no `.Asset` part is present.
    pub fn asset_name(&self) -> &str {
        match self.asset_sep {
            Some(idx) => {
                let end = self.sub_sep.unwrap_or(self.full.len());
                &self.full[idx + 1..end]
            }
            None => {
                let package = self.package_name();
                package.rsplit('/').next().unwrap_or(package)
            }
        }
    }

    /// Sub-object name after `:`, if any
    pub fn sub_object(&self) -> Option<&str> {
        self.sub_sep.map(|idx| &self.full[idx + 1..])
    }
}

fn validate_name(input: &str, name: &str) -> Result<(), PathError> {
    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        Some(character) => Err(PathError::InvalidCharacter {
            path: input.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

impl FromStr for AssetPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AssetPath {
    type Error = PathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AssetPath> for String {
    fn from(path: AssetPath) -> Self {
        path.full
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

impl fmt::Debug for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("AssetPath(null)")
        } else {
            write!(f, "AssetPath({})", self.full)
        }
    }
}
