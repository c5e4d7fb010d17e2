// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types

use thiserror::Error;

/// Failure of a single soft reference resolution.
///
/// These never escape a load call as `Err`. They are reported to the
/// [`Diagnostics`](crate::diagnostics::Diagnostics) sink and the caller sees `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The reference has a null (empty) path
    #[error(
        "Failed to load asset of type `{type_name}`. Provided soft reference is referencing an invalid asset."
    )]
    InvalidReference { type_name: &'static str },

    /// The streaming manager finished the request but the reference still does not resolve
    #[error("Failed to load asset of type `{type_name}`: `{path}`")]
    LoadFailure {
        type_name: &'static str,
        path: String,
    },
}

impl LoadError {
    /// Requested type name carried by this error
    pub fn type_name(&self) -> &'static str {
        match self {
            LoadError::InvalidReference { type_name } => type_name,
            LoadError::LoadFailure { type_name, .. } => type_name,
        }
    }

    /// Reference string, when one was available
    pub fn path(&self) -> Option<&str> {
        match self {
            LoadError::InvalidReference { .. } => None,
            LoadError::LoadFailure { path, .. } => Some(path),
        }
    }
}

/// Malformed soft path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("soft path `{0}` must start with `/`")]
    MissingRoot(String),

    #[error("soft path `{0}` contains an empty package segment")]
    EmptySegment(String),

    #[error("soft path `{path}` contains invalid character `{character}`")]
    InvalidCharacter { path: String, character: char },

    #[error("soft path `{0}` has an empty asset name")]
    EmptyAssetName(String),

    #[error("soft path `{0}` has an empty sub-object name")]
    EmptySubObject(String),
}

/// Loader configuration could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid loader configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LoadError>;
