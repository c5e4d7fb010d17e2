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

//! Soft Asset Loader - asynchronous resolution of soft asset references
//!
//! Converts deferred references (a path plus an expected type) into resolved,
//! non-owning references through an engine's streaming manager, delivered as a
//! future or through a one-shot callback.

pub mod assets;
pub mod binding;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod future;
#[cfg(feature = "profiling")]
pub mod logging;
pub mod loader;
pub mod manual;
pub mod path;
pub mod prelude;
pub mod reference;
pub mod sink;
pub mod stats;
pub mod streaming;

pub use assets::*;
pub use config::*;
pub use diagnostics::*;
pub use error::*;
pub use future::*;
pub use loader::*;
pub use manual::*;
pub use path::*;
pub use reference::*;
pub use sink::*;
pub use stats::*;
pub use streaming::*;
