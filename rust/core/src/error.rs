// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types shared by the surfproj crates.

use thiserror::Error;

/// Result type for surfproj operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the projection hot path.
///
/// Geometric failures of a projection (misses, density-guard rejections) are
/// not errors; they are reported on the projection result.
#[derive(Error, Debug)]
pub enum Error {
    /// A node id does not reference a node of the mesh.
    #[error("unknown mesh node: {0}")]
    UnknownNode(String),

    /// A triangle references the same node twice or has zero area.
    #[error("degenerate face")]
    DegenerateFace,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
