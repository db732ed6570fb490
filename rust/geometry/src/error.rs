// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for geometry construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building reference surfaces
#[derive(Error, Debug)]
pub enum Error {
    #[error("Index buffer length {0} is not a multiple of 3")]
    RaggedIndices(usize),

    #[error("Triangle index {index} out of range for {count} positions")]
    IndexOutOfRange { index: u32, count: usize },

    #[error("Invalid surface parameters: {0}")]
    InvalidSurface(String),
}
