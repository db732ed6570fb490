// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based storage.
//!
//! Keys are created by `slotmap::SlotMap` and remain valid even after other
//! entities are removed (generational indices).

use slotmap::new_key_type;

new_key_type! {
    /// Key for a mesh node (a point of the surface mesh).
    pub struct NodeKey;

    /// Key for a triangular face.
    pub struct FaceKey;
}
