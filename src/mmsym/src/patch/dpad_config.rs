/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;

/// D-pad configuration to be written into a patched image.
///
/// The struct layouts themselves live with the collaborator implementing
/// this trait; the patcher only moves the produced bytes to the addresses
/// the symbols resolve to.
pub trait DpadConfig {
    /// Serialize for the current layout, shaped by the `version` word read
    /// back from the target image.
    fn to_struct_bytes(&self, version: u32) -> Vec<u8>;

    /// Raw struct blob for the legacy layout.
    fn struct_bytes(&self) -> Vec<u8>;

    /// State byte for the legacy layout, written separately from the blob.
    fn state_byte(&self) -> u8;
}
