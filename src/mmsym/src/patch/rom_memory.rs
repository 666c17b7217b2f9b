/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::addresses::Vram;

/// Raw byte access into a loaded image.
///
/// Addresses passed here come from a [`SymbolTable`], so implementations
/// can assume they were produced by the build step for this very image.
/// Callers must serialize writes: the patcher updates multi-byte structs
/// with no locking of its own, and interleaved writers would corrupt them.
///
/// [`SymbolTable`]: crate::symbols::SymbolTable
pub trait RomMemory {
    fn read_u32(&self, vram: Vram) -> u32;

    fn write_bytes(&mut self, vram: Vram, bytes: &[u8]);
}
