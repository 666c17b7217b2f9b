/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;

use bitflags::bitflags;

use crate::addresses::{AddressRange, Vram};

bitflags! {
    /// Attributes of a file in the image's file table.
    #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
    pub struct FileFlags: u8 {
        /// The file's data is stored compressed in the image.
        const COMPRESSED = 1 << 0;
        /// The file must not be relocated when the file table is rebuilt.
        const STATIC = 1 << 1;
    }
}

/// A contiguous byte range of the image, as listed in its file table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ImageFile {
    vram: AddressRange<Vram>,
    flags: FileFlags,
    data: Vec<u8>,
}

impl ImageFile {
    pub fn new(vram: AddressRange<Vram>, flags: FileFlags, data: Vec<u8>) -> Self {
        Self { vram, flags, data }
    }

    pub const fn vram(&self) -> AddressRange<Vram> {
        self.vram
    }

    pub const fn flags(&self) -> FileFlags {
        self.flags
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn is_compressed(&self) -> bool {
        self.flags.contains(FileFlags::COMPRESSED)
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags.contains(FileFlags::STATIC)
    }
}
