/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::{
    addresses::{AddressRange, Size, Vram},
    symbols::{BytesDecodeError, SymbolTable},
};

use super::{FileFlags, ImageFile};

/// Virtual address of the special [`ImageFile`] containing serialized
/// [`SymbolTable`] data. Must match the address used by the build step that
/// inserts the file.
pub const SYMBOLS_FILE_VRAM: Vram = Vram::new(0x3F00_0000);

/// Index of the file holding serialized symbols data, if any.
///
/// `None` is not an error: images patched before this mechanism existed
/// simply don't carry the file.
#[must_use]
pub fn find_symbols_file(files: &[ImageFile]) -> Option<usize> {
    files
        .iter()
        .position(|file| file.vram().start() == SYMBOLS_FILE_VRAM)
}

impl SymbolTable {
    /// Load a table from serialized data in an [`ImageFile`].
    pub fn from_image_file(file: &ImageFile) -> Result<Self, BytesDecodeError> {
        Self::from_bytes(file.data())
    }

    /// Load a table from the special [`ImageFile`] already present in an
    /// image's file list. `Ok(None)` when the image predates the symbols
    /// mechanism.
    pub fn from_file_list(files: &[ImageFile]) -> Result<Option<Self>, BytesDecodeError> {
        match find_symbols_file(files) {
            Some(index) => Ok(Some(Self::from_image_file(&files[index])?)),
            None => Ok(None),
        }
    }

    /// Create the special [`ImageFile`] with this table's serialized data,
    /// ready to be inserted into an image's file list.
    pub fn to_image_file(&self) -> ImageFile {
        let data = self.to_bytes();
        let start = SYMBOLS_FILE_VRAM;
        let end = start + Size::new(data.len() as u32);

        ImageFile::new(AddressRange::new(start, end), FileFlags::STATIC, data)
    }
}
