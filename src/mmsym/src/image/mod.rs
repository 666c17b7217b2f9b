/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod image_file;
mod symbols_file;

pub use image_file::{FileFlags, ImageFile};
pub use symbols_file::{find_symbols_file, SYMBOLS_FILE_VRAM};
