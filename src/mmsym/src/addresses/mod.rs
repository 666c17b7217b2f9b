/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod address_range;
mod size;
mod vram;

pub use address_range::AddressRange;
pub use size::Size;
pub use vram::Vram;
