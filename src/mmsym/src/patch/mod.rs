/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod dpad_config;
mod post_patch;
mod rom_memory;

pub use dpad_config::DpadConfig;
pub use rom_memory::RomMemory;
