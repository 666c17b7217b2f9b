/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod addresses;
pub mod collections;
pub mod config;
pub mod image;
pub mod patch;
pub(crate) mod str_decoding;
pub mod symbols;
