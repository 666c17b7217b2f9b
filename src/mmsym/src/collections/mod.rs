/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

pub mod ordered_map;

pub use ordered_map::OrderedMap;
