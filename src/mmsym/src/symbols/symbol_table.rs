/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::{String, ToString};

use crate::collections::ordered_map::{self, OrderedMap};

use super::SymbolNotFoundError;

/// Name of the symbol holding the address where the patch payload begins.
const PAYLOAD_START: &str = "PAYLOAD_START";
/// Name of the symbol holding the address where the patch payload ends.
const PAYLOAD_END: &str = "PAYLOAD_END";

/// Named 32-bit addresses/values emitted by the assembly build step.
///
/// A table is populated once, by either [`SymbolTable::from_bytes`],
/// [`SymbolTable::from_text`] or one of the image helpers, and is read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SymbolTable {
    symbols: OrderedMap<String, u32>,
}

impl SymbolTable {
    pub(crate) const fn new() -> Self {
        Self {
            symbols: OrderedMap::new(),
        }
    }

    /// Only the codecs populate a table. Duplicated names keep the value
    /// seen last.
    pub(crate) fn insert(&mut self, name: String, value: u32) {
        self.symbols.insert(name, value);
    }

    /// Get the value of a symbol by name.
    pub fn get(&self, name: &str) -> Result<u32, SymbolNotFoundError> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| SymbolNotFoundError::new(name.to_string()))
    }

    /// Check if a certain symbol exists.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Address of payload start.
    pub fn payload_start(&self) -> Result<u32, SymbolNotFoundError> {
        self.get(PAYLOAD_START)
    }

    /// Address of payload end.
    pub fn payload_end(&self) -> Result<u32, SymbolNotFoundError> {
        self.get(PAYLOAD_END)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> ordered_map::Iter<'_, String, u32> {
        self.symbols.iter()
    }
}
