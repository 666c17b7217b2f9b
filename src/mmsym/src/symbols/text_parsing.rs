/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use super::{SymbolTable, TextDecodeError};

impl SymbolTable {
    /// Load a table from the loosely-formatted text file emitted by the
    /// assembly build step.
    ///
    /// One `name: value` entry per line, value in base 16 with an optional
    /// `0x` prefix. Quotes, a trailing comma and surrounding whitespace are
    /// stripped, and lines consisting of `{` or `}` are skipped, which is
    /// just enough to also accept the file when wrapped as an object
    /// literal.
    ///
    /// This is intentionally not a structured-text parser. Known
    /// restrictions: no colons inside names or values, no escaped quotes,
    /// no multi-line values. The splitting happens on the first `:` only.
    pub fn from_text(text: &str) -> Result<Self, TextDecodeError> {
        let mut table = Self::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;

            let trimmed = line.trim();
            if matches!(trimmed, "" | "{" | "}") {
                continue;
            }

            let (name, value) = trimmed
                .split_once(':')
                .ok_or(TextDecodeError::MissingSeparator { line: line_number })?;

            let mut value = value.trim();
            if let Some(without_comma) = value.strip_suffix(',') {
                value = without_comma.trim();
            }

            let name = name.trim().replace('"', "");
            let value = value.replace('"', "");

            let digits = value
                .strip_prefix("0x")
                .or_else(|| value.strip_prefix("0X"))
                .unwrap_or(&value);
            let parsed = u32::from_str_radix(digits, 16)
                .map_err(|_| TextDecodeError::InvalidValue { line: line_number })?;

            table.insert(name, parsed);
        }

        Ok(table)
    }
}
