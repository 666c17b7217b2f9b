/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum TextDecodeError {
    /// A non-ignorable line did not contain a `name: value` separator.
    MissingSeparator { line: usize },
    /// The value field did not parse as a base-16 `u32`.
    InvalidValue { line: usize },
}

impl fmt::Display for TextDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextDecodeError::MissingSeparator { line } => {
                write!(f, "Line {} is missing a ':' separator", line)
            }
            TextDecodeError::InvalidValue { line } => {
                write!(f, "Line {} does not have a valid hexadecimal value", line)
            }
        }
    }
}

impl error::Error for TextDecodeError {}
