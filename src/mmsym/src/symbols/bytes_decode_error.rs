/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{error, fmt};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum BytesDecodeError {
    /// The stream ended before an announced field could be fully read.
    Truncated { offset: usize, expected: usize },
    /// A symbol name contained bytes outside the ASCII range.
    NonAsciiName { offset: usize },
}

impl fmt::Display for BytesDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BytesDecodeError::Truncated { offset, expected } => {
                write!(
                    f,
                    "Truncated symbols data: expected {} more bytes at offset 0x{:X}",
                    expected, offset
                )
            }
            BytesDecodeError::NonAsciiName { offset } => {
                write!(
                    f,
                    "Symbol name at offset 0x{:X} contains non-ASCII bytes",
                    offset
                )
            }
        }
    }
}

impl error::Error for BytesDecodeError {}
