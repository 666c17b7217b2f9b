/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::string::String;

/// Decode symbol name bytes, which must be plain ASCII.
///
/// An extension of Latin1.
/// For some reason `encoding_rs` uses this encoding to decode ASCII instead of having a
/// dedicated ASCII encoding, so we just use the same.
/// Care must be taken to avoid decoding bytes outside the ASCII range (> 0x7F), so they
/// get rejected upfront.
pub(crate) fn decode_ascii(bytes: &[u8]) -> Option<String> {
    if bytes.iter().any(|b| *b > 0x7F) {
        return None;
    }

    if let (x, false) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(bytes) {
        Some(x.into_owned())
    } else {
        None
    }
}
