/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

mod bytes_decode_error;
mod bytes_serialization;
mod symbol_not_found_error;
mod symbol_table;
mod text_decode_error;
mod text_parsing;

pub use bytes_decode_error::BytesDecodeError;
pub use symbol_not_found_error::SymbolNotFoundError;
pub use symbol_table::SymbolTable;
pub use text_decode_error::TextDecodeError;
