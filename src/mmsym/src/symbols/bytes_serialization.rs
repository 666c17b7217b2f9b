/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use alloc::vec::Vec;

use crate::{config::Endian, str_decoding};

use super::{BytesDecodeError, SymbolTable};

/// The serialized table is little-endian regardless of the endianness of
/// the target image, since it is produced and consumed by the patching
/// tooling and never read by the game itself.
const ENDIAN: Endian = Endian::Little;

/// The serialized stream is zero-padded to this alignment.
const DATA_ALIGNMENT: usize = 0x10;

struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], BytesDecodeError> {
        let truncated = BytesDecodeError::Truncated {
            offset: self.offset,
            expected: count,
        };

        let end = self.offset.checked_add(count).ok_or(truncated)?;
        let taken = self.bytes.get(self.offset..end).ok_or(truncated)?;
        self.offset = end;
        Ok(taken)
    }

    fn read_u32(&mut self) -> Result<u32, BytesDecodeError> {
        Ok(ENDIAN.word_from_bytes(self.take(4)?))
    }

    fn read_u16(&mut self) -> Result<u16, BytesDecodeError> {
        Ok(ENDIAN.short_from_bytes(self.take(2)?))
    }
}

impl SymbolTable {
    /// Load a table from its serialized form.
    ///
    /// Fails without producing a partial table if the stream ends before
    /// every announced entry has been read. Trailing padding bytes are
    /// ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BytesDecodeError> {
        let mut cursor = ByteCursor::new(bytes);

        // Reserved word, may become a version field later.
        cursor.read_u32()?;

        let count = cursor.read_u32()?;

        let mut table = Self::new();
        for _ in 0..count {
            let name_len = cursor.read_u16()?;

            let name_offset = cursor.offset;
            let name_bytes = cursor.take(name_len.into())?;
            let name = str_decoding::decode_ascii(name_bytes).ok_or(
                BytesDecodeError::NonAsciiName {
                    offset: name_offset,
                },
            )?;

            let value = cursor.read_u32()?;
            table.insert(name, value);
        }

        Ok(table)
    }

    /// Serialize into bytes.
    ///
    /// Panics on names that aren't ASCII or don't fit a `u16` length field.
    /// Such a name can't come out of either decoder, so hitting this is a
    /// bug in whatever produced the table.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Reserved word, may become a version field later.
        bytes.extend_from_slice(&ENDIAN.bytes_from_word(0));
        bytes.extend_from_slice(&ENDIAN.bytes_from_word(self.len() as u32));

        for (name, value) in self.iter() {
            assert!(name.is_ascii(), "Symbol names must be ASCII: {:?}", name);
            let name_len = u16::try_from(name.len()).expect("Symbol name is too long");

            bytes.extend_from_slice(&ENDIAN.bytes_from_short(name_len));
            bytes.extend_from_slice(name.as_bytes());
            bytes.extend_from_slice(&ENDIAN.bytes_from_word(*value));
        }

        while bytes.len() % DATA_ALIGNMENT != 0 {
            bytes.push(0);
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn sample_table() -> SymbolTable {
        SymbolTable::from_text(
            "PAYLOAD_START: 0x80780000\nPAYLOAD_END: 0x80790000\nDPAD_CONFIG: 0x807801A0\n",
        )
        .unwrap()
    }

    #[test]
    fn roundtrip_preserves_every_entry() {
        let table = sample_table();

        let decoded = SymbolTable::from_bytes(&table.to_bytes()).unwrap();

        assert_eq!(decoded, table);
    }

    #[test]
    fn encoded_length_is_always_a_multiple_of_16() {
        let table = sample_table();

        assert_eq!(table.to_bytes().len() % 0x10, 0);
        assert_eq!(SymbolTable::new().to_bytes().len() % 0x10, 0);
    }

    #[test]
    fn empty_table_encodes_to_header_and_padding_only() {
        let bytes = SymbolTable::new().to_bytes();

        assert_eq!(bytes, vec![0; 0x10]);
        assert!(SymbolTable::from_bytes(&bytes).unwrap().is_empty());
    }

    #[test]
    fn any_truncation_fails_instead_of_yielding_a_partial_table() {
        let table = sample_table();
        let bytes = table.to_bytes();

        // Length of the stream without the trailing padding.
        let unpadded_len: usize = 8 + table
            .iter()
            .map(|(name, _value)| 2 + name.len() + 4)
            .sum::<usize>();

        for len in 0..unpadded_len {
            assert!(
                SymbolTable::from_bytes(&bytes[..len]).is_err(),
                "truncation at {} should not decode",
                len
            );
        }
    }

    #[test]
    fn duplicated_name_keeps_the_last_value() {
        let mut bytes = vec![
            0, 0, 0, 0, // reserved
            2, 0, 0, 0, // count
        ];
        for value in [1u32, 2u32] {
            bytes.extend_from_slice(&[1, 0]); // name length
            bytes.push(b'A');
            bytes.extend_from_slice(&value.to_le_bytes());
        }

        let table = SymbolTable::from_bytes(&bytes).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A"), Ok(2));
    }

    #[test]
    fn non_ascii_name_is_rejected() {
        let mut bytes = vec![
            0, 0, 0, 0, // reserved
            1, 0, 0, 0, // count
            2, 0, // name length
        ];
        bytes.extend_from_slice(&[b'A', 0x80]);
        bytes.extend_from_slice(&1u32.to_le_bytes());

        assert_eq!(
            SymbolTable::from_bytes(&bytes),
            Err(BytesDecodeError::NonAsciiName { offset: 10 })
        );
    }

    #[test]
    fn huge_announced_count_does_not_panic() {
        let bytes = [
            0, 0, 0, 0, // reserved
            0xFF, 0xFF, 0xFF, 0xFF, // count
        ];

        assert!(matches!(
            SymbolTable::from_bytes(&bytes),
            Err(BytesDecodeError::Truncated { .. })
        ));
    }
}
