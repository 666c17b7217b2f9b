/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use crate::{
    addresses::{Size, Vram},
    symbols::{SymbolNotFoundError, SymbolTable},
};

use super::{DpadConfig, RomMemory};

const DPAD_CONFIG: &str = "DPAD_CONFIG";
const DPAD_STATE: &str = "DPAD_STATE";

/// Size of the 4-byte header at the start of the in-image config struct.
/// The versioned payload begins right after it.
const STRUCT_HEADER_SIZE: Size = Size::new(4);

/// Address arrangement generation for the D-pad configuration.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
enum DpadLayout {
    /// Older payloads: a bare struct blob at `DPAD_CONFIG` plus a separate
    /// state byte at `DPAD_STATE`.
    Legacy,
    /// A single versioned struct at `DPAD_CONFIG`, no state symbol.
    Current,
}

impl DpadLayout {
    fn detect(table: &SymbolTable) -> Self {
        if table.has(DPAD_STATE) {
            DpadLayout::Legacy
        } else {
            DpadLayout::Current
        }
    }
}

impl SymbolTable {
    /// Apply configuration post-patch, writing the D-pad config into the
    /// image at the addresses this table resolves.
    ///
    /// The layout generation is picked once per call from the symbols the
    /// table carries. Writes go through `rom` unbuffered and in order; on a
    /// failed lookup everything already written stays written.
    pub fn apply_post_patch<M, C>(
        &self,
        rom: &mut M,
        config: &C,
    ) -> Result<(), SymbolNotFoundError>
    where
        M: RomMemory + ?Sized,
        C: DpadConfig + ?Sized,
    {
        match DpadLayout::detect(self) {
            DpadLayout::Legacy => {
                let config_vram = Vram::new(self.get(DPAD_CONFIG)?);
                rom.write_bytes(config_vram, &config.struct_bytes());

                let state_vram = Vram::new(self.get(DPAD_STATE)?);
                rom.write_bytes(state_vram, &[config.state_byte()]);
            }
            DpadLayout::Current => {
                let payload_vram = Vram::new(self.get(DPAD_CONFIG)?) + STRUCT_HEADER_SIZE;

                let version = rom.read_u32(payload_vram);
                rom.write_bytes(payload_vram, &config.to_struct_bytes(version));
            }
        }

        Ok(())
    }

    /// Best-effort [`apply_post_patch`]: missing D-pad symbols become a
    /// no-op instead of an error, for tables produced by older builds.
    ///
    /// [`apply_post_patch`]: SymbolTable::apply_post_patch
    pub fn try_apply_post_patch<M, C>(&self, rom: &mut M, config: &C)
    where
        M: RomMemory + ?Sized,
        C: DpadConfig + ?Sized,
    {
        let _ = self.apply_post_patch(rom, config);
    }
}

#[cfg(test)]
mod tests {
    use alloc::{vec, vec::Vec};
    use core::cell::RefCell;

    use super::*;

    #[derive(Debug)]
    struct FakeRom {
        version: u32,
        reads: RefCell<Vec<Vram>>,
        writes: Vec<(Vram, Vec<u8>)>,
    }

    impl FakeRom {
        fn new(version: u32) -> Self {
            Self {
                version,
                reads: RefCell::new(Vec::new()),
                writes: Vec::new(),
            }
        }
    }

    impl RomMemory for FakeRom {
        fn read_u32(&self, vram: Vram) -> u32 {
            self.reads.borrow_mut().push(vram);
            self.version
        }

        fn write_bytes(&mut self, vram: Vram, bytes: &[u8]) {
            self.writes.push((vram, bytes.to_vec()));
        }
    }

    struct TestConfig;

    impl DpadConfig for TestConfig {
        fn to_struct_bytes(&self, version: u32) -> Vec<u8> {
            vec![version as u8; 8]
        }

        fn struct_bytes(&self) -> Vec<u8> {
            vec![0xAA; 4]
        }

        fn state_byte(&self) -> u8 {
            0x01
        }
    }

    #[test]
    fn legacy_layout_issues_two_writes_and_no_version_read() {
        let table =
            SymbolTable::from_text("DPAD_CONFIG: 0x80780000\nDPAD_STATE: 0x80780010").unwrap();
        let mut rom = FakeRom::new(2);

        table.apply_post_patch(&mut rom, &TestConfig).unwrap();

        assert!(rom.reads.borrow().is_empty());
        assert_eq!(
            rom.writes,
            vec![
                (Vram::new(0x80780000), vec![0xAA; 4]),
                (Vram::new(0x80780010), vec![0x01]),
            ]
        );
    }

    #[test]
    fn current_layout_reads_version_then_writes_past_the_header() {
        let table = SymbolTable::from_text("DPAD_CONFIG: 0x80780000").unwrap();
        let mut rom = FakeRom::new(2);

        table.apply_post_patch(&mut rom, &TestConfig).unwrap();

        assert_eq!(*rom.reads.borrow(), vec![Vram::new(0x80780004)]);
        assert_eq!(rom.writes, vec![(Vram::new(0x80780004), vec![2; 8])]);
    }

    #[test]
    fn missing_config_symbol_is_an_error_before_any_write() {
        let table = SymbolTable::from_text("PAYLOAD_START: 0x1000").unwrap();
        let mut rom = FakeRom::new(2);

        let result = table.apply_post_patch(&mut rom, &TestConfig);

        assert_eq!(result.unwrap_err().name(), "DPAD_CONFIG");
        assert!(rom.reads.borrow().is_empty());
        assert!(rom.writes.is_empty());
    }

    #[test]
    fn try_variant_is_a_silent_noop_without_dpad_symbols() {
        let table = SymbolTable::from_text("PAYLOAD_START: 0x1000").unwrap();
        let mut rom = FakeRom::new(2);

        table.try_apply_post_patch(&mut rom, &TestConfig);

        assert!(rom.reads.borrow().is_empty());
        assert!(rom.writes.is_empty());
    }

    #[test]
    fn try_variant_still_applies_when_symbols_exist() {
        let table = SymbolTable::from_text("DPAD_CONFIG: 0x80780000").unwrap();
        let mut rom = FakeRom::new(3);

        table.try_apply_post_patch(&mut rom, &TestConfig);

        assert_eq!(rom.writes, vec![(Vram::new(0x80780004), vec![3; 8])]);
    }
}
