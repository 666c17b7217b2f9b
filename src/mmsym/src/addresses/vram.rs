/* SPDX-FileCopyrightText: © 2025 Decompollaborate */
/* SPDX-License-Identifier: MIT */

use core::{fmt, ops};

use super::Size;

#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Vram {
    inner: u32,
}

impl Vram {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { inner: value }
    }

    pub const fn inner(&self) -> u32 {
        self.inner
    }
}

impl Vram {
    pub const fn add_size(&self, size: &Size) -> Self {
        size.add_vram(self)
    }

    pub const fn sub_vram(&self, rhs: &Vram) -> Size {
        Size::new(self.inner - rhs.inner)
    }
}

impl ops::Sub<Vram> for Vram {
    type Output = Size;

    fn sub(self, rhs: Vram) -> Self::Output {
        self.sub_vram(&rhs)
    }
}

impl fmt::Debug for Vram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vram {{ 0x{:08X} }}", self.inner)
    }
}
