//! Verification fixtures for the SlateOS descriptor ABI.
//!
//! [`TableImage`] stands in for the offline generator's locally-held
//! buffer: 256 slots populated through the shared gate builder and
//! serialized in the exact byte order a bootable image would carry. The
//! integration tests pit it against direct slot writes, the shape of the
//! kernel's runtime path, to hold both callers to byte-identical output.

#![no_std]

use slate_abi::addr::VirtAddr;
use slate_abi::arch::x86::idt::{IDT_ENTRIES, IdtEntry};

/// Size in bytes of a serialized full table.
pub const TABLE_IMAGE_BYTES: usize = IDT_ENTRIES * 8;

/// An in-memory image of a full 256-slot IDT.
pub struct TableImage {
    entries: [IdtEntry; IDT_ENTRIES],
}

impl TableImage {
    /// A table of empty, non-present slots.
    pub const fn new() -> Self {
        Self {
            entries: [IdtEntry::null(); IDT_ENTRIES],
        }
    }

    /// Populate one slot through the shared interrupt-gate builder.
    pub fn set_interrupt_gate(&mut self, vector: u8, handler: VirtAddr, dpl: u8) {
        self.entries[vector as usize] = IdtEntry::interrupt_gate(handler, dpl);
    }

    /// Read one slot back.
    pub fn entry(&self, vector: u8) -> IdtEntry {
        self.entries[vector as usize]
    }

    /// Serialize the table in processor byte order.
    pub fn to_bytes(&self) -> [u8; TABLE_IMAGE_BYTES] {
        let mut out = [0u8; TABLE_IMAGE_BYTES];
        for (slot, entry) in self.entries.iter().enumerate() {
            out[slot * 8..slot * 8 + 8].copy_from_slice(&entry.to_bytes());
        }
        out
    }
}

impl Default for TableImage {
    fn default() -> Self {
        Self::new()
    }
}
