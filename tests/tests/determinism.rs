//! Cross-context determinism of the interrupt-gate builder.
//!
//! The kernel patching its live table and the offline generator filling a
//! local buffer share one builder; any divergence between the two is a
//! defect. These tests drive both call sites with identical inputs and
//! compare the resulting 2048-byte images.

use slate_abi::addr::VirtAddr;
use slate_abi::arch::x86::idt::{DPL_KERNEL, DPL_USER, IDT_ENTRIES, IdtEntry};
use slate_tests::{TABLE_IMAGE_BYTES, TableImage};

const SYSCALL_VECTOR: u8 = 0x80;

/// Deterministic vector -> (handler, dpl) assignment used by both paths.
fn gate_inputs(vector: usize) -> (VirtAddr, u8) {
    let dpl = if vector == SYSCALL_VECTOR as usize {
        DPL_USER
    } else {
        DPL_KERNEL
    };
    (VirtAddr::new(0xC010_0000 + (vector as u32) * 0x40), dpl)
}

/// The runtime path: direct writes into caller-owned slots.
fn build_runtime_table() -> [IdtEntry; IDT_ENTRIES] {
    let mut table = [IdtEntry::null(); IDT_ENTRIES];
    for (vector, slot) in table.iter_mut().enumerate() {
        let (handler, dpl) = gate_inputs(vector);
        *slot = IdtEntry::interrupt_gate(handler, dpl);
    }
    table
}

/// The offline path: the image fixture.
fn build_image_table() -> TableImage {
    let mut image = TableImage::new();
    for vector in 0..IDT_ENTRIES {
        let (handler, dpl) = gate_inputs(vector);
        image.set_interrupt_gate(vector as u8, handler, dpl);
    }
    image
}

#[test]
fn runtime_and_image_paths_agree_byte_for_byte() {
    let runtime = build_runtime_table();
    let image = build_image_table();

    let mut runtime_bytes = [0u8; TABLE_IMAGE_BYTES];
    for (vector, entry) in runtime.iter().enumerate() {
        runtime_bytes[vector * 8..vector * 8 + 8].copy_from_slice(&entry.to_bytes());
    }

    assert_eq!(runtime_bytes, image.to_bytes());
}

#[test]
fn rebuilding_a_slot_is_idempotent() {
    let mut image = build_image_table();
    let before = image.to_bytes();

    let (handler, dpl) = gate_inputs(SYSCALL_VECTOR as usize);
    image.set_interrupt_gate(SYSCALL_VECTOR, handler, dpl);

    assert_eq!(image.to_bytes(), before);
}

#[test]
fn fresh_image_is_all_non_present_slots() {
    let image = TableImage::new();
    assert_eq!(image.to_bytes(), [0u8; TABLE_IMAGE_BYTES]);
    assert!(!image.entry(0).is_present());
}

#[test]
fn syscall_slot_is_user_invocable() {
    let image = build_image_table();
    let entry = image.entry(SYSCALL_VECTOR);
    assert_eq!(entry.dpl(), DPL_USER);
    assert!(entry.is_present());

    // Every other slot stays kernel-only.
    assert_eq!(image.entry(0).dpl(), DPL_KERNEL);
    assert_eq!(image.entry(255).dpl(), DPL_KERNEL);
}
