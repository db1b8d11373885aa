//! IA-32 (32-bit protected mode) architecture definitions.
//!
//! This module provides type-safe definitions for the hardware descriptor
//! formats mandated by the processor: segment selectors and interrupt
//! descriptor table gates.
//!
//! # Design Philosophy
//!
//! Raw integer constants are wrapped in newtypes to prevent misuse:
//! - `SegmentSelector(u16)` for code-segment selectors
//! - `VirtAddr(u32)` for handler entry points
//! - `ErrorCodeFaults` bitflags for exception classification
//!
//! Layouts are defined purely by masks and shifts over 32-bit words, never
//! by compiler bit-field packing, so every toolchain produces the same
//! bytes.

pub mod gdt;
pub mod idt;

// Re-export commonly used types at module level
pub use gdt::SegmentSelector;
pub use idt::{ErrorCodeFaults, GateKind, IdtEntry};
