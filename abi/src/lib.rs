//! SlateOS Hardware Descriptor ABI Types
//!
//! This crate provides the canonical definitions for the hardware-mandated
//! descriptor layouts shared between the kernel runtime and the offline table
//! generator. Having a single source of truth eliminates:
//! - Duplicate layout definitions
//! - Drift between the live table the kernel patches and the static image
//!   the host tool emits
//!
//! Every builder in this crate is a pure `const fn` of its inputs, so both
//! callers produce byte-identical descriptors from the same arguments.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod addr;
pub mod arch;

pub use addr::*;
pub use arch::*;
