//! Architecture-specific definitions.
//!
//! Unlike most arch modules this one is not gated on `target_arch`: the
//! layouts here are pure data consumed both by the IA-32 kernel and by the
//! offline table generator, which runs on whatever the build host is.

pub mod x86;

pub use x86::*;
