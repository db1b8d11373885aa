//! Linear address type for type-safe descriptor construction.
//!
//! IA-32 protected-mode descriptors carry 32-bit linear addresses. The
//! newtype keeps handler entry points from being confused with other u32
//! values and is a zero-cost `#[repr(transparent)]` wrapper.

/// A 32-bit linear (virtual) address.
///
/// This is the address space the processor sees after segmentation; handler
/// entry points stored in gate descriptors are linear addresses. The value
/// is not validated - an unmapped address is mechanically representable and
/// only faults when the vector fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VirtAddr(pub u32);

impl VirtAddr {
    /// The null address.
    pub const NULL: Self = Self(0);

    /// Create a new linear address from a raw u32 value.
    #[inline]
    pub const fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw u32 value of this address.
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns true if this is the null address.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}
