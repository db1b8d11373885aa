//! Segment selector definitions.
//!
//! Gate descriptors name the code segment their handler runs under. The
//! selectors themselves are fixed by the segment-setup code at boot; this
//! module only carries the agreed values.

/// IA-32 segment selector.
///
/// Layout (16 bits):
/// - Bits 0-1: Requested Privilege Level (RPL)
/// - Bit 2: Table Indicator (0 = GDT, 1 = LDT)
/// - Bits 3-15: Descriptor index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SegmentSelector(pub u16);

impl SegmentSelector {
    /// Null selector (index 0, GDT, RPL 0).
    pub const NULL: Self = Self(0);

    /// Kernel code segment (GDT index 1, RPL 0) = 0x08.
    ///
    /// Every gate built by this crate runs its handler under this segment.
    pub const KERNEL_CODE: Self = Self(0x08);

    /// Get the raw selector value as stored in a descriptor.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Get the requested privilege level (0-3).
    #[inline]
    pub const fn rpl(self) -> u8 {
        (self.0 & 0x3) as u8
    }
}
