//! Interrupt Descriptor Table (IDT) gate definitions.
//!
//! One IDT entry is an 8-byte hardware record (Intel SDM vol. 3A, sec.
//! 6.11) telling the processor, for one vector, which code segment and
//! offset to jump to, the gate type and size, and the privilege level
//! required to reach it through a software `int`.
//!
//! The same [`IdtEntry::interrupt_gate`] builder serves two callers: the
//! kernel patching its live table and the offline tool generating a static
//! table image ahead of boot. It is a `const fn` with no environment
//! coupling, so both sides are guaranteed to stay in sync byte for byte.

use bitflags::bitflags;

use crate::addr::VirtAddr;
use crate::arch::x86::gdt::SegmentSelector;

/// Number of slots in a full IDT.
pub const IDT_ENTRIES: usize = 256;

pub const EXCEPTION_DIVIDE_ERROR: u8 = 0;
pub const EXCEPTION_DEBUG: u8 = 1;
pub const EXCEPTION_NMI: u8 = 2;
pub const EXCEPTION_BREAKPOINT: u8 = 3;
pub const EXCEPTION_OVERFLOW: u8 = 4;
pub const EXCEPTION_BOUND_RANGE: u8 = 5;
pub const EXCEPTION_INVALID_OPCODE: u8 = 6;
pub const EXCEPTION_DEVICE_NOT_AVAIL: u8 = 7;
pub const EXCEPTION_DOUBLE_FAULT: u8 = 8;
pub const EXCEPTION_INVALID_TSS: u8 = 10;
pub const EXCEPTION_SEGMENT_NOT_PRES: u8 = 11;
pub const EXCEPTION_STACK_FAULT: u8 = 12;
pub const EXCEPTION_GENERAL_PROTECTION: u8 = 13;
pub const EXCEPTION_PAGE_FAULT: u8 = 14;
pub const EXCEPTION_FPU_ERROR: u8 = 16;
pub const EXCEPTION_ALIGNMENT_CHECK: u8 = 17;
pub const EXCEPTION_MACHINE_CHECK: u8 = 18;
pub const EXCEPTION_SIMD_FP_EXCEPTION: u8 = 19;

/// DPL for hardware interrupts and exceptions.
pub const DPL_KERNEL: u8 = 0;

/// DPL for user-mode software-generated interrupts.
pub const DPL_USER: u8 = 3;

/// Gate kind field of a descriptor (bits 8-10 of the high word).
///
/// The layout can represent all three kinds; the builder in this module
/// only ever constructs interrupt gates.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    Task = 0b101,
    Interrupt = 0b110,
    Trap = 0b111,
}

impl GateKind {
    /// Decode a 3-bit type field, rejecting values that are not a gate.
    #[inline]
    pub const fn from_bits(bits: u8) -> Option<GateKind> {
        match bits {
            0b101 => Some(GateKind::Task),
            0b110 => Some(GateKind::Interrupt),
            0b111 => Some(GateKind::Trap),
            _ => None,
        }
    }
}

bitflags! {
    /// Exception vectors that push a hardware error code on entry.
    ///
    /// The low-level entry stubs consult this to decide whether an extra
    /// stack word must be popped before `iret`.
    ///
    /// | Vector | Mnemonic | Description            |
    /// |--------|----------|------------------------|
    /// | 8      | #DF      | Double Fault           |
    /// | 10     | #TS      | Invalid TSS            |
    /// | 11     | #NP      | Segment Not Present    |
    /// | 12     | #SS      | Stack Segment Fault    |
    /// | 13     | #GP      | General Protection     |
    /// | 14     | #PF      | Page Fault             |
    /// | 17     | #AC      | Alignment Check        |
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ErrorCodeFaults: u32 {
        const DOUBLE_FAULT = 1 << EXCEPTION_DOUBLE_FAULT;
        const INVALID_TSS = 1 << EXCEPTION_INVALID_TSS;
        const SEGMENT_NOT_PRES = 1 << EXCEPTION_SEGMENT_NOT_PRES;
        const STACK_FAULT = 1 << EXCEPTION_STACK_FAULT;
        const GENERAL_PROTECTION = 1 << EXCEPTION_GENERAL_PROTECTION;
        const PAGE_FAULT = 1 << EXCEPTION_PAGE_FAULT;
        const ALIGNMENT_CHECK = 1 << EXCEPTION_ALIGNMENT_CHECK;
    }
}

/// Bitmask form of [`ErrorCodeFaults`], bit n set for vector n.
pub const ERROR_CODE_FAULTS_MASK: u32 = ErrorCodeFaults::all().bits();

/// Returns true if exception `vector` pushes an error code on the stack.
#[inline]
pub const fn pushes_error_code(vector: u8) -> bool {
    vector < 32 && ERROR_CODE_FAULTS_MASK & (1u32 << vector) != 0
}

// The constant 0x8E00 in the high word of every entry this crate builds:
// present=1, DPL=0 (caller's value or'd in at bit 13), gate size=1
// (32-bit), type=0b110 (interrupt gate, so the processor clears IF on
// entry), reserved bits 0.
const INTERRUPT_GATE_ATTR: u32 = 0x8E00;

const DPL_SHIFT: u32 = 13;

/// One 8-byte IDT slot.
///
/// Byte geometry (all fields little-endian, no padding):
///
/// | Bytes | Field        |
/// |-------|--------------|
/// | 0-1   | offset 15:0  |
/// | 2-3   | segment selector |
/// | 4     | reserved (must be 0) |
/// | 5     | type/attributes: type (bits 0-2), gate size (3), zero (4), DPL (5-6), present (7) |
/// | 6-7   | offset 31:16 |
///
/// Writing a slot of a table the processor may be reading is the caller's
/// problem: build the entry by value, then store it with interrupts
/// disabled or before the table is activated.
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdtEntry {
    offset_low: u16,
    selector: u16,
    reserved: u8,
    type_attr: u8,
    offset_high: u16,
}

impl IdtEntry {
    /// The empty, non-present slot state.
    pub const fn null() -> Self {
        Self::from_words([0, 0])
    }

    /// Build a present, 32-bit interrupt gate for `handler` at privilege
    /// level `dpl`.
    ///
    /// Hardware interrupts and exceptions use [`DPL_KERNEL`]; handlers for
    /// user-mode software interrupts use [`DPL_USER`]. `dpl` is masked to
    /// two bits, so an out-of-range value cannot spill into the present
    /// bit. The handler address is stored as given; nothing checks that it
    /// is mapped. The selector is always [`SegmentSelector::KERNEL_CODE`].
    pub const fn interrupt_gate(handler: VirtAddr, dpl: u8) -> Self {
        let routine = handler.as_u32();
        let low = ((SegmentSelector::KERNEL_CODE.bits() as u32) << 16) | (routine & 0xFFFF);
        let high =
            (routine & 0xFFFF_0000) | INTERRUPT_GATE_ATTR | (((dpl & 0b11) as u32) << DPL_SHIFT);
        Self::from_words([low, high])
    }

    /// Reassemble an entry from its two 32-bit words (low word first).
    pub const fn from_words(words: [u32; 2]) -> Self {
        Self {
            offset_low: (words[0] & 0xFFFF) as u16,
            selector: (words[0] >> 16) as u16,
            reserved: (words[1] & 0xFF) as u8,
            type_attr: ((words[1] >> 8) & 0xFF) as u8,
            offset_high: (words[1] >> 16) as u16,
        }
    }

    /// The two 32-bit words of the slot, in the order they sit in memory.
    pub const fn to_words(self) -> [u32; 2] {
        [
            (self.offset_low as u32) | ((self.selector as u32) << 16),
            (self.reserved as u32) | ((self.type_attr as u32) << 8) | ((self.offset_high as u32) << 16),
        ]
    }

    /// The 8 bytes of the slot as the processor (and an image file) sees
    /// them.
    pub const fn to_bytes(self) -> [u8; 8] {
        let [low, high] = self.to_words();
        let lo = low.to_le_bytes();
        let hi = high.to_le_bytes();
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }

    /// Handler entry point stored in this slot.
    #[inline]
    pub const fn offset(self) -> VirtAddr {
        VirtAddr::new((self.offset_low as u32) | ((self.offset_high as u32) << 16))
    }

    /// Code segment the handler runs under.
    #[inline]
    pub const fn selector(self) -> SegmentSelector {
        SegmentSelector(self.selector)
    }

    /// Gate kind, or `None` if the type field does not name a gate.
    #[inline]
    pub const fn gate_kind(self) -> Option<GateKind> {
        GateKind::from_bits(self.type_attr & 0b111)
    }

    /// True for a 32-bit gate, false for a 16-bit one.
    #[inline]
    pub const fn is_32bit(self) -> bool {
        self.type_attr & (1 << 3) != 0
    }

    /// Descriptor privilege level (0-3).
    #[inline]
    pub const fn dpl(self) -> u8 {
        (self.type_attr >> 5) & 0b11
    }

    /// True if the slot holds a valid entry.
    #[inline]
    pub const fn is_present(self) -> bool {
        self.type_attr & (1 << 7) != 0
    }
}

/// Human-readable mnemonic for an exception vector.
pub const fn exception_name(vector: u8) -> &'static str {
    match vector {
        EXCEPTION_DIVIDE_ERROR => "Divide Error",
        EXCEPTION_DEBUG => "Debug",
        EXCEPTION_NMI => "Non-Maskable Interrupt",
        EXCEPTION_BREAKPOINT => "Breakpoint",
        EXCEPTION_OVERFLOW => "Overflow",
        EXCEPTION_BOUND_RANGE => "Bound Range Exceeded",
        EXCEPTION_INVALID_OPCODE => "Invalid Opcode",
        EXCEPTION_DEVICE_NOT_AVAIL => "Device Not Available",
        EXCEPTION_DOUBLE_FAULT => "Double Fault",
        EXCEPTION_INVALID_TSS => "Invalid TSS",
        EXCEPTION_SEGMENT_NOT_PRES => "Segment Not Present",
        EXCEPTION_STACK_FAULT => "Stack Segment Fault",
        EXCEPTION_GENERAL_PROTECTION => "General Protection Fault",
        EXCEPTION_PAGE_FAULT => "Page Fault",
        EXCEPTION_FPU_ERROR => "x87 FPU Error",
        EXCEPTION_ALIGNMENT_CHECK => "Alignment Check",
        EXCEPTION_MACHINE_CHECK => "Machine Check",
        EXCEPTION_SIMD_FP_EXCEPTION => "SIMD Floating-Point Exception",
        _ => "Unknown",
    }
}
