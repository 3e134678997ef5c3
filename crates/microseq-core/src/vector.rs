//! Trap and interrupt vector table indexed by the priority matrix selector.

use thiserror::Error;

/// Processor base pages selected by the two externally strapped base bits.
pub const PROCESSOR_BASE_PAGES: [u16; 4] = [0o000000, 0o160000, 0o172000, 0o173000];

/// Bus timeout vectors per base-bit combination. Base `0b11` has no vector.
pub const BUS_TIMEOUT_VECTORS: [Option<u16>; 4] =
    [Some(0o000004), Some(0o160004), Some(0o172004), None];

/// Vector class published in the priority output selector nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum VectorSelect {
    /// Double bus error.
    DoubleError = 0b0000,
    /// Reserved or unrecognized opcode.
    ReservedOpcode = 0b0001,
    /// Trace trap and `BPT`.
    TraceTrap = 0b0010,
    /// `IOT`.
    Iot = 0b0011,
    /// Power fail.
    PowerFail = 0b0100,
    /// Bus timeout; address depends on the base bits.
    QbusTimeout = 0b0101,
    /// `EMT`.
    Emt = 0b0110,
    /// `TRAP`.
    Trap = 0b0111,
    /// Odd address.
    OddAddress = 0b1000,
    /// Radial `IRQ2` or timer event.
    Event = 0b1001,
    /// Radial `IRQ3`.
    Irq3 = 0b1010,
    /// Halt request (`IRQ1`).
    Halt = 0b1011,
    /// `HALT` instruction or bus timeout in halt mode.
    HaltTrap = 0b1100,
    /// Vectored interrupt; address from the vector register.
    Vectored = 0b1101,
    /// Power restore; address from the start register.
    Start = 0b1110,
}

impl VectorSelect {
    /// Decodes a selector nibble; `0b1111` selects no vector.
    #[must_use]
    pub const fn from_u4(bits: u8) -> Option<Self> {
        match bits {
            0b0000 => Some(Self::DoubleError),
            0b0001 => Some(Self::ReservedOpcode),
            0b0010 => Some(Self::TraceTrap),
            0b0011 => Some(Self::Iot),
            0b0100 => Some(Self::PowerFail),
            0b0101 => Some(Self::QbusTimeout),
            0b0110 => Some(Self::Emt),
            0b0111 => Some(Self::Trap),
            0b1000 => Some(Self::OddAddress),
            0b1001 => Some(Self::Event),
            0b1010 => Some(Self::Irq3),
            0b1011 => Some(Self::Halt),
            0b1100 => Some(Self::HaltTrap),
            0b1101 => Some(Self::Vectored),
            0b1110 => Some(Self::Start),
            _ => None,
        }
    }

    /// Selector nibble.
    #[must_use]
    pub const fn as_u4(self) -> u8 {
        self as u8
    }
}

/// Where a vector table entry takes its address from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorSource {
    /// Fixed address.
    Fixed(u16),
    /// Offset added to the selected processor base page.
    BasePage(u16),
    /// Per-base bus timeout table.
    BusTimeout,
    /// Caller vector register.
    VectorRegister,
    /// Caller start address.
    StartAddress,
}

/// Entry source for every selector, indexed by selector nibble.
pub const VECTOR_TABLE: [VectorSource; 15] = [
    VectorSource::Fixed(0o160006),
    VectorSource::Fixed(0o000004),
    VectorSource::Fixed(0o000014),
    VectorSource::Fixed(0o000020),
    VectorSource::Fixed(0o000024),
    VectorSource::BusTimeout,
    VectorSource::Fixed(0o000030),
    VectorSource::Fixed(0o000034),
    VectorSource::BasePage(0o004),
    VectorSource::Fixed(0o000100),
    VectorSource::Fixed(0o000270),
    VectorSource::BasePage(0o170),
    VectorSource::BasePage(0o174),
    VectorSource::VectorRegister,
    VectorSource::StartAddress,
];

/// Externally supplied inputs to vector resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct VectorContext {
    /// Processor base bits; only the low two are used.
    pub base: u8,
    /// Vector latched from the interrupting device.
    pub vector_register: u16,
    /// Power-up start address.
    pub start_address: u16,
}

impl VectorContext {
    /// Base page for the current base bits.
    #[must_use]
    pub const fn base_page(&self) -> u16 {
        PROCESSOR_BASE_PAGES[(self.base & 0x3) as usize]
    }
}

/// Vector resolution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum VectorError {
    /// The selector has no address for the supplied base bits.
    #[error("vector {select:?} has no address for processor base {base:#04b}")]
    UnmappedBase {
        /// Selector that failed.
        select: VectorSelect,
        /// Base bits supplied.
        base: u8,
    },
}

/// Table source of `select`.
#[must_use]
pub const fn vector_source(select: VectorSelect) -> VectorSource {
    VECTOR_TABLE[select.as_u4() as usize]
}

/// Resolves a selector to the address the vector fetch reads.
///
/// # Errors
///
/// Returns [`VectorError::UnmappedBase`] for a bus timeout with base bits
/// `0b11`, which the vector table leaves unassigned.
pub const fn resolve_vector(
    select: VectorSelect,
    context: &VectorContext,
) -> Result<u16, VectorError> {
    match vector_source(select) {
        VectorSource::Fixed(address) => Ok(address),
        VectorSource::BasePage(offset) => Ok(context.base_page() + offset),
        VectorSource::BusTimeout => match BUS_TIMEOUT_VECTORS[(context.base & 0x3) as usize] {
            Some(address) => Ok(address),
            None => Err(VectorError::UnmappedBase {
                select,
                base: context.base & 0x3,
            }),
        },
        VectorSource::VectorRegister => Ok(context.vector_register),
        VectorSource::StartAddress => Ok(context.start_address),
    }
}
