use crate::state::address;

/// Width of the microstate register in bits.
pub const MICROSTATE_WIDTH: u32 = 15;
/// Mask of valid microstate register bits.
pub const MICROSTATE_MASK: u16 = (1 << MICROSTATE_WIDTH) - 1;
/// Published next-address bits carried inverted (bits 2, 4 and 5).
pub const NEXT_ADDRESS_INVERT: u8 = 0b011_0100;

/// Decode feedback tag set by the fetch cycle.
pub const FEEDBACK_FIRST_CYCLE: u8 = 0b001;
/// Decode feedback tag for a register-mode destination.
pub const FEEDBACK_REGISTER_DESTINATION: u8 = 0b110;
/// Decode feedback tag for a memory destination.
pub const FEEDBACK_MEMORY_DESTINATION: u8 = 0b101;

const ADDRESS_MASK: u16 = 0x7F;
const CONDITION_SHIFT: u32 = 7;
const CONDITION_MASK: u16 = 0x1F;
const FEEDBACK_SHIFT: u32 = 12;
const FEEDBACK_MASK: u16 = 0x7;
const PRIORITY_CONTINUE: u8 = 0b110;

/// Condition-code inputs sampled into `mr[11:7]` each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct ConditionCodes {
    /// Carry (`mr[7]`).
    pub carry: bool,
    /// Overflow (`mr[8]`).
    pub overflow: bool,
    /// Zero (`mr[9]`).
    pub zero: bool,
    /// Negative (`mr[10]`).
    pub negative: bool,
    /// Trace trap pending (`mr[11]`).
    pub trace: bool,
}

impl ConditionCodes {
    /// Unpacks `C V Z N T` from bits 0..=4.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            carry: bits & 0x01 != 0,
            overflow: bits & 0x02 != 0,
            zero: bits & 0x04 != 0,
            negative: bits & 0x08 != 0,
            trace: bits & 0x10 != 0,
        }
    }

    /// Packs `C V Z N T` into bits 0..=4.
    #[must_use]
    pub const fn bits(self) -> u8 {
        (self.carry as u8)
            | ((self.overflow as u8) << 1)
            | ((self.zero as u8) << 2)
            | ((self.negative as u8) << 3)
            | ((self.trace as u8) << 4)
    }
}

/// The 15-bit microstate register: `{feedback[2:0], T N Z V C, address[6:0]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Microstate(u16);

impl Default for Microstate {
    fn default() -> Self {
        Self::RESET
    }
}

impl Microstate {
    /// Power-up value: fetch, no condition codes, priority feedback "continue".
    pub const RESET: Self = Self::compose(
        address::FETCH,
        ConditionCodes::from_bits(0),
        PRIORITY_CONTINUE,
    );

    /// Assembles a register value from its three fields. Excess field bits are dropped.
    #[must_use]
    pub const fn compose(address: u8, flags: ConditionCodes, feedback: u8) -> Self {
        Self(
            ((feedback as u16 & FEEDBACK_MASK) << FEEDBACK_SHIFT)
                | ((flags.bits() as u16 & CONDITION_MASK) << CONDITION_SHIFT)
                | (address as u16 & ADDRESS_MASK),
        )
    }

    /// Accepts a raw register value when bit 15 is clear.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Option<Self> {
        if bits & !MICROSTATE_MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Raw register value, `mr[14:0]`.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Microprogram address, `mr[6:0]`.
    #[must_use]
    pub const fn address(self) -> u8 {
        (self.0 & ADDRESS_MASK) as u8
    }

    /// Sampled condition codes, `mr[11:7]`.
    #[must_use]
    pub const fn condition_codes(self) -> ConditionCodes {
        ConditionCodes::from_bits(((self.0 >> CONDITION_SHIFT) & CONDITION_MASK) as u8)
    }

    /// Multiplexed feedback field, `mr[14:12]`.
    #[must_use]
    pub const fn feedback(self) -> u8 {
        ((self.0 >> FEEDBACK_SHIFT) & FEEDBACK_MASK) as u8
    }
}
