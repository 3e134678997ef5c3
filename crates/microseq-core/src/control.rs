//! Decode matrix output: the 34-bit control vector and its field codes.
//!
//! Accessors read the published (post-polarity) vector. Multi-bit fields use
//! the all-ones code as their idle value, so the no-match vector decodes as
//! "hold everything, go to the trap request poll".

use crate::state::NEXT_ADDRESS_INVERT;

/// Width of the control vector in bits.
pub const CONTROL_WIDTH: u32 = 34;
/// Mask of valid control vector bits.
pub const CONTROL_MASK: u64 = (1 << CONTROL_WIDTH) - 1;

const NEXT_ADDRESS_MASK: u64 = 0x7F;
const END_BIT: u32 = 7;
const FEEDBACK_SOURCE_BIT: u32 = 8;
const IR_OP_SHIFT: u32 = 9;
const BUS_OP_SHIFT: u32 = 11;
const WIDTH_BIT: u32 = 14;
const ALU_SHIFT: u32 = 15;
const X_SHIFT: u32 = 19;
const Y_SHIFT: u32 = 22;
const PSW_SHIFT: u32 = 25;
const FEEDBACK_SHIFT: u32 = 28;
const POLL_BIT: u32 = 31;
const VECTOR_FETCH_BIT: u32 = 32;
const INVALID_BIT: u32 = 33;

/// Source of the next cycle's `mr[14:12]` feedback field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FeedbackSource {
    /// Decode feedback bits `sp[30:28]`.
    Decode,
    /// Priority matrix feedback bits.
    Priority,
}

/// Instruction register operation, `sp[10:9]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum IrOp {
    /// Clear the instruction register.
    Clear = 0b00,
    /// Load the instruction register from the bus.
    Load = 0b10,
    /// Keep the current opcode.
    Hold = 0b11,
}

impl IrOp {
    /// Decodes a 2-bit field; `0b01` is unassigned.
    #[must_use]
    pub const fn from_u2(bits: u8) -> Option<Self> {
        match bits {
            0b00 => Some(Self::Clear),
            0b10 => Some(Self::Load),
            0b11 => Some(Self::Hold),
            _ => None,
        }
    }
}

/// Bus transaction type, `sp[13:11]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum BusOp {
    /// Bus init pulse (`RESET`).
    Init = 2,
    /// Interrupt acknowledge cycle.
    InterruptAck = 3,
    /// Read-modify-write.
    ReadModifyWrite = 4,
    /// Write.
    Write = 5,
    /// Read.
    Read = 6,
    /// No transaction.
    Idle = 7,
}

impl BusOp {
    /// Decodes a 3-bit field; codes 0 and 1 are unassigned.
    #[must_use]
    pub const fn from_u3(bits: u8) -> Option<Self> {
        match bits {
            2 => Some(Self::Init),
            3 => Some(Self::InterruptAck),
            4 => Some(Self::ReadModifyWrite),
            5 => Some(Self::Write),
            6 => Some(Self::Read),
            7 => Some(Self::Idle),
            _ => None,
        }
    }
}

/// Bus transfer width, `sp[14]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum BusWidth {
    /// 8-bit transfer.
    Byte,
    /// 16-bit transfer.
    Word,
}

/// ALU function, `sp[18:15]`.
///
/// Unary operations act on the Y operand. Binary operations compute
/// `X op Y` into Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum AluOp {
    /// Branch offset: `Y + 2 * sign_extend(ir[7:0])`.
    BranchOffset = 0,
    Swab = 1,
    ShiftLeft = 2,
    ShiftRight = 3,
    Xor = 4,
    BitSet = 5,
    BitClear = 6,
    And = 7,
    DecrementTwo = 8,
    IncrementTwo = 9,
    Decrement = 10,
    Increment = 11,
    Subtract = 12,
    Add = 13,
    Pass = 14,
    Nop = 15,
}

impl AluOp {
    /// Decodes a 4-bit field. All sixteen codes are assigned.
    #[must_use]
    pub const fn from_u4(bits: u8) -> Self {
        match bits & 0xF {
            0 => Self::BranchOffset,
            1 => Self::Swab,
            2 => Self::ShiftLeft,
            3 => Self::ShiftRight,
            4 => Self::Xor,
            5 => Self::BitSet,
            6 => Self::BitClear,
            7 => Self::And,
            8 => Self::DecrementTwo,
            9 => Self::IncrementTwo,
            10 => Self::Decrement,
            11 => Self::Increment,
            12 => Self::Subtract,
            13 => Self::Add,
            14 => Self::Pass,
            _ => Self::Nop,
        }
    }
}

/// Datapath register selector for the X and Y ALU ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum RegisterSelect {
    /// Bus data latch.
    Data = 0,
    /// Bus address latch.
    Address = 1,
    /// Source operand temporary.
    Temp = 2,
    /// Stack pointer (`R6`).
    StackPointer = 3,
    /// Program counter (`R7`).
    ProgramCounter = 4,
    /// Register named by `ir[2:0]`.
    DestinationField = 5,
    /// Register named by `ir[8:6]`.
    SourceField = 6,
    /// Port not driven.
    Unused = 7,
}

impl RegisterSelect {
    /// Decodes a 3-bit field. All eight codes are assigned.
    #[must_use]
    pub const fn from_u3(bits: u8) -> Self {
        match bits & 0x7 {
            0 => Self::Data,
            1 => Self::Address,
            2 => Self::Temp,
            3 => Self::StackPointer,
            4 => Self::ProgramCounter,
            5 => Self::DestinationField,
            6 => Self::SourceField,
            _ => Self::Unused,
        }
    }
}

/// Processor status word control, `sp[27:25]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum PswOp {
    /// Load the priority field from `ir[2:0]` (`SPL`).
    SetPriority = 0,
    /// Drive the PSW onto the Y port.
    Store = 1,
    /// Update N, Z and V; keep C.
    UpdateNzv = 2,
    /// Set or clear condition codes named by `ir[3:0]`.
    FromOpcode = 3,
    /// Load the PSW from the X port.
    Load = 4,
    /// Update N and Z; clear V; keep C.
    UpdateNz = 5,
    /// Update N, Z, V and C.
    UpdateNzvc = 6,
    /// No change.
    Hold = 7,
}

impl PswOp {
    /// Decodes a 3-bit field. All eight codes are assigned.
    #[must_use]
    pub const fn from_u3(bits: u8) -> Self {
        match bits & 0x7 {
            0 => Self::SetPriority,
            1 => Self::Store,
            2 => Self::UpdateNzv,
            3 => Self::FromOpcode,
            4 => Self::Load,
            5 => Self::UpdateNz,
            6 => Self::UpdateNzvc,
            _ => Self::Hold,
        }
    }
}

/// Published decode matrix output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ControlVector(u64);

impl ControlVector {
    /// Wraps a published vector. Bits above [`CONTROL_WIDTH`] are dropped.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & CONTROL_MASK)
    }

    /// Raw published vector.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    const fn bit(self, index: u32) -> bool {
        (self.0 >> index) & 1 != 0
    }

    const fn field(self, shift: u32, mask: u64) -> u8 {
        ((self.0 >> shift) & mask) as u8
    }

    /// Next-address field exactly as published, `sp[6:0]`.
    #[must_use]
    pub const fn next_address_field(self) -> u8 {
        self.field(0, NEXT_ADDRESS_MASK)
    }

    /// Microprogram address for the next cycle.
    #[must_use]
    pub const fn next_address(self) -> u8 {
        self.next_address_field() ^ NEXT_ADDRESS_INVERT
    }

    /// End-of-instruction strobe (`sp[7]`, active-low).
    #[must_use]
    pub const fn ends_instruction(self) -> bool {
        !self.bit(END_BIT)
    }

    /// Selected source for the next feedback field (`sp[8]`).
    #[must_use]
    pub const fn feedback_source(self) -> FeedbackSource {
        if self.bit(FEEDBACK_SOURCE_BIT) {
            FeedbackSource::Priority
        } else {
            FeedbackSource::Decode
        }
    }

    /// Instruction register operation.
    #[must_use]
    pub const fn ir_op(self) -> Option<IrOp> {
        IrOp::from_u2(self.field(IR_OP_SHIFT, 0x3))
    }

    /// Bus transaction type.
    #[must_use]
    pub const fn bus_op(self) -> Option<BusOp> {
        BusOp::from_u3(self.field(BUS_OP_SHIFT, 0x7))
    }

    /// Bus transfer width.
    #[must_use]
    pub const fn bus_width(self) -> BusWidth {
        if self.bit(WIDTH_BIT) {
            BusWidth::Word
        } else {
            BusWidth::Byte
        }
    }

    /// ALU function.
    #[must_use]
    pub const fn alu_op(self) -> AluOp {
        AluOp::from_u4(self.field(ALU_SHIFT, 0xF))
    }

    /// X port register selector.
    #[must_use]
    pub const fn x_select(self) -> RegisterSelect {
        RegisterSelect::from_u3(self.field(X_SHIFT, 0x7))
    }

    /// Y port register selector.
    #[must_use]
    pub const fn y_select(self) -> RegisterSelect {
        RegisterSelect::from_u3(self.field(Y_SHIFT, 0x7))
    }

    /// PSW control.
    #[must_use]
    pub const fn psw_op(self) -> PswOp {
        PswOp::from_u3(self.field(PSW_SHIFT, 0x7))
    }

    /// Decode feedback bits, `sp[30:28]`.
    #[must_use]
    pub const fn feedback(self) -> u8 {
        self.field(FEEDBACK_SHIFT, 0x7)
    }

    /// Priority matrix poll strobe (`sp[31]`, active-low).
    #[must_use]
    pub const fn polls_priority(self) -> bool {
        !self.bit(POLL_BIT)
    }

    /// Vector fetch strobe (`sp[32]`, active-low).
    #[must_use]
    pub const fn fetches_vector(self) -> bool {
        !self.bit(VECTOR_FETCH_BIT)
    }

    /// True when no instruction row recognized the `(ir, mr)` pair (`sp[33]`).
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        self.bit(INVALID_BIT)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AluOp, BusOp, BusWidth, ControlVector, FeedbackSource, IrOp, PswOp, RegisterSelect,
        CONTROL_MASK,
    };
    use crate::state::address;

    #[test]
    fn all_ones_vector_is_the_idle_no_match_encoding() {
        let vector = ControlVector::from_bits(u64::MAX);
        assert_eq!(vector.bits(), CONTROL_MASK);
        assert_eq!(vector.next_address(), address::TRAP_REQUEST);
        assert!(!vector.ends_instruction());
        assert_eq!(vector.feedback_source(), FeedbackSource::Priority);
        assert_eq!(vector.ir_op(), Some(IrOp::Hold));
        assert_eq!(vector.bus_op(), Some(BusOp::Idle));
        assert_eq!(vector.bus_width(), BusWidth::Word);
        assert_eq!(vector.alu_op(), AluOp::Nop);
        assert_eq!(vector.x_select(), RegisterSelect::Unused);
        assert_eq!(vector.y_select(), RegisterSelect::Unused);
        assert_eq!(vector.psw_op(), PswOp::Hold);
        assert_eq!(vector.feedback(), 0b111);
        assert!(!vector.polls_priority());
        assert!(!vector.fetches_vector());
        assert!(vector.is_invalid());
    }

    #[test]
    fn fetch_vector_fields_decode() {
        // Row 0 of either decode table at FETCH with continue feedback.
        let vector = ControlVector::from_bits(0x1_9f24_f4ca);
        assert_eq!(vector.next_address(), address::DECODE);
        assert_eq!(vector.ir_op(), Some(IrOp::Load));
        assert_eq!(vector.bus_op(), Some(BusOp::Read));
        assert_eq!(vector.alu_op(), AluOp::IncrementTwo);
        assert_eq!(vector.x_select(), RegisterSelect::ProgramCounter);
        assert_eq!(vector.y_select(), RegisterSelect::ProgramCounter);
        assert_eq!(vector.feedback_source(), FeedbackSource::Decode);
        assert_eq!(vector.feedback(), 0b001);
        assert!(!vector.is_invalid());
        assert!(!vector.ends_instruction());
    }

    #[test]
    fn field_codes_round_trip_through_discriminants() {
        for bits in 0..16_u8 {
            assert_eq!(AluOp::from_u4(bits) as u8, bits);
        }
        for bits in 0..8_u8 {
            assert_eq!(RegisterSelect::from_u3(bits) as u8, bits);
            assert_eq!(PswOp::from_u3(bits) as u8, bits);
            if let Some(op) = BusOp::from_u3(bits) {
                assert_eq!(op as u8, bits);
            }
        }
        assert_eq!(IrOp::from_u2(0b01), None);
        assert_eq!(BusOp::from_u3(0), None);
    }
}
