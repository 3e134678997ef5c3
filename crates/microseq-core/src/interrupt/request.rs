/// Width of the request vector in bits.
pub const REQUEST_WIDTH: u32 = 20;
/// Mask of valid request vector bits.
pub const REQUEST_MASK: u32 = (1 << REQUEST_WIDTH) - 1;
/// Lowest bit of the 3-bit instruction trap code field.
pub const TRAP_CODE_SHIFT: u32 = 17;

const TRAP_CODE_MASK: u32 = 0x7;

/// Single-bit request vector signals, numbered by bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum RequestLine {
    /// Processor is in wait mode.
    WaitMode = 0,
    /// Priority sample strobe (`PLIR`); rungs other than row 0 require it.
    Sample = 1,
    /// PSW trace bit.
    PswTrace = 2,
    /// PSW priority bit; masks the radial and vectored interrupts.
    PswPriority = 3,
    /// PSW bit 10: vector fetch in progress.
    VectorFetch = 4,
    /// PSW bit 11: halt mode.
    HaltMode = 5,
    /// Unrecognized opcode reported by the decode matrix.
    ReservedOpcode = 6,
    /// Double bus error.
    DoubleError = 7,
    /// Odd address on a word access.
    OddAddress = 8,
    /// Bus timeout (`QBTO`).
    BusTimeout = 9,
    /// Radial interrupt 1 (halt request).
    Irq1 = 10,
    /// Radial interrupt 2.
    Irq2 = 11,
    /// Radial interrupt 3.
    Irq3 = 12,
    /// `ACOK` rising edge detector (power restore).
    PowerRestore = 13,
    /// `ACLO` falling edge detector (power fail).
    PowerFail = 14,
    /// Vectored interrupt line, low-active: set means no request.
    VirqIdle = 15,
    /// Timer event; sampled by variant G only.
    TimerEvent = 16,
}

impl RequestLine {
    /// Every line in bit order.
    pub const ALL: [Self; 17] = [
        Self::WaitMode,
        Self::Sample,
        Self::PswTrace,
        Self::PswPriority,
        Self::VectorFetch,
        Self::HaltMode,
        Self::ReservedOpcode,
        Self::DoubleError,
        Self::OddAddress,
        Self::BusTimeout,
        Self::Irq1,
        Self::Irq2,
        Self::Irq3,
        Self::PowerRestore,
        Self::PowerFail,
        Self::VirqIdle,
        Self::TimerEvent,
    ];

    /// Bit position in the request vector.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    const fn mask(self) -> u32 {
        1 << self.bit()
    }
}

/// Trap instruction in flight, carried in `rq[19:17]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum InstructionTrap {
    /// No trap instruction.
    Clear = 0,
    /// `BPT`.
    Bpt = 1,
    /// `IOT`.
    Iot = 2,
    /// `EMT`.
    Emt = 3,
    /// `TRAP`.
    Trap = 4,
    /// `HALT`.
    Halt = 5,
}

impl InstructionTrap {
    /// Field code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a field code; 6 and 7 are malformed.
    #[must_use]
    pub const fn from_u3(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Clear),
            1 => Some(Self::Bpt),
            2 => Some(Self::Iot),
            3 => Some(Self::Emt),
            4 => Some(Self::Trap),
            5 => Some(Self::Halt),
            _ => None,
        }
    }

    /// Trap code a caller reports while `ir` holds this opcode.
    #[must_use]
    pub const fn classify(ir: u16) -> Self {
        match ir {
            0o000000 => Self::Halt,
            0o000003 => Self::Bpt,
            0o000004 => Self::Iot,
            0o104000..=0o104377 => Self::Emt,
            0o104400..=0o104777 => Self::Trap,
            _ => Self::Clear,
        }
    }
}

const PENDING_MASK: u32 = RequestLine::ReservedOpcode.mask()
    | RequestLine::DoubleError.mask()
    | RequestLine::OddAddress.mask()
    | RequestLine::BusTimeout.mask()
    | RequestLine::Irq1.mask()
    | RequestLine::Irq2.mask()
    | RequestLine::Irq3.mask()
    | RequestLine::PowerRestore.mask()
    | RequestLine::PowerFail.mask()
    | RequestLine::TimerEvent.mask();

/// Caller-assembled 20-bit request snapshot for one priority evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RequestVector(u32);

impl Default for RequestVector {
    fn default() -> Self {
        Self::QUIESCENT
    }
}

impl RequestVector {
    /// Sample strobe asserted, vectored line idle, nothing requesting.
    pub const QUIESCENT: Self =
        Self(RequestLine::Sample.mask() | RequestLine::VirqIdle.mask());

    /// Wraps raw bits. Bits above [`REQUEST_WIDTH`] are dropped.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & REQUEST_MASK)
    }

    /// Raw request bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns a copy with `line` driven to `level`.
    #[must_use]
    pub const fn with_line(self, line: RequestLine, level: bool) -> Self {
        if level {
            Self(self.0 | line.mask())
        } else {
            Self(self.0 & !line.mask())
        }
    }

    /// Level of `line`.
    #[must_use]
    pub const fn line(self, line: RequestLine) -> bool {
        self.0 & line.mask() != 0
    }

    /// Returns a copy with the vectored interrupt requested or released.
    #[must_use]
    pub const fn with_vectored_request(self, requested: bool) -> Self {
        self.with_line(RequestLine::VirqIdle, !requested)
    }

    /// Returns a copy carrying `trap` in the trap code field.
    #[must_use]
    pub const fn with_trap(self, trap: InstructionTrap) -> Self {
        Self(
            (self.0 & !(TRAP_CODE_MASK << TRAP_CODE_SHIFT))
                | ((trap.code() as u32) << TRAP_CODE_SHIFT),
        )
    }

    /// Raw trap code field, `rq[19:17]`.
    #[must_use]
    pub const fn trap_code(self) -> u8 {
        ((self.0 >> TRAP_CODE_SHIFT) & TRAP_CODE_MASK) as u8
    }

    /// Decoded trap code; `None` for the malformed codes 6 and 7.
    #[must_use]
    pub const fn trap(self) -> Option<InstructionTrap> {
        InstructionTrap::from_u3(self.trap_code())
    }

    /// True when any condition other than the PSW and strobe inputs is active.
    #[must_use]
    pub const fn has_pending_condition(self) -> bool {
        self.0 & PENDING_MASK != 0
            || !self.line(RequestLine::VirqIdle)
            || self.trap_code() != 0
    }
}
