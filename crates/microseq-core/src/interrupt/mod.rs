//! Interrupt priority matrix: 20-bit request snapshot to the 11-bit
//! vector-select, rearm and feedback output.
//!
//! Each rung is a conjunction over the request lines; the negated lines of a
//! rung are the higher-priority conditions that exclude it. For a well-formed
//! request exactly one rung asserts. The all-ones output means no rung
//! matched.

mod request;
mod table_a;
mod table_g;

pub use request::{
    InstructionTrap, RequestLine, RequestVector, REQUEST_MASK, REQUEST_WIDTH, TRAP_CODE_SHIFT,
};

use crate::{
    api::MatrixVariant,
    pla::{MatrixTable, TermHits},
    term::Term,
    vector::VectorSelect,
};

/// Width of the priority output in bits.
pub const PRIORITY_WIDTH: u32 = 11;
/// Mask of valid priority output bits.
pub const PRIORITY_MASK: u16 = (1 << PRIORITY_WIDTH) - 1;

const VECTOR_SELECT_MASK: u16 = 0xF;
const REARM_POWER_FAIL_BIT: u32 = 4;
const REARM_POWER_RESTORE_BIT: u32 = 5;
const REARM_BUS_ERROR_BIT: u32 = 6;
const FEEDBACK_SHIFT: u32 = 7;
const INTERRUPT_ACK_BIT: u32 = 10;

static PRIORITY_A: MatrixTable =
    MatrixTable::new("priority A", REQUEST_WIDTH, &table_a::TERMS, &table_a::SUMS);
static PRIORITY_G: MatrixTable =
    MatrixTable::new("priority G", REQUEST_WIDTH, &table_g::TERMS, &table_g::SUMS);

const fn rung(
    asserted: &[RequestLine],
    negated: &[RequestLine],
    trap: Option<InstructionTrap>,
) -> Term {
    let mut term = Term::ANY;
    let mut index = 0;
    while index < asserted.len() {
        term = term.with_bit(asserted[index].bit(), true);
        index += 1;
    }
    index = 0;
    while index < negated.len() {
        term = term.with_bit(negated[index].bit(), false);
        index += 1;
    }
    if let Some(trap) = trap {
        term = term.with_field(TRAP_CODE_SHIFT, 3, trap.code() as u32);
    }
    term
}

/// Microcode feedback published in `sp[9:7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum PriorityFeedback {
    /// Enter vector service in halt mode.
    Halt = 0b001,
    /// Abort the bus cycle and enter vector service.
    Abort = 0b010,
    /// Enter vector service.
    Vector = 0b011,
    /// Stay in or enter the wait loop.
    Wait = 0b101,
    /// Nothing to service.
    Continue = 0b110,
    /// No rung matched.
    NoMatch = 0b111,
}

impl PriorityFeedback {
    /// Field code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a 3-bit field; `0b000` and `0b100` are unassigned.
    #[must_use]
    pub const fn from_u3(bits: u8) -> Option<Self> {
        match bits {
            0b001 => Some(Self::Halt),
            0b010 => Some(Self::Abort),
            0b011 => Some(Self::Vector),
            0b101 => Some(Self::Wait),
            0b110 => Some(Self::Continue),
            0b111 => Some(Self::NoMatch),
            _ => None,
        }
    }
}

/// Detector rearm strobes decoded from the active-low output bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct RearmLines {
    /// Rearm the `ACLO` falling-edge detector.
    pub power_fail: bool,
    /// Rearm the `ACOK` rising-edge detector.
    pub power_restore: bool,
    /// Rearm the bus timeout, odd address and double error detectors.
    pub bus_error: bool,
}

/// Published priority matrix output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PriorityOutput(u16);

impl PriorityOutput {
    /// Output published when no rung matches.
    pub const NO_MATCH: Self = Self(PRIORITY_MASK);

    /// Wraps a published output. Bits above [`PRIORITY_WIDTH`] are dropped.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & PRIORITY_MASK)
    }

    /// Raw published output.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    const fn low(self, index: u32) -> bool {
        (self.0 >> index) & 1 == 0
    }

    /// Raw vector selector nibble, `sp[3:0]`.
    #[must_use]
    pub const fn vector_select_bits(self) -> u8 {
        (self.0 & VECTOR_SELECT_MASK) as u8
    }

    /// Selected vector class; `None` for the idle code `0b1111`.
    #[must_use]
    pub const fn vector_select(self) -> Option<VectorSelect> {
        VectorSelect::from_u4(self.vector_select_bits())
    }

    /// Detector rearm strobes.
    #[must_use]
    pub const fn rearm(self) -> RearmLines {
        RearmLines {
            power_fail: self.low(REARM_POWER_FAIL_BIT),
            power_restore: self.low(REARM_POWER_RESTORE_BIT),
            bus_error: self.low(REARM_BUS_ERROR_BIT),
        }
    }

    /// Raw feedback field, `sp[9:7]`.
    #[must_use]
    pub const fn feedback_bits(self) -> u8 {
        ((self.0 >> FEEDBACK_SHIFT) & 0x7) as u8
    }

    /// Decoded feedback field.
    #[must_use]
    pub const fn feedback(self) -> Option<PriorityFeedback> {
        PriorityFeedback::from_u3(self.feedback_bits())
    }

    /// Interrupt acknowledge strobe (`sp[10]`, active-low).
    #[must_use]
    pub const fn acknowledges_interrupt(self) -> bool {
        self.low(INTERRUPT_ACK_BIT)
    }

    /// True for the all-ones sentinel.
    #[must_use]
    pub const fn is_no_match(self) -> bool {
        self.0 == PRIORITY_MASK
    }
}

/// Interrupt priority matrix bound to one variant's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterruptMatrix {
    variant: MatrixVariant,
}

impl InterruptMatrix {
    /// Selects a variant.
    #[must_use]
    pub const fn new(variant: MatrixVariant) -> Self {
        Self { variant }
    }

    /// Selected variant.
    #[must_use]
    pub const fn variant(&self) -> MatrixVariant {
        self.variant
    }

    /// Rung and wiring tables of the selected variant.
    #[must_use]
    pub fn table(&self) -> &'static MatrixTable {
        match self.variant {
            MatrixVariant::A => &PRIORITY_A,
            MatrixVariant::G => &PRIORITY_G,
        }
    }

    /// Rungs asserted by `request`.
    #[must_use]
    pub fn term_hits(&self, request: RequestVector) -> TermHits {
        self.table().term_hits(request.bits())
    }

    /// Internal sum vector for `request`, before output polarity.
    #[must_use]
    pub fn internal_sum(&self, request: RequestVector) -> u64 {
        self.table().internal_sum(request.bits())
    }

    /// Applies the active-low output polarity to an internal sum.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn publish(&self, sum: u64) -> PriorityOutput {
        PriorityOutput::from_bits(!(sum as u16))
    }

    /// Published output for `request`. Total over every input.
    #[must_use]
    pub fn evaluate(&self, request: RequestVector) -> PriorityOutput {
        self.publish(self.internal_sum(request))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        InterruptMatrix, PriorityFeedback, PriorityOutput, RearmLines, RequestLine, RequestVector,
    };
    use crate::{api::MatrixVariant, vector::VectorSelect};

    #[test]
    fn tables_validate() {
        for (variant, rows) in [(MatrixVariant::A, 23), (MatrixVariant::G, 24)] {
            let table = InterruptMatrix::new(variant).table();
            assert_eq!(table.validate(), Ok(()));
            assert_eq!(table.output_width(), 11);
            assert_eq!(table.term_count(), rows);
        }
    }

    #[test]
    fn bus_timeout_asserts_row_twenty_only() {
        let matrix = InterruptMatrix::new(MatrixVariant::A);
        let request = RequestVector::QUIESCENT.with_line(RequestLine::BusTimeout, true);
        assert_eq!(matrix.term_hits(request).rows().collect::<Vec<_>>(), vec![20]);
        let output = matrix.evaluate(request);
        assert_eq!(output.bits(), 0b101_0011_0101);
        assert_eq!(output.vector_select(), Some(VectorSelect::QbusTimeout));
        assert_eq!(output.feedback(), Some(PriorityFeedback::Abort));
        assert_eq!(
            output.rearm(),
            RearmLines {
                bus_error: true,
                ..RearmLines::default()
            }
        );
        assert!(!output.acknowledges_interrupt());
    }

    #[test]
    fn power_restore_asserts_row_seventeen() {
        let matrix = InterruptMatrix::new(MatrixVariant::A);
        let request = RequestVector::QUIESCENT.with_line(RequestLine::PowerRestore, true);
        assert_eq!(matrix.term_hits(request).rows().collect::<Vec<_>>(), vec![17]);
        let output = matrix.evaluate(request);
        assert_eq!(output.bits(), 0b101_1101_1110);
        assert_eq!(output.vector_select(), Some(VectorSelect::Start));
        assert!(output.rearm().power_restore);
        assert!(!output.rearm().bus_error);
    }

    #[test]
    fn quiescent_request_continues() {
        for variant in [MatrixVariant::A, MatrixVariant::G] {
            let output = InterruptMatrix::new(variant).evaluate(RequestVector::QUIESCENT);
            assert_eq!(output.bits(), 0b111_0111_1111);
            assert_eq!(output.vector_select(), None);
            assert_eq!(output.feedback(), Some(PriorityFeedback::Continue));
            assert_eq!(output.rearm(), RearmLines::default());
        }
    }

    #[test]
    fn malformed_trap_code_yields_sentinel() {
        let request = RequestVector::from_bits(RequestVector::QUIESCENT.bits() | (6 << 17));
        for variant in [MatrixVariant::A, MatrixVariant::G] {
            let output = InterruptMatrix::new(variant).evaluate(request);
            assert_eq!(output, PriorityOutput::NO_MATCH);
            assert!(output.is_no_match());
            assert_eq!(output.feedback(), Some(PriorityFeedback::NoMatch));
        }
    }

    #[test]
    fn vectored_interrupt_acknowledges() {
        let request = RequestVector::QUIESCENT.with_vectored_request(true);
        let output = InterruptMatrix::new(MatrixVariant::A).evaluate(request);
        assert!(output.acknowledges_interrupt());
        assert_eq!(output.vector_select(), Some(VectorSelect::Vectored));
    }
}
