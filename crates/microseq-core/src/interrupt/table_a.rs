//! Interrupt priority matrix A: priority rungs and output wiring.

use super::{rung, InstructionTrap, RequestLine as L};
use crate::term::Term;

/// Number of priority rungs in interrupt matrix A.
pub const TERM_COUNT: usize = 23;

/// Priority rungs in row order: `rung(asserted, negated, trap)`.
pub static TERMS: [Term; TERM_COUNT] = [
    // 0: no sample
    rung(&[], &[L::Sample], None),
    // 1: double error
    rung(&[L::Sample, L::DoubleError], &[], None),
    // 2: odd address
    rung(&[L::Sample, L::OddAddress], &[L::DoubleError], None),
    // 3: bus timeout during vector fetch
    rung(&[L::Sample, L::VectorFetch, L::BusTimeout], &[L::DoubleError, L::OddAddress], None),
    // 4: reserved opcode
    rung(&[L::Sample, L::ReservedOpcode], &[L::DoubleError, L::OddAddress, L::BusTimeout], None),
    // 5: bpt instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Bpt),
    ),
    // 6: iot instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Iot),
    ),
    // 7: emt instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Emt),
    ),
    // 8: trap instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Trap),
    ),
    // 9: halt instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Halt),
    ),
    // 10: halt mode idle
    rung(
        &[L::Sample, L::HaltMode],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Clear),
    ),
    // 11: trace trap
    rung(
        &[L::Sample, L::PswTrace],
        &[L::HaltMode, L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Clear),
    ),
    // 12: power fail
    rung(
        &[L::Sample, L::PowerFail],
        &[
            L::PswTrace,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 13: halt request
    rung(
        &[L::Sample, L::Irq1],
        &[
            L::PswTrace,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::PowerRestore,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 14: radial irq2
    rung(
        &[L::Sample, L::Irq2],
        &[
            L::PswTrace,
            L::PswPriority,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::Irq1,
            L::PowerRestore,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 15: radial irq3
    rung(
        &[L::Sample, L::Irq3],
        &[
            L::PswTrace,
            L::PswPriority,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::Irq1,
            L::Irq2,
            L::PowerRestore,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 16: vectored irq
    rung(
        &[L::Sample],
        &[
            L::PswTrace,
            L::PswPriority,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::Irq1,
            L::Irq2,
            L::Irq3,
            L::PowerRestore,
            L::PowerFail,
            L::VirqIdle,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 17: power restore
    rung(
        &[L::Sample, L::PowerRestore],
        &[
            L::PswTrace,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 18: priority masked idle
    rung(
        &[L::Sample, L::PswPriority],
        &[
            L::PswTrace,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::Irq1,
            L::PowerRestore,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 19: idle
    rung(
        &[L::Sample, L::VirqIdle],
        &[
            L::WaitMode,
            L::PswTrace,
            L::PswPriority,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::Irq1,
            L::Irq2,
            L::Irq3,
            L::PowerRestore,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 20: bus timeout
    rung(
        &[L::Sample, L::BusTimeout],
        &[L::VectorFetch, L::HaltMode, L::DoubleError, L::OddAddress],
        None,
    ),
    // 21: bus timeout in halt mode
    rung(
        &[L::Sample, L::HaltMode, L::BusTimeout],
        &[L::VectorFetch, L::DoubleError, L::OddAddress],
        None,
    ),
    // 22: wait-mode idle
    rung(
        &[L::WaitMode, L::Sample, L::VirqIdle],
        &[
            L::PswTrace,
            L::PswPriority,
            L::HaltMode,
            L::ReservedOpcode,
            L::DoubleError,
            L::OddAddress,
            L::BusTimeout,
            L::Irq1,
            L::Irq2,
            L::Irq3,
            L::PowerRestore,
            L::PowerFail,
        ],
        Some(InstructionTrap::Clear),
    ),
];

/// Rungs feeding each bit of the internal sum vector, indexed by output bit.
pub static SUMS: [&[u8]; 11] = [
    /*  0 */ &[1, 2, 3, 5, 7, 9, 11, 12, 15, 17, 21],
    /*  1 */ &[1, 2, 3, 4, 9, 12, 14, 16, 20, 21],
    /*  2 */ &[1, 2, 3, 4, 5, 6, 11, 13, 14, 15],
    /*  3 */ &[1, 3, 4, 5, 6, 7, 8, 11, 12, 20],
    /*  4 */ &[12],
    /*  5 */ &[17],
    /*  6 */ &[1, 2, 3, 20, 21],
    /*  7 */ &[0, 1, 2, 3, 10, 18, 19, 20],
    /*  8 */ &[9, 13, 21, 22],
    /*  9 */ &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 16, 17, 20, 21],
    /* 10 */ &[16],
];
