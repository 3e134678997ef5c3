//! Interrupt priority matrix G: priority rungs and output wiring.
//!
//! Adds the timer event rung below `IRQ2`. The double error and `EMT` rungs
//! sit at rows 6 and 8.

use super::{rung, InstructionTrap, RequestLine as L};
use crate::term::Term;

/// Number of priority rungs in interrupt matrix G.
pub const TERM_COUNT: usize = 24;

/// Priority rungs in row order: `rung(asserted, negated, trap)`.
pub static TERMS: [Term; TERM_COUNT] = [
    // 0: no sample
    rung(&[], &[L::Sample], None),
    // 1: trap instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Trap),
    ),
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
    // 6: double error
    rung(&[L::Sample, L::DoubleError], &[], None),
    // 7: iot instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Iot),
    ),
    // 8: emt instruction
    rung(
        &[L::Sample],
        &[L::ReservedOpcode, L::DoubleError, L::OddAddress, L::BusTimeout],
        Some(InstructionTrap::Emt),
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
            L::TimerEvent,
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
            L::TimerEvent,
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
            L::TimerEvent,
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
            L::TimerEvent,
        ],
        Some(InstructionTrap::Clear),
    ),
    // 23: timer event
    rung(
        &[L::Sample, L::TimerEvent],
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
];

/// Rungs feeding each bit of the internal sum vector, indexed by output bit.
pub static SUMS: [&[u8]; 11] = [
    /*  0 */ &[2, 3, 5, 6, 8, 9, 11, 12, 15, 17, 21],
    /*  1 */ &[2, 3, 4, 6, 9, 12, 14, 16, 20, 21, 23],
    /*  2 */ &[2, 3, 4, 5, 6, 7, 11, 13, 14, 15, 23],
    /*  3 */ &[1, 3, 4, 5, 6, 7, 8, 11, 12, 20],
    /*  4 */ &[12],
    /*  5 */ &[17],
    /*  6 */ &[2, 3, 6, 20, 21],
    /*  7 */ &[0, 2, 3, 6, 10, 18, 19, 20],
    /*  8 */ &[9, 13, 21, 22],
    /*  9 */ &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 14, 15, 16, 17, 20, 21, 23],
    /* 10 */ &[16],
];
