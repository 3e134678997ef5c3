//! Cycle-level model of a PLA-driven microcode sequencer with interrupt
//! priority arbitration.

/// Ternary product terms over the decode input word.
pub mod term;
pub use term::{decode_input, Term, INPUT_MASK, INPUT_WIDTH, IR_WIDTH, MR_WIDTH};

/// Shared sum-of-products plane and table integrity checks.
pub mod pla;
pub use pla::{MatrixTable, TableError, TermHits, MAX_OUTPUTS, MAX_TERMS};

/// Microstate register model and microprogram addresses.
pub mod state;
pub use state::{ConditionCodes, Microstate, MICROSTATE_MASK, MICROSTATE_WIDTH};

/// Typed view of the published control vector.
pub mod control;
pub use control::{
    AluOp, BusOp, BusWidth, ControlVector, FeedbackSource, IrOp, PswOp, RegisterSelect,
    CONTROL_MASK, CONTROL_WIDTH,
};

/// Instruction decode matrix.
pub mod decode;
pub use decode::DecodeMatrix;

/// Interrupt priority matrix and request vector assembly.
pub mod interrupt;
pub use interrupt::{
    InstructionTrap, InterruptMatrix, PriorityFeedback, PriorityOutput, RearmLines, RequestLine,
    RequestVector, PRIORITY_MASK, PRIORITY_WIDTH, REQUEST_MASK, REQUEST_WIDTH, TRAP_CODE_SHIFT,
};

/// Trap and interrupt vector table.
pub mod vector;
pub use vector::{resolve_vector, VectorContext, VectorError, VectorSelect, VectorSource};

/// Fault taxonomy and engine error types.
pub mod fault;
pub use fault::{EngineError, EngineFault, FaultClass, SnapshotError};

/// Engine diagnostics counters.
pub mod diag;
pub use diag::EngineDiag;

/// Public host-facing configuration, tracing and snapshot contract.
pub mod api;
pub use api::{
    EngineConfig, EngineSnapshot, MatrixVariant, SnapshotVersion, TraceEvent, TraceSink,
    DEFAULT_MAX_CYCLES_PER_INSTRUCTION, SNAPSHOT_BYTES,
};

/// Cycle sequencer.
pub mod engine;
pub use engine::{CycleInputs, CycleOutcome, MicrocodeEngine, RunOutcome, SelectedVector};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
