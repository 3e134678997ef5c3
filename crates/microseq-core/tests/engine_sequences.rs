//! Multi-cycle instruction walks through the sequencer for both table
//! variants.

#![allow(clippy::pedantic, clippy::nursery, clippy::too_many_lines)]

use microseq_core::state::{
    address, FEEDBACK_FIRST_CYCLE, FEEDBACK_MEMORY_DESTINATION, FEEDBACK_REGISTER_DESTINATION,
};
use microseq_core::{
    ConditionCodes, CycleInputs, EngineConfig, EngineError, EngineFault, EngineSnapshot,
    InstructionTrap, MatrixVariant, MicrocodeEngine, Microstate, PriorityFeedback,
    PriorityOutput, RequestLine, RequestVector, TraceEvent, VectorContext, VectorSelect,
};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const MOV_R0_R1: u16 = 0o010001;
const MOV_R0_AT_R1: u16 = 0o010011;
const HALT: u16 = 0o000000;
const WAIT: u16 = 0o000001;
const UNASSIGNED: u16 = 0o000007;
const SPL_3: u16 = 0o000233;
const BEQ: u16 = 0o001404;

fn engine(variant: MatrixVariant) -> MicrocodeEngine {
    MicrocodeEngine::new(EngineConfig {
        variant,
        consistency_checks: true,
        tracing_enabled: true,
        ..EngineConfig::default()
    })
}

/// Steps `count` cycles and returns `(next address, next feedback, end strobe)`.
fn walk(engine: &mut MicrocodeEngine, inputs: &CycleInputs, count: usize) -> Vec<(u8, u8, bool)> {
    (0..count)
        .map(|_| {
            let outcome = engine.step(inputs).expect("well-formed request");
            (
                outcome.next.address(),
                outcome.next.feedback(),
                outcome.ends_instruction(),
            )
        })
        .collect()
}

#[rstest]
fn register_move_completes_in_five_cycles(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let mut engine = engine(variant);
    let steps = walk(&mut engine, &CycleInputs::new(MOV_R0_R1), 5);
    assert_eq!(
        steps,
        vec![
            (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
            (address::SOURCE, 0b111, false),
            (address::DESTINATION, 0b111, false),
            (address::EXECUTE, FEEDBACK_REGISTER_DESTINATION, false),
            (address::FETCH, 0b110, true),
        ]
    );
}

#[rstest]
fn memory_destination_move_reads_then_writes_back(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let mut engine = engine(variant);
    let steps = walk(&mut engine, &CycleInputs::new(MOV_R0_AT_R1), 7);
    assert_eq!(
        steps,
        vec![
            (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
            (address::SOURCE, 0b111, false),
            (address::DESTINATION, 0b111, false),
            (address::DESTINATION_READ, 0b111, false),
            (address::EXECUTE, FEEDBACK_MEMORY_DESTINATION, false),
            (address::DESTINATION_WRITE, 0b111, false),
            (address::FETCH, 0b110, true),
        ]
    );
    assert_eq!(engine.diag().instruction_count, 1);
}

#[rstest]
fn pending_irq3_enters_trap_service_at_instruction_boundary(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let start = Microstate::compose(
        address::EXECUTE,
        ConditionCodes::default(),
        FEEDBACK_REGISTER_DESTINATION,
    );
    let mut engine = MicrocodeEngine::with_microstate(
        EngineConfig {
            variant,
            consistency_checks: true,
            ..EngineConfig::default()
        },
        start,
    );
    let inputs = CycleInputs::new(MOV_R0_R1)
        .with_request(RequestVector::QUIESCENT.with_line(RequestLine::Irq3, true));

    let expected = [
        (address::FETCH, 0b011, true),
        (address::TRAP_ENTRY, 0b111, false),
        (address::TRAP_STAGE_PSW, 0b111, false),
        (address::TRAP_PUSH_PSW, 0b111, false),
        (address::TRAP_ADDRESS_PC, 0b111, false),
        (address::TRAP_STAGE_PC, 0b111, false),
        (address::TRAP_PUSH_PC, 0b111, false),
        (address::TRAP_VECTOR_PC, 0b111, false),
        (address::TRAP_VECTOR_PSW, 0b111, false),
        (address::TRAP_LOAD_PSW, 0b111, false),
        (address::FETCH, 0b011, true),
    ];
    for (next_address, feedback, ends) in expected {
        let outcome = engine.step(&inputs).expect("well-formed request");
        let priority = outcome.priority.expect("pending request is evaluated");
        assert_eq!(priority.bits(), 0b101_1111_1010);
        assert_eq!(priority.feedback(), Some(PriorityFeedback::Vector));
        assert_eq!(outcome.vector_address(), Ok(Some(0o000270)));
        assert_eq!(outcome.next.address(), next_address);
        assert_eq!(outcome.next.feedback(), feedback);
        assert_eq!(outcome.ends_instruction(), ends);
    }
    assert_eq!(engine.diag().instruction_count, 2);
}

#[rstest]
fn halt_instruction_requests_halt_trap(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let mut engine = engine(variant);
    let inputs = CycleInputs::new(HALT)
        .with_request(RequestVector::QUIESCENT.with_trap(InstructionTrap::classify(HALT)));
    let steps = walk(&mut engine, &inputs, 4);
    assert_eq!(
        steps,
        vec![
            (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
            (address::TRAP_REQUEST, 0b001, false),
            (address::FETCH, 0b001, true),
            (address::TRAP_ENTRY, 0b111, false),
        ]
    );
    let outcome = engine.step(&inputs).expect("well-formed request");
    let priority = outcome.priority.expect("trap code is pending");
    assert_eq!(priority.bits(), 0b100_1111_1100);
    assert_eq!(priority.vector_select(), Some(VectorSelect::HaltTrap));
    assert_eq!(priority.feedback(), Some(PriorityFeedback::Halt));
}

#[rstest]
#[case::halt(HALT)]
#[case::bpt(0o000003)]
#[case::iot(0o000004)]
#[case::emt(0o104000)]
#[case::trap(0o104400)]
fn trap_instructions_end_once_before_trap_entry(
    #[case] ir: u16,
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let mut engine = engine(variant);
    let inputs = CycleInputs::new(ir)
        .with_request(RequestVector::QUIESCENT.with_trap(InstructionTrap::classify(ir)));
    let mut ends = Vec::new();
    while engine.microstate().address() != address::TRAP_ENTRY {
        assert!(ends.len() < 8, "{ir:#o} never reached trap entry");
        let outcome = engine.step(&inputs).expect("well-formed request");
        ends.push(outcome.ends_instruction());
    }
    assert_eq!(ends, vec![false, false, true, false]);
    assert_eq!(engine.diag().instruction_count, 1);
}

#[rstest]
fn run_on_halt_stops_after_trap_request_poll(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let mut engine = engine(variant);
    let inputs = CycleInputs::new(HALT)
        .with_request(RequestVector::QUIESCENT.with_trap(InstructionTrap::classify(HALT)));
    let run = engine.run(&inputs).expect("halt ends");
    assert_eq!(run.cycles, 3);
    assert_eq!(run.last.microstate.address(), address::TRAP_REQUEST);
    assert_eq!(run.last.next.address(), address::FETCH);
    assert_eq!(
        run.last.priority.and_then(PriorityOutput::vector_select),
        Some(VectorSelect::HaltTrap)
    );
    assert_eq!(engine.diag().instruction_count, 1);
}

#[rstest]
#[case::variant_a(MatrixVariant::A, 0b110)]
#[case::variant_g(MatrixVariant::G, 0b111)]
fn unassigned_opcode_reaches_reserved_instruction_trap(
    #[case] variant: MatrixVariant,
    #[case] trap_request_feedback: u8,
) {
    let mut engine = engine(variant);
    let inputs = CycleInputs::new(UNASSIGNED);

    engine.step(&inputs).expect("fetch");
    let decode = engine.step(&inputs).expect("decode");
    assert!(decode.is_invalid());
    assert_eq!(decode.priority, None);
    assert_eq!(decode.next.address(), address::TRAP_REQUEST);
    assert_eq!(decode.next.feedback(), trap_request_feedback);
    assert_eq!(engine.diag().invalid_opcode_count, 1);

    let reported = inputs.with_request(
        RequestVector::QUIESCENT.with_line(RequestLine::ReservedOpcode, true),
    );
    let poll = engine.step(&reported).expect("reserved opcode rung");
    assert_eq!(
        poll.priority.map(PriorityOutput::bits),
        Some(0b101_1111_0001)
    );
    assert_eq!(poll.vector_address(), Ok(Some(0o000004)));
    assert_eq!(poll.next.address(), address::FETCH);
    assert_eq!(poll.next.feedback(), 0b011);
    assert!(poll.ends_instruction());

    let entry = engine.step(&reported).expect("trap entry");
    assert_eq!(entry.next.address(), address::TRAP_ENTRY);
}

#[test]
fn spl_is_reserved_in_variant_a_and_ends_in_variant_g() {
    let inputs = CycleInputs::new(SPL_3);

    let mut a = engine(MatrixVariant::A);
    let steps = walk(&mut a, &inputs, 2);
    assert_eq!(steps[1], (address::TRAP_REQUEST, 0b110, false));
    assert_eq!(a.diag().invalid_opcode_count, 1);

    let mut g = engine(MatrixVariant::G);
    let steps = walk(&mut g, &inputs, 2);
    assert_eq!(steps[1], (address::FETCH, 0b110, true));
    assert_eq!(g.diag().invalid_opcode_count, 0);
}

#[rstest]
fn branch_follows_sampled_zero_flag(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let zero = ConditionCodes {
        zero: true,
        ..ConditionCodes::default()
    };
    let mut taken = engine(variant);
    let steps = walk(&mut taken, &CycleInputs::new(BEQ).with_flags(zero), 3);
    assert_eq!(
        steps,
        vec![
            (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
            (address::BRANCH, 0b111, false),
            (address::FETCH, 0b110, true),
        ]
    );

    let mut not_taken = engine(variant);
    let steps = walk(&mut not_taken, &CycleInputs::new(BEQ), 2);
    assert_eq!(
        steps,
        vec![
            (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
            (address::FETCH, 0b110, true),
        ]
    );
}

#[rstest]
fn wait_loops_until_a_request_arrives(
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let mut engine = engine(variant);
    let inputs = CycleInputs::new(WAIT)
        .with_request(RequestVector::QUIESCENT.with_line(RequestLine::WaitMode, true));
    let steps = walk(&mut engine, &inputs, 4);
    assert_eq!(
        steps,
        vec![
            (address::DECODE, FEEDBACK_FIRST_CYCLE, false),
            (address::WAIT, 0b101, true),
            (address::WAIT, 0b101, false),
            (address::WAIT, 0b101, false),
        ]
    );
    let outcome = engine.step(&inputs).expect("wait loop");
    assert_eq!(
        outcome.priority.map(PriorityOutput::bits),
        Some(0b110_1111_1111)
    );
}

#[test]
fn run_executes_whole_instructions() {
    let mut engine = engine(MatrixVariant::A);
    let inputs = CycleInputs::new(MOV_R0_R1);
    let first = engine.run(&inputs).expect("register move ends");
    let second = engine.run(&inputs).expect("register move ends");
    assert_eq!(first.cycles, 5);
    assert_eq!(second, first);
    assert_eq!(engine.diag().instruction_count, 2);
    assert_eq!(engine.diag().cycle_count, 10);
}

#[test]
fn wait_loop_exceeds_run_bound() {
    let mut engine = MicrocodeEngine::new(EngineConfig {
        max_cycles_per_instruction: 8,
        ..EngineConfig::default()
    });
    let inputs = CycleInputs::new(WAIT)
        .with_request(RequestVector::QUIESCENT.with_line(RequestLine::WaitMode, true));
    assert_eq!(engine.run(&inputs).map(|run| run.cycles), Ok(2));
    assert_eq!(
        engine.run(&inputs),
        Err(EngineError::CycleBoundExceeded {
            ir: WAIT,
            cycles: 8
        })
    );
    assert_eq!(engine.diag().fault_count_budget, 1);
}

#[test]
fn sentinel_leaves_register_uncommitted() {
    let mut engine = engine(MatrixVariant::G);
    engine.step(&CycleInputs::new(MOV_R0_R1)).expect("fetch");
    let before = engine.microstate();

    let malformed = RequestVector::from_bits(RequestVector::QUIESCENT.bits() | (7 << 17));
    let error = engine
        .step(&CycleInputs::new(MOV_R0_R1).with_request(malformed))
        .expect_err("no rung matches");
    assert_eq!(
        error,
        EngineError::NoInterruptTermMatched {
            request: malformed,
            microstate: before,
        }
    );
    assert_eq!(engine.microstate(), before);
    assert_eq!(engine.diag().last_fault, Some(EngineFault::NoInterruptTermMatched));
}

#[test]
fn snapshot_bytes_restore_mid_instruction() {
    let mut engine = engine(MatrixVariant::A);
    let inputs = CycleInputs::new(MOV_R0_R1);
    walk(&mut engine, &inputs, 2);
    let bytes = engine.snapshot().to_bytes();
    let reference = walk(&mut engine, &inputs, 3);

    let mut restored = MicrocodeEngine::default();
    restored.restore_from_bytes(&bytes).expect("valid snapshot");
    assert_eq!(
        EngineSnapshot::from_bytes(&bytes).map(|snapshot| snapshot.microstate),
        Ok(restored.microstate())
    );
    assert_eq!(walk(&mut restored, &inputs, 3), reference);
}

#[test]
fn trace_events_follow_cycle_order() {
    let mut engine = engine(MatrixVariant::A);
    let inputs = CycleInputs::new(MOV_R0_R1)
        .with_request(RequestVector::QUIESCENT.with_vectored_request(true))
        .with_vectors(VectorContext {
            vector_register: 0o000060,
            ..VectorContext::default()
        });
    let mut events: Vec<TraceEvent> = Vec::new();
    let outcome = engine.step_traced(&inputs, &mut events).expect("vectored");
    assert_eq!(outcome.vector_address(), Ok(Some(0o000060)));
    assert!(outcome.priority.is_some_and(PriorityOutput::acknowledges_interrupt));

    let kinds: Vec<&str> = events
        .iter()
        .map(|event| match event {
            TraceEvent::CycleStart { .. } => "cycle",
            TraceEvent::InterruptEvaluated { .. } => "interrupt",
            TraceEvent::VectorSelected { .. } => "vector",
            TraceEvent::InvalidOpcode { .. } => "invalid",
            TraceEvent::FaultRaised { .. } => "fault",
            TraceEvent::MicrostateCommitted { .. } => "commit",
        })
        .collect();
    assert_eq!(kinds, vec!["cycle", "interrupt", "vector", "commit"]);
}
