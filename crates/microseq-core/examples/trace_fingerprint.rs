//! Deterministic cycle-trace fingerprint used for cross-host comparison.

use microseq_core::{
    CycleInputs, EngineConfig, InstructionTrap, MatrixVariant, MicrocodeEngine, RequestLine,
    RequestVector, TraceEvent, VectorContext,
};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const PROGRAM: [u16; 6] = [0o010001, 0o001404, 0o000233, 0o000007, 0o104401, 0o000000];

fn hash_bytes(hash: &mut u64, bytes: &[u8]) {
    for byte in bytes {
        *hash ^= u64::from(*byte);
        *hash = hash.wrapping_mul(0x1000_0000_01B3);
    }
}

fn hash_event(hash: &mut u64, event: &TraceEvent) {
    match event {
        TraceEvent::CycleStart {
            cycle,
            microstate,
            control,
            ..
        } => {
            hash_bytes(hash, &[0x10]);
            hash_bytes(hash, &cycle.to_le_bytes());
            hash_bytes(hash, &microstate.bits().to_le_bytes());
            hash_bytes(hash, &control.bits().to_le_bytes());
        }
        TraceEvent::InterruptEvaluated { request, output } => {
            hash_bytes(hash, &[0x11]);
            hash_bytes(hash, &request.bits().to_le_bytes());
            hash_bytes(hash, &output.bits().to_le_bytes());
        }
        TraceEvent::VectorSelected { select, address } => {
            hash_bytes(hash, &[0x12, select.as_u4()]);
            hash_bytes(hash, &address.unwrap_or(u16::MAX).to_le_bytes());
        }
        TraceEvent::InvalidOpcode { ir, .. } => {
            hash_bytes(hash, &[0x13]);
            hash_bytes(hash, &ir.to_le_bytes());
        }
        TraceEvent::FaultRaised { fault, .. } => hash_bytes(hash, &[0x14, fault.as_u8()]),
        TraceEvent::MicrostateCommitted {
            next,
            end_of_instruction,
        } => {
            hash_bytes(hash, &[0x15, u8::from(*end_of_instruction)]);
            hash_bytes(hash, &next.bits().to_le_bytes());
        }
    }
}

fn fingerprint(variant: MatrixVariant) -> String {
    let mut engine = MicrocodeEngine::new(EngineConfig {
        variant,
        consistency_checks: false,
        tracing_enabled: true,
        ..EngineConfig::default()
    });
    let vectors = VectorContext {
        base: 0b01,
        vector_register: 0o000060,
        start_address: 0o173000,
    };
    let mut events: Vec<TraceEvent> = Vec::new();

    for (index, &ir) in PROGRAM.iter().enumerate() {
        let mut request = RequestVector::QUIESCENT.with_trap(InstructionTrap::classify(ir));
        if index == 2 {
            request = request.with_line(RequestLine::Irq3, true);
        }
        for _ in 0..12 {
            let inputs = CycleInputs::new(ir).with_request(request).with_vectors(vectors);
            let outcome = engine
                .step_traced(&inputs, &mut events)
                .expect("consistency checks are off");
            if outcome.is_invalid() {
                request = request.with_line(RequestLine::ReservedOpcode, true);
            }
            if outcome.ends_instruction() {
                break;
            }
        }
    }

    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    for event in &events {
        hash_event(&mut hash, event);
    }
    let diag = engine.diag();
    hash_bytes(&mut hash, &diag.cycle_count.to_le_bytes());
    hash_bytes(&mut hash, &diag.instruction_count.to_le_bytes());
    hash_bytes(&mut hash, &engine.snapshot().to_bytes());

    format!("{hash:016x}")
}

fn main() {
    for variant in [MatrixVariant::A, MatrixVariant::G] {
        println!("{variant:?} {}", fingerprint(variant));
    }
}
