#![no_main]

use libfuzzer_sys::fuzz_target;
use microseq_core::{
    ConditionCodes, CycleInputs, DecodeMatrix, EngineConfig, EngineSnapshot, InterruptMatrix,
    MatrixVariant, MicrocodeEngine, Microstate, RequestVector, VectorContext, CONTROL_MASK,
    PRIORITY_MASK,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }

    let ir = u16::from_le_bytes([data[0], data[1]]);
    let mr = u16::from_le_bytes([data[2], data[3]]);
    let raw_request = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
    let request = RequestVector::from_bits(raw_request);
    let variant = if data[8] & 1 == 0 {
        MatrixVariant::A
    } else {
        MatrixVariant::G
    };

    let control = DecodeMatrix::new(variant).evaluate(ir, mr);
    assert_eq!(control.bits() & !CONTROL_MASK, 0);
    let output = InterruptMatrix::new(variant).evaluate(request);
    assert_eq!(output.bits() & !PRIORITY_MASK, 0);

    let _ = EngineSnapshot::from_bytes(&data[..4]);

    let Some(start) = Microstate::from_bits(mr) else {
        return;
    };
    let mut engine = MicrocodeEngine::with_microstate(
        EngineConfig {
            variant,
            consistency_checks: data[8] & 2 != 0,
            ..EngineConfig::default()
        },
        start,
    );
    let inputs = CycleInputs::new(ir)
        .with_flags(ConditionCodes::from_bits(data[8] >> 3))
        .with_request(request)
        .with_vectors(VectorContext {
            base: data[8] >> 6,
            ..VectorContext::default()
        });
    for _ in 0..data.len().min(64) {
        let before = engine.microstate();
        if engine.step(&inputs).is_err() {
            assert_eq!(engine.microstate(), before);
        }
    }
});
