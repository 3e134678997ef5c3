//! Interrupt priority matrix arbitration over the request space.

#![allow(clippy::pedantic, clippy::nursery)]

use microseq_core::{
    InstructionTrap, InterruptMatrix, MatrixVariant, PriorityFeedback, PriorityOutput,
    RequestLine, RequestVector, VectorSelect, PRIORITY_MASK, REQUEST_MASK, TRAP_CODE_SHIFT,
};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const VARIANTS: [MatrixVariant; 2] = [MatrixVariant::A, MatrixVariant::G];

fn request(lines: &[RequestLine]) -> RequestVector {
    lines
        .iter()
        .fold(RequestVector::QUIESCENT, |request, &line| {
            request.with_line(line, true)
        })
}

#[test]
fn exactly_one_rung_asserts_for_every_well_formed_request() {
    for variant in VARIANTS {
        let matrix = InterruptMatrix::new(variant);
        for bits in 0..=REQUEST_MASK {
            let request = RequestVector::from_bits(bits);
            let hits = matrix.term_hits(request).count();
            if request.trap().is_some() {
                assert_eq!(hits, 1, "{variant:?} request {bits:#022b}");
                assert!(!matrix.evaluate(request).is_no_match());
            } else {
                assert!(hits <= 1, "{variant:?} request {bits:#022b}");
            }
        }
    }
}

proptest! {
    #[test]
    fn malformed_trap_codes_never_select_a_trap_instruction(
        low in 0_u32..(1 << TRAP_CODE_SHIFT),
        code in 6_u32..=7,
    ) {
        let request = RequestVector::from_bits(low | (code << TRAP_CODE_SHIFT));
        for variant in VARIANTS {
            let output = InterruptMatrix::new(variant).evaluate(request);
            prop_assert!(!matches!(
                output.vector_select(),
                Some(VectorSelect::Iot | VectorSelect::Emt | VectorSelect::Trap)
            ));
        }
    }

    #[test]
    fn published_output_is_complement_of_internal_sum(bits in 0..=REQUEST_MASK) {
        let request = RequestVector::from_bits(bits);
        for variant in VARIANTS {
            let matrix = InterruptMatrix::new(variant);
            let sum = matrix.internal_sum(request);
            prop_assert_eq!(
                u64::from(matrix.evaluate(request).bits()),
                !sum & u64::from(PRIORITY_MASK)
            );
        }
    }

    #[test]
    fn repeated_evaluation_of_a_request_is_identical(bits in 0..=REQUEST_MASK) {
        let request = RequestVector::from_bits(bits);
        for variant in VARIANTS {
            let matrix = InterruptMatrix::new(variant);
            let first = matrix.evaluate(request);
            prop_assert_eq!(first, matrix.evaluate(request));
            prop_assert_eq!(first, InterruptMatrix::new(variant).evaluate(request));
            prop_assert_eq!(
                matrix.term_hits(request).rows().collect::<Vec<_>>(),
                matrix.term_hits(request).rows().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn variant_a_ignores_the_timer_event_line(bits in 0..=REQUEST_MASK) {
        let matrix = InterruptMatrix::new(MatrixVariant::A);
        let request = RequestVector::from_bits(bits);
        prop_assert_eq!(
            matrix.evaluate(request.with_line(RequestLine::TimerEvent, true)),
            matrix.evaluate(request.with_line(RequestLine::TimerEvent, false))
        );
    }
}

#[rstest]
#[case::double_error_beats_odd_address(
    request(&[RequestLine::DoubleError, RequestLine::OddAddress]),
    Some(VectorSelect::DoubleError),
    PriorityFeedback::Abort
)]
#[case::odd_address_beats_bus_timeout(
    request(&[RequestLine::OddAddress, RequestLine::BusTimeout]),
    Some(VectorSelect::OddAddress),
    PriorityFeedback::Abort
)]
#[case::bus_timeout_during_vector_fetch_is_a_double_error(
    request(&[RequestLine::BusTimeout, RequestLine::VectorFetch]),
    Some(VectorSelect::DoubleError),
    PriorityFeedback::Abort
)]
#[case::bus_timeout_in_halt_mode_halts(
    request(&[RequestLine::BusTimeout, RequestLine::HaltMode]),
    Some(VectorSelect::HaltTrap),
    PriorityFeedback::Halt
)]
#[case::reserved_opcode_beats_radial_interrupt(
    request(&[RequestLine::ReservedOpcode, RequestLine::Irq3]),
    Some(VectorSelect::ReservedOpcode),
    PriorityFeedback::Vector
)]
#[case::halt_instruction_yields_to_double_error(
    request(&[RequestLine::DoubleError]).with_trap(InstructionTrap::Halt),
    Some(VectorSelect::DoubleError),
    PriorityFeedback::Abort
)]
#[case::emt_beats_radial_interrupt(
    request(&[RequestLine::Irq3]).with_trap(InstructionTrap::Emt),
    Some(VectorSelect::Emt),
    PriorityFeedback::Vector
)]
#[case::trace_beats_power_fail(
    request(&[RequestLine::PswTrace, RequestLine::PowerFail]),
    Some(VectorSelect::TraceTrap),
    PriorityFeedback::Vector
)]
#[case::power_fail_beats_power_restore(
    request(&[RequestLine::PowerFail, RequestLine::PowerRestore]),
    Some(VectorSelect::PowerFail),
    PriorityFeedback::Vector
)]
#[case::halt_mode_masks_halt_request(
    request(&[RequestLine::HaltMode, RequestLine::Irq1]),
    None,
    PriorityFeedback::Continue
)]
#[case::priority_bit_masks_radial_interrupts(
    request(&[RequestLine::PswPriority, RequestLine::Irq3]),
    None,
    PriorityFeedback::Continue
)]
#[case::irq2_beats_irq3(
    request(&[RequestLine::Irq2, RequestLine::Irq3]),
    Some(VectorSelect::Event),
    PriorityFeedback::Vector
)]
#[case::radial_beats_vectored(
    request(&[RequestLine::Irq3]).with_vectored_request(true),
    Some(VectorSelect::Irq3),
    PriorityFeedback::Vector
)]
#[case::wait_mode_idles(
    request(&[RequestLine::WaitMode]),
    None,
    PriorityFeedback::Wait
)]
#[case::no_sample_continues(
    RequestVector::QUIESCENT.with_line(RequestLine::Sample, false),
    None,
    PriorityFeedback::Continue
)]
fn arbitration_picks_the_higher_priority_request(
    #[case] request: RequestVector,
    #[case] select: Option<VectorSelect>,
    #[case] feedback: PriorityFeedback,
    #[values(MatrixVariant::A, MatrixVariant::G)] variant: MatrixVariant,
) {
    let output = InterruptMatrix::new(variant).evaluate(request);
    assert_eq!(output.vector_select(), select);
    assert_eq!(output.feedback(), Some(feedback));
}

#[rstest]
#[case::alone(request(&[RequestLine::TimerEvent]))]
#[case::with_irq3(request(&[RequestLine::TimerEvent, RequestLine::Irq3]))]
fn variant_g_services_timer_events(#[case] request: RequestVector) {
    let g = InterruptMatrix::new(MatrixVariant::G).evaluate(request);
    assert_eq!(g.vector_select(), Some(VectorSelect::Event));
    assert_eq!(g.feedback(), Some(PriorityFeedback::Vector));
}

#[test]
fn variant_a_treats_timer_event_as_idle() {
    let a = InterruptMatrix::new(MatrixVariant::A).evaluate(request(&[RequestLine::TimerEvent]));
    assert_eq!(a.vector_select(), None);
    assert_eq!(a.feedback(), Some(PriorityFeedback::Continue));
}

#[test]
fn trap_and_double_error_rungs_swap_rows_between_variants() {
    let trap = RequestVector::QUIESCENT.with_trap(InstructionTrap::Trap);
    let double = request(&[RequestLine::DoubleError]);
    let a = InterruptMatrix::new(MatrixVariant::A);
    let g = InterruptMatrix::new(MatrixVariant::G);

    assert_eq!(a.term_hits(trap).rows().collect::<Vec<_>>(), vec![8]);
    assert_eq!(g.term_hits(trap).rows().collect::<Vec<_>>(), vec![1]);
    assert_eq!(a.term_hits(double).rows().collect::<Vec<_>>(), vec![1]);
    assert_eq!(g.term_hits(double).rows().collect::<Vec<_>>(), vec![6]);
    assert_eq!(a.evaluate(trap), g.evaluate(trap));
    assert_eq!(a.evaluate(double), g.evaluate(double));
}

#[test]
fn rearm_strobes_follow_the_serviced_detector() {
    let matrix = InterruptMatrix::new(MatrixVariant::A);
    let fail = matrix.evaluate(request(&[RequestLine::PowerFail])).rearm();
    assert!(fail.power_fail && !fail.power_restore && !fail.bus_error);
    let restore = matrix.evaluate(request(&[RequestLine::PowerRestore])).rearm();
    assert!(!restore.power_fail && restore.power_restore && !restore.bus_error);
    let odd = matrix.evaluate(request(&[RequestLine::OddAddress])).rearm();
    assert!(odd.bus_error && !odd.power_fail);
    assert_eq!(
        matrix.evaluate(RequestVector::from_bits((7 << TRAP_CODE_SHIFT) | 0b10)),
        PriorityOutput::NO_MATCH
    );
}
