//! Decode matrix properties over the full `(ir, mr)` input space.

#![allow(clippy::pedantic, clippy::nursery)]

use microseq_core::state::{address, FEEDBACK_FIRST_CYCLE};
use microseq_core::{
    decode_input, ConditionCodes, DecodeMatrix, MatrixTable, MatrixVariant, Microstate,
    CONTROL_MASK, MICROSTATE_MASK,
};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const VARIANTS: [MatrixVariant; 2] = [MatrixVariant::A, MatrixVariant::G];
const FEEDBACK_SELECT: u64 = 1 << 8;

/// Literal evaluation: every row compared bit by bit, every output bit scanned.
fn reference_sum(table: &MatrixTable, input: u32) -> u64 {
    let asserted: Vec<bool> = table
        .terms()
        .iter()
        .map(|term| {
            (0..table.input_width()).all(|bit| {
                let cared = (term.care() >> bit) & 1 == 1;
                !cared || ((input >> bit) & 1) == ((term.value() >> bit) & 1)
            })
        })
        .collect();
    table
        .sums()
        .iter()
        .enumerate()
        .filter(|(_, rows)| rows.iter().any(|&row| asserted[usize::from(row)]))
        .fold(0, |sum, (bit, _)| sum | (1_u64 << bit))
}

fn decode_state(flags: u8) -> u16 {
    Microstate::compose(address::DECODE, ConditionCodes::from_bits(flags), FEEDBACK_FIRST_CYCLE).bits()
}

proptest! {
    #[test]
    fn published_vector_is_complement_of_internal_sum(
        ir in any::<u16>(),
        mr in 0..=MICROSTATE_MASK,
    ) {
        let a = DecodeMatrix::new(MatrixVariant::A);
        let g = DecodeMatrix::new(MatrixVariant::G);
        prop_assert_eq!(a.evaluate(ir, mr).bits(), !a.internal_sum(ir, mr) & CONTROL_MASK);
        prop_assert_eq!(
            g.evaluate(ir, mr).bits(),
            (!g.internal_sum(ir, mr) & CONTROL_MASK) ^ FEEDBACK_SELECT
        );
    }

    #[test]
    fn variants_differ_only_in_bit_eight_polarity_for_equal_sums(sum in any::<u64>()) {
        let a = DecodeMatrix::new(MatrixVariant::A).publish(sum);
        let g = DecodeMatrix::new(MatrixVariant::G).publish(sum);
        prop_assert_eq!(a.bits() ^ g.bits(), FEEDBACK_SELECT);
    }

    #[test]
    fn bitmask_evaluation_matches_literal_reduction(ir in any::<u16>(), mr in 0..=MICROSTATE_MASK) {
        for variant in VARIANTS {
            let table = DecodeMatrix::new(variant).table();
            let input = decode_input(ir, mr);
            prop_assert_eq!(table.internal_sum(input), reference_sum(table, input));
        }
    }

    #[test]
    fn evaluation_is_deterministic_and_ignores_bit_fifteen(ir in any::<u16>(), mr in any::<u16>()) {
        for variant in VARIANTS {
            let matrix = DecodeMatrix::new(variant);
            let first = matrix.evaluate(ir, mr);
            prop_assert_eq!(first, matrix.evaluate(ir, mr));
            prop_assert_eq!(first, matrix.evaluate(ir, mr & MICROSTATE_MASK));
        }
    }

    #[test]
    fn unmatched_inputs_publish_the_no_match_vector(ir in any::<u16>(), mr in 0..=MICROSTATE_MASK) {
        for variant in VARIANTS {
            let matrix = DecodeMatrix::new(variant);
            if matrix.term_hits(ir, mr).is_empty() {
                prop_assert_eq!(matrix.evaluate(ir, mr), matrix.no_match());
                prop_assert!(matrix.evaluate(ir, mr).is_invalid());
            }
        }
    }

    #[test]
    fn any_opcode_at_fetch_moves_to_decode(ir in any::<u16>()) {
        for variant in VARIANTS {
            let control = DecodeMatrix::new(variant).evaluate(ir, Microstate::RESET.bits());
            prop_assert!(!control.is_invalid());
            prop_assert_eq!(control.next_address(), address::DECODE);
            prop_assert_eq!(control.feedback(), FEEDBACK_FIRST_CYCLE);
        }
    }
}

#[rstest]
#[case::register_move(0o010001, 0, MatrixVariant::A, address::SOURCE, false, false)]
#[case::register_move_g(0o010001, 0, MatrixVariant::G, address::SOURCE, false, false)]
#[case::halt(0o000000, 0, MatrixVariant::A, address::TRAP_REQUEST, false, false)]
#[case::wait(0o000001, 0, MatrixVariant::G, address::WAIT, true, false)]
#[case::branch_taken(0o001404, 0b00100, MatrixVariant::A, address::BRANCH, false, false)]
#[case::branch_not_taken(0o001404, 0, MatrixVariant::G, address::FETCH, true, false)]
#[case::spl_a(0o000233, 0, MatrixVariant::A, address::TRAP_REQUEST, false, true)]
#[case::spl_g(0o000233, 0, MatrixVariant::G, address::FETCH, true, false)]
#[case::unassigned_a(0o000007, 0, MatrixVariant::A, address::TRAP_REQUEST, false, true)]
#[case::unassigned_g(0o000007, 0, MatrixVariant::G, address::TRAP_REQUEST, false, true)]
fn decode_cycle_dispatch(
    #[case] ir: u16,
    #[case] flags: u8,
    #[case] variant: MatrixVariant,
    #[case] next: u8,
    #[case] ends: bool,
    #[case] invalid: bool,
) {
    let control = DecodeMatrix::new(variant).evaluate(ir, decode_state(flags));
    assert_eq!(control.next_address(), next);
    assert_eq!(control.ends_instruction(), ends);
    assert_eq!(control.is_invalid(), invalid);
}

#[test]
fn shipped_tables_pass_integrity_checks() {
    for variant in VARIANTS {
        let table = DecodeMatrix::new(variant).table();
        assert_eq!(table.validate(), Ok(()));
        assert_eq!(table.input_width(), 31);
        assert_eq!(table.output_width(), 34);
    }
}
