//! Instruction decode matrix: `(ir, mr)` to the 34-bit control vector.
//!
//! Both variants share the evaluation path and differ in their term and
//! wiring tables. The published vector is the complement of the internal sum,
//! except that variant G passes bit 8 through uncomplemented.

mod table_a;
mod table_g;

use crate::{
    api::MatrixVariant,
    control::{ControlVector, CONTROL_MASK},
    pla::{MatrixTable, TermHits},
    term::{decode_input, INPUT_WIDTH},
};

/// Published bits variant G does not complement.
pub const G_UNINVERTED_BITS: u64 = 1 << 8;

static DECODE_A: MatrixTable =
    MatrixTable::new("decode A", INPUT_WIDTH, &table_a::TERMS, &table_a::SUMS);
static DECODE_G: MatrixTable =
    MatrixTable::new("decode G", INPUT_WIDTH, &table_g::TERMS, &table_g::SUMS);

/// Decode matrix bound to one variant's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeMatrix {
    variant: MatrixVariant,
}

impl DecodeMatrix {
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

    /// Term and wiring tables of the selected variant.
    #[must_use]
    pub fn table(&self) -> &'static MatrixTable {
        match self.variant {
            MatrixVariant::A => &DECODE_A,
            MatrixVariant::G => &DECODE_G,
        }
    }

    /// Rows asserted by `(ir, mr)`.
    #[must_use]
    pub fn term_hits(&self, ir: u16, mr: u16) -> TermHits {
        self.table().term_hits(decode_input(ir, mr))
    }

    /// Internal sum vector for `(ir, mr)`, before output polarity.
    #[must_use]
    pub fn internal_sum(&self, ir: u16, mr: u16) -> u64 {
        self.table().internal_sum(decode_input(ir, mr))
    }

    /// Applies the variant's output polarity to an internal sum.
    #[must_use]
    pub const fn publish(&self, sum: u64) -> ControlVector {
        let published = !sum & CONTROL_MASK;
        ControlVector::from_bits(match self.variant {
            MatrixVariant::A => published,
            MatrixVariant::G => published ^ G_UNINVERTED_BITS,
        })
    }

    /// Published control vector for `(ir, mr)`. Total over every input.
    #[must_use]
    pub fn evaluate(&self, ir: u16, mr: u16) -> ControlVector {
        self.publish(self.internal_sum(ir, mr))
    }

    /// Vector published when no row matches.
    #[must_use]
    pub const fn no_match(&self) -> ControlVector {
        self.publish(0)
    }
}
