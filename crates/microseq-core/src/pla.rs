//! Sum-of-products plane shared by the decode and interrupt matrices.
//!
//! The AND plane is a slice of [`Term`] rows. The OR plane lists, for each
//! output bit, the sorted row numbers that drive it. Evaluation collects the
//! asserted rows into a [`TermHits`] set and ORs them per output bit; the
//! result is the internal (uncomplemented) sum vector.

use thiserror::Error;

use crate::term::Term;

/// Largest row count a table may have; OR-plane row numbers are `u8`.
pub const MAX_TERMS: usize = 256;
/// Widest output vector a table may drive.
pub const MAX_OUTPUTS: usize = 64;

/// Set of rows asserted by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TermHits {
    words: [u64; MAX_TERMS / 64],
}

impl TermHits {
    /// Empty hit set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: [0; MAX_TERMS / 64],
        }
    }

    /// Marks `row` as asserted. Rows at or above [`MAX_TERMS`] are ignored.
    pub fn insert(&mut self, row: usize) {
        if let Some(word) = self.words.get_mut(row / 64) {
            *word |= 1_u64 << (row % 64);
        }
    }

    /// Returns true when `row` was asserted.
    #[must_use]
    pub fn contains(&self, row: usize) -> bool {
        self.words
            .get(row / 64)
            .is_some_and(|word| *word & (1_u64 << (row % 64)) != 0)
    }

    /// Number of asserted rows.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|word| word.count_ones()).sum()
    }

    /// Returns true when no row was asserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Asserted rows in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_TERMS).filter(|row| self.contains(*row))
    }
}

/// Static AND and OR plane data for one matrix variant.
#[derive(Debug, Clone, Copy)]
pub struct MatrixTable {
    name: &'static str,
    input_width: u32,
    terms: &'static [Term],
    sums: &'static [&'static [u8]],
}

impl MatrixTable {
    /// Binds a named table over its term rows and per-output row lists.
    #[must_use]
    pub const fn new(
        name: &'static str,
        input_width: u32,
        terms: &'static [Term],
        sums: &'static [&'static [u8]],
    ) -> Self {
        Self {
            name,
            input_width,
            terms,
            sums,
        }
    }

    /// Table name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Width of the input word the terms sample.
    #[must_use]
    pub const fn input_width(&self) -> u32 {
        self.input_width
    }

    /// AND plane rows.
    #[must_use]
    pub const fn terms(&self) -> &'static [Term] {
        self.terms
    }

    /// OR plane row lists, indexed by output bit.
    #[must_use]
    pub const fn sums(&self) -> &'static [&'static [u8]] {
        self.sums
    }

    /// Number of AND plane rows.
    #[must_use]
    pub const fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of output bits.
    #[must_use]
    pub const fn output_width(&self) -> usize {
        self.sums.len()
    }

    /// Evaluates every row against `input`.
    #[must_use]
    pub fn term_hits(&self, input: u32) -> TermHits {
        let mut hits = TermHits::new();
        for (row, term) in self.terms.iter().enumerate() {
            if term.matches(input) {
                hits.insert(row);
            }
        }
        hits
    }

    /// ORs the asserted rows into each output bit.
    #[must_use]
    pub fn sum_of(&self, hits: &TermHits) -> u64 {
        self.sums
            .iter()
            .enumerate()
            .filter(|(_, rows)| rows.iter().any(|row| hits.contains(usize::from(*row))))
            .fold(0, |sum, (bit, _)| sum | (1_u64 << bit))
    }

    /// Internal sum vector for `input`, before output polarity is applied.
    #[must_use]
    pub fn internal_sum(&self, input: u32) -> u64 {
        self.sum_of(&self.term_hits(input))
    }

    /// Checks the table wiring.
    ///
    /// # Errors
    ///
    /// Returns the first [`TableError`] found: too many rows or outputs, a
    /// row caring about positions outside the input width, a row that drives
    /// no output, or an OR list that is unsorted, repeats a row, or names a
    /// missing row.
    pub fn validate(&self) -> Result<(), TableError> {
        let table = self.name;
        if self.terms.len() > MAX_TERMS {
            return Err(TableError::TooManyTerms {
                table,
                count: self.terms.len(),
            });
        }
        if self.sums.len() > MAX_OUTPUTS {
            return Err(TableError::TooManyOutputs {
                table,
                count: self.sums.len(),
            });
        }
        let input_mask = if self.input_width >= 32 {
            u32::MAX
        } else {
            (1 << self.input_width) - 1
        };
        for (row, term) in self.terms.iter().enumerate() {
            if term.care() & !input_mask != 0 {
                return Err(TableError::CareOutsideInput {
                    table,
                    row,
                    width: self.input_width,
                });
            }
        }

        let mut wired = TermHits::new();
        for (bit, rows) in self.sums.iter().enumerate() {
            let mut previous: Option<u8> = None;
            for &row in *rows {
                if usize::from(row) >= self.terms.len() {
                    return Err(TableError::RowOutOfRange { table, bit, row });
                }
                if previous.is_some_and(|prev| prev >= row) {
                    return Err(TableError::UnsortedRows { table, bit, row });
                }
                previous = Some(row);
                wired.insert(usize::from(row));
            }
        }
        if let Some(row) = (0..self.terms.len()).find(|row| !wired.contains(*row)) {
            return Err(TableError::UnwiredTerm { table, row });
        }
        Ok(())
    }
}

/// Table integrity failures reported by [`MatrixTable::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TableError {
    /// More rows than OR-plane row numbers can address.
    #[error("{table}: {count} terms exceed the row limit")]
    TooManyTerms {
        /// Table name.
        table: &'static str,
        /// Row count found.
        count: usize,
    },
    /// More outputs than the sum vector holds.
    #[error("{table}: {count} outputs exceed the sum vector width")]
    TooManyOutputs {
        /// Table name.
        table: &'static str,
        /// Output count found.
        count: usize,
    },
    /// A row cares about a position the input word does not have.
    #[error("{table}: term {row} samples bits outside the {width}-bit input")]
    CareOutsideInput {
        /// Table name.
        table: &'static str,
        /// Offending row.
        row: usize,
        /// Table input width.
        width: u32,
    },
    /// An OR list names a row the AND plane does not have.
    #[error("{table}: output {bit} references missing term {row}")]
    RowOutOfRange {
        /// Table name.
        table: &'static str,
        /// Output bit whose list is broken.
        bit: usize,
        /// Row number found.
        row: u8,
    },
    /// An OR list is not strictly ascending.
    #[error("{table}: output {bit} lists term {row} out of order")]
    UnsortedRows {
        /// Table name.
        table: &'static str,
        /// Output bit whose list is broken.
        bit: usize,
        /// First row out of order.
        row: u8,
    },
    /// A row drives no output bit.
    #[error("{table}: term {row} drives no output")]
    UnwiredTerm {
        /// Table name.
        table: &'static str,
        /// Orphaned row.
        row: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{MatrixTable, TableError, TermHits};
    use crate::term::Term;

    static TERMS: [Term; 3] = [
        Term::from_parts(0b0001, 0b0011),
        Term::from_parts(0b0010, 0b0010),
        Term::from_parts(0b1000, 0b1000),
    ];
    static SUMS: [&[u8]; 3] = [&[0, 2], &[1], &[0, 1]];
    static TABLE: MatrixTable = MatrixTable::new("toy", 4, &TERMS, &SUMS);
    static UNSORTED: [&[u8]; 1] = [&[1, 0, 2]];
    static MISSING: [&[u8]; 1] = [&[0, 1, 2, 3]];
    static ORPHAN: [&[u8]; 1] = [&[0, 1]];

    #[test]
    fn hits_track_asserted_rows() {
        let hits = TABLE.term_hits(0b1001);
        assert_eq!(hits.rows().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(hits.count(), 2);
        assert!(!hits.is_empty());
        assert!(TermHits::new().is_empty());
    }

    #[test]
    fn sum_is_literal_or_of_row_lists() {
        assert_eq!(TABLE.internal_sum(0b0000), 0b000);
        assert_eq!(TABLE.internal_sum(0b0001), 0b101);
        assert_eq!(TABLE.internal_sum(0b0010), 0b110);
        assert_eq!(TABLE.internal_sum(0b1000), 0b001);
    }

    #[test]
    fn hit_set_ignores_rows_past_capacity() {
        let mut hits = TermHits::new();
        hits.insert(255);
        hits.insert(256);
        assert!(hits.contains(255));
        assert!(!hits.contains(256));
        assert_eq!(hits.count(), 1);
    }

    #[test]
    fn toy_table_validates() {
        assert_eq!(TABLE.validate(), Ok(()));
    }

    #[test]
    fn validation_rejects_broken_wiring() {
        let table = MatrixTable::new("unsorted", 4, &TERMS, &UNSORTED);
        assert_eq!(
            table.validate(),
            Err(TableError::UnsortedRows {
                table: "unsorted",
                bit: 0,
                row: 0
            })
        );

        let table = MatrixTable::new("missing", 4, &TERMS, &MISSING);
        assert_eq!(
            table.validate(),
            Err(TableError::RowOutOfRange {
                table: "missing",
                bit: 0,
                row: 3
            })
        );

        let table = MatrixTable::new("orphan", 4, &TERMS, &ORPHAN);
        assert_eq!(
            table.validate(),
            Err(TableError::UnwiredTerm {
                table: "orphan",
                row: 2
            })
        );

        let table = MatrixTable::new("narrow", 3, &TERMS, &SUMS);
        assert_eq!(
            table.validate(),
            Err(TableError::CareOutsideInput {
                table: "narrow",
                row: 2,
                width: 3
            })
        );
    }
}
