//! Masked-equality product terms over a matrix input word.
//!
//! A term stores the positions it cares about and the level each of those
//! positions must have. Every other position is a don't-care and matches any
//! sampled level, including positions above the width of the field a table
//! was written against.

/// Width of the decode matrix input word (`ir[15:0]` then `mr[14:0]`).
pub const INPUT_WIDTH: u32 = 31;
/// Mask of valid decode input word bits.
pub const INPUT_MASK: u32 = (1 << INPUT_WIDTH) - 1;
/// Width of the opcode half of the decode input word.
pub const IR_WIDTH: u32 = 16;
/// Width of the microstate half of the decode input word.
pub const MR_WIDTH: u32 = 15;

const MR_MASK: u32 = (1 << MR_WIDTH) - 1;

/// Concatenates the opcode and microstate into the decode input word.
///
/// Bit 15 of `mr` is not part of the microstate register and is dropped.
#[must_use]
pub const fn decode_input(ir: u16, mr: u16) -> u32 {
    ((ir as u32) << MR_WIDTH) | (mr as u32 & MR_MASK)
}

/// One row of a matrix AND plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Term {
    value: u32,
    care: u32,
}

impl Term {
    /// Term with no cared positions; matches every input.
    pub const ANY: Self = Self { value: 0, care: 0 };

    /// Builds a term from a required value and a care mask.
    ///
    /// Value bits outside the care mask and bits above [`INPUT_WIDTH`] are
    /// discarded.
    #[must_use]
    pub const fn from_parts(value: u32, care: u32) -> Self {
        let care = care & INPUT_MASK;
        Self {
            value: value & care,
            care,
        }
    }

    /// Builds a decode term from an opcode pattern and a microstate pattern.
    ///
    /// Patterns use `0`, `1` and `x` (don't-care), most significant position
    /// first. Spaces and underscores are ignored.
    ///
    /// # Panics
    ///
    /// Panics when a pattern contains another character or does not have
    /// exactly [`IR_WIDTH`] / [`MR_WIDTH`] positions. Tables build their
    /// terms in constant context, so a malformed row fails compilation.
    #[must_use]
    pub const fn pattern(ir: &str, mr: &str) -> Self {
        let (ir_value, ir_care, ir_len) = parse_positions(ir);
        let (mr_value, mr_care, mr_len) = parse_positions(mr);
        assert!(ir_len == IR_WIDTH, "opcode pattern must have 16 positions");
        assert!(mr_len == MR_WIDTH, "microstate pattern must have 15 positions");
        Self::from_parts(
            (ir_value << MR_WIDTH) | mr_value,
            (ir_care << MR_WIDTH) | mr_care,
        )
    }

    /// Returns this term with one more cared position.
    #[must_use]
    pub const fn with_bit(self, bit: u32, level: bool) -> Self {
        let mask = 1 << bit;
        let value = if level {
            self.value | mask
        } else {
            self.value & !mask
        };
        Self::from_parts(value, self.care | mask)
    }

    /// Returns this term with a multi-bit field compared against `value`.
    #[must_use]
    pub const fn with_field(self, lsb: u32, width: u32, value: u32) -> Self {
        let mask = ((1 << width) - 1) << lsb;
        Self::from_parts(
            (self.value & !mask) | ((value << lsb) & mask),
            self.care | mask,
        )
    }

    /// Returns true when every cared position of `input` has the required level.
    #[must_use]
    pub const fn matches(self, input: u32) -> bool {
        input & self.care == self.value
    }

    /// Required levels of the cared positions.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Mask of cared positions.
    #[must_use]
    pub const fn care(self) -> u32 {
        self.care
    }

    /// Mask of don't-care positions inside the input width.
    #[must_use]
    pub const fn dont_care(self) -> u32 {
        !self.care & INPUT_MASK
    }
}

const fn parse_positions(text: &str) -> (u32, u32, u32) {
    let bytes = text.as_bytes();
    let mut value = 0_u32;
    let mut care = 0_u32;
    let mut len = 0_u32;
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b' ' | b'_' => {}
            b'0' => {
                value <<= 1;
                care = (care << 1) | 1;
                len += 1;
            }
            b'1' => {
                value = (value << 1) | 1;
                care = (care << 1) | 1;
                len += 1;
            }
            b'x' | b'X' => {
                value <<= 1;
                care <<= 1;
                len += 1;
            }
            _ => panic!("term patterns accept only 0, 1, x, space and underscore"),
        }
        index += 1;
    }
    (value, care, len)
}
