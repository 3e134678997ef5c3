//! Sequencer state: the microstate register and the microprogram address map.

pub mod address;
mod microstate;

pub use microstate::{
    ConditionCodes, Microstate, FEEDBACK_FIRST_CYCLE, FEEDBACK_MEMORY_DESTINATION,
    FEEDBACK_REGISTER_DESTINATION, MICROSTATE_MASK, MICROSTATE_WIDTH, NEXT_ADDRESS_INVERT,
};
