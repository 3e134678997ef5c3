//! Microprogram address map.
//!
//! The decode tables key their rows on these values in `mr[6:0]`. The
//! published next-address field carries them XORed with
//! [`NEXT_ADDRESS_INVERT`](super::NEXT_ADDRESS_INVERT), so an all-ones
//! no-match field lands on [`TRAP_REQUEST`].

/// Instruction fetch; dispatches on the priority feedback.
pub const FETCH: u8 = 0o000;
/// Branch target computation.
pub const BRANCH: u8 = 0o001;
/// Source operand addressing.
pub const SOURCE: u8 = 0o002;
/// Wait-for-interrupt loop.
pub const WAIT: u8 = 0o011;
/// First cycle of vector service: predecrement SP for the PSW push.
pub const TRAP_ENTRY: u8 = 0o012;
/// Stage the PSW for pushing.
pub const TRAP_STAGE_PSW: u8 = 0o013;
/// Push the PSW.
pub const TRAP_PUSH_PSW: u8 = 0o014;
/// Address the PC stack slot.
pub const TRAP_ADDRESS_PC: u8 = 0o015;
/// Stage the PC for pushing.
pub const TRAP_STAGE_PC: u8 = 0o016;
/// Push the PC.
pub const TRAP_PUSH_PC: u8 = 0o017;
/// Read the new PC from the selected vector.
pub const TRAP_VECTOR_PC: u8 = 0o033;
/// Load the PC and read the new PSW.
pub const TRAP_VECTOR_PSW: u8 = 0o034;
/// Load the new PSW and return to fetch.
pub const TRAP_LOAD_PSW: u8 = 0o035;
/// Source register step after autoincrement.
pub const SOURCE_INCREMENT: u8 = 0o020;
/// Source register step for autodecrement.
pub const SOURCE_DECREMENT: u8 = 0o021;
/// Destination register step after autoincrement.
pub const DESTINATION_INCREMENT: u8 = 0o022;
/// Destination register step for autodecrement.
pub const DESTINATION_DECREMENT: u8 = 0o023;
/// Source address after autodecrement.
pub const SOURCE_ADDRESS: u8 = 0o024;
/// Source pointer read with register step.
pub const SOURCE_POINTER_STEP: u8 = 0o025;
/// Source pointer read.
pub const SOURCE_POINTER: u8 = 0o026;
/// Source pointer to address.
pub const SOURCE_INDIRECT: u8 = 0o027;
/// Source index addition.
pub const SOURCE_INDEX: u8 = 0o030;
/// Source indexed address.
pub const SOURCE_INDEXED: u8 = 0o031;
/// Source operand latch.
pub const SOURCE_LATCH: u8 = 0o032;
/// Destination operand addressing.
pub const DESTINATION: u8 = 0o040;
/// Destination address after autodecrement.
pub const DESTINATION_ADDRESS: u8 = 0o044;
/// Destination pointer read with register step.
pub const DESTINATION_POINTER_STEP: u8 = 0o045;
/// Destination pointer read.
pub const DESTINATION_POINTER: u8 = 0o046;
/// Destination pointer to address.
pub const DESTINATION_INDIRECT: u8 = 0o047;
/// Operation execute; dispatches on the destination tag.
pub const EXECUTE: u8 = 0o050;
/// Destination index addition.
pub const DESTINATION_INDEX: u8 = 0o051;
/// Destination indexed address.
pub const DESTINATION_INDEXED: u8 = 0o052;
/// `JSR` linkage, first of five cycles.
pub const JSR_ENTRY: u8 = 0o053;
/// Extended arithmetic: first 8-iteration half.
pub const EIS_LOOP_LOW: u8 = 0o060;
/// Extended arithmetic: second 8-iteration half.
pub const EIS_LOOP_HIGH: u8 = 0o061;
/// Extended arithmetic: store low result.
pub const EIS_STORE_LOW: u8 = 0o062;
/// Extended arithmetic: store high result.
pub const EIS_STORE_HIGH: u8 = 0o063;
/// Source operand bus read.
pub const SOURCE_READ: u8 = 0o070;
/// Destination operand bus read.
pub const DESTINATION_READ: u8 = 0o071;
/// Destination write back.
pub const DESTINATION_WRITE: u8 = 0o072;
/// `RTS` linkage, first of three cycles.
pub const RTS_ENTRY: u8 = 0o100;
/// `RTI`/`RTT`, first of four cycles.
pub const RTI_ENTRY: u8 = 0o103;
/// `RTI`/`RTT` final cycle: PSW load.
pub const RTI_LOAD_PSW: u8 = 0o106;
/// `RESET` bus init, first cycle.
pub const RESET_ENTRY: u8 = 0o107;
/// `RESET` bus init, second cycle.
pub const RESET_DONE: u8 = 0o110;
/// Priority poll after a trap instruction or an unrecognized opcode.
pub const TRAP_REQUEST: u8 = 0o113;
/// Opcode decode.
pub const DECODE: u8 = 0o176;

#[cfg(test)]
mod tests {
    use super::{DECODE, FETCH, TRAP_REQUEST};
    use crate::state::NEXT_ADDRESS_INVERT;

    #[test]
    fn all_ones_next_address_field_selects_trap_request() {
        assert_eq!(0x7F ^ NEXT_ADDRESS_INVERT, TRAP_REQUEST);
    }

    #[test]
    fn fetch_and_decode_are_encoded_through_the_inversion() {
        assert_eq!(FETCH ^ NEXT_ADDRESS_INVERT, 0b011_0100);
        assert_eq!(DECODE ^ NEXT_ADDRESS_INVERT, 0b100_1010);
    }
}
